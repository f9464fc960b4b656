use serde::Serialize;

use crate::site::Site;

/// A recipe scraped from a single meal-kit page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub site: Site,
    pub source_url: String,
    pub title_main: String,
    /// Subtitle, empty when the page has none.
    pub title_sub: String,
    pub vegetarian: bool,
    pub quick_meal: bool,
    /// Only Hello Fresh marks spicy meals.
    pub spicy: bool,
    pub prep_minutes: Option<u32>,
    pub cook_minutes: Option<u32>,
    pub ready_minutes: Option<u32>,
    pub servings: u32,
    pub calories: Option<u32>,
    pub description: String,
    pub hero_image_url: String,
    pub ingredients_image_url: Option<String>,
    pub ingredients: Vec<IngredientLine>,
    pub directions: Vec<DirectionStep>,
}

impl Recipe {
    /// Main title and subtitle joined by a single space.
    pub fn title(&self) -> String {
        if self.title_sub.is_empty() {
            self.title_main.clone()
        } else {
            format!("{} {}", self.title_main, self.title_sub)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    pub amount: Option<String>,
    pub unit: Option<String>,
    pub name: String,
}

impl IngredientLine {
    pub fn new(amount: Option<&str>, unit: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            amount: amount.map(str::to_string),
            unit: unit.map(str::to_string),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DirectionStep {
    /// A labelled step, e.g. "Cook the noodles" followed by its body.
    Titled { title: String, text: String },
    Text(String),
}
