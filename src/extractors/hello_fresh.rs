use super::{
    clean_text, element_text, find_label, has_marker, image_src, next_element, parent_element,
    parse_leading_number, select_first, selector, Extractor, ParsingContext, QuickMealRule,
};
use crate::error::ImportError;
use crate::model::{DirectionStep, IngredientLine, Recipe};
use crate::site::Site;
use log::{debug, warn};
use scraper::{ElementRef, Html};

const HERO_IMAGE: &str = "img.fela-_1b1idjb";
const TAG_BADGE: &str = "span.fela-_36rlri";
const INGREDIENT: &str = "div.fela-_1qz307e";
const INSTRUCTION: &str = "div.fela-_1qzip4i";

/// Extracts recipes from hellofresh.com recipe pages.
pub struct HelloFreshExtractor;

impl HelloFreshExtractor {
    /// Hello Fresh pages don't list servings; boxes are for two.
    pub const DEFAULT_SERVINGS: u32 = 2;

    pub const QUICK_MEAL_BADGE: QuickMealRule = QuickMealRule::Marker {
        selector: "span.fela-_fnl8w9",
        text: Some("20-Min Meal"),
    };

    /// Time values sit in the block after the one holding their label.
    fn time_minutes(document: &Html, label: &str) -> Option<u32> {
        let label = find_label(document, label)?;
        let value = next_element(parent_element(label)?)?;
        parse_leading_number(&element_text(value))
    }

    fn calories(document: &Html) -> Option<u32> {
        let value = next_element(find_label(document, "Calories")?)?;
        parse_leading_number(&element_text(value))
    }

    fn ingredient(block: ElementRef) -> Result<Option<IngredientLine>, ImportError> {
        let paragraphs: Vec<String> = block
            .select(&selector("p")?)
            .map(|p| clean_text(&element_text(p)))
            .collect();

        let line = match paragraphs.as_slice() {
            [] => None,
            [name] => Some(IngredientLine::new(None, None, name.as_str())),
            [measurement, name, ..] => {
                let mut tokens = measurement.split_whitespace();
                let amount = tokens.next();
                let unit = tokens.collect::<Vec<_>>().join(" ");
                let unit = (!unit.is_empty()).then_some(unit.as_str());
                Some(IngredientLine::new(amount, unit, name.as_str()))
            }
        };
        Ok(line.filter(|line| !line.name.is_empty()))
    }
}

impl Extractor for HelloFreshExtractor {
    fn parse(&self, context: &ParsingContext) -> Result<Recipe, ImportError> {
        debug!("Attempting to extract Hello Fresh recipe from {}", context.url);

        let document = &context.document;
        let root = document.root_element();

        let title_main = select_first(root, "h1")?
            .map(|h1| clean_text(&element_text(h1)))
            .filter(|title| !title.is_empty())
            .ok_or_else(|| ImportError::extraction("Could not extract recipe title"))?;
        let title_sub = select_first(root, "h4")?
            .map(|h4| clean_text(&element_text(h4)))
            .unwrap_or_default();

        let hero_image_url = image_src(root, HERO_IMAGE)?.unwrap_or_else(|| {
            warn!("No recipe image found on {}", context.url);
            String::new()
        });
        let prep_minutes = Self::time_minutes(document, "Preparation Time");
        let ready_minutes = Self::time_minutes(document, "Total Time");
        let calories = Self::calories(document);
        let description = select_first(root, "p")?
            .map(|p| element_text(p).trim().to_string())
            .unwrap_or_default();

        let vegetarian = has_marker(root, TAG_BADGE, Some("Veggie"))?;
        let spicy = has_marker(root, TAG_BADGE, Some("Spicy"))?;
        let quick_meal = Self::QUICK_MEAL_BADGE.applies(root, ready_minutes)?;

        let mut ingredients = Vec::new();
        for block in document.select(&selector(INGREDIENT)?) {
            if let Some(line) = Self::ingredient(block)? {
                ingredients.push(line);
            }
        }

        let paragraph = selector("p")?;
        let directions: Vec<_> = document
            .select(&selector(INSTRUCTION)?)
            .filter_map(|step| step.select(&paragraph).next())
            .map(|p| clean_text(&element_text(p).replace(':', ";")))
            .filter(|text| !text.is_empty())
            .map(DirectionStep::Text)
            .collect();

        if ingredients.is_empty() {
            return Err(ImportError::extraction("Could not extract ingredients"));
        }
        if directions.is_empty() {
            return Err(ImportError::extraction("Could not extract directions"));
        }

        debug!("Recipe name: {} {}", title_main, title_sub);
        debug!("Ingredients count: {}", ingredients.len());
        debug!("Directions count: {}", directions.len());

        Ok(Recipe {
            site: Site::HelloFresh,
            source_url: context.url.clone(),
            title_main,
            title_sub,
            vegetarian,
            quick_meal,
            spicy,
            prep_minutes,
            cook_minutes: None,
            ready_minutes,
            servings: Self::DEFAULT_SERVINGS,
            calories,
            description,
            hero_image_url,
            ingredients_image_url: None,
            ingredients,
            directions,
        })
    }
}
