use super::{
    clean_text, element_text, has_marker, image_src, parse_leading_number, select_first, selector,
    split_direction, split_measurement_lines, text_excluding, Extractor, ParsingContext,
    QuickMealRule,
};
use crate::error::ImportError;
use crate::model::{IngredientLine, Recipe};
use crate::site::Site;
use log::{debug, warn};
use scraper::ElementRef;

const MAIN_SECTION: &str = "section.section-recipe.recipe-main";
const INGREDIENT: &str = "li[itemprop='recipeIngredient']";
const INSTRUCTION: &str = "div[itemprop='recipeInstructions'].p-15";
const INGREDIENTS_IMAGE: &str = "div.ingredients-img-hldr img";

/// Extracts recipes from blueapron.com recipe pages.
///
/// Quick meals are detected by ready time (at most 20 minutes) unless another
/// rule is supplied with [`BlueApronExtractor::with_quick_meal_rule`].
#[derive(Debug, Clone)]
pub struct BlueApronExtractor {
    quick_meal: QuickMealRule,
}

impl Default for BlueApronExtractor {
    fn default() -> Self {
        Self {
            quick_meal: QuickMealRule::ReadyWithin(20),
        }
    }
}

impl BlueApronExtractor {
    /// Older pages flag quick meals with a badge instead of a short total time.
    pub const QUICK_MEAL_BADGE: QuickMealRule = QuickMealRule::Marker {
        selector: "span.is-quickmeal",
        text: None,
    };

    pub fn with_quick_meal_rule(quick_meal: QuickMealRule) -> Self {
        Self { quick_meal }
    }

    fn is_vegetarian(&self, main: ElementRef) -> Result<bool, ImportError> {
        Ok(has_marker(main, "svg.icon-svg--veg", None)?
            || has_marker(main, "span.culinary-badge", Some("Vegetarian"))?)
    }

    fn ready_minutes(&self, main: ElementRef) -> Result<Option<u32>, ImportError> {
        let element = match select_first(main, "span.total-time")? {
            Some(el) => Some(el),
            None => select_first(main, ".ba-info-list__item-value")?,
        };
        Ok(element.and_then(|el| parse_leading_number(&element_text(el))))
    }

    fn ingredients(&self, context: &ParsingContext) -> Result<Vec<IngredientLine>, ImportError> {
        let span = selector("span")?;
        let mut ingredients = Vec::new();

        for item in context.document.select(&selector(INGREDIENT)?) {
            let measurement = item.select(&span).next();
            let (amount, unit) = measurement
                .map(|m| split_measurement_lines(&element_text(m)))
                .unwrap_or_default();
            let name = clean_text(&text_excluding(item, measurement));
            if name.is_empty() {
                debug!("Skipping ingredient without a name");
                continue;
            }
            ingredients.push(IngredientLine { amount, unit, name });
        }

        Ok(ingredients)
    }
}

impl Extractor for BlueApronExtractor {
    fn parse(&self, context: &ParsingContext) -> Result<Recipe, ImportError> {
        debug!("Attempting to extract Blue Apron recipe from {}", context.url);

        let main = context
            .document
            .select(&selector(MAIN_SECTION)?)
            .next()
            .ok_or_else(|| ImportError::extraction("Could not find the main recipe section"))?;

        let title_main = select_first(main, "h1")?
            .map(|h1| clean_text(&element_text(h1)))
            .filter(|title| !title.is_empty())
            .ok_or_else(|| ImportError::extraction("Could not extract recipe title"))?;
        let title_sub = select_first(main, "h2")?
            .map(|h2| clean_text(&element_text(h2)))
            .unwrap_or_default();

        let ready_minutes = self.ready_minutes(main)?;
        let servings = select_first(main, "[itemprop='recipeYield']")?
            .and_then(|el| parse_leading_number(&element_text(el)))
            .ok_or_else(|| ImportError::extraction("Could not extract servings"))?;
        let calories = select_first(main, "[itemprop='calories']")?
            .and_then(|el| parse_leading_number(&element_text(el)));
        let description = select_first(main, "p[itemprop='description']")?
            .map(|p| element_text(p).trim().to_string())
            .unwrap_or_default();

        let hero_image_url = image_src(main, "img")?.unwrap_or_else(|| {
            warn!("No recipe image found on {}", context.url);
            String::new()
        });
        let ingredients_image_url = image_src(context.document.root_element(), INGREDIENTS_IMAGE)?;

        let vegetarian = self.is_vegetarian(main)?;
        let quick_meal = self.quick_meal.applies(main, ready_minutes)?;

        let ingredients = self.ingredients(context)?;

        let step_number = selector("span")?;
        let directions: Vec<_> = context
            .document
            .select(&selector(INSTRUCTION)?)
            .filter_map(|step| {
                let number = step.select(&step_number).next();
                split_direction(&text_excluding(step, number))
            })
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
            site: Site::BlueApron,
            source_url: context.url.clone(),
            title_main,
            title_sub,
            vegetarian,
            quick_meal,
            spicy: false,
            prep_minutes: None,
            cook_minutes: None,
            ready_minutes,
            servings,
            calories,
            description,
            hero_image_url,
            ingredients_image_url,
            ingredients,
            directions,
        })
    }
}
