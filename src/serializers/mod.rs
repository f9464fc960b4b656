use crate::config::{OutputFormat, RenderOptions};
use crate::error::ImportError;
use crate::model::{DirectionStep, IngredientLine, Recipe};

mod note;
mod structured;

pub use note::NoteSerializer;
pub use structured::StructuredSerializer;

/// A rendered document plus the file names derived from the recipe title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRecipe {
    pub document: String,
    /// Title-derived stem shared by the document and its images
    pub base_name: String,
    pub image_file_name: String,
    pub ingredients_image_file_name: Option<String>,
}

pub trait Serializer {
    fn serialize(
        &self,
        recipe: &Recipe,
        options: &RenderOptions,
    ) -> Result<RenderedRecipe, ImportError>;
}

pub fn serializer_for(format: OutputFormat) -> Box<dyn Serializer> {
    match format {
        OutputFormat::Note => Box::new(NoteSerializer),
        OutputFormat::Structured => Box::new(StructuredSerializer),
    }
}

/// Lowercased title with whitespace runs replaced by `join`.
pub fn base_name(recipe: &Recipe, join: char) -> String {
    recipe
        .title()
        .to_lowercase()
        .replace(['/', '\\'], "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(&join.to_string())
}

/// Default tags followed by whichever flag tags are both enabled and set.
pub fn tags(recipe: &Recipe, options: &RenderOptions) -> Vec<String> {
    let mut tags = options.default_tags.clone();
    if options.include_site_tag {
        tags.push(recipe.site.tag().to_string());
    }
    if options.include_vegetarian_tag && recipe.vegetarian {
        tags.push("vegetarian".to_string());
    }
    if options.include_quick_meal_tag && recipe.quick_meal {
        tags.push("quick meal".to_string());
    }
    if options.include_spicy_tag && recipe.spicy {
        tags.push("spicy".to_string());
    }
    tags
}

/// `amount unit name`, leaving out whatever is missing.
pub fn ingredient_line(ingredient: &IngredientLine) -> String {
    [
        ingredient.amount.as_deref(),
        ingredient.unit.as_deref(),
        Some(ingredient.name.as_str()),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

pub fn direction_line(step: &DirectionStep) -> String {
    match step {
        DirectionStep::Titled { title, text } => format!("{title}; {text}"),
        DirectionStep::Text(text) => text.clone(),
    }
}

/// Extension of the image behind `url`, `jpg` when it has none.
pub fn image_extension(url: &str) -> String {
    let file = url.rsplit('/').next().unwrap_or_default();
    match file.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty() && !ext.is_empty() && ext.chars().all(char::is_alphanumeric) =>
        {
            ext.to_lowercase()
        }
        _ => "jpg".to_string(),
    }
}
