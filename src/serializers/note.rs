use super::{base_name, direction_line, ingredient_line, tags, RenderedRecipe, Serializer};
use crate::config::RenderOptions;
use crate::error::ImportError;
use crate::model::Recipe;

/// Front-matter note for Chowdown-style sites.
///
/// File names join title words with `_` and images are always `.jpg`.
/// Missing values render as an empty field rather than being dropped, and
/// colons in the description become semicolons so the front matter stays
/// valid.
pub struct NoteSerializer;

impl NoteSerializer {
    const JOIN: char = '_';

    fn optional<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    fn render(recipe: &Recipe, options: &RenderOptions, image_file_name: &str) -> String {
        let mut out = String::new();
        let image_credit = recipe
            .ingredients_image_url
            .as_deref()
            .unwrap_or(&recipe.hero_image_url);

        out.push_str("---\n\n");
        out.push_str("layout: recipe\n");
        out.push_str(&format!("title: \"{}\"\n", recipe.title().replace('"', "\\\"")));
        out.push_str(&format!("image: {image_file_name}\n"));
        out.push_str(&format!("imagecredit: {image_credit}\n"));
        out.push_str(&format!("tags: {}\n", tags(recipe, options).join(", ")));

        if options.include_extended_fields {
            let nutrition = recipe
                .calories
                .map(|calories| format!("{calories} calories"))
                .unwrap_or_default();

            out.push_str(&format!("source: {}\n", recipe.source_url));
            out.push_str(&format!("\nprep: {}\n", Self::optional(recipe.prep_minutes)));
            out.push_str(&format!("cook: {}\n", Self::optional(recipe.cook_minutes)));
            out.push_str(&format!("ready: {}\n", Self::optional(recipe.ready_minutes)));
            out.push_str(&format!("servings: {}\n", recipe.servings));
            out.push_str(&format!("nutrition: {nutrition}\n\n"));
            out.push_str(&format!("description: \n{}\n", recipe.description.replace(':', ";")));
        }

        out.push_str("\ningredients: \n");
        for ingredient in &recipe.ingredients {
            out.push_str(&format!("- {}\n", ingredient_line(ingredient)));
        }

        out.push_str("\ndirections: \n");
        for step in &recipe.directions {
            out.push_str(&format!("- {}\n", direction_line(step)));
        }

        if options.include_extended_fields {
            out.push_str("\nnotes: \n");
        }
        out.push_str("\n---\n");
        out
    }
}

impl Serializer for NoteSerializer {
    fn serialize(
        &self,
        recipe: &Recipe,
        options: &RenderOptions,
    ) -> Result<RenderedRecipe, ImportError> {
        let base_name = base_name(recipe, Self::JOIN);
        let image_file_name = format!("{base_name}.jpg");
        let ingredients_image_file_name = recipe
            .ingredients_image_url
            .as_ref()
            .map(|_| format!("{base_name}_ingredients.jpg"));

        Ok(RenderedRecipe {
            document: Self::render(recipe, options, &image_file_name),
            base_name,
            image_file_name,
            ingredients_image_file_name,
        })
    }
}
