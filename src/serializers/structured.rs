use super::{
    base_name, direction_line, image_extension, ingredient_line, tags, RenderedRecipe, Serializer,
};
use crate::config::RenderOptions;
use crate::error::ImportError;
use crate::model::Recipe;
use serde::Serialize;

/// YAML document for Salt to Taste-style sites.
///
/// File names join title words with `-` and images keep the extension of
/// the source URL. Every key is always present; missing values are `null`.
pub struct StructuredSerializer;

#[derive(Serialize)]
struct Document<'a> {
    layout: &'static str,
    title: String,
    image: &'a str,
    imagecredit: &'a str,
    tags: Vec<String>,
    #[serde(flatten)]
    details: Option<Details<'a>>,
    ingredients: Vec<String>,
    directions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<Vec<String>>,
}

#[derive(Serialize)]
struct Details<'a> {
    source: &'a str,
    prep: Option<u32>,
    cook: Option<u32>,
    ready: Option<u32>,
    servings: u32,
    calories: Option<u32>,
    description: &'a str,
}

impl StructuredSerializer {
    const JOIN: char = '-';
}

impl Serializer for StructuredSerializer {
    fn serialize(
        &self,
        recipe: &Recipe,
        options: &RenderOptions,
    ) -> Result<RenderedRecipe, ImportError> {
        let base_name = base_name(recipe, Self::JOIN);
        let image_file_name = format!(
            "{base_name}.{}",
            image_extension(&recipe.hero_image_url)
        );
        let ingredients_image_file_name = recipe
            .ingredients_image_url
            .as_deref()
            .map(|url| format!("{base_name}_ingredients.{}", image_extension(url)));

        let details = options.include_extended_fields.then(|| Details {
            source: &recipe.source_url,
            prep: recipe.prep_minutes,
            cook: recipe.cook_minutes,
            ready: recipe.ready_minutes,
            servings: recipe.servings,
            calories: recipe.calories,
            description: &recipe.description,
        });

        let document = Document {
            layout: "recipe",
            title: recipe.title(),
            image: &image_file_name,
            imagecredit: &recipe.hero_image_url,
            tags: tags(recipe, options),
            details,
            ingredients: recipe.ingredients.iter().map(ingredient_line).collect(),
            directions: recipe.directions.iter().map(direction_line).collect(),
            notes: options.include_extended_fields.then(Vec::new),
        };
        let document = serde_yaml::to_string(&document)?;

        Ok(RenderedRecipe {
            document,
            base_name,
            image_file_name,
            ingredients_image_file_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializers::tests::sample_recipe;
    use serde_yaml::Value;

    fn parse(document: &str) -> Value {
        serde_yaml::from_str(document).unwrap()
    }

    #[test]
    fn test_structured_document() {
        let recipe = sample_recipe();
        let rendered = StructuredSerializer
            .serialize(&recipe, &RenderOptions::default())
            .unwrap();

        assert_eq!(
            rendered.base_name,
            "sweet-&-spicy-udon-noodles-with-fried-eggs-&-vegetables"
        );
        assert_eq!(
            rendered.image_file_name,
            "sweet-&-spicy-udon-noodles-with-fried-eggs-&-vegetables.jpg"
        );
        assert_eq!(
            rendered.ingredients_image_file_name.as_deref(),
            Some("sweet-&-spicy-udon-noodles-with-fried-eggs-&-vegetables_ingredients.png")
        );

        let yaml = parse(&rendered.document);
        assert_eq!(yaml["layout"], "recipe");
        assert_eq!(
            yaml["title"],
            "Sweet & Spicy Udon Noodles with Fried Eggs & Vegetables"
        );
        assert_eq!(yaml["imagecredit"], "https://media.blueapron.com/recipes/udon.jpg");
        assert_eq!(yaml["ready"], 25);
        assert_eq!(yaml["calories"], 680);
        assert!(yaml["prep"].is_null());
        assert!(yaml["cook"].is_null());
        // Colons survive through YAML quoting.
        assert_eq!(yaml["description"], "Our udon: thick and chewy.");
        assert_eq!(yaml["ingredients"][0], "2 cups flour");
        assert_eq!(yaml["directions"][1], "Serve warm.");
        assert_eq!(yaml["notes"].as_sequence().map(Vec::len), Some(0));
    }

    #[test]
    fn test_key_order_matches_site_template() {
        let rendered = StructuredSerializer
            .serialize(&sample_recipe(), &RenderOptions::default())
            .unwrap();
        let keys: Vec<String> = parse(&rendered.document)
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(|k| k.as_str().map(str::to_string))
            .collect();

        assert_eq!(
            keys,
            vec![
                "layout",
                "title",
                "image",
                "imagecredit",
                "tags",
                "source",
                "prep",
                "cook",
                "ready",
                "servings",
                "calories",
                "description",
                "ingredients",
                "directions",
                "notes",
            ]
        );
    }

    #[test]
    fn test_minimal_structured_document() {
        let options = RenderOptions {
            include_extended_fields: false,
            ..RenderOptions::default()
        };
        let rendered = StructuredSerializer
            .serialize(&sample_recipe(), &options)
            .unwrap();
        let yaml = parse(&rendered.document);

        for absent in ["source", "prep", "servings", "calories", "description", "notes"] {
            assert!(yaml.get(absent).is_none(), "unexpected {absent}");
        }
        assert_eq!(yaml["ingredients"][1], "3 eggs");
    }
}
