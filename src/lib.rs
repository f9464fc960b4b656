pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod pipelines;
pub mod serializers;
pub mod site;

pub use config::{FetchFailurePolicy, OutputFormat, RenderOptions, Settings};
pub use error::ImportError;
pub use model::{DirectionStep, IngredientLine, Recipe};
pub use pipelines::url::{extract_recipe, Importer};
pub use pipelines::ImportReport;
pub use serializers::{serializer_for, RenderedRecipe, Serializer};
pub use site::Site;

/// Fetch a recipe page and extract it without writing anything.
pub fn fetch_recipe(url: &str) -> Result<Recipe, ImportError> {
    Importer::new(Settings::default())?.extract(url)
}

/// Import a recipe with the settings from `config.toml` and the environment.
pub fn import_recipe(url: &str) -> Result<ImportReport, ImportError> {
    Importer::new(Settings::load()?)?.import(url)
}
