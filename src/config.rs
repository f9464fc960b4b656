use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Output document flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Front-matter note for Chowdown-style sites
    #[default]
    Note,
    /// YAML document for Salt to Taste-style sites
    Structured,
}

/// What to do with the rest of the session when a recipe page can't be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailurePolicy {
    /// Report the failure and read the next URL.
    Continue,
    /// Report the failure and end the session.
    Halt,
}

impl OutputFormat {
    pub fn fetch_failure_policy(&self) -> FetchFailurePolicy {
        match self {
            OutputFormat::Note => FetchFailurePolicy::Halt,
            OutputFormat::Structured => FetchFailurePolicy::Continue,
        }
    }

    /// Structured output checks the content type before downloading images.
    pub fn verifies_image_content_type(&self) -> bool {
        matches!(self, OutputFormat::Structured)
    }

    fn default_recipes_dir(&self) -> &'static str {
        match self {
            OutputFormat::Note => "_recipes",
            OutputFormat::Structured => "recipes",
        }
    }
}

/// Options that shape the rendered recipe document.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RenderOptions {
    /// Tags every recipe starts with
    pub default_tags: Vec<String>,
    /// Add "blue apron" / "hello fresh"
    pub include_site_tag: bool,
    pub include_vegetarian_tag: bool,
    pub include_quick_meal_tag: bool,
    /// Only Hello Fresh marks spicy meals
    pub include_spicy_tag: bool,
    /// Emit source, times, servings, calories, description and notes
    pub include_extended_fields: bool,
    pub format: OutputFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_tags: default_tags(),
            include_site_tag: true,
            include_vegetarian_tag: true,
            include_quick_meal_tag: true,
            include_spicy_tag: true,
            include_extended_fields: true,
            format: OutputFormat::Note,
        }
    }
}

/// Process-wide settings, fixed before the first URL is read.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
    pub render: RenderOptions,
    /// Where recipe documents go; depends on the format when unset
    pub recipes_dir: Option<PathBuf>,
    pub images_dir: PathBuf,
    /// Extension for note documents ("md" or "txt")
    pub note_extension: String,
    /// Also save the ingredients photo when the site has one
    pub download_ingredients_image: bool,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Import `test_url` once instead of prompting
    pub test_mode: bool,
    pub test_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            recipes_dir: None,
            images_dir: PathBuf::from("images"),
            note_extension: "md".to_string(),
            download_ingredients_image: true,
            timeout_secs: default_timeout(),
            test_mode: false,
            test_url: default_test_url(),
        }
    }
}

fn default_tags() -> Vec<String> {
    vec!["meal".to_string()]
}

fn default_timeout() -> u64 {
    30
}

fn default_test_url() -> String {
    "https://www.blueapron.com/recipes/sweet-spicy-udon-noodles-with-fried-eggs-vegetables"
        .to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALKIT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALKIT__RENDER__INCLUDE_SPICY_TAG
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn recipes_dir(&self) -> PathBuf {
        self.recipes_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.render.format.default_recipes_dir()))
    }

    pub fn document_extension(&self) -> &str {
        match self.render.format {
            OutputFormat::Note => &self.note_extension,
            OutputFormat::Structured => "yaml",
        }
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: MEALKIT__RENDER__FORMAT
        .add_source(
            Environment::with_prefix("MEALKIT")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("render.default_tags")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
