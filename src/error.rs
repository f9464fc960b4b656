use thiserror::Error;

/// Errors that can occur during recipe import operations
#[derive(Error, Debug)]
pub enum ImportError {
    /// Transport-level failure talking to the remote site
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The recipe page answered with something other than 200
    #[error("Error with URL {url}. Status Code {status}")]
    HttpStatus { url: String, status: u16 },

    /// A required part of the page is missing, usually a layout change
    #[error("Failed to parse recipe: {0}")]
    ExtractionError(String),

    /// The URL belongs to neither supported site
    #[error("URL was not for Hello Fresh or Blue Apron: {0}")]
    UnsupportedSite(String),

    /// Image could not be fetched or was not an image
    #[error("Failed to fetch image: {0}")]
    ImageFetchError(String),

    /// Structured document could not be rendered
    #[error("Failed to render YAML: {0}")]
    SerializeError(#[from] serde_yaml::Error),

    /// Recipe could not be dumped as JSON
    #[error("Failed to render JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl ImportError {
    pub(crate) fn extraction(message: impl Into<String>) -> Self {
        ImportError::ExtractionError(message.into())
    }

    /// True when the recipe page itself could not be retrieved.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            ImportError::FetchError(_) | ImportError::HttpStatus { .. }
        )
    }

    /// Errors that end the whole session regardless of output format.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ImportError::UnsupportedSite(_) | ImportError::ConfigError(_)
        )
    }
}
