use serde::Serialize;

use crate::error::ImportError;
use crate::extractors::{BlueApronExtractor, Extractor, HelloFreshExtractor};

/// Meal-kit sites we know how to scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Site {
    BlueApron,
    HelloFresh,
}

impl Site {
    pub const ALL: [Site; 2] = [Site::BlueApron, Site::HelloFresh];

    fn host_marker(&self) -> &'static str {
        match self {
            Site::BlueApron => "blueapron.com",
            Site::HelloFresh => "hellofresh.com",
        }
    }

    /// Classify a URL by the host substring it contains.
    pub fn detect(url: &str) -> Result<Site, ImportError> {
        let lowered = url.to_lowercase();
        Site::ALL
            .into_iter()
            .find(|site| lowered.contains(site.host_marker()))
            .ok_or_else(|| ImportError::UnsupportedSite(url.to_string()))
    }

    /// Tag added to the recipe when site tags are enabled.
    pub fn tag(&self) -> &'static str {
        match self {
            Site::BlueApron => "blue apron",
            Site::HelloFresh => "hello fresh",
        }
    }

    pub fn extractor(&self) -> Box<dyn Extractor> {
        match self {
            Site::BlueApron => Box::new(BlueApronExtractor::default()),
            Site::HelloFresh => Box::new(HelloFreshExtractor),
        }
    }
}
