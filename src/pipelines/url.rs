use super::ImportReport;
use crate::config::Settings;
use crate::error::ImportError;
use crate::extractors::ParsingContext;
use crate::fetchers::RequestFetcher;
use crate::model::Recipe;
use crate::serializers::serializer_for;
use crate::site::Site;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Parse an already fetched page with the rules of `site`.
pub fn extract_recipe(site: Site, url: &str, html: &str) -> Result<Recipe, ImportError> {
    let context = ParsingContext::new(url, html);
    site.extractor().parse(&context)
}

/// Runs one recipe URL through fetch, extraction, rendering and download.
pub struct Importer {
    settings: Settings,
    fetcher: RequestFetcher,
    site: Option<Site>,
}

impl Importer {
    pub fn new(settings: Settings) -> Result<Self, ImportError> {
        let fetcher = RequestFetcher::new(Some(Duration::from_secs(settings.timeout_secs)))?;
        Ok(Self {
            settings,
            fetcher,
            site: None,
        })
    }

    /// Treat every URL as a page of `site` instead of looking at its host,
    /// for saved pages and local mirrors whose URL carries no site host.
    pub fn with_site(mut self, site: Site) -> Self {
        self.site = Some(site);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn site_for(&self, url: &str) -> Result<Site, ImportError> {
        match self.site {
            Some(site) => Ok(site),
            None => Site::detect(url),
        }
    }

    /// Fetch and extract without writing anything.
    pub fn extract(&self, url: &str) -> Result<Recipe, ImportError> {
        let site = self.site_for(url)?;
        let html = self.fetcher.fetch(url)?;
        let recipe = extract_recipe(site, url, &html)?;
        debug!("{:#?}", recipe);
        Ok(recipe)
    }

    /// Import one recipe: the document is written first, then its images.
    ///
    /// Image failures are logged and skipped; they never undo the document.
    pub fn import(&self, url: &str) -> Result<ImportReport, ImportError> {
        let recipe = self.extract(url)?;
        debug!("Grabbed {}", recipe.title());
        self.save(&recipe)
    }

    /// Render and write `recipe` plus its images.
    pub fn save(&self, recipe: &Recipe) -> Result<ImportReport, ImportError> {
        let options = &self.settings.render;
        let rendered = serializer_for(options.format).serialize(recipe, options)?;

        let recipes_dir = self.settings.recipes_dir();
        fs::create_dir_all(&recipes_dir)?;
        let document_path = recipes_dir.join(format!(
            "{}.{}",
            rendered.base_name,
            self.settings.document_extension()
        ));
        fs::write(&document_path, &rendered.document)?;
        debug!("Wrote {}", document_path.display());

        let mut image_paths = Vec::new();
        let hero = self.download_image(&recipe.hero_image_url, &rendered.image_file_name);
        image_paths.extend(hero);

        if self.settings.download_ingredients_image {
            if let (Some(url), Some(file_name)) = (
                recipe.ingredients_image_url.as_deref(),
                rendered.ingredients_image_file_name.as_deref(),
            ) {
                image_paths.extend(self.download_image(url, file_name));
            }
        }

        Ok(ImportReport {
            title: recipe.title(),
            document_path,
            image_paths,
        })
    }

    fn download_image(&self, url: &str, file_name: &str) -> Option<PathBuf> {
        let verify = self.settings.render.format.verifies_image_content_type();
        let bytes = match self.fetcher.fetch_image(url, verify) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Skipping image {}: {}", file_name, e);
                return None;
            }
        };

        match write_file(&self.settings.images_dir, file_name, &bytes) {
            Ok(path) => {
                debug!("Wrote {}", path.display());
                Some(path)
            }
            Err(e) => {
                warn!("Could not write image {}: {}", file_name, e);
                None
            }
        }
    }
}

fn write_file(dir: &Path, file_name: &str, contents: &[u8]) -> Result<PathBuf, ImportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    Ok(path)
}
