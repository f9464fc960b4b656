pub mod session;
pub mod url;

use std::path::PathBuf;

/// Files produced for one imported recipe.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub title: String,
    pub document_path: PathBuf,
    /// Images that were actually written; skipped downloads are not listed
    pub image_paths: Vec<PathBuf>,
}
