//! Generator configuration.
//!
//! There is no config file. `main` builds one [`GeneratorConfig`] from the
//! command line before any filesystem work starts, and it is passed by
//! reference into the walker and the renderer from then on.

use crate::mirror::{Mirror, MirrorProfile};

/// Name of the sentinel file that excludes a directory.
pub const EXCLUDE_MARKER: &str = "EXCLUDE_FOLDER";

/// File-list length at which a "back to top" link is appended.
pub const MIN_FILES_FOR_NAV: usize = 20;

/// Folder-list length at which a "back to top" link is appended.
pub const MIN_FOLDERS_FOR_NAV: usize = 30;

/// How the stylesheet and search script reach each page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetMode {
    /// Write `style.css` and `search.js` once at the root; pages link to them.
    External,
    /// Embed both in every page; nothing is written at the root.
    Inline,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub mirror: MirrorProfile,
    pub exclude_marker: String,
    pub min_files_for_nav: usize,
    pub min_folders_for_nav: usize,
    pub assets: AssetMode,
    /// Optional favicon URL added to every page head.
    pub favicon: Option<String>,
}

impl GeneratorConfig {
    /// Stock settings for `mirror`.
    pub fn new(mirror: Mirror) -> Self {
        Self {
            mirror: mirror.profile(),
            exclude_marker: EXCLUDE_MARKER.to_string(),
            min_files_for_nav: MIN_FILES_FOR_NAV,
            min_folders_for_nav: MIN_FOLDERS_FOR_NAV,
            assets: AssetMode::External,
            favicon: None,
        }
    }

    pub fn with_assets(mut self, assets: AssetMode) -> Self {
        self.assets = assets;
        self
    }

    pub fn with_favicon(mut self, favicon: Option<String>) -> Self {
        self.favicon = favicon;
        self
    }
}
