use crate::{LibraryError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// File name of the catalog document in the working directory
pub const DEFAULT_CATALOG_FILE: &str = "library.json";

/// File name of the settings file inside the config directory
pub const SETTINGS_FILE: &str = "config.yaml";

/// Path management for bookshelf configuration files
#[derive(Debug, Clone)]
pub struct BookshelfPaths {
    /// Configuration directory (e.g. ~/.config/bookshelf/)
    pub config_dir: PathBuf,
}

impl BookshelfPaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "bookshelf").ok_or_else(|| {
            LibraryError::Config("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Paths rooted at an explicit directory
    pub fn for_dir(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
        }
    }

    /// Settings file path
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Default catalog document, relative to the working directory
    pub fn default_catalog_file() -> PathBuf {
        PathBuf::from(DEFAULT_CATALOG_FILE)
    }
}
