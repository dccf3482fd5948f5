use super::types::{FileSettings, LogLevel, Settings};
use crate::io::BookshelfPaths;
use crate::{LibraryError, Result};
use std::path::{Path, PathBuf};

/// Values given on the command line, which win over the settings file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub catalog_path: Option<PathBuf>,
    pub log_level: Option<LogLevel>,
}

/// Loads config.yaml and merges it with command line overrides
pub struct SettingsLoader {
    /// Settings file to read
    settings_file: Option<PathBuf>,
    /// Whether a missing file at `settings_file` is an error
    required: bool,
}

impl SettingsLoader {
    /// Use the platform config directory; a missing file is fine
    pub fn new() -> Self {
        Self {
            settings_file: BookshelfPaths::new().ok().map(|paths| paths.settings_file()),
            required: false,
        }
    }

    /// Use an explicit settings file, which must exist
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            settings_file: Some(path.into()),
            required: true,
        }
    }

    /// Read the settings file, if any
    pub fn load_file(&self) -> Result<FileSettings> {
        match &self.settings_file {
            Some(path) if path.exists() => Self::read(path),
            Some(path) if self.required => Err(LibraryError::Config(format!(
                "Settings file not found: {}",
                path.display()
            ))),
            _ => Ok(FileSettings::default()),
        }
    }

    /// Resolve settings: command line, then settings file, then defaults
    pub fn resolve(&self, overrides: &CliOverrides) -> Result<Settings> {
        let file = self.load_file()?;
        let defaults = Settings::default();

        Ok(Settings {
            catalog_path: overrides
                .catalog_path
                .clone()
                .or(file.catalog_path)
                .unwrap_or(defaults.catalog_path),
            log_level: overrides
                .log_level
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
        })
    }

    fn read(path: &Path) -> Result<FileSettings> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LibraryError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml_ng::from_str(&contents).map_err(|e| {
            LibraryError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_settings(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let loader = SettingsLoader {
            settings_file: Some(temp_dir.path().join("config.yaml")),
            required: false,
        };

        let settings = loader.resolve(&CliOverrides::default()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_settings(&temp_dir, "catalog_path: shelf.json\nlog_level: debug\n");

        let settings = SettingsLoader::with_file(path)
            .resolve(&CliOverrides::default())
            .unwrap();

        assert_eq!(settings.catalog_path, PathBuf::from("shelf.json"));
        assert_eq!(settings.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_cli_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_settings(&temp_dir, "catalog_path: shelf.json\nlog_level: debug\n");

        let overrides = CliOverrides {
            catalog_path: Some(PathBuf::from("other.json")),
            log_level: None,
        };
        let settings = SettingsLoader::with_file(path).resolve(&overrides).unwrap();

        assert_eq!(settings.catalog_path, PathBuf::from("other.json"));
        assert_eq!(settings.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let loader = SettingsLoader::with_file(temp_dir.path().join("missing.yaml"));

        assert!(matches!(
            loader.resolve(&CliOverrides::default()),
            Err(LibraryError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_settings(&temp_dir, "log_level: [loud\n");

        assert!(matches!(
            SettingsLoader::with_file(path).load_file(),
            Err(LibraryError::Config(_))
        ));
    }
}
