pub mod loader;
pub mod types;

pub use loader::{CliOverrides, SettingsLoader};
pub use types::{FileSettings, LogLevel, Settings};
