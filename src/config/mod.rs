//! User settings loaded from an optional YAML file.

mod errors;
mod loader;
mod settings;

pub use errors::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{Config, Metadata, OutputFormat, Settings};

use std::path::PathBuf;

/// Find and load the settings file. With no file anywhere, defaults are used.
pub fn load_config(explicit_path: Option<PathBuf>) -> Result<Config, ConfigError> {
    ConfigLoader::new(explicit_path)?.load_config()
}
