//! Settings file discovery and loading
//!
//! Search order:
//! - an explicit path (`--config`), which must exist
//! - `~/.sshconfig-host/config.yaml`
//! - `~/.sshconfig-host.yaml`
//! - `./.sshconfig-host.yaml`
//!
//! When nothing is found the built-in defaults are used.

use super::errors::ConfigError;
use super::settings::Config;
use crate::{log_debug, log_info, log_warn};
use std::{env, fs, path::PathBuf};

const SETTINGS_DIR_NAME: &str = ".sshconfig-host";
const SETTINGS_FILE_NAME: &str = "config.yaml";
const DOTFILE_NAME: &str = ".sshconfig-host.yaml";

pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(explicit_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_path = match explicit_path {
            Some(path) if path.is_file() => Some(path),
            Some(path) => {
                log_warn!("Settings file {:?} does not exist", path);
                return Err(ConfigError::MissingFile(path));
            }
            None => Self::find_config_path(),
        };
        Ok(Self { config_path })
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    /// Find the settings file in standard locations
    fn find_config_path() -> Option<PathBuf> {
        log_debug!("Searching for settings file...");
        let found = Self::candidate_paths().into_iter().find(|candidate| {
            log_debug!("Checking: {:?}", candidate);
            candidate.is_file()
        });

        match &found {
            Some(path) => log_info!("Found settings at: {:?}", path),
            None => log_debug!("No settings file found, using defaults"),
        }
        found
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(home_dir) = dirs::home_dir() {
            candidates.push(home_dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME));
            candidates.push(home_dir.join(DOTFILE_NAME));
        }
        if let Ok(current_dir) = env::current_dir() {
            candidates.push(current_dir.join(DOTFILE_NAME));
        }
        candidates
    }

    /// Load the settings, or defaults when no file was found
    pub fn load_config(self) -> Result<Config, ConfigError> {
        let Some(config_path) = self.config_path else {
            return Ok(Config::default());
        };

        log_info!("Loading settings from: {:?}", config_path);
        let content = fs::read_to_string(&config_path).map_err(|err| {
            log_warn!("Failed to read settings file: {}", err);
            err
        })?;

        let mut config = parse_config(&content)?;
        config.metadata.config_path = Some(config_path);
        log_debug!("Parsed settings successfully: {:?}", config.settings);
        Ok(config)
    }
}

/// Parse settings YAML. Blank content yields the defaults.
pub(super) fn parse_config(content: &str) -> Result<Config, ConfigError> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yml::from_str::<Config>(content).map_err(|err| {
        log_warn!("Error parsing settings file: {}", err);
        ConfigError::ParseError(err.to_string())
    })
}

#[cfg(test)]
#[path = "../test/config/loader.rs"]
mod tests;
