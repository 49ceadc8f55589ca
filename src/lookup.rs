//! Host lookup data source.
//!
//! Reads one ssh config file and produces both renderings of a host's
//! resolved settings. Every call reads the file again; nothing is cached.

use crate::ssh_config::{self, SshConfigError};
use crate::{Result, log_debug};
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The result of looking a host up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostLookup {
    /// UTC timestamp of the read.
    pub id: String,
    pub host: String,
    pub path: PathBuf,
    /// The resolved `Host` block as config text.
    pub rendered: String,
    /// Resolved keyword to value.
    pub host_map: BTreeMap<String, String>,
}

impl HostLookup {
    /// Look `host` up in the config file at `path`.
    ///
    /// Fails without partial output when the file cannot be read, does not
    /// parse, or has no block for `host`.
    pub fn read(path: &Path, host: &str) -> Result<Self> {
        let resolved = ssh_config::lookup_host(path, host)?;

        let host_map = resolved.as_map();
        for (keyword, value) in &host_map {
            log_debug!("Param was {}={}", keyword, value);
        }

        Ok(Self {
            id: Utc::now().to_string(),
            host: host.to_string(),
            path: path.to_path_buf(),
            rendered: resolved.render(),
            host_map,
        })
    }

    /// `Keyword=value` lines, sorted by keyword.
    pub fn map_lines(&self) -> String {
        self.host_map.iter().map(|(keyword, value)| format!("{}={}\n", keyword, value)).collect()
    }
}

/// Whether `host` resolves in the config file at `path`.
///
/// Unreadable or malformed files are still errors, not `false`.
pub fn host_exists(path: &Path, host: &str) -> Result<bool> {
    match ssh_config::lookup_host(path, host) {
        Ok(_) => Ok(true),
        Err(SshConfigError::NotFound { .. }) => Ok(false),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
#[path = "test/lookup.rs"]
mod tests;
