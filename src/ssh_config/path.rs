//! Path helpers for SSH config discovery and expansion.

use std::path::{Path, PathBuf};

/// System-wide client config, used when no path is given.
pub const DEFAULT_SSH_CONFIG_PATH: &str = "/etc/ssh/ssh_config";

/// Expand a leading `~` component to the current user's home directory.
///
/// Works on any path, including non-UTF-8 ones. `~user` is left alone.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }

    path.to_path_buf()
}

/// Get the per-user SSH config path (`~/.ssh/config`).
pub fn get_user_ssh_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ssh").join("config"))
}

#[cfg(test)]
#[path = "../test/ssh_config/path.rs"]
mod tests;
