//! SSH client config parsing and host resolution.
//!
//! Text flows through [`tokenize`] and [`parse`] into a [`ConfigFile`], which
//! resolves a hostname into a [`ResolvedHost`]. Nothing is cached: every
//! lookup builds and drops its own `ConfigFile`.

mod errors;
mod model;
mod parser;
mod path;
pub mod pattern;
mod render;
mod resolver;
mod tokenizer;

pub use errors::{ParseError, ParseErrorKind, SshConfigError};
pub use model::{Block, ConfigFile, Param, ResolvedHost};
pub use parser::parse;
pub use path::{DEFAULT_SSH_CONFIG_PATH, expand_tilde, get_user_ssh_config_path};
pub use pattern::{Glob, Pattern};
pub use tokenizer::{Directive, Tokenizer, tokenize};

use crate::log_debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read and parse the config file at `path`.
///
/// The file handle is dropped before parsing starts.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, SshConfigError> {
    let content = {
        let mut file = File::open(path).map_err(|source| SshConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(|source| SshConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        content
    };

    log_debug!("Read {} byte(s) of SSH config from {}", content.len(), path.display());
    Ok(parse(&content)?)
}

/// Load `path` and resolve `host` in it.
pub fn lookup_host(path: &Path, host: &str) -> Result<ResolvedHost, SshConfigError> {
    if host.trim().is_empty() {
        return Err(SshConfigError::InvalidHost);
    }

    load_config_file(path)?
        .find_by_hostname(host)
        .ok_or_else(|| SshConfigError::NotFound { host: host.to_string() })
}
