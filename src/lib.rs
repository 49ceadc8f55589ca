pub mod args;
pub mod config;
pub mod log;
pub mod lookup;
pub mod ssh_config;

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Config(config::ConfigError),
    Log(log::LogError),
    SshConfig(ssh_config::SshConfigError),
}

impl Error {
    /// True when the lookup found no block for the host.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::SshConfig(err) if err.is_not_found())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(err) => write!(f, "Configuration error: {}", err),
            Error::Log(err) => write!(f, "Logging error: {}", err),
            Error::SshConfig(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

// Implement From for each error type
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<log::LogError> for Error {
    fn from(err: log::LogError) -> Self {
        Error::Log(err)
    }
}

impl From<ssh_config::SshConfigError> for Error {
    fn from(err: ssh_config::SshConfigError) -> Self {
        Error::SshConfig(err)
    }
}

impl From<ssh_config::ParseError> for Error {
    fn from(err: ssh_config::ParseError) -> Self {
        Error::SshConfig(err.into())
    }
}
