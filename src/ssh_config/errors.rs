//! SSH config parsing and lookup error types

use std::{error::Error, fmt, io, path::PathBuf};

/// Why a configuration line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line has content but no keyword token (e.g. `=yes` or `""`).
    MissingKeyword,
    /// A keyword was given without any argument.
    MissingArgument,
    /// A double quote was opened and never closed.
    UnterminatedQuote,
    /// A `Host` pattern could not be compiled.
    InvalidPattern,
}

impl ParseErrorKind {
    fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::MissingKeyword => "missing keyword",
            ParseErrorKind::MissingArgument => "keyword requires an argument",
            ParseErrorKind::UnterminatedQuote => "unterminated quote",
            ParseErrorKind::InvalidPattern => "invalid host pattern",
        }
    }
}

/// A malformed configuration line. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    /// The offending line, as written.
    pub text: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(super) fn new(line: usize, text: &str, kind: ParseErrorKind) -> Self {
        Self {
            line,
            text: text.to_string(),
            kind,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {:?}", self.line, self.kind.as_str(), self.text)
    }
}

impl Error for ParseError {}

/// Errors produced while loading a config file and looking a host up in it.
#[derive(Debug)]
pub enum SshConfigError {
    /// The config file could not be opened.
    Io { path: PathBuf, source: io::Error },
    /// The config file was opened but reading it failed (e.g. invalid UTF-8).
    Read { path: PathBuf, source: io::Error },
    /// The config file is malformed.
    Parse(ParseError),
    /// No `Host` block matched the requested hostname.
    NotFound { host: String },
    /// The requested hostname is empty.
    InvalidHost,
}

impl SshConfigError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SshConfigError::NotFound { .. })
    }
}

impl fmt::Display for SshConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SshConfigError::Io { path, source } => write!(f, "Error when opening file {}: {}", path.display(), source),
            SshConfigError::Read { path, source } => write!(f, "Error when reading file {}: {}", path.display(), source),
            SshConfigError::Parse(err) => write!(f, "Error when parsing ssh config: {}", err),
            SshConfigError::NotFound { host } => write!(f, "Could not find host {} in config", host),
            SshConfigError::InvalidHost => write!(f, "Host must not be empty"),
        }
    }
}

impl Error for SshConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SshConfigError::Io { source, .. } | SshConfigError::Read { source, .. } => Some(source),
            SshConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for SshConfigError {
    fn from(err: ParseError) -> Self {
        SshConfigError::Parse(err)
    }
}
