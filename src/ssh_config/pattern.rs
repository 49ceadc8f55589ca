//! Host pattern matching.
//!
//! Patterns use `ssh_config(5)` glob syntax: `*` matches any run of
//! characters (including none), `?` matches exactly one character, everything
//! else is literal. Matching is anchored to the whole hostname and ignores case.

use regex::{Regex, RegexBuilder};
use std::fmt;

/// A compiled glob.
#[derive(Debug, Clone)]
pub struct Glob {
    text: String,
    regex: Regex,
}

impl Glob {
    /// Compile `text`. Fails when the translated regex is rejected, e.g. for
    /// exceeding the regex size limit.
    pub fn new(text: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&glob_to_regex(text))
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()?;
        Ok(Self {
            text: text.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_match(&self, hostname: &str) -> bool {
        self.regex.is_match(hostname)
    }
}

impl PartialEq for Glob {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Glob {}

/// Translate a glob into an anchored regex source string.
fn glob_to_regex(glob: &str) -> String {
    let mut pattern = String::with_capacity(glob.len() + 2);
    pattern.push('^');
    for ch in glob.chars() {
        match ch {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            _ => pattern.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4]))),
        }
    }
    pattern.push('$');
    pattern
}

/// One token from a `Host` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Literal(Glob),
    /// Written with a leading `!`; the `!` is not part of the glob.
    Negated(Glob),
}

impl Pattern {
    /// Build a pattern from a `Host` argument.
    pub fn parse(token: &str) -> Result<Self, regex::Error> {
        Ok(match token.strip_prefix('!') {
            Some(glob) => Pattern::Negated(Glob::new(glob)?),
            None => Pattern::Literal(Glob::new(token)?),
        })
    }

    pub fn glob(&self) -> &Glob {
        match self {
            Pattern::Literal(glob) | Pattern::Negated(glob) => glob,
        }
    }

    pub fn is_negated(&self) -> bool {
        matches!(self, Pattern::Negated(_))
    }

    /// Whether the glob matches `hostname`, ignoring negation.
    pub fn matches(&self, hostname: &str) -> bool {
        self.glob().is_match(hostname)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(glob) => write!(f, "{}", glob.as_str()),
            Pattern::Negated(glob) => write!(f, "!{}", glob.as_str()),
        }
    }
}

/// Whether the glob of `pattern` matches `hostname`.
pub fn matches(pattern: &Pattern, hostname: &str) -> bool {
    pattern.matches(hostname)
}

/// Block-level rule: at least one literal pattern matches and no negated
/// pattern matches. A negated match vetoes the set regardless of order.
pub fn matches_all(patterns: &[Pattern], hostname: &str) -> bool {
    let mut matched = false;
    for pattern in patterns {
        match pattern {
            Pattern::Negated(glob) if glob.is_match(hostname) => return false,
            Pattern::Literal(glob) if glob.is_match(hostname) => matched = true,
            _ => {}
        }
    }
    matched
}

#[cfg(test)]
#[path = "../test/ssh_config/pattern.rs"]
mod tests;
