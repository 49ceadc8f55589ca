//! Groups tokenized directives into `Host` blocks.

use super::errors::{ParseError, ParseErrorKind};
use super::model::{Block, ConfigFile, Param};
use super::pattern::Pattern;
use super::tokenizer::tokenize;
use crate::log_debug;
use std::str::FromStr;

/// Parse config text into a [`ConfigFile`].
///
/// Params before the first `Host` line land in the implicit block. Each
/// `Host` line starts a new block with one pattern per argument. The first
/// malformed line aborts the parse.
pub fn parse(content: &str) -> Result<ConfigFile, ParseError> {
    let mut blocks = Vec::new();
    let mut current = Block::implicit();

    for directive in tokenize(content) {
        let directive = directive?;

        if directive.is("host") {
            let patterns = directive
                .args
                .iter()
                .map(|token| Pattern::parse(token))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| {
                    log_debug!("Rejected Host pattern on line {}: {}", directive.line, err);
                    ParseError::new(directive.line, &directive.text, ParseErrorKind::InvalidPattern)
                })?;
            blocks.push(std::mem::replace(&mut current, Block::new(patterns, directive.line)));
            continue;
        }

        current.push_param(Param {
            keyword: directive.keyword,
            args: directive.args,
            line: directive.line,
        });
    }
    blocks.push(current);

    log_debug!("Parsed SSH config into {} block(s)", blocks.len());
    Ok(ConfigFile { blocks })
}

impl FromStr for ConfigFile {
    type Err = ParseError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        parse(content)
    }
}

#[cfg(test)]
#[path = "../test/ssh_config/parser.rs"]
mod tests;
