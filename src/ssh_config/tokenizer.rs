//! Line tokenizer for OpenSSH client configuration text.
//!
//! Each non-blank, non-comment line becomes one [`Directive`]: the first token
//! is the keyword, the remaining tokens are its arguments. Supported syntax:
//! - `Keyword arg arg`, `Keyword=arg`, `Keyword = arg`
//! - `"double quoted"` arguments containing whitespace (quotes are removed)
//! - `#` comments, either on their own line or starting a token after the arguments

use super::errors::{ParseError, ParseErrorKind};
use std::iter::Enumerate;
use std::str::Lines;

/// One logical configuration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// 1-based line number in the source text.
    pub line: usize,
    /// Keyword with its original casing.
    pub keyword: String,
    /// Arguments in the order written; never empty.
    pub args: Vec<String>,
    /// The line as written, trimmed.
    pub text: String,
}

impl Directive {
    /// Case-insensitive keyword comparison.
    pub fn is(&self, keyword: &str) -> bool {
        self.keyword.eq_ignore_ascii_case(keyword)
    }
}

/// Lazy iterator over the directives of a config text.
///
/// A clone continues from the current position. Call [`tokenize`] again to
/// start over from the first line.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    lines: Enumerate<Lines<'a>>,
    failed: bool,
}

/// Tokenize `text` line by line.
pub fn tokenize(text: &str) -> Tokenizer<'_> {
    Tokenizer {
        lines: text.lines().enumerate(),
        failed: false,
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Directive, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for (idx, raw) in self.lines.by_ref() {
            match tokenize_line(idx + 1, raw) {
                Ok(Some(directive)) => return Some(Ok(directive)),
                Ok(None) => continue,
                Err(err) => {
                    // The first error ends the sequence.
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }

        None
    }
}

struct LineScanner<'a> {
    line: usize,
    raw: &'a str,
    rest: &'a str,
}

impl<'a> LineScanner<'a> {
    fn new(line: usize, raw: &'a str) -> Self {
        Self {
            line,
            raw: raw.trim(),
            rest: raw.trim_start(),
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.line, self.raw, kind)
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// True once only whitespace or a comment remains.
    fn at_end(&self) -> bool {
        self.rest.is_empty() || self.rest.starts_with('#')
    }

    fn skip_separator(&mut self) {
        self.skip_whitespace();
        if let Some(stripped) = self.rest.strip_prefix('=') {
            self.rest = stripped;
            self.skip_whitespace();
        }
    }

    fn read_token(&mut self, stop_at_equals: bool) -> Result<String, ParseError> {
        let mut token = String::new();
        let mut in_quote = false;
        let mut consumed = self.rest.len();

        for (idx, ch) in self.rest.char_indices() {
            if ch == '"' {
                in_quote = !in_quote;
                continue;
            }
            if !in_quote && (ch.is_whitespace() || (stop_at_equals && ch == '=')) {
                consumed = idx;
                break;
            }
            token.push(ch);
        }

        if in_quote {
            return Err(self.error(ParseErrorKind::UnterminatedQuote));
        }

        self.rest = &self.rest[consumed..];
        Ok(token)
    }
}

fn tokenize_line(line: usize, raw: &str) -> Result<Option<Directive>, ParseError> {
    let mut scanner = LineScanner::new(line, raw);
    if scanner.at_end() {
        return Ok(None);
    }

    let keyword = scanner.read_token(true)?;
    if keyword.is_empty() {
        return Err(scanner.error(ParseErrorKind::MissingKeyword));
    }

    scanner.skip_separator();

    let mut args = Vec::new();
    while !scanner.at_end() {
        args.push(scanner.read_token(false)?);
        scanner.skip_whitespace();
    }

    if args.is_empty() {
        return Err(scanner.error(ParseErrorKind::MissingArgument));
    }

    Ok(Some(Directive {
        line,
        keyword,
        args,
        text: scanner.raw.to_string(),
    }))
}

#[cfg(test)]
#[path = "../test/ssh_config/tokenizer.rs"]
mod tests;
