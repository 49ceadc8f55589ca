//! SSH config domain models.

use super::pattern::{Pattern, matches_all};

/// A `Keyword args...` line inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Keyword with its original casing.
    pub keyword: String,
    /// Arguments in the order written.
    pub args: Vec<String>,
    /// 1-based source line.
    pub line: usize,
}

impl Param {
    /// Arguments joined with a single space.
    pub fn value(&self) -> String {
        self.args.join(" ")
    }
}

/// One `Host ...` stanza and the params that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    patterns: Vec<Pattern>,
    params: Vec<Param>,
    implicit: bool,
    line: usize,
}

impl Block {
    /// The block holding params written before the first `Host` line.
    pub(super) fn implicit() -> Self {
        Self {
            patterns: Vec::new(),
            params: Vec::new(),
            implicit: true,
            line: 0,
        }
    }

    pub(super) fn new(patterns: Vec<Pattern>, line: usize) -> Self {
        Self {
            patterns,
            params: Vec::new(),
            implicit: false,
            line,
        }
    }

    pub(super) fn push_param(&mut self, param: Param) {
        self.params.push(param);
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// True for the leading block that has no `Host` line.
    pub fn is_implicit(&self) -> bool {
        self.implicit
    }

    /// Line of the `Host` header, `0` for the implicit block.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The implicit block matches every hostname.
    pub fn matches(&self, hostname: &str) -> bool {
        self.implicit || matches_all(&self.patterns, hostname)
    }
}

/// A parsed configuration file: blocks in declaration order, the implicit
/// block first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub(super) blocks: Vec<Block>,
}

impl ConfigFile {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Blocks introduced by a `Host` line.
    pub fn host_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|block| !block.is_implicit())
    }
}

/// The merged settings for one hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHost {
    pub(super) hostname: String,
    pub(super) params: Vec<(String, String)>,
}

impl ResolvedHost {
    /// The hostname that was looked up.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// `(keyword, value)` pairs in first-occurrence order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Value for `keyword`, compared case-insensitively.
    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(keyword))
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
