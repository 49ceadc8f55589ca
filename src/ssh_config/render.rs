//! Text and map renderings of a [`ResolvedHost`].

use super::model::ResolvedHost;
use std::collections::BTreeMap;
use std::fmt;

impl ResolvedHost {
    /// Canonical `Host` stanza: the header line, then one indented
    /// `Keyword value` line per param. Every line ends with `\n`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Keyword (original casing) to joined value.
    pub fn as_map(&self) -> BTreeMap<String, String> {
        self.params.iter().cloned().collect()
    }
}

impl fmt::Display for ResolvedHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Host {}", self.hostname)?;
        for (keyword, value) in &self.params {
            writeln!(f, "  {} {}", keyword, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../test/ssh_config/render.rs"]
mod tests;
