//! Host resolution with first-occurrence-wins merging.

use super::model::{ConfigFile, ResolvedHost};
use crate::log_debug;

impl ConfigFile {
    /// Resolve the effective settings for `hostname`.
    ///
    /// Blocks are visited in file order. A keyword keeps the value from the
    /// first matching block that sets it. Returns `None` when no `Host` block
    /// matches or the merge yields no params; the implicit block alone never
    /// counts as a match.
    pub fn find_by_hostname(&self, hostname: &str) -> Option<ResolvedHost> {
        let mut params: Vec<(String, String)> = Vec::new();
        let mut matched_host_block = false;

        for block in &self.blocks {
            if !block.matches(hostname) {
                continue;
            }

            if !block.is_implicit() {
                log_debug!("Host {:?} matched block at line {}", hostname, block.line());
                matched_host_block = true;
            }

            for param in block.params() {
                let seen = params.iter().any(|(keyword, _)| keyword.eq_ignore_ascii_case(&param.keyword));
                if !seen {
                    params.push((param.keyword.clone(), param.value()));
                }
            }
        }

        if !matched_host_block || params.is_empty() {
            log_debug!("No SSH config entries found for host {:?}", hostname);
            return None;
        }

        Some(ResolvedHost {
            hostname: hostname.to_string(),
            params,
        })
    }

    /// Whether [`ConfigFile::find_by_hostname`] would succeed.
    pub fn has_host(&self, hostname: &str) -> bool {
        self.find_by_hostname(hostname).is_some()
    }
}

#[cfg(test)]
#[path = "../test/ssh_config/resolver.rs"]
mod tests;
