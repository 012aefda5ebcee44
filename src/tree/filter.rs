//! Name-based pruning for tree walking

use glob::Pattern;

use super::config::WalkerConfig;

/// Decides which directory entries are pruned before recursion.
///
/// Patterns are compiled once; invalid glob patterns are dropped with a
/// warning rather than failing the walk.
#[derive(Debug, Clone)]
pub struct NameFilter {
    excluded: Vec<String>,
    patterns: Vec<Pattern>,
}

impl NameFilter {
    pub fn new(config: &WalkerConfig) -> Self {
        let patterns = config
            .ignore_patterns
            .iter()
            .filter_map(|raw| match Pattern::new(raw) {
                Ok(p) => Some(p),
                Err(err) => {
                    tracing::warn!(pattern = %raw, error = %err, "ignoring invalid glob pattern");
                    None
                }
            })
            .collect();

        Self {
            excluded: config.excluded_names.iter().cloned().collect(),
            patterns,
        }
    }

    /// Check if an entry name should be pruned.
    pub fn is_excluded(&self, name: &str) -> bool {
        if name.starts_with('.') {
            return true;
        }
        if self.excluded.iter().any(|e| e == name) {
            return true;
        }
        self.patterns.iter().any(|p| p.matches(name))
    }
}
