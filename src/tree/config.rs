//! Configuration types for the tree walker

use std::collections::BTreeSet;

/// Names the live server never descends into.
pub const SERVER_EXCLUDED: &[&str] = &["node_modules", "client", "server"];

/// Names the snapshot generator never descends into.
pub const GENERATOR_EXCLUDED: &[&str] =
    &[".git", "node_modules", "client", "server", "scripts", "assets"];

/// Configuration for tree walking behavior.
///
/// Entries whose name starts with `.` are always pruned, on top of whatever
/// `excluded_names` and `ignore_patterns` say.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Exact names pruned before recursion (files and directories alike)
    pub excluded_names: BTreeSet<String>,
    /// Glob patterns matched against entry names
    pub ignore_patterns: Vec<String>,
    /// Attach raw file text to markdown and javascript entries
    pub inline_content: bool,
    /// A javascript file name to leave out (the generator's own script)
    pub self_exclude: Option<String>,
}

impl WalkerConfig {
    /// Walker used by the HTTP API: no content, small exclusion set.
    pub fn server() -> Self {
        Self {
            excluded_names: to_set(SERVER_EXCLUDED),
            ..Default::default()
        }
    }

    /// Walker used by the snapshot generator: inlines file content.
    pub fn generator() -> Self {
        Self {
            excluded_names: to_set(GENERATOR_EXCLUDED),
            inline_content: true,
            ..Default::default()
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Prune one more exact name.
    pub fn with_excluded_name(mut self, name: String) -> Self {
        self.excluded_names.insert(name);
        self
    }

    pub fn with_self_exclude(mut self, name: Option<String>) -> Self {
        self.self_exclude = name;
        self
    }
}

fn to_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}
