//! TreeWalker - builds the ordered note tree in memory

use std::fs;
use std::path::Path;

use tracing::{error, warn};

use crate::icons::FileType;

use super::config::WalkerConfig;
use super::filter::NameFilter;
use super::json_types::Entry;
use super::utils::{compare_entries, display_name, join_relative};

/// Recursive directory walker shared by the generator and the server.
///
/// A walk never fails: a directory that cannot be listed is logged and
/// contributes an empty subtree.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    config: WalkerConfig,
    filter: NameFilter,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let filter = NameFilter::new(&config);
        Self { config, filter }
    }

    /// Check if an entry name is pruned by this walker.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.filter.is_excluded(name)
    }

    /// Walk `dir`, building entry paths under `relative`.
    ///
    /// Pass an empty `relative` at the root of a walk.
    pub fn walk(&self, dir: &Path, relative: &str) -> Vec<Entry> {
        let read = match fs::read_dir(dir) {
            Ok(read) => read,
            Err(err) => {
                error!(path = %dir.display(), error = %err, "error reading directory");
                return Vec::new();
            }
        };

        let mut entries = Vec::new();
        for item in read {
            let item = match item {
                Ok(item) => item,
                Err(err) => {
                    error!(path = %dir.display(), error = %err, "error reading directory entry");
                    continue;
                }
            };

            let name = item.file_name().to_string_lossy().into_owned();
            if self.filter.is_excluded(&name) {
                continue;
            }

            // file_type() does not follow symlinks, so linked directories are
            // never descended into
            let is_dir = item.file_type().map(|t| t.is_dir()).unwrap_or(false);
            let child_relative = join_relative(relative, &name);

            if is_dir {
                let children = self.walk(&item.path(), &child_relative);
                entries.push(Entry::directory(name, child_relative, children));
                continue;
            }

            let Some(file_type) = FileType::from_name(&name) else {
                continue;
            };
            if file_type == FileType::Javascript
                && self.config.self_exclude.as_deref() == Some(name.as_str())
            {
                continue;
            }

            let content = if self.config.inline_content {
                match fs::read(item.path()) {
                    Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
                    Err(err) => {
                        warn!(path = %item.path().display(), error = %err, "skipping unreadable file");
                        continue;
                    }
                }
            } else {
                None
            };

            let display = display_name(&name, file_type);
            entries.push(Entry::file(display, child_relative, file_type, content));
        }

        entries.sort_by(compare_entries);
        entries
    }
}
