//! Test utilities for building temporary note trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary notes root for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestNotes {
    dir: TempDir,
}

impl TestNotes {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create an (empty) directory, including parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate `count` topic folders, each with nested markdown and scripts.
    ///
    /// Used by benchmarks to get a tree of realistic shape.
    pub fn populate(&self, count: usize) {
        for topic in 0..count {
            for note in 0..10 {
                self.add_file(
                    &format!("Topic-{topic}/note-{note}.md"),
                    "# Question\n\nAnswer text.\n",
                );
            }
            self.add_file(&format!("Topic-{topic}/examples/solution.js"), "module.exports = 1;\n");
            self.add_file(&format!("Topic-{topic}/examples/README.md"), "# Examples\n");
        }
    }
}

impl Default for TestNotes {
    fn default() -> Self {
        Self::new()
    }
}
