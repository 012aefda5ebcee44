//! Test harness for notebrowse integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct NotesDir {
    dir: TempDir,
}

impl NotesDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// A small interview-prep style tree.
    pub fn sample() -> Self {
        let notes = Self::new();
        notes.add_file("README.md", "# Interview prep\n");
        notes.add_file("React/hooks.md", "# Hooks\n");
        notes.add_file("React/Hooks/useMemo.md", "# useMemo\n");
        notes.add_file("React/Hooks/README.md", "# Hooks index\n");
        notes.add_file("Javascript/closures.md", "# Closures\n");
        notes.add_file("Javascript/debounce.js", "function debounce() {}\n");
        notes.add_file("Javascript/diagram.png", "png");
        notes.add_file("client/index.html", "<html></html>");
        notes.add_file("server/app.js", "listen();");
        notes.add_file("node_modules/lib/index.md", "# dependency");
        notes.add_file(".git/HEAD", "ref: refs/heads/main");
        notes.add_dir("Empty-Topic");
        notes
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.dir.path().join(path)).expect("Failed to read file")
    }
}

pub fn run_notebrowse(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_notebrowse");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run notebrowse");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let notes = NotesDir::new();
        assert!(notes.path().exists());
    }

    #[test]
    fn test_harness_sample_tree() {
        let notes = NotesDir::sample();
        assert!(notes.path().join("React/Hooks/useMemo.md").exists());
        assert!(notes.path().join("Empty-Topic").is_dir());
    }
}
