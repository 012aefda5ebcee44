//! Locating a note file from the `/api/file/{folder}/{file}` parameters

use std::fs;
use std::io;
use std::path::{Component, Path};

/// Outcome of a note lookup. Paths are root-relative with `/` separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteLookup {
    Found(String),
    Missing(Vec<String>),
}

/// Check that a decoded path parameter stays inside the root.
///
/// Rejects empty values, absolute paths and any `..` component.
pub fn is_safe_segment(param: &str) -> bool {
    if param.is_empty() || param.contains('\\') {
        return false;
    }
    Path::new(param)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Paths tried in order before falling back to a directory scan.
pub fn candidates(folder: &str, file: &str) -> [String; 3] {
    let base = format!("{}/{}", folder, file.trim_matches('/'));
    [
        base.clone(),
        format!("{base}.md"),
        format!("{base}/README.md"),
    ]
}

/// Render a root-relative path the way the API reports it.
pub fn display_path(relative: &str) -> String {
    format!("/{relative}")
}

/// Find the note for `folder`/`file` under `root`.
///
/// The first candidate that is a regular file wins. If none is, and
/// `folder/file` is a directory, the first markdown file in it (by name) is
/// used instead.
pub fn find_note(root: &Path, folder: &str, file: &str) -> io::Result<NoteLookup> {
    let tried = candidates(folder, file);

    for candidate in &tried {
        if root.join(candidate).is_file() {
            return Ok(NoteLookup::Found(candidate.clone()));
        }
    }

    let dir_relative = &tried[0];
    let dir = root.join(dir_relative);
    if dir.is_dir() {
        let mut markdown: Vec<String> = fs::read_dir(&dir)?
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".md"))
            .collect();
        markdown.sort();
        if let Some(first) = markdown.into_iter().next() {
            return Ok(NoteLookup::Found(format!("{dir_relative}/{first}")));
        }
    }

    Ok(NoteLookup::Missing(tried.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestNotes;

    #[test]
    fn test_safe_segments() {
        assert!(is_safe_segment("React"));
        assert!(is_safe_segment("Hooks/useMemo"));
        assert!(is_safe_segment("Node Express"));
        assert!(!is_safe_segment(""));
        assert!(!is_safe_segment(".."));
        assert!(!is_safe_segment("a/../../etc"));
        assert!(!is_safe_segment("/etc/passwd"));
        assert!(!is_safe_segment("..\\windows"));
    }

    #[test]
    fn test_candidate_order() {
        assert_eq!(
            candidates("React", "hooks"),
            [
                "React/hooks".to_string(),
                "React/hooks.md".to_string(),
                "React/hooks/README.md".to_string(),
            ]
        );
    }

    #[test]
    fn test_exact_file_wins() {
        let notes = TestNotes::new();
        notes.add_file("CSS/grid.md", "exact");
        notes.add_file("CSS/grid.md.md", "suffixed");

        let found = find_note(notes.path(), "CSS", "grid.md").unwrap();
        assert_eq!(found, NoteLookup::Found("CSS/grid.md".into()));
    }

    #[test]
    fn test_markdown_suffix_added() {
        let notes = TestNotes::new();
        notes.add_file("CSS/grid.md", "grid");

        let found = find_note(notes.path(), "CSS", "grid").unwrap();
        assert_eq!(found, NoteLookup::Found("CSS/grid.md".into()));
    }

    #[test]
    fn test_readme_in_directory() {
        let notes = TestNotes::new();
        notes.add_file("React/Hooks/README.md", "readme");
        notes.add_file("React/Hooks/another.md", "other");

        let found = find_note(notes.path(), "React", "Hooks").unwrap();
        assert_eq!(found, NoteLookup::Found("React/Hooks/README.md".into()));
    }

    #[test]
    fn test_directory_fallback_picks_markdown() {
        let notes = TestNotes::new();
        notes.add_file("React/Hooks/zeta.md", "z");
        notes.add_file("React/Hooks/alpha.md", "a");
        notes.add_file("React/Hooks/code.js", "js");

        match find_note(notes.path(), "React", "Hooks").unwrap() {
            NoteLookup::Found(path) => {
                assert!(path.starts_with("React/Hooks/"));
                assert!(path.ends_with(".md"));
            }
            other => panic!("expected a markdown file, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_reports_candidates() {
        let notes = TestNotes::new();
        notes.add_dir("React/Empty");

        let lookup = find_note(notes.path(), "React", "Empty").unwrap();
        assert_eq!(lookup, NoteLookup::Missing(candidates("React", "Empty").to_vec()));
    }

    #[test]
    fn test_display_path() {
        assert_eq!(display_path("React/hooks.md"), "/React/hooks.md");
    }
}
