//! Shared utility functions for tree walking

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::icons::FileType;

use super::json_types::Entry;

/// Display name for a note file: markdown loses exactly one trailing `.md`.
pub fn display_name(file_name: &str, file_type: FileType) -> String {
    match file_type {
        FileType::Markdown => file_name
            .strip_suffix(".md")
            .unwrap_or(file_name)
            .to_string(),
        FileType::Javascript => file_name.to_string(),
    }
}

/// Join a relative prefix and a child name with `/`.
pub fn join_relative(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix.trim_end_matches('/'), name)
    }
}

/// Directories first, then names in locale-style order.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    b.is_directory
        .cmp(&a.is_directory)
        .then_with(|| locale_cmp(&a.name, &b.name))
}

/// Locale-style name comparison.
///
/// Names compare first on their base letters (accents and case ignored),
/// then on accents, and only names that still tie are ordered by case,
/// lowercase first. This follows the root-locale collation browsers use for
/// `localeCompare`.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_tiebreak(a, b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_tiebreak(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.len().cmp(&b.len())
}
