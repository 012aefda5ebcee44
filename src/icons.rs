//! Display glyphs for folders and note files
//!
//! Folder icons come from a fixed table keyed on the exact folder name.
//! Anything not in the table gets the generic folder glyph.

use serde::Serialize;

/// Glyph for any folder without a dedicated icon.
pub const FOLDER_ICON: &str = "📁";

/// Glyph for markdown notes.
pub const MARKDOWN_ICON: &str = "📄";

/// Glyph for javascript sources.
pub const SCRIPT_ICON: &str = "📜";

const FOLDER_ICONS: &[(&str, &str)] = &[
    ("Angular-Topics-Interview", "🅰️"),
    ("React", "⚛️"),
    ("Javascript", "📜"),
    ("Redux", "🔄"),
    ("Node-Express", "🟢"),
    ("CSS", "🎨"),
    ("MongoDB", "🍃"),
    ("Promise-Async-Await-Sequential-Execution", "⏳"),
    ("Event-Loop-Asynchronous-setTimeout", "🔄"),
    ("Fundamental-Algorithms-JS", "🧮"),
    ("Collection-of-Popular-Problems-with-Solutions", "💡"),
    ("Challenges-from-Popular-Coding-Practice-sites", "🏆"),
    ("Collection-of-TakeHome-Exercises", "📝"),
    ("Git-and-Github", "🌿"),
    ("system-design", "🏗️"),
    ("Web-Development-In-General", "🌐"),
    ("Collections-of-Questions-NOT-drafted-Ans", "❓"),
    ("GraphQL", "🔗"),
    ("Heroku", "☁️"),
    ("HTML", "📄"),
    ("Typscript", "📘"),
    ("webpack", "📦"),
    ("Common-Problem-Set", "🧩"),
    ("General-Soft_Getting_to_Know_Interview_Questions", "🗣️"),
];

/// Look up the icon for a folder name.
///
/// Matching is exact and case-sensitive; unknown names fall back to
/// [`FOLDER_ICON`].
///
/// ```
/// use notebrowse::icons::{icon_for, FOLDER_ICON};
///
/// assert_eq!(icon_for("React"), "⚛️");
/// assert_eq!(icon_for("react"), FOLDER_ICON);
/// ```
pub fn icon_for(name: &str) -> &'static str {
    FOLDER_ICONS
        .iter()
        .find(|(folder, _)| *folder == name)
        .map(|(_, icon)| *icon)
        .unwrap_or(FOLDER_ICON)
}

/// Kind of note file surfaced by the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Markdown,
    Javascript,
}

impl FileType {
    /// Classify a file by name. Only `.md` and `.js` are recognized.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.ends_with(".md") {
            Some(FileType::Markdown)
        } else if name.ends_with(".js") {
            Some(FileType::Javascript)
        } else {
            None
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FileType::Markdown => MARKDOWN_ICON,
            FileType::Javascript => SCRIPT_ICON,
        }
    }
}
