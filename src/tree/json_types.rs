//! JSON serialization types for the note tree

use serde::Serialize;

use crate::icons::{FileType, icon_for};

/// One filesystem node surfaced to clients.
///
/// Serializes as a flat camelCase object: the common fields followed by
/// either `children`/`hasChildren` or `fileType`/`content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub name: String,
    pub path: String,
    pub is_directory: bool,
    pub icon: &'static str,
    #[serde(flatten)]
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntryKind {
    #[serde(rename_all = "camelCase")]
    Directory {
        children: Vec<Entry>,
        has_children: bool,
    },
    #[serde(rename_all = "camelCase")]
    File {
        file_type: FileType,
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
}

impl Entry {
    pub fn directory(name: String, path: String, children: Vec<Entry>) -> Self {
        let icon = icon_for(&name);
        Self {
            name,
            path,
            is_directory: true,
            icon,
            kind: EntryKind::Directory {
                has_children: !children.is_empty(),
                children,
            },
        }
    }

    pub fn file(name: String, path: String, file_type: FileType, content: Option<String>) -> Self {
        Self {
            name,
            path,
            is_directory: false,
            icon: file_type.icon(),
            kind: EntryKind::File { file_type, content },
        }
    }

    pub fn children(&self) -> &[Entry] {
        match &self.kind {
            EntryKind::Directory { children, .. } => children,
            EntryKind::File { .. } => &[],
        }
    }

    pub fn file_type(&self) -> Option<FileType> {
        match &self.kind {
            EntryKind::File { file_type, .. } => Some(*file_type),
            EntryKind::Directory { .. } => None,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::File { content, .. } => content.as_deref(),
            EntryKind::Directory { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_directory_serialization() {
        let dir = Entry::directory(
            "React".to_string(),
            "React".to_string(),
            vec![Entry::file(
                "hooks".to_string(),
                "React/hooks.md".to_string(),
                FileType::Markdown,
                None,
            )],
        );
        let value = serde_json::to_value(&dir).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "React",
                "path": "React",
                "isDirectory": true,
                "icon": "⚛️",
                "children": [{
                    "name": "hooks",
                    "path": "React/hooks.md",
                    "isDirectory": false,
                    "icon": "📄",
                    "fileType": "markdown"
                }],
                "hasChildren": true
            })
        );
    }

    #[test]
    fn test_file_content_only_when_inlined() {
        let bare = Entry::file("a.js".into(), "a.js".into(), FileType::Javascript, None);
        let inlined = Entry::file(
            "a.js".into(),
            "a.js".into(),
            FileType::Javascript,
            Some("let a = 1;".into()),
        );
        let bare = serde_json::to_value(&bare).unwrap();
        let inlined = serde_json::to_value(&inlined).unwrap();
        assert!(bare.get("content").is_none());
        assert_eq!(inlined["content"], "let a = 1;");
        assert_eq!(inlined["icon"], "📜");
    }

    #[test]
    fn test_empty_directory_has_no_children() {
        let dir = Entry::directory("empty".into(), "empty".into(), Vec::new());
        let value = serde_json::to_value(&dir).unwrap();
        assert_eq!(value["hasChildren"], false);
        assert_eq!(value["children"], json!([]));
        assert_eq!(value["icon"], "📁");
    }

    #[test]
    fn test_field_order_is_stable() {
        let file = Entry::file("x".into(), "x.md".into(), FileType::Markdown, Some("#".into()));
        let text = serde_json::to_string(&file).unwrap();
        assert_eq!(
            text,
            r##"{"name":"x","path":"x.md","isDirectory":false,"icon":"📄","fileType":"markdown","content":"#"}"##
        );
    }
}
