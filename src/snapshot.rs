//! Static JSON snapshot of the note tree
//!
//! The snapshot lets the client run without the live API: every top-level
//! folder becomes a key in `folders`, and the whole top-level listing is kept
//! under `files`.

use std::fs;
use std::path::{Component, Path};

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::tree::{Entry, TreeWalker};

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A folder as advertised to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderSummary {
    pub icon: &'static str,
    pub files: Vec<Entry>,
    pub is_directory: bool,
}

impl FolderSummary {
    pub fn new(icon: &'static str, files: Vec<Entry>) -> Self {
        Self {
            icon,
            files,
            is_directory: true,
        }
    }
}

/// Folder name to summary, serialized as a JSON object in insertion order.
pub type FolderMap = IndexMap<String, FolderSummary>;

/// The persisted document: `{folders, files}`.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub folders: FolderMap,
    pub files: Vec<Entry>,
}

/// Walk `root` and reshape the result into a snapshot.
pub fn build_snapshot(root: &Path, walker: &TreeWalker) -> Snapshot {
    let files = walker.walk(root, "");

    let mut folders = FolderMap::new();
    for entry in files.iter().filter(|e| e.is_directory) {
        folders.insert(
            entry.name.clone(),
            FolderSummary::new(entry.icon, entry.children().to_vec()),
        );
    }

    Snapshot { folders, files }
}

/// Top-level folder of `root` that holds `output`, if `output` lives in one.
///
/// The generator prunes this folder so a rerun never lists its own output.
pub fn output_folder(root: &Path, output: &Path) -> Option<String> {
    let mut components = output.strip_prefix(root).ok()?.components();
    let first = components.next()?;
    components.next()?;
    match first {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    }
}

/// Render a snapshot as pretty-printed JSON.
pub fn to_json(snapshot: &Snapshot) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Write the snapshot to `output`, replacing any previous file.
pub fn write_snapshot(output: &Path, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = to_json(snapshot)?;
    fs::write(output, json)?;
    Ok(())
}
