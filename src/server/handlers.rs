//! Request handlers for the notes API
//!
//! Every handler reads the filesystem synchronously and runs to completion;
//! nothing is cached between requests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path as UrlPath, State};
use serde::Serialize;
use tracing::{debug, error};

use crate::icons::icon_for;
use crate::snapshot::{FolderMap, FolderSummary};
use crate::tree::{Entry, TreeWalker, locale_cmp};

use super::error::ApiError;
use super::resolve::{NoteLookup, display_path, find_note, is_safe_segment};

/// Shared, read-only request state.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<StateInner>,
}

#[derive(Debug)]
struct StateInner {
    root: PathBuf,
    walker: TreeWalker,
}

impl AppState {
    pub fn new(root: PathBuf, walker: TreeWalker) -> Self {
        Self {
            inner: Arc::new(StateInner { root, walker }),
        }
    }

    pub fn root(&self) -> &Path {
        &self.inner.root
    }

    pub fn walker(&self) -> &TreeWalker {
        &self.inner.walker
    }
}

/// Body of a successful `/api/file` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteContent {
    pub content: String,
    pub file_path: String,
}

/// `GET /api/folders`: top-level folders with their icons, no contents.
pub async fn list_folders(State(state): State<AppState>) -> Result<Json<FolderMap>, ApiError> {
    let read = fs::read_dir(state.root()).map_err(|err| {
        error!(path = %state.root().display(), error = %err, "failed to read folders");
        ApiError::internal("Failed to read folders")
    })?;

    let mut names: Vec<String> = read
        .filter_map(Result::ok)
        .filter(|item| item.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|item| item.file_name().to_string_lossy().into_owned())
        .filter(|name| !state.walker().is_excluded(name))
        .collect();
    names.sort_by(|a, b| locale_cmp(a, b));

    let mut folders = FolderMap::new();
    for name in names {
        let icon = icon_for(&name);
        folders.insert(name, FolderSummary::new(icon, Vec::new()));
    }
    Ok(Json(folders))
}

/// `GET /api/files/{folder}`: the walked tree of one folder.
pub async fn list_files(
    State(state): State<AppState>,
    UrlPath(folder): UrlPath<String>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    if !is_safe_segment(&folder) {
        return Err(ApiError::bad_request("Invalid path"));
    }
    if state.walker().is_excluded(&folder) {
        return Err(ApiError::not_found("Folder not found"));
    }

    let folder_path = state.root().join(&folder);
    match folder_path.try_exists() {
        Ok(true) => {}
        Ok(false) => return Err(ApiError::not_found("Folder not found")),
        Err(err) => {
            error!(path = %folder_path.display(), error = %err, "failed to read files");
            return Err(ApiError::internal("Failed to read files"));
        }
    }

    debug!(folder = %folder, "listing folder");
    Ok(Json(state.walker().walk(&folder_path, "")))
}

/// `GET /api/file/{folder}/{*file}`: raw content of one note.
pub async fn read_file(
    State(state): State<AppState>,
    UrlPath((folder, file)): UrlPath<(String, String)>,
) -> Result<Json<NoteContent>, ApiError> {
    if !is_safe_segment(&folder) || !is_safe_segment(&file) {
        return Err(ApiError::bad_request("Invalid path"));
    }

    let lookup = find_note(state.root(), &folder, &file).map_err(|err| read_failure(&err))?;
    match lookup {
        NoteLookup::Found(relative) => {
            debug!(path = %relative, "serving note");
            let bytes = fs::read(state.root().join(&relative)).map_err(|err| read_failure(&err))?;
            Ok(Json(NoteContent {
                content: String::from_utf8_lossy(&bytes).into_owned(),
                file_path: display_path(&relative),
            }))
        }
        NoteLookup::Missing(searched) => {
            let searched: Vec<String> = searched.iter().map(|p| display_path(p)).collect();
            Err(ApiError::not_found("File not found").with("searched", searched))
        }
    }
}

fn read_failure(err: &std::io::Error) -> ApiError {
    error!(error = %err, "failed to read file");
    ApiError::internal("Failed to read file").with("details", err.to_string())
}
