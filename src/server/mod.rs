//! HTTP facade over the note tree
//!
//! - `GET /api/folders` lists top-level folders and their icons
//! - `GET /api/files/{folder}` returns the walked tree of one folder
//! - `GET /api/file/{folder}/{*file}` returns the raw text of one note
//!
//! Anything else is served from the static directory. Every response allows
//! any origin.

mod error;
mod handlers;
mod listener;
mod resolve;

use std::path::Path;

use axum::Router;
use axum::http::HeaderName;
use axum::http::header::{ACCEPT, CONTENT_TYPE, ORIGIN};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub use error::ApiError;
pub use handlers::{AppState, NoteContent, list_files, list_folders, read_file};
pub use listener::{NotesServer, ServeError, ServerOptions, shutdown_signal};
pub use resolve::{NoteLookup, candidates, find_note, is_safe_segment};

/// Build the application router.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_headers([
        ORIGIN,
        HeaderName::from_static("x-requested-with"),
        CONTENT_TYPE,
        ACCEPT,
    ]);

    Router::new()
        .route("/api/folders", get(list_folders))
        .route("/api/files/{folder}", get(list_files))
        .route("/api/file/{folder}/{*file}", get(read_file))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .with_state(state)
}
