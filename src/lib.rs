//! notebrowse - browse a folder of markdown notes over HTTP or as a JSON snapshot

pub mod config;
pub mod icons;
pub mod logging;
pub mod server;
pub mod snapshot;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ConfigError, Settings, load_settings, load_settings_file};
pub use icons::{FileType, icon_for};
pub use server::{AppState, NotesServer, ServeError, ServerOptions, router};
pub use snapshot::{
    FolderMap, FolderSummary, Snapshot, SnapshotError, build_snapshot, output_folder, write_snapshot,
};
pub use tree::{Entry, EntryKind, TreeWalker, WalkerConfig};
