//! Directory tree walking logic
//!
//! A single [`TreeWalker`], configured through [`WalkerConfig`], serves both
//! the snapshot generator (which inlines file content) and the HTTP API
//! (which only lists entries).

mod config;
mod filter;
mod json_types;
mod utils;
mod walker;

pub use config::{GENERATOR_EXCLUDED, SERVER_EXCLUDED, WalkerConfig};
pub use filter::NameFilter;
pub use json_types::{Entry, EntryKind};
pub use utils::{compare_entries, display_name, join_relative, locale_cmp};
pub use walker::TreeWalker;
