//! Settings loaded from `notebrowse.toml`
//!
//! Every key is optional; a missing file means stock defaults. Relative paths
//! are resolved against the notes root, not the working directory.
//!
//! ```toml
//! static_dir = "client"
//! ignore = ["draft-*"]
//!
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//! excluded = ["node_modules", "client", "server"]
//!
//! [generator]
//! output = "client/data.json"
//! excluded = [".git", "node_modules", "client", "server", "scripts", "assets"]
//! self_exclude = "generate-data.js"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tree::{GENERATOR_EXCLUDED, SERVER_EXCLUDED, WalkerConfig};

/// File name looked up in the notes root when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "notebrowse.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory served at the site root, relative to the notes root.
    pub static_dir: PathBuf,
    /// Glob patterns pruned by both the server and the generator.
    pub ignore: Vec<String>,
    pub server: ServerSettings,
    pub generator: GeneratorSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("client"),
            ignore: Vec::new(),
            server: ServerSettings::default(),
            generator: GeneratorSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Names hidden from the API, on top of dot-names.
    pub excluded: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            excluded: owned(SERVER_EXCLUDED),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Snapshot destination, relative to the notes root.
    pub output: PathBuf,
    /// Names left out of the snapshot, on top of dot-names.
    pub excluded: Vec<String>,
    /// A javascript file the generator should not list (usually itself).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_exclude: Option<String>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("client/data.json"),
            excluded: owned(GENERATOR_EXCLUDED),
            self_exclude: None,
        }
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

impl Settings {
    /// Validate values that serde alone cannot check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Validation("server.host must not be empty".into()));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port must not be zero".into()));
        }
        if self.generator.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "generator.output must not be empty".into(),
            ));
        }
        if self.static_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation("static_dir must not be empty".into()));
        }
        Ok(())
    }

    /// Walker configuration for the HTTP API.
    pub fn server_walker(&self) -> WalkerConfig {
        WalkerConfig {
            excluded_names: self.server.excluded.iter().cloned().collect(),
            ..WalkerConfig::server()
        }
        .with_ignore_patterns(self.ignore.clone())
    }

    /// Walker configuration for the snapshot generator.
    pub fn generator_walker(&self) -> WalkerConfig {
        WalkerConfig {
            excluded_names: self.generator.excluded.iter().cloned().collect(),
            ..WalkerConfig::generator()
        }
        .with_ignore_patterns(self.ignore.clone())
        .with_self_exclude(self.generator.self_exclude.clone())
    }
}

/// Resolve `path` against `root` unless it is already absolute.
pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Load settings from an explicit file. The file must exist.
pub fn load_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    settings.validate()?;
    Ok(settings)
}

/// Load `notebrowse.toml` from the notes root, or defaults when absent.
pub fn load_settings(root: &Path) -> Result<Settings, ConfigError> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(Settings::default());
    }
    load_settings_file(&path)
}
