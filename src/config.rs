//! Engine configuration loaded from `<config_dir>/multiview/config.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PersistError;

/// Directory name under the platform configuration directory.
pub const APP_DIR: &str = "multiview";
const CONFIG_FILE: &str = "config.json";
/// Set to `1` or `true` to disable transition animations.
pub const NO_ANIMATIONS_ENV: &str = "MULTIVIEW_NO_ANIMATIONS";

pub const DEFAULT_HISTORY_LIMIT: usize = 50;
pub const DEFAULT_LOG_FILTER: &str = "multiview=info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiviewConfig {
    /// Animate transitions between different navigation positions.
    pub animations: bool,
    /// Maximum number of descriptors kept in navigation history.
    pub history_limit: usize,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Where the session state is saved; defaults to the config directory.
    pub state_file: Option<PathBuf>,
}

impl Default for MultiviewConfig {
    fn default() -> Self {
        Self {
            animations: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            state_file: None,
        }
    }
}

impl MultiviewConfig {
    /// Platform configuration directory for the engine.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR))
    }

    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> Result<Self, PersistError> {
        let dir = Self::config_dir().ok_or(PersistError::NoConfigDirectory)?;
        let mut config = Self::from_file(&dir.join(CONFIG_FILE))?;
        config.apply_env();
        Ok(config)
    }

    /// Load from `path`. A missing file yields defaults; a malformed one is
    /// an error.
    pub fn from_file(path: &Path) -> Result<Self, PersistError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path).map_err(|e| PersistError::io(path, e))?;
        Ok(serde_json::from_str(&json)?)
    }

    fn apply_env(&mut self) {
        if let Ok(value) = std::env::var(NO_ANIMATIONS_ENV) {
            if matches!(value.trim(), "1" | "true" | "yes") {
                self.animations = false;
            }
        }
    }

    /// Resolved path of the session state file.
    pub fn state_path(&self) -> Option<PathBuf> {
        self.state_file
            .clone()
            .or_else(|| Self::config_dir().map(|dir| dir.join("state")))
    }
}
