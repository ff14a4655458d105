//! File-backed settings store.
//!
//! Each key is stored as a pretty-printed JSON document `<dir>/<key>.json`.
//! Writes go to a temporary file first and are renamed into place, so an
//! interrupted save never leaves a truncated document behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::MultiviewConfig;
use crate::error::PersistError;
use crate::traits::SettingsStore;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under `<config_dir>/multiview/state`.
    pub fn in_config_dir() -> Result<Self, PersistError> {
        MultiviewConfig::default()
            .state_path()
            .map(Self::new)
            .ok_or(PersistError::NoConfigDirectory)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file))
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<serde_json::Value>, PersistError> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(PersistError::io(path, err)),
        };
        let value = serde_json::from_str(&content)?;
        tracing::debug!("Loaded '{}' from {}", key, path.display());
        Ok(Some(value))
    }

    fn save(&self, key: &str, value: &serde_json::Value) -> Result<(), PersistError> {
        fs::create_dir_all(&self.dir).map_err(|err| PersistError::io(&self.dir, err))?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(value)?;
        fs::write(&tmp, content).map_err(|err| PersistError::io(&tmp, err))?;
        fs::rename(&tmp, &path).map_err(|err| PersistError::io(&path, err))?;
        tracing::debug!("Saved '{}' to {}", key, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_loads_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load("multiview.session").unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"));
        let value = json!({"history": [], "current": null});

        store.save("multiview.session", &value).unwrap();

        assert!(store.path_for("multiview.session").exists());
        assert_eq!(store.load("multiview.session").unwrap(), Some(value));
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        fs::write(store.path_for("broken"), "{ not json").unwrap();

        let err = store.load("broken").unwrap_err();
        assert_eq!(err.error_code(), "E_PERSIST_JSON");
    }

    #[test]
    fn test_key_is_sanitized() {
        let store = JsonFileStore::new("/tmp/x");
        assert_eq!(store.path_for("a/b c"), PathBuf::from("/tmp/x/a_b_c.json"));
    }
}
