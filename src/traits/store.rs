//! Process-wide settings storage.

use crate::error::PersistError;

/// Key/value store for persisted UI state.
pub trait SettingsStore {
    fn load(&self, key: &str) -> Result<Option<serde_json::Value>, PersistError>;

    fn save(&self, key: &str, value: &serde_json::Value) -> Result<(), PersistError>;
}
