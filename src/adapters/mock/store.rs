//! In-memory settings store for testing.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::PersistError;
use crate::traits::SettingsStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, serde_json::Value>>>,
    fail_saves: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `save` fail with an I/O error.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        self.fail_saves.set(should_fail);
    }

    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.values.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: serde_json::Value) {
        self.values.borrow_mut().insert(key.to_string(), value);
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<serde_json::Value>, PersistError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &serde_json::Value) -> Result<(), PersistError> {
        if self.fail_saves.get() {
            return Err(PersistError::io(
                format!("memory://{}", key),
                std::io::Error::new(std::io::ErrorKind::Other, "save disabled"),
            ));
        }
        self.insert(key, value.clone());
        Ok(())
    }
}
