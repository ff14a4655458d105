//! Pool of detached controls kept for reuse across navigations.
//!
//! Keyed by control type, at most one instance per key: navigating back to a
//! view type reattaches the previous control instead of building a new one.
//! A control in the cache is detached from the host and has had no
//! `on_show` since it was put here.

use std::collections::HashMap;
use std::fmt;

use crate::traits::{Composable, ControlHost, InstanceId};

/// A control instance together with its engine-assigned identity.
pub struct ControlInstance {
    pub id: InstanceId,
    pub control: Box<dyn Composable>,
}

impl fmt::Debug for ControlInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlInstance")
            .field("id", &self.id)
            .field("control_type", &self.control.control_type())
            .finish()
    }
}

impl ControlInstance {
    /// Run the control's teardown and tell the host it is gone.
    pub(crate) fn destroy(mut self, host: &mut dyn ControlHost) {
        self.control.destroy();
        host.destroy(self.id);
    }
}

#[derive(Debug, Default)]
pub struct ControlCache {
    entries: HashMap<String, ControlInstance>,
    hits: u64,
    misses: u64,
}

impl ControlCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the cached control for `key`.
    pub fn get(&mut self, key: &str) -> Option<ControlInstance> {
        match self.entries.remove(key) {
            Some(instance) => {
                self.hits += 1;
                tracing::trace!("Control cache hit for '{}' ({})", key, instance.id);
                Some(instance)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a detached control, destroying any previous entry for `key`.
    pub fn put(&mut self, key: &str, instance: ControlInstance, host: &mut dyn ControlHost) {
        if let Some(evicted) = self.entries.insert(key.to_string(), instance) {
            tracing::debug!("Control cache evicted '{}' ({})", key, evicted.id);
            evicted.destroy(host);
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn cached_id(&self, key: &str) -> Option<InstanceId> {
        self.entries.get(key).map(|instance| instance.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses) since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    /// Destroy every cached control.
    pub fn cleanup(&mut self, host: &mut dyn ControlHost) {
        let count = self.entries.len();
        for (_, instance) in self.entries.drain() {
            instance.destroy(host);
        }
        if count > 0 {
            tracing::debug!("Control cache cleaned up {} control(s)", count);
        }
    }
}
