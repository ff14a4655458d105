//! Headless control host.

use crate::engine::Transition;
use crate::traits::{ControlHost, InstanceId, SlotSpec};

/// Logs host calls and keeps the attached order, nothing else.
#[derive(Debug, Default)]
pub struct LogHost {
    attached: Vec<(InstanceId, String)>,
}

impl LogHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot names of the attached controls, in container order.
    pub fn slots(&self) -> Vec<&str> {
        self.attached.iter().map(|(_, slot)| slot.as_str()).collect()
    }
}

impl ControlHost for LogHost {
    fn attach(&mut self, instance: InstanceId, slot: &SlotSpec<'_>) {
        tracing::debug!("attach {} into '{}' at {}", instance, slot.name, slot.index);
        let index = slot.index.min(self.attached.len());
        self.attached.insert(index, (instance, slot.name.to_string()));
    }

    fn detach(&mut self, instance: InstanceId) {
        tracing::debug!("detach {}", instance);
        self.attached.retain(|(id, _)| *id != instance);
    }

    fn destroy(&mut self, instance: InstanceId) {
        tracing::trace!("destroy {}", instance);
    }

    fn begin_transition(&mut self, transition: &Transition) {
        tracing::debug!("transition to {} ({:?})", transition.to, transition.direction);
    }
}
