//! Control host that records every call.

use std::cell::RefCell;
use std::rc::Rc;

use crate::engine::{Direction, Transition};
use crate::models::Position;
use crate::traits::{ControlHost, InstanceId, SlotSpec};

#[derive(Debug, Clone, PartialEq)]
pub enum HostOp {
    Attach {
        instance: InstanceId,
        slot: String,
        index: usize,
        position: Option<Position>,
    },
    Detach(InstanceId),
    Destroy(InstanceId),
    BeginTransition(Direction),
    SkipTransition,
}

#[derive(Debug, Default)]
struct HostLog {
    ops: Vec<HostOp>,
    attached: Vec<(InstanceId, String)>,
}

/// Cloneable recording host. Clones share one log, so a test keeps a clone
/// after handing the host to the engine.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    log: Rc<RefCell<HostLog>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> Vec<HostOp> {
        self.log.borrow().ops.clone()
    }

    pub fn clear_ops(&self) {
        self.log.borrow_mut().ops.clear();
    }

    /// Attached instances in container order.
    pub fn attached(&self) -> Vec<InstanceId> {
        self.log.borrow().attached.iter().map(|(id, _)| *id).collect()
    }

    /// Slot names of the attached instances in container order.
    pub fn attached_slots(&self) -> Vec<String> {
        self.log
            .borrow()
            .attached
            .iter()
            .map(|(_, slot)| slot.clone())
            .collect()
    }

    pub fn destroyed(&self) -> Vec<InstanceId> {
        self.log
            .borrow()
            .ops
            .iter()
            .filter_map(|op| match op {
                HostOp::Destroy(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn transitions(&self) -> Vec<Direction> {
        self.log
            .borrow()
            .ops
            .iter()
            .filter_map(|op| match op {
                HostOp::BeginTransition(direction) => Some(*direction),
                _ => None,
            })
            .collect()
    }
}

impl ControlHost for RecordingHost {
    fn attach(&mut self, instance: InstanceId, slot: &SlotSpec<'_>) {
        let mut log = self.log.borrow_mut();
        log.ops.push(HostOp::Attach {
            instance,
            slot: slot.name.to_string(),
            index: slot.index,
            position: slot.placement.map(|p| p.position),
        });
        let index = slot.index.min(log.attached.len());
        log.attached.insert(index, (instance, slot.name.to_string()));
    }

    fn detach(&mut self, instance: InstanceId) {
        let mut log = self.log.borrow_mut();
        log.ops.push(HostOp::Detach(instance));
        log.attached.retain(|(id, _)| *id != instance);
    }

    fn destroy(&mut self, instance: InstanceId) {
        self.log.borrow_mut().ops.push(HostOp::Destroy(instance));
    }

    fn begin_transition(&mut self, transition: &Transition) {
        self.log
            .borrow_mut()
            .ops
            .push(HostOp::BeginTransition(transition.direction));
    }

    fn skip_transition(&mut self) {
        self.log.borrow_mut().ops.push(HostOp::SkipTransition);
    }
}
