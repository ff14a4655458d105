//! Presentation backend the engine renders into.

use crate::engine::Transition;
use crate::models::Placement;
use crate::traits::InstanceId;

/// Where a control is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotSpec<'a> {
    /// Slot name: the view type id the control renders.
    pub name: &'a str,
    /// `None` for the main control.
    pub placement: Option<Placement>,
    /// Index in the composition's control order after insertion.
    pub index: usize,
    pub splitter: Option<f32>,
}

/// Renders controls into containers. Implemented by the UI toolkit glue.
pub trait ControlHost {
    /// Insert the control's container at `slot.index`.
    fn attach(&mut self, instance: InstanceId, slot: &SlotSpec<'_>);

    /// Remove the control's container, keeping the instance alive.
    fn detach(&mut self, instance: InstanceId);

    /// The instance is gone for good.
    fn destroy(&mut self, _instance: InstanceId) {}

    /// Start a presentation-only transition animation.
    fn begin_transition(&mut self, _transition: &Transition) {}

    /// Jump an unfinished transition to its end state.
    fn skip_transition(&mut self) {}
}
