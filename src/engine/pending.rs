//! Single-slot navigation request queue.
//!
//! Requests are not executed when they are made. The latest request waits in
//! one slot until the event loop calls
//! [`Multiview::process_pending`](super::Multiview::process_pending); a newer
//! request replaces an older one that has not started. Rapid repeated
//! navigation (arrow keys in the tree) therefore composes only the last
//! target, and a request made from inside a lifecycle hook runs after the
//! current transition.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{NodeRef, ViewDataId};

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationTarget {
    Node(NodeRef),
    Back,
    Forward,
    /// Switch the render mode of the active descriptor.
    ViewType(String),
    Descriptor(ViewDataId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShowOptions {
    /// Allow a transition animation. Programmatic navigation turns it off.
    pub animate: bool,
    /// Render with this view type instead of the remembered one.
    pub view_type: Option<String>,
    /// Re-apply the descriptor's stored control state after showing.
    pub restore_state: bool,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            animate: true,
            view_type: None,
            restore_state: true,
        }
    }
}

impl ShowOptions {
    pub fn programmatic() -> Self {
        Self {
            animate: false,
            ..Self::default()
        }
    }

    pub fn with_view_type(mut self, view_type: impl Into<String>) -> Self {
        self.view_type = Some(view_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
    pub target: NavigationTarget,
    pub options: ShowOptions,
}

#[derive(Debug, Default)]
struct PendingSlot {
    request: Option<NavigationRequest>,
    superseded: u64,
}

/// Cloneable handle for posting navigation requests.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    slot: Rc<RefCell<PendingSlot>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a request, replacing any request that has not started yet.
    pub fn request(&self, target: NavigationTarget, options: ShowOptions) {
        let mut slot = self.slot.borrow_mut();
        if let Some(previous) = slot.request.replace(NavigationRequest { target, options }) {
            slot.superseded += 1;
            tracing::debug!("Navigation request {:?} superseded", previous.target);
        }
    }

    pub(crate) fn take(&self) -> Option<NavigationRequest> {
        self.slot.borrow_mut().request.take()
    }

    pub fn has_pending(&self) -> bool {
        self.slot.borrow().request.is_some()
    }

    pub fn pending(&self) -> Option<NavigationRequest> {
        self.slot.borrow().request.clone()
    }

    /// Requests dropped because a newer one replaced them.
    pub fn superseded(&self) -> u64 {
        self.slot.borrow().superseded
    }
}
