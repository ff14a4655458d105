//! In-process event bus and the events the engine publishes.
//!
//! Listeners are owned by [`Subscription`] guards: dropping the guard
//! unregisters the listener. View scopes keep their guards in one list and
//! drop them together when the view is hidden.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::engine::Direction;
use crate::models::ViewDataId;
use crate::traits::InstanceId;

type Listener<E> = Rc<RefCell<Box<dyn FnMut(&E)>>>;

struct BusInner<E> {
    next_id: u64,
    listeners: Vec<(u64, Listener<E>)>,
}

/// Single-threaded publish/subscribe channel.
pub struct EventBus<E> {
    inner: Rc<RefCell<BusInner<E>>>,
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: 'static> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<E: 'static> EventBus<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Register a listener; it stays registered while the returned guard lives.
    pub fn subscribe(&self, listener: impl FnMut(&E) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner
                .listeners
                .push((id, Rc::new(RefCell::new(Box::new(listener)))));
            id
        };

        let weak: Weak<RefCell<BusInner<E>>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }

    /// Deliver `event` to every listener registered at the time of the call.
    ///
    /// Listeners removed by an earlier listener during the same emit are
    /// skipped; a listener that re-enters its own emit is skipped too.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<(u64, Listener<E>)> = self.inner.borrow().listeners.clone();
        for (id, listener) in snapshot {
            let still_registered = self
                .inner
                .borrow()
                .listeners
                .iter()
                .any(|(lid, _)| *lid == id);
            if !still_registered {
                continue;
            }
            if let Ok(mut callback) = listener.try_borrow_mut() {
                (*callback)(event);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Guard for a registered listener.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Keep the listener registered for the lifetime of the bus.
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Events published by the engine for navigation history, search bar and
/// other listeners.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// A new composition became active.
    ViewChanged {
        view_data: ViewDataId,
        path: String,
        view_type: String,
        direction: Direction,
    },
    /// A single sub-view was shown or hidden.
    SubViewToggled { view_type: String, visible: bool },
    /// Input focus moved to another control (or away from all of them).
    FocusChanged { instance: Option<InstanceId> },
    /// The contextual action list was recomputed or reconciled.
    ActionsChanged { count: usize },
}
