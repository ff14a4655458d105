//! Work owned by a view's lifetime.
//!
//! Every future or listener a control registers while its view is shown goes
//! through the descriptor's [`ViewScope`]. Hiding the view calls
//! [`ViewScope::release`], which aborts the futures and drops the
//! subscriptions in one pass, so a late data load can never touch a view the
//! user has already left.

use std::future::Future;

use futures::future::{AbortHandle, Abortable};

use crate::events::Subscription;

#[derive(Debug, Default)]
pub struct ViewScope {
    aborts: Vec<AbortHandle>,
    subscriptions: Vec<Subscription>,
    generation: u64,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a future so it resolves to `Err(Aborted)` without polling the
    /// inner future once the scope is released.
    pub fn track<F: Future>(&mut self, future: F) -> Abortable<F> {
        let (handle, registration) = AbortHandle::new_pair();
        self.aborts.push(handle);
        Abortable::new(future, registration)
    }

    /// Keep a listener registered for as long as the view is shown.
    pub fn hold(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Number of tracked futures and listeners not yet released.
    pub fn outstanding(&self) -> usize {
        self.aborts.len() + self.subscriptions.len()
    }

    /// Incremented on every release; lets callers detect a stale scope.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Abort all tracked futures and unsubscribe all listeners.
    ///
    /// Returns how many items were released.
    pub fn release(&mut self) -> usize {
        let released = self.outstanding();
        for handle in self.aborts.drain(..) {
            handle.abort();
        }
        self.subscriptions.clear();
        self.generation += 1;
        if released > 0 {
            tracing::trace!("Released {} tracked item(s) from view scope", released);
        }
        released
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        for handle in self.aborts.drain(..) {
            handle.abort();
        }
    }
}
