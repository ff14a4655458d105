//! Futures started by controls, driven from the UI event loop.

use std::fmt;
use std::future::Future;
use std::task::{Context, Poll};

use futures::future::LocalBoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};

#[derive(Default)]
pub struct TaskPool {
    tasks: FuturesUnordered<LocalBoxFuture<'static, ()>>,
}

impl fmt::Debug for TaskPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskPool")
            .field("outstanding", &self.tasks.len())
            .finish()
    }
}

impl TaskPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: impl Future<Output = ()> + 'static) {
        self.tasks.push(Box::pin(task));
    }

    /// Poll every task that can make progress without blocking.
    ///
    /// Returns the number of tasks that completed.
    pub fn run_until_stalled(&mut self) -> usize {
        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut completed = 0;
        while let Poll::Ready(Some(())) = self.tasks.poll_next_unpin(&mut cx) {
            completed += 1;
        }
        completed
    }

    /// Wait until every task has completed.
    pub async fn drive(&mut self) -> usize {
        let mut completed = 0;
        while self.tasks.next().await.is_some() {
            completed += 1;
        }
        completed
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tasks = FuturesUnordered::new();
    }
}
