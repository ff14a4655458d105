//! Data provider whose loads complete only when the test says so.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};

use crate::models::{DataItem, DataList, NodeRef};
use crate::traits::DataProvider;

type Reply = oneshot::Sender<Result<DataList, String>>;

#[derive(Debug)]
struct PendingLoad {
    path: String,
    source: String,
    reply: Reply,
}

#[derive(Debug, Clone, Default)]
pub struct ManualProvider {
    pending: Rc<RefCell<Vec<PendingLoad>>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl ManualProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads started so far, as `"<path>#<source>"`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Loads whose consumer is still waiting.
    pub fn pending(&self) -> usize {
        self.pending
            .borrow()
            .iter()
            .filter(|load| !load.reply.is_canceled())
            .count()
    }

    /// Resolve the oldest live load of `source` with `titles`. Returns
    /// `false` when no consumer is waiting for it.
    pub fn complete(&self, source: &str, titles: &[&str]) -> bool {
        let items = titles
            .iter()
            .enumerate()
            .map(|(i, title)| DataItem::new(i.to_string(), *title))
            .collect();
        self.resolve(source, Ok(DataList::new(items)))
    }

    pub fn fail(&self, source: &str, message: &str) -> bool {
        self.resolve(source, Err(message.to_string()))
    }

    fn resolve(&self, source: &str, result: Result<DataList, String>) -> bool {
        let mut pending = self.pending.borrow_mut();
        pending.retain(|load| !load.reply.is_canceled());
        let Some(index) = pending.iter().position(|load| load.source == source) else {
            return false;
        };
        let load = pending.remove(index);
        tracing::trace!("Resolving load {}#{}", load.path, load.source);
        load.reply.send(result).is_ok()
    }
}

impl DataProvider for ManualProvider {
    fn fetch(&self, node: &NodeRef, source: &str) -> LocalBoxFuture<'static, Result<DataList, String>> {
        let (reply, receiver) = oneshot::channel();
        self.requests
            .borrow_mut()
            .push(format!("{}#{}", node.path(), source));
        self.pending.borrow_mut().push(PendingLoad {
            path: node.path(),
            source: source.to_string(),
            reply,
        });
        async move {
            receiver
                .await
                .unwrap_or_else(|_| Err("load abandoned".to_string()))
        }
        .boxed_local()
    }
}
