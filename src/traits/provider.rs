//! Data access used by controls. The media database sits behind this.

use futures::future::LocalBoxFuture;

use crate::models::{DataList, NodeRef};

pub trait DataProvider {
    /// Load the named data list for `node`.
    fn fetch(&self, node: &NodeRef, source: &str) -> LocalBoxFuture<'static, Result<DataList, String>>;

    /// Display title of a node.
    fn resolve_title(&self, node: &NodeRef) -> String {
        if node.title.is_empty() {
            node.key.clone()
        } else {
            node.title.clone()
        }
    }
}
