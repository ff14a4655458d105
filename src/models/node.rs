//! Navigation tree nodes and their handlers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::actions::Action;

/// Opaque reference to a navigation tree node.
///
/// `handler` names the [`NodeHandler`] responsible for the node type and
/// `key` identifies the node within that handler (an album id, an artist
/// name, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
    pub handler: String,
    pub key: String,
    #[serde(default)]
    pub title: String,
}

impl NodeRef {
    pub fn new(handler: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            handler: handler.into(),
            key: key.into(),
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Stable navigation path for this node, used for history deduplication.
    pub fn path(&self) -> String {
        if self.key.is_empty() {
            self.handler.clone()
        } else {
            format!("{}/{}", self.handler, self.key)
        }
    }
}

/// Configuration for one navigation-tree node type.
#[derive(Debug, Clone)]
pub struct NodeHandler {
    pub id: String,
    /// View type ids this node can be rendered with, in menu order.
    pub view_types: Vec<String>,
    /// Preferred view type when nothing was chosen before.
    pub default_view: Option<String>,
    pub actions: Vec<Action>,
}

impl NodeHandler {
    pub fn new<I, S>(id: impl Into<String>, view_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            view_types: view_types.into_iter().map(Into::into).collect(),
            default_view: None,
            actions: Vec::new(),
        }
    }

    pub fn default_view(mut self, view_type: impl Into<String>) -> Self {
        self.default_view = Some(view_type.into());
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn offers(&self, view_type: &str) -> bool {
        self.view_types.iter().any(|v| v == view_type)
    }
}

/// Persisted per-node-handler UI state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeHandlerState {
    /// Sub-view id -> hidden. Absent entries fall back to the declaration.
    #[serde(default)]
    pub hidden_sub_views: BTreeMap<String, bool>,
    /// Last view type the user picked for this node type.
    #[serde(default)]
    pub last_view_type: Option<String>,
    /// Sub-views the user explicitly showed, most recent first. These win
    /// mutual-exclusion conflicts against their siblings.
    #[serde(default)]
    pub shown_sub_views: Vec<String>,
}

impl NodeHandlerState {
    /// Record that the user showed or hid `view_type`.
    pub fn set_sub_view_hidden(&mut self, view_type: &str, hidden: bool) {
        self.hidden_sub_views.insert(view_type.to_string(), hidden);
        self.shown_sub_views.retain(|shown| shown != view_type);
        if !hidden {
            self.shown_sub_views.insert(0, view_type.to_string());
        }
    }
}
