//! View descriptors: "where the user is" plus the state cached for it.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::node::NodeRef;
use crate::scope::ViewScope;

/// Serialized UI state per control slot (scroll position, selection, ...).
pub type ControlsState = BTreeMap<String, serde_json::Value>;

/// Identity of a descriptor within one session's navigation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewDataId(pub(crate) u64);

impl fmt::Display for ViewDataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Composition state of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewLifecycle {
    #[default]
    Inactive,
    Composing,
    Active,
    Hiding,
}

/// One row of a data list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataItem {
    pub key: String,
    pub title: String,
}

impl DataItem {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}

/// A loaded data list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataList {
    pub items: Vec<DataItem>,
}

impl DataList {
    pub fn new(items: Vec<DataItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Load state of a named data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Loading,
    Ready(DataList),
    Failed(String),
}

impl DataSource {
    pub fn is_loading(&self) -> bool {
        matches!(self, DataSource::Loading)
    }

    pub fn list(&self) -> Option<&DataList> {
        match self {
            DataSource::Ready(list) => Some(list),
            _ => None,
        }
    }
}

/// Shared handle to a data source; loads fill it in place.
pub type DataSourceHandle = Rc<RefCell<DataSource>>;

/// Descriptor of a navigable position (`ViewData`).
///
/// Owned by [`NavigationHistory`](crate::history::NavigationHistory); the
/// engine refers to the active one by [`ViewDataId`].
#[derive(Debug)]
pub struct ViewData {
    id: ViewDataId,
    pub node: NodeRef,
    pub path: String,
    pub current_view_type: Option<String>,
    pub data_sources: HashMap<String, DataSourceHandle>,
    pub controls_state: ControlsState,
    /// Splitter sizes by slot name.
    pub splitters: BTreeMap<String, f32>,
    /// Free-form extension bag for collaborators.
    pub tag: HashMap<String, serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub(crate) lifecycle: ViewLifecycle,
    pub(crate) scope: ViewScope,
}

impl ViewData {
    pub(crate) fn new(id: ViewDataId, node: NodeRef) -> Self {
        let path = node.path();
        Self {
            id,
            node,
            path,
            current_view_type: None,
            data_sources: HashMap::new(),
            controls_state: ControlsState::new(),
            splitters: BTreeMap::new(),
            tag: HashMap::new(),
            created_at: Utc::now(),
            lifecycle: ViewLifecycle::Inactive,
            scope: ViewScope::new(),
        }
    }

    pub fn id(&self) -> ViewDataId {
        self.id
    }

    pub fn lifecycle(&self) -> ViewLifecycle {
        self.lifecycle
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == ViewLifecycle::Active
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn scope_mut(&mut self) -> &mut ViewScope {
        &mut self.scope
    }

    pub fn data_source(&self, name: &str) -> Option<DataSourceHandle> {
        self.data_sources.get(name).cloned()
    }

    /// Cancel all tracked work and forget sources whose load never finished,
    /// so entering the view again starts a fresh load.
    pub(crate) fn release(&mut self) -> usize {
        let cancelled = self.scope.release();
        self.data_sources
            .retain(|_, source| !source.borrow().is_loading());
        cancelled
    }
}
