//! Serializable view and session state.
//!
//! [`ViewState`] is what a single descriptor persists: the view type it was
//! rendered with, per-slot control state, splitter sizes and the hidden
//! sub-view flags of its node handler. [`SessionState`] bundles the whole
//! navigation session for the [`SettingsStore`](crate::traits::SettingsStore).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::Composition;
use crate::models::{ControlsState, NodeHandlerState, NodeRef, ViewData};

/// Settings key the session is stored under.
pub const SESSION_KEY: &str = "multiview.session";

/// Newest session layout this build understands.
pub const SESSION_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub node: NodeRef,
    #[serde(default)]
    pub view_type: Option<String>,
    #[serde(default)]
    pub controls: ControlsState,
    #[serde(default)]
    pub splitters: BTreeMap<String, f32>,
    #[serde(default)]
    pub hidden_sub_views: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub version: u32,
    pub session_id: Uuid,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub sidebar_state: serde_json::Value,
    /// Session-wide splitter sizes by slot.
    #[serde(default)]
    pub splitter_state: BTreeMap<String, f32>,
    #[serde(default)]
    pub history: Vec<ViewState>,
    #[serde(default)]
    pub current: Option<usize>,
    #[serde(default)]
    pub expanded_tree_nodes: Vec<String>,
    #[serde(default)]
    pub node_states: BTreeMap<String, NodeHandlerState>,
}

impl SessionState {
    pub fn new(session_id: Uuid) -> Self {
        Self {
            version: SESSION_VERSION,
            session_id,
            saved_at: Utc::now(),
            sidebar_state: serde_json::Value::Null,
            splitter_state: BTreeMap::new(),
            history: Vec::new(),
            current: None,
            expanded_tree_nodes: Vec::new(),
            node_states: BTreeMap::new(),
        }
    }

    pub fn current_view(&self) -> Option<&ViewState> {
        self.current.and_then(|index| self.history.get(index))
    }
}

/// Snapshot `data`. When `live` is its active composition, the controls'
/// current state wins over what the descriptor stored when last hidden.
pub fn store_state(data: &ViewData, live: Option<&Composition>, node_state: Option<&NodeHandlerState>) -> ViewState {
    let mut controls = data.controls_state.clone();
    let mut splitters = data.splitters.clone();

    if let Some(composition) = live.filter(|c| c.view_data() == data.id()) {
        for used in composition.controls() {
            if let Some(state) = used.control().store_state() {
                controls.insert(used.slot().to_string(), state);
            }
            if let Some(size) = used.splitter() {
                splitters.insert(used.slot().to_string(), size);
            }
        }
    }

    ViewState {
        node: data.node.clone(),
        view_type: data.current_view_type.clone(),
        controls,
        splitters,
        hidden_sub_views: node_state
            .map(|state| state.hidden_sub_views.clone())
            .unwrap_or_default(),
    }
}

/// Write `state` into `data`, and into `live` when it is the descriptor's
/// active composition. Slots missing from the composition are skipped.
///
/// Returns the number of live controls that received state.
pub fn restore_state(data: &mut ViewData, state: &ViewState, live: Option<&mut Composition>) -> usize {
    data.controls_state = state.controls.clone();
    data.splitters = state.splitters.clone();
    if state.view_type.is_some() {
        data.current_view_type = state.view_type.clone();
    }

    let Some(composition) = live.filter(|c| c.view_data() == data.id()) else {
        return 0;
    };
    let mut applied = 0;
    for used in composition.controls_mut() {
        if let Some(value) = state.controls.get(used.slot()) {
            used.control_mut().restore_state(value);
            applied += 1;
        }
        if used.splitter.is_some() {
            if let Some(size) = state.splitters.get(used.slot()) {
                used.splitter = Some(*size);
            }
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_state_ignores_missing_fields() {
        let json = r#"{"node": {"handler": "album", "key": "7"}}"#;
        let state: ViewState = serde_json::from_str(json).unwrap();

        assert_eq!(state.node, NodeRef::new("album", "7"));
        assert!(state.view_type.is_none());
        assert!(state.controls.is_empty());
    }

    #[test]
    fn test_session_state_defaults() {
        let id = Uuid::new_v4();
        let json = format!(
            r#"{{"version": 1, "session_id": "{}", "saved_at": "2024-05-01T10:00:00Z"}}"#,
            id
        );
        let state: SessionState = serde_json::from_str(&json).unwrap();

        assert_eq!(state.session_id, id);
        assert!(state.history.is_empty());
        assert!(state.current_view().is_none());
        assert!(state.sidebar_state.is_null());
    }
}
