//! Storing and restoring view and session state.

use super::{Multiview, NavigationTarget, ShowOptions};
use crate::error::{MultiviewResult, PersistError, StateError};
use crate::models::ViewDataId;
use crate::persist::{self, SessionState, ViewState, SESSION_KEY, SESSION_VERSION};
use crate::traits::SettingsStore;

impl Multiview {
    pub fn store_view_state(&self, id: ViewDataId) -> MultiviewResult<ViewState> {
        let data = self.history.get(id).ok_or(StateError::UnknownDescriptor(id))?;
        Ok(persist::store_state(
            data,
            self.composition.as_ref(),
            self.node_states.get(&data.node.handler),
        ))
    }

    /// Apply `state` to descriptor `id`. Live controls receive their state
    /// immediately; the hidden sub-view flags take effect on the next
    /// composition of that node handler.
    pub fn restore_view_state(&mut self, id: ViewDataId, state: &ViewState) -> MultiviewResult<usize> {
        let data = self
            .history
            .get_mut(id)
            .ok_or(StateError::UnknownDescriptor(id))?;
        let handler = data.node.handler.clone();
        let applied = persist::restore_state(data, state, self.composition.as_mut());
        let node_state = self.node_states.entry(handler).or_default();
        node_state.hidden_sub_views.extend(
            state
                .hidden_sub_views
                .iter()
                .map(|(view_type, hidden)| (view_type.clone(), *hidden)),
        );
        Ok(applied)
    }

    pub fn store_session(&self) -> SessionState {
        let mut session = SessionState::new(self.session_id);
        session.sidebar_state = self.sidebar_state.clone();
        session.splitter_state = self.splitter_defaults.clone();
        session.expanded_tree_nodes = self.expanded_tree_nodes.clone();
        session.node_states = self.node_states.clone();
        session.current = self.history.current_index();
        session.history = self
            .history
            .iter()
            .map(|data| {
                persist::store_state(
                    data,
                    self.composition.as_ref(),
                    self.node_states.get(&data.node.handler),
                )
            })
            .collect();
        session
    }

    /// Replace the navigation session with `session` and queue its current
    /// entry for display. Entries beyond the history limit are dropped
    /// oldest first.
    pub fn restore_session(&mut self, session: SessionState) -> MultiviewResult<Option<ViewDataId>> {
        if session.version > SESSION_VERSION {
            return Err(PersistError::UnsupportedVersion {
                found: session.version,
                supported: SESSION_VERSION,
            }
            .into());
        }

        self.hide_active();
        self.history.clear();
        self.node_states = session.node_states;
        self.splitter_defaults = session.splitter_state;
        self.sidebar_state = session.sidebar_state;
        self.expanded_tree_nodes = session.expanded_tree_nodes;

        let skip = session.history.len().saturating_sub(self.history.limit());
        let mut ids = Vec::with_capacity(session.history.len() - skip);
        for state in session.history.iter().skip(skip) {
            let data = self.history.push_restored(state.node.clone());
            data.controls_state = state.controls.clone();
            data.splitters = state.splitters.clone();
            data.current_view_type = state.view_type.clone();
            ids.push(data.id());
        }

        let current = session
            .current
            .and_then(|index| index.checked_sub(skip))
            .and_then(|index| ids.get(index).copied())
            .or_else(|| ids.last().copied());
        tracing::info!(
            "Restored {} history entries from session {}",
            ids.len(),
            session.session_id
        );

        let Some(current) = current else {
            return Ok(None);
        };
        self.history.select(current);
        self.request(NavigationTarget::Descriptor(current), ShowOptions::programmatic());
        Ok(Some(current))
    }

    pub fn save_session(&self, store: &dyn SettingsStore) -> MultiviewResult<()> {
        let session = self.store_session();
        let value = serde_json::to_value(&session)?;
        store.save(SESSION_KEY, &value)?;
        tracing::debug!("Saved session with {} history entries", session.history.len());
        Ok(())
    }

    /// Restore the stored session. Returns `Ok(None)` when nothing was saved.
    pub fn load_session(&mut self, store: &dyn SettingsStore) -> MultiviewResult<Option<ViewDataId>> {
        let Some(value) = store.load(SESSION_KEY)? else {
            tracing::debug!("No saved session");
            return Ok(None);
        };
        let session: SessionState = serde_json::from_value(value)?;
        self.restore_session(session)
    }
}
