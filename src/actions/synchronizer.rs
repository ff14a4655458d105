//! Keeps the contextual action list in step with focus and the active view.

use std::collections::HashSet;
use std::task::{Context, Poll};

use futures::future::LocalBoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};

use super::{Action, ActionKind, Predicate, SUB_VIEW_ACTION_PREFIX, VIEW_ACTION_PREFIX};

/// Where an action in the merged list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSource {
    Control,
    View,
    Node,
    ViewSwitch,
    SubViewToggle,
}

/// A view type offered by the node, for the synthesized switch actions.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchOption {
    pub view_type: String,
    pub title: String,
    pub current: bool,
}

/// A toggleable sub-view of the active view.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOption {
    pub view_type: String,
    pub title: String,
    pub visible: bool,
}

/// Everything the action list is computed from.
#[derive(Debug, Default)]
pub struct ActionInput<'a> {
    pub focused: Vec<Action>,
    pub view: &'a [Action],
    pub node: &'a [Action],
    pub switches: Vec<SwitchOption>,
    pub toggles: Vec<ToggleOption>,
}

/// Resolved state of one action as the toolbar should show it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextAction {
    pub id: String,
    pub title: String,
    pub source: ActionSource,
    pub visible: bool,
    pub enabled: bool,
    pub checked: Option<bool>,
    /// Asynchronous predicates still outstanding.
    pub pending: u8,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Visible,
    Enabled,
}

struct Outcome {
    generation: u64,
    index: usize,
    field: Field,
    value: bool,
}

#[derive(Default)]
pub struct ActionSynchronizer {
    generation: u64,
    actions: Vec<Action>,
    entries: Vec<ContextAction>,
    pending: FuturesUnordered<LocalBoxFuture<'static, Outcome>>,
}

impl std::fmt::Debug for ActionSynchronizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionSynchronizer")
            .field("generation", &self.generation)
            .field("entries", &self.entries)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl ActionSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the list. Synchronous predicates are evaluated now; async ones
    /// leave the action shown and enabled until they resolve.
    pub fn recompute(&mut self, input: ActionInput<'_>) -> usize {
        self.generation += 1;
        self.pending = FuturesUnordered::new();

        let mut merged: Vec<(Action, ActionSource)> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut add = |action: Action, source: ActionSource, merged: &mut Vec<_>| {
            if seen.insert(action.id.clone()) {
                merged.push((action, source));
            }
        };

        for action in input.focused {
            add(action, ActionSource::Control, &mut merged);
        }
        for action in input.view.iter().cloned() {
            add(action, ActionSource::View, &mut merged);
        }
        for action in input.node.iter().cloned() {
            add(action, ActionSource::Node, &mut merged);
        }
        if input.switches.len() > 1 {
            for option in input.switches {
                let action = Action::with_kind(
                    format!("{}{}", VIEW_ACTION_PREFIX, option.view_type),
                    option.title,
                    ActionKind::SwitchViewType(option.view_type),
                )
                .checked(option.current);
                add(action, ActionSource::ViewSwitch, &mut merged);
            }
        }
        for option in input.toggles {
            let action = Action::with_kind(
                format!("{}{}", SUB_VIEW_ACTION_PREFIX, option.view_type),
                option.title,
                ActionKind::ToggleSubView(option.view_type),
            )
            .checked(option.visible);
            add(action, ActionSource::SubViewToggle, &mut merged);
        }

        self.entries = Vec::with_capacity(merged.len());
        self.actions = Vec::with_capacity(merged.len());
        for (index, (action, source)) in merged.into_iter().enumerate() {
            let mut entry = ContextAction {
                id: action.id.clone(),
                title: action.title.clone(),
                source,
                visible: true,
                enabled: true,
                checked: action.checked,
                pending: 0,
            };
            entry.visible = self.evaluate(&action.visible, index, Field::Visible, &mut entry.pending);
            entry.enabled = self.evaluate(&action.enabled, index, Field::Enabled, &mut entry.pending);
            self.entries.push(entry);
            self.actions.push(action);
        }

        tracing::trace!(
            "Recomputed {} contextual action(s), {} pending",
            self.entries.len(),
            self.pending.len()
        );
        self.entries.len()
    }

    fn evaluate(&mut self, predicate: &Predicate, index: usize, field: Field, pending: &mut u8) -> bool {
        match predicate {
            Predicate::Always => true,
            Predicate::Never => false,
            Predicate::Sync(f) => f(),
            Predicate::Async(f) => {
                let future = f();
                let generation = self.generation;
                self.pending.push(Box::pin(async move {
                    Outcome {
                        generation,
                        index,
                        field,
                        value: future.await,
                    }
                }));
                *pending += 1;
                true
            }
        }
    }

    fn apply(&mut self, outcome: Outcome) -> bool {
        if outcome.generation != self.generation {
            return false;
        }
        let Some(entry) = self.entries.get_mut(outcome.index) else {
            return false;
        };
        match outcome.field {
            Field::Visible => entry.visible = outcome.value,
            Field::Enabled => entry.enabled = outcome.value,
        }
        entry.pending = entry.pending.saturating_sub(1);
        true
    }

    /// Apply every async predicate that has resolved, without waiting.
    pub fn reconcile(&mut self) -> usize {
        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut applied = 0;
        while let Poll::Ready(Some(outcome)) = self.pending.poll_next_unpin(&mut cx) {
            if self.apply(outcome) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for every outstanding async predicate.
    pub async fn settle(&mut self) -> usize {
        let mut applied = 0;
        while let Some(outcome) = self.pending.next().await {
            if self.apply(outcome) {
                applied += 1;
            }
        }
        applied
    }

    pub fn entries(&self) -> &[ContextAction] {
        &self.entries
    }

    pub fn visible(&self) -> impl Iterator<Item = &ContextAction> {
        self.entries.iter().filter(|entry| entry.visible)
    }

    pub fn get(&self, id: &str) -> Option<&ContextAction> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn action(&self, id: &str) -> Option<&Action> {
        self.actions.iter().find(|action| action.id == id)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::FutureExt;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn noop(id: &str) -> Action {
        Action::command(id, id, || {})
    }

    #[test]
    fn test_union_prefers_control_actions() {
        let mut sync = ActionSynchronizer::new();
        let view = vec![noop("play"), noop("shuffle")];
        let node = vec![noop("play"), noop("properties")];
        sync.recompute(ActionInput {
            focused: vec![noop("play")],
            view: &view,
            node: &node,
            ..Default::default()
        });

        let ids: Vec<_> = sync.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["play", "shuffle", "properties"]);
        assert_eq!(sync.get("play").map(|e| e.source), Some(ActionSource::Control));
    }

    #[test]
    fn test_switch_actions_need_two_view_types() {
        let mut sync = ActionSynchronizer::new();
        sync.recompute(ActionInput {
            switches: vec![SwitchOption {
                view_type: "albumGrid".into(),
                title: "Grid".into(),
                current: true,
            }],
            ..Default::default()
        });
        assert!(sync.entries().is_empty());

        sync.recompute(ActionInput {
            switches: vec![
                SwitchOption {
                    view_type: "albumGrid".into(),
                    title: "Grid".into(),
                    current: true,
                },
                SwitchOption {
                    view_type: "albumList".into(),
                    title: "List".into(),
                    current: false,
                },
            ],
            toggles: vec![ToggleOption {
                view_type: "previewPanel".into(),
                title: "Preview".into(),
                visible: false,
            }],
            ..Default::default()
        });
        assert_eq!(sync.get("view:albumGrid").and_then(|e| e.checked), Some(true));
        assert_eq!(sync.get("subview:previewPanel").and_then(|e| e.checked), Some(false));
    }

    #[test]
    fn test_async_predicate_shows_optimistically_then_reconciles() {
        let (tx, rx) = oneshot::channel::<bool>();
        let rx = Rc::new(RefCell::new(Some(rx)));
        let action = noop("burn").visible_when(Predicate::future(move || {
            let rx = rx.borrow_mut().take();
            async move {
                match rx {
                    Some(rx) => rx.await.unwrap_or(false),
                    None => false,
                }
            }
            .boxed_local()
        }));

        let mut sync = ActionSynchronizer::new();
        let view = vec![action];
        sync.recompute(ActionInput {
            view: &view,
            ..Default::default()
        });

        assert!(sync.get("burn").is_some_and(|e| e.visible && e.pending == 1));
        assert_eq!(sync.reconcile(), 0);

        tx.send(false).unwrap();
        assert_eq!(sync.reconcile(), 1);
        assert!(sync.get("burn").is_some_and(|e| !e.visible && e.pending == 0));
    }

    #[test]
    fn test_stale_async_result_is_discarded() {
        let mut sync = ActionSynchronizer::new();
        let view = vec![noop("eject").enabled_when(Predicate::future(|| {
            async { false }.boxed_local()
        }))];
        sync.recompute(ActionInput {
            view: &view,
            ..Default::default()
        });
        sync.recompute(ActionInput::default());

        assert_eq!(sync.reconcile(), 0);
        assert!(sync.entries().is_empty());
    }

    #[test]
    fn test_sync_predicates_evaluated_immediately() {
        let mut sync = ActionSynchronizer::new();
        let view = vec![
            noop("hidden").visible_when(Predicate::Never),
            noop("disabled").enabled_when(Predicate::sync(|| false)),
        ];
        sync.recompute(ActionInput {
            view: &view,
            ..Default::default()
        });

        assert_eq!(sync.visible().count(), 1);
        assert!(sync.get("disabled").is_some_and(|e| !e.enabled));
    }
}
