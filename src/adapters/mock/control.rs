//! Control that journals its lifecycle.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::actions::Action;
use crate::traits::{Composable, HideContext, ShowContext};

#[derive(Debug, Default)]
struct JournalInner {
    events: Vec<String>,
    states: HashMap<String, serde_json::Value>,
}

/// Shared log of hook calls, written as `"<hook>:<slot>"`.
///
/// Also holds the layout state each slot reports from `store_state`.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    inner: Rc<RefCell<JournalInner>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: impl Into<String>) {
        self.inner.borrow_mut().events.push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.inner.borrow().events.clone()
    }

    /// Events starting with `prefix`.
    pub fn matching(&self, prefix: &str) -> Vec<String> {
        self.inner
            .borrow()
            .events
            .iter()
            .filter(|event| event.starts_with(prefix))
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().events.clear();
    }

    pub fn set_state(&self, slot: &str, state: serde_json::Value) {
        self.inner
            .borrow_mut()
            .states
            .insert(slot.to_string(), state);
    }

    pub fn state(&self, slot: &str) -> Option<serde_json::Value> {
        self.inner.borrow().states.get(slot).cloned()
    }
}

pub type ShowHook = Rc<dyn Fn(&mut ShowContext<'_>)>;

pub struct JournalControl {
    control_type: String,
    journal: Journal,
    slot: Option<String>,
    on_show: Option<ShowHook>,
    actions: Vec<Action>,
}

impl std::fmt::Debug for JournalControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JournalControl")
            .field("control_type", &self.control_type)
            .field("slot", &self.slot)
            .finish()
    }
}

impl JournalControl {
    pub fn new(control_type: impl Into<String>, journal: Journal) -> Self {
        Self {
            control_type: control_type.into(),
            journal,
            slot: None,
            on_show: None,
            actions: Vec::new(),
        }
    }

    /// Run `hook` at the end of every `on_show`.
    pub fn with_show_hook(mut self, hook: ShowHook) -> Self {
        self.on_show = Some(hook);
        self
    }

    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }
}

impl Composable for JournalControl {
    fn control_type(&self) -> &str {
        &self.control_type
    }

    fn on_show(&mut self, ctx: &mut ShowContext<'_>) {
        let hook = if ctx.is_data_only() {
            "prepare"
        } else if ctx.is_single_sub_view_change() {
            "toggle"
        } else {
            "show"
        };
        self.journal.record(format!("{}:{}", hook, ctx.slot()));
        self.slot = Some(ctx.slot().to_string());
        if let Some(on_show) = self.on_show.clone() {
            on_show(ctx);
        }
    }

    fn on_hide(&mut self, ctx: &mut HideContext<'_>) {
        self.journal.record(format!("hide:{}", ctx.slot()));
    }

    fn store_state(&self) -> Option<serde_json::Value> {
        self.slot.as_deref().and_then(|slot| self.journal.state(slot))
    }

    fn restore_state(&mut self, state: &serde_json::Value) {
        if let Some(slot) = self.slot.clone() {
            self.journal.record(format!("restore:{}", slot));
            self.journal.set_state(&slot, state.clone());
        }
    }

    fn actions(&self) -> Vec<Action> {
        self.actions.clone()
    }

    fn destroy(&mut self) {
        self.journal.record(format!("destroy:{}", self.control_type));
    }
}
