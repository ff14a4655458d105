//! Contextual actions (toolbar buttons, context menu entries).

mod synchronizer;

use std::fmt;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

pub use synchronizer::{
    ActionInput, ActionSource, ActionSynchronizer, ContextAction, SwitchOption, ToggleOption,
};

/// Prefix of synthesized "switch view type" action ids.
pub const VIEW_ACTION_PREFIX: &str = "view:";
/// Prefix of synthesized "toggle sub-view" action ids.
pub const SUB_VIEW_ACTION_PREFIX: &str = "subview:";

/// Visibility or enabled-state predicate of an action.
#[derive(Clone, Default)]
pub enum Predicate {
    #[default]
    Always,
    Never,
    Sync(Rc<dyn Fn() -> bool>),
    /// Resolved later; the action is shown optimistically meanwhile.
    Async(Rc<dyn Fn() -> LocalBoxFuture<'static, bool>>),
}

impl Predicate {
    pub fn sync(f: impl Fn() -> bool + 'static) -> Self {
        Predicate::Sync(Rc::new(f))
    }

    pub fn future(f: impl Fn() -> LocalBoxFuture<'static, bool> + 'static) -> Self {
        Predicate::Async(Rc::new(f))
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Always => write!(f, "Always"),
            Predicate::Never => write!(f, "Never"),
            Predicate::Sync(_) => write!(f, "Sync(..)"),
            Predicate::Async(_) => write!(f, "Async(..)"),
        }
    }
}

/// What invoking an action does.
#[derive(Clone)]
pub enum ActionKind {
    Command(Rc<dyn Fn()>),
    SwitchViewType(String),
    ToggleSubView(String),
}

impl fmt::Debug for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Command(_) => write!(f, "Command(..)"),
            ActionKind::SwitchViewType(id) => f.debug_tuple("SwitchViewType").field(id).finish(),
            ActionKind::ToggleSubView(id) => f.debug_tuple("ToggleSubView").field(id).finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Action {
    pub id: String,
    pub title: String,
    pub kind: ActionKind,
    pub visible: Predicate,
    pub enabled: Predicate,
    pub checked: Option<bool>,
}

impl Action {
    pub fn command(
        id: impl Into<String>,
        title: impl Into<String>,
        execute: impl Fn() + 'static,
    ) -> Self {
        Self::with_kind(id, title, ActionKind::Command(Rc::new(execute)))
    }

    pub fn with_kind(id: impl Into<String>, title: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            visible: Predicate::Always,
            enabled: Predicate::Always,
            checked: None,
        }
    }

    pub fn visible_when(mut self, predicate: Predicate) -> Self {
        self.visible = predicate;
        self
    }

    pub fn enabled_when(mut self, predicate: Predicate) -> Self {
        self.enabled = predicate;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }
}
