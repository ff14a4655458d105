//! Common test utilities for integration tests.
//!
//! Builds an engine over a small set of view tables whose controls are all
//! [`JournalControl`]s writing into one [`Journal`]:
//!
//! | Node handler | View types       | Default |
//! |--------------|------------------|---------|
//! | `folder`     | `grid`, `list`   | `grid`  |
//! | `leaf`       | `detail`         |         |
//! | `queue`      | `still`          |         |
//!
//! `grid` declares the sub-views `search` (top, permanent), `tree` (left,
//! splitter), `preview` (right, hidden, exclusive with `tree`) and `status`
//! (bottom). `detail` uses a control that is never cached and `still` never
//! animates.
//!
//! # Example
//!
//! ```ignore
//! let mut fx = FixtureBuilder::new().build();
//! fx.engine.navigate(folder("a"), ShowOptions::default()).unwrap();
//! assert_eq!(fx.journal.events(), vec!["show:grid", ...]);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::collections::HashMap;
use std::rc::Rc;

use multiview::actions::Action;
use multiview::config::MultiviewConfig;
use multiview::models::{NodeHandler, NodeRef, Placement, SubViewDecl, ViewHandler};
use multiview::registry::HandlerRegistry;
use multiview::Multiview;

pub const CONTROL_TYPES: [&str; 8] = [
    "Grid", "List", "Detail", "Search", "Tree", "Preview", "Status", "Still",
];

pub fn folder(key: &str) -> NodeRef {
    NodeRef::new("folder", key)
}

pub fn leaf(key: &str) -> NodeRef {
    NodeRef::new("leaf", key)
}

/// Config with animations on and no config file involved.
pub fn test_config() -> MultiviewConfig {
    MultiviewConfig {
        animations: true,
        ..MultiviewConfig::default()
    }
}

pub struct Fixture {
    pub engine: Multiview,
    pub host: RecordingHost,
    pub journal: Journal,
}

#[derive(Default)]
pub struct FixtureBuilder {
    config: Option<MultiviewConfig>,
    hooks: HashMap<String, ShowHook>,
    control_actions: HashMap<String, Vec<Action>>,
    view_actions: Vec<Action>,
    node_actions: Vec<Action>,
}

impl FixtureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: MultiviewConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Run `hook` at the end of `on_show` of every control of `control_type`.
    pub fn hook(mut self, control_type: &str, hook: ShowHook) -> Self {
        self.hooks.insert(control_type.to_string(), hook);
        self
    }

    pub fn control_actions(mut self, control_type: &str, actions: Vec<Action>) -> Self {
        self.control_actions.insert(control_type.to_string(), actions);
        self
    }

    /// Actions of the `grid` view handler.
    pub fn view_actions(mut self, actions: Vec<Action>) -> Self {
        self.view_actions = actions;
        self
    }

    /// Actions of the `folder` node handler.
    pub fn node_actions(mut self, actions: Vec<Action>) -> Self {
        self.node_actions = actions;
        self
    }

    pub fn registry(&self, journal: &Journal) -> HandlerRegistry {
        let mut grid = ViewHandler::new("grid", "Grid")
            .title("Grid")
            .sub_view(SubViewDecl::new("search", Placement::top()).permanent())
            .sub_view(SubViewDecl::new("tree", Placement::left().with_splitter()))
            .sub_view(
                SubViewDecl::new("preview", Placement::right().in_scroller())
                    .hidden()
                    .exclusive_with("tree"),
            )
            .sub_view(SubViewDecl::new("status", Placement::bottom()));
        for action in &self.view_actions {
            grid = grid.action(action.clone());
        }
        let mut folder = NodeHandler::new("folder", ["grid", "list"]).default_view("grid");
        for action in &self.node_actions {
            folder = folder.action(action.clone());
        }

        let mut builder = HandlerRegistry::builder()
            .view(grid)
            .view(
                ViewHandler::new("list", "List")
                    .title("List")
                    .sub_view(SubViewDecl::new("search", Placement::top()).permanent())
                    .sub_view(SubViewDecl::new("status", Placement::bottom())),
            )
            .view(
                ViewHandler::new("detail", "Detail")
                    .not_reusable()
                    .sub_view(SubViewDecl::new("status", Placement::bottom())),
            )
            .view(ViewHandler::new("still", "Still").no_animation())
            .view(ViewHandler::new("search", "Search").title("Search"))
            .view(ViewHandler::new("tree", "Tree").title("Tree"))
            .view(ViewHandler::new("preview", "Preview").title("Preview"))
            .view(ViewHandler::new("status", "Status").title("Status"))
            .node(folder)
            .node(NodeHandler::new("leaf", ["detail"]))
            .node(NodeHandler::new("queue", ["still"]));

        for control_type in CONTROL_TYPES {
            let journal = journal.clone();
            let hook = self.hooks.get(control_type).cloned();
            let actions = self
                .control_actions
                .get(control_type)
                .cloned()
                .unwrap_or_default();
            builder = builder.control(control_type, move || {
                let control = JournalControl::new(control_type, journal.clone()).with_actions(actions.clone());
                match &hook {
                    Some(hook) => control.with_show_hook(Rc::clone(hook)),
                    None => control,
                }
            });
        }
        builder.build().expect("test tables are valid")
    }

    pub fn build(self) -> Fixture {
        let journal = Journal::new();
        let host = RecordingHost::new();
        let registry = Rc::new(self.registry(&journal));
        let config = self.config.clone().unwrap_or_else(test_config);
        let engine = Multiview::new(registry, host.clone(), config);
        Fixture {
            engine,
            host,
            journal,
        }
    }
}
