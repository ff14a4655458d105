//! The set of live controls making up the active view.

use std::rc::Rc;

use crate::cache::ControlInstance;
use crate::models::{NodeHandlerState, Placement, Position, SubViewDecl, ViewDataId, ViewHandler};
use crate::traits::{Composable, InstanceId, SlotSpec};

/// Splitter size used when neither the descriptor nor the session knows one.
pub const DEFAULT_SPLITTER_SIZE: f32 = 0.25;

/// A control placed in the active composition.
#[derive(Debug)]
pub struct UsedControl {
    pub(crate) instance: ControlInstance,
    pub(crate) handler: Rc<ViewHandler>,
    pub(crate) is_main: bool,
    pub(crate) placement: Option<Placement>,
    /// Index into the main handler's sub-view declarations.
    pub(crate) decl_index: Option<usize>,
    pub(crate) splitter: Option<f32>,
}

impl UsedControl {
    pub(crate) fn main(instance: ControlInstance, handler: Rc<ViewHandler>) -> Self {
        Self {
            instance,
            handler,
            is_main: true,
            placement: None,
            decl_index: None,
            splitter: None,
        }
    }

    pub(crate) fn sub(
        instance: ControlInstance,
        handler: Rc<ViewHandler>,
        decl: &SubViewDecl,
        decl_index: usize,
        splitter: Option<f32>,
    ) -> Self {
        Self {
            instance,
            handler,
            is_main: false,
            placement: Some(decl.placement),
            decl_index: Some(decl_index),
            splitter,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.instance.id
    }

    /// Slot name: the view type this control renders.
    pub fn slot(&self) -> &str {
        &self.handler.id
    }

    pub fn handler(&self) -> &Rc<ViewHandler> {
        &self.handler
    }

    pub fn is_main(&self) -> bool {
        self.is_main
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn splitter(&self) -> Option<f32> {
        self.splitter
    }

    pub fn control(&self) -> &dyn Composable {
        self.instance.control.as_ref()
    }

    pub fn control_mut(&mut self) -> &mut dyn Composable {
        self.instance.control.as_mut()
    }

    /// Key under which the instance is cached.
    pub(crate) fn cache_key(&self) -> &str {
        &self.handler.main_control_type
    }

    pub(crate) fn slot_spec(&self, index: usize) -> SlotSpec<'_> {
        SlotSpec {
            name: self.slot(),
            placement: self.placement,
            index,
            splitter: self.splitter,
        }
    }
}

/// Controls sharing one `(position, in_scroller)` container.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotGroup {
    pub position: Position,
    pub in_scroller: bool,
    pub slots: Vec<String>,
}

#[derive(Debug)]
pub struct Composition {
    pub(crate) view_data: ViewDataId,
    pub(crate) handler: Rc<ViewHandler>,
    /// Main control first, then sub-controls in declared order.
    pub(crate) controls: Vec<UsedControl>,
}

impl Composition {
    pub(crate) fn new(view_data: ViewDataId, handler: Rc<ViewHandler>, controls: Vec<UsedControl>) -> Self {
        Self {
            view_data,
            handler,
            controls,
        }
    }

    pub fn view_data(&self) -> ViewDataId {
        self.view_data
    }

    pub fn handler(&self) -> &Rc<ViewHandler> {
        &self.handler
    }

    pub fn view_type(&self) -> &str {
        &self.handler.id
    }

    pub fn controls(&self) -> &[UsedControl] {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut [UsedControl] {
        &mut self.controls
    }

    pub fn main_index(&self) -> usize {
        self.controls.iter().position(|c| c.is_main).unwrap_or(0)
    }

    pub fn main(&self) -> Option<&UsedControl> {
        self.controls.iter().find(|c| c.is_main)
    }

    pub fn find(&self, slot: &str) -> Option<&UsedControl> {
        self.controls.iter().find(|c| c.slot() == slot)
    }

    pub fn find_instance(&self, id: InstanceId) -> Option<&UsedControl> {
        self.controls.iter().find(|c| c.id() == id)
    }

    pub fn slots(&self) -> Vec<&str> {
        self.controls.iter().map(UsedControl::slot).collect()
    }

    pub fn instance_ids(&self) -> Vec<InstanceId> {
        self.controls.iter().map(UsedControl::id).collect()
    }

    /// Declaration indices of the sub-views currently shown.
    pub(crate) fn visible_decls(&self) -> Vec<usize> {
        self.controls.iter().filter_map(|c| c.decl_index).collect()
    }

    pub(crate) fn position_of_decl(&self, decl_index: usize) -> Option<usize> {
        self.controls
            .iter()
            .position(|c| c.decl_index == Some(decl_index))
    }

    /// Where a sub-view with `decl_index` goes so that declared order holds.
    pub(crate) fn insertion_index(&self, decl_index: usize) -> usize {
        self.controls
            .iter()
            .position(|c| matches!(c.decl_index, Some(other) if other > decl_index))
            .unwrap_or(self.controls.len())
    }

    /// Sub-controls grouped by container, in declared order.
    pub fn layout(&self) -> Vec<SlotGroup> {
        let mut groups: Vec<SlotGroup> = Vec::new();
        for control in &self.controls {
            let Some(placement) = control.placement else {
                continue;
            };
            match groups
                .iter_mut()
                .find(|g| g.position == placement.position && g.in_scroller == placement.in_scroller)
            {
                Some(group) => group.slots.push(control.slot().to_string()),
                None => groups.push(SlotGroup {
                    position: placement.position,
                    in_scroller: placement.in_scroller,
                    slots: vec![control.slot().to_string()],
                }),
            }
        }
        groups
    }
}

fn is_hidden(state: &NodeHandlerState, decl: &SubViewDecl) -> bool {
    state
        .hidden_sub_views
        .get(&decl.view_type)
        .copied()
        .unwrap_or(decl.hidden_by_default)
}

fn excludes(a: &SubViewDecl, b: &SubViewDecl) -> bool {
    a.mutual_exclusive_with.contains(&b.view_type) || b.mutual_exclusive_with.contains(&a.view_type)
}

/// Sub-views of `handler` that should be visible, by declaration index.
///
/// Permanent sub-views are always included. A non-permanent sub-view is
/// included unless the node handler's state (or its default) hides it, or a
/// sub-view that takes precedence excludes it. Sub-views the user showed
/// take precedence most recent first; the rest go by declaration order.
pub(crate) fn plan_visible_sub_views(handler: &ViewHandler, state: &NodeHandlerState) -> Vec<usize> {
    let declared = &handler.sub_views;
    let permanent = declared
        .iter()
        .enumerate()
        .filter(|(_, decl)| decl.permanent)
        .map(|(index, _)| index);
    let shown = state
        .shown_sub_views
        .iter()
        .filter_map(|view_type| declared.iter().position(|decl| &decl.view_type == view_type));
    let candidates = permanent.chain(shown).chain(0..declared.len());

    let mut visible: Vec<usize> = Vec::new();
    for index in candidates {
        let decl = &declared[index];
        if visible.contains(&index) {
            continue;
        }
        if !decl.permanent
            && (is_hidden(state, decl) || visible.iter().any(|&other| excludes(&declared[other], decl)))
        {
            continue;
        }
        visible.push(index);
    }
    visible.sort_unstable();
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> ViewHandler {
        ViewHandler::new("albumGrid", "ItemList")
            .sub_view(SubViewDecl::new("filterBar", Placement::top()).permanent())
            .sub_view(SubViewDecl::new("columnBrowser", Placement::top().in_scroller()))
            .sub_view(
                SubViewDecl::new("previewPanel", Placement::right().with_splitter())
                    .hidden()
                    .exclusive_with("columnBrowser"),
            )
            .sub_view(SubViewDecl::new("statusBar", Placement::bottom()))
    }

    #[test]
    fn test_plan_uses_defaults() {
        let plan = plan_visible_sub_views(&handler(), &NodeHandlerState::default());
        assert_eq!(plan, vec![0, 1, 3]);
    }

    #[test]
    fn test_plan_follows_node_state() {
        let mut state = NodeHandlerState::default();
        state.hidden_sub_views.insert("statusBar".into(), true);
        state.hidden_sub_views.insert("filterBar".into(), true);

        let plan = plan_visible_sub_views(&handler(), &state);
        assert_eq!(plan, vec![0, 1], "permanent sub-views ignore hidden flags");
    }

    #[test]
    fn test_plan_honors_mutual_exclusion() {
        let mut state = NodeHandlerState::default();
        state.hidden_sub_views.insert("previewPanel".into(), false);

        let plan = plan_visible_sub_views(&handler(), &state);
        assert_eq!(plan, vec![0, 1, 3], "earlier declared sub-view wins");

        state.hidden_sub_views.insert("columnBrowser".into(), true);
        let plan = plan_visible_sub_views(&handler(), &state);
        assert_eq!(plan, vec![0, 2, 3]);
    }

    #[test]
    fn test_last_shown_sub_view_wins_exclusion() {
        let mut state = NodeHandlerState::default();
        state.set_sub_view_hidden("previewPanel", false);

        let plan = plan_visible_sub_views(&handler(), &state);
        assert_eq!(plan, vec![0, 2, 3]);

        state.set_sub_view_hidden("columnBrowser", false);
        let plan = plan_visible_sub_views(&handler(), &state);
        assert_eq!(plan, vec![0, 1, 3]);
    }

    #[test]
    fn test_hiding_the_winner_brings_back_its_counterpart() {
        let mut state = NodeHandlerState::default();
        state.set_sub_view_hidden("previewPanel", false);
        state.set_sub_view_hidden("previewPanel", true);

        let plan = plan_visible_sub_views(&handler(), &state);
        assert_eq!(plan, plan_visible_sub_views(&handler(), &NodeHandlerState::default()));
        assert_eq!(state.hidden_sub_views.get("columnBrowser"), None);
    }
}
