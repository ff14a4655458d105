//! Showing and hiding a single sub-view of the active composition.

use std::rc::Rc;

use super::composition::{plan_visible_sub_views, UsedControl};
use super::lifecycle::{self, ShowMode};
use super::Multiview;
use crate::error::{ErrorContext, MultiviewResult, ResultExt, StateError};
use crate::events::ViewEvent;
use crate::models::ViewDataId;

impl Multiview {
    /// Show (`Some(true)`), hide (`Some(false)`) or toggle (`None`) a
    /// sub-view without rebuilding the composition.
    ///
    /// The choice is remembered per node handler. Returns `false` when
    /// nothing changed, including for permanent sub-views.
    ///
    /// Showing a sub-view also removes the present siblings it is mutually
    /// exclusive with, so a single call may move more than one control and
    /// shift the positions of the controls after them. Hiding it again puts
    /// those siblings back unless the user hid them.
    pub fn execute_sub_view(&mut self, view_type: &str, show: Option<bool>) -> MultiviewResult<bool> {
        let composition = self.composition.as_ref().ok_or(StateError::NothingActive)?;
        let handler = Rc::clone(composition.handler());
        let id = composition.view_data();
        let (_, decl) = handler
            .sub_view_decl(view_type)
            .ok_or_else(|| StateError::UnknownSubView(view_type.to_string()))?;
        if decl.permanent {
            tracing::debug!("Sub-view '{}' is permanent", view_type);
            return Ok(false);
        }

        let visible = composition.find(view_type).is_some();
        let target = show.unwrap_or(!visible);
        if target == visible {
            return Ok(false);
        }

        let node_handler = self
            .history
            .get(id)
            .map(|data| data.node.handler.clone())
            .ok_or(StateError::UnknownDescriptor(id))?;
        let state = self.node_states.entry(node_handler).or_default();
        state.set_sub_view_hidden(view_type, !target);
        let planned = plan_visible_sub_views(&handler, state);

        let present = self
            .composition
            .as_ref()
            .map(|c| c.visible_decls())
            .unwrap_or_default();
        let context = || {
            ErrorContext::new("execute_sub_view")
                .with_view_type(view_type)
                .with_component(handler.id.clone())
        };

        let mut toggled = Vec::new();
        for decl_index in present.iter().rev().filter(|d| !planned.contains(d)) {
            self.remove_sub_view(id, *decl_index);
            toggled.push((handler.sub_views[*decl_index].view_type.clone(), false));
        }
        for decl_index in planned.iter().filter(|d| !present.contains(d)) {
            self.insert_sub_view(id, *decl_index).with_context(context)?;
            toggled.push((handler.sub_views[*decl_index].view_type.clone(), true));
        }

        tracing::debug!("Sub-view '{}' now {}", view_type, if target { "shown" } else { "hidden" });
        self.sync_actions();
        for (view_type, visible) in toggled {
            self.events.emit(&ViewEvent::SubViewToggled { view_type, visible });
        }
        Ok(true)
    }

    fn insert_sub_view(&mut self, id: ViewDataId, decl_index: usize) -> MultiviewResult<()> {
        let handler = match self.composition.as_ref() {
            Some(composition) => Rc::clone(composition.handler()),
            None => return Err(StateError::NothingActive.into()),
        };
        let decl = &handler.sub_views[decl_index];
        let sub_handler = self.registry.resolve(&decl.view_type)?;
        let instance = self.acquire_control(&sub_handler)?;
        let splitter = decl
            .placement
            .has_splitter
            .then(|| self.splitter_size(id, &decl.view_type));

        let composition = self.composition.as_mut().ok_or(StateError::NothingActive)?;
        let index = composition.insertion_index(decl_index);
        composition
            .controls
            .insert(index, UsedControl::sub(instance, sub_handler, decl, decl_index, splitter));
        self.host
            .attach(composition.controls[index].id(), &composition.controls[index].slot_spec(index));

        let data = self
            .history
            .get_mut(id)
            .ok_or(StateError::UnknownDescriptor(id))?;
        let main = composition.main_index();
        lifecycle::fire_show(
            &mut composition.controls,
            &[index],
            main,
            data,
            &mut self.tasks,
            &self.navigator,
            ShowMode {
                data_only: false,
                single_sub_view_change: true,
            },
        );
        lifecycle::restore_controls(&mut composition.controls, &[index], data);
        Ok(())
    }

    fn remove_sub_view(&mut self, id: ViewDataId, decl_index: usize) {
        let Some(composition) = self.composition.as_mut() else {
            return;
        };
        let Some(index) = composition.position_of_decl(decl_index) else {
            return;
        };
        let main = composition.main_index();
        if let Some(data) = self.history.get_mut(id) {
            lifecycle::capture_state(
                &composition.controls[index..=index],
                data,
                &mut self.splitter_defaults,
            );
            lifecycle::fire_hide(&mut composition.controls, &[index], main, data);
        }
        let used = composition.controls.remove(index);
        if self.focused == Some(used.id()) {
            self.focused = None;
        }
        self.release_control(used);
    }
}
