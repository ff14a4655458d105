//! Composition engine.
//!
//! [`Multiview`] owns navigation history, the control cache and the active
//! [`Composition`]. Every show runs the same sequence:
//!
//! 1. resolve the view type (explicit, remembered, node default, first offered)
//! 2. finish any unfinished transition and capture the outgoing state
//! 3. hide the outgoing controls, release their scope, cache or destroy them
//! 4. build the new composition from the cache or the registry
//! 5. attach, fire `on_show`, restore stored state
//! 6. start the transition, recompute actions, publish `ViewChanged`
//!
//! Navigation never runs re-entrantly. Requests go through the
//! [`Navigator`] slot and are executed by [`Multiview::process_pending`].

mod composition;
mod lifecycle;
mod pending;
mod session;
mod subview;
mod tasks;
mod transition;

use std::collections::BTreeMap;
use std::rc::Rc;

use uuid::Uuid;

use crate::actions::{ActionInput, ActionKind, ActionSynchronizer, ContextAction, SwitchOption, ToggleOption};
use crate::cache::{ControlCache, ControlInstance};
use crate::config::MultiviewConfig;
use crate::error::{ConfigError, ErrorContext, MultiviewResult, ResultExt, StateError};
use crate::events::{EventBus, Subscription, ViewEvent};
use crate::history::NavigationHistory;
use crate::models::{NodeHandlerState, NodeRef, ViewData, ViewDataId, ViewHandler, ViewLifecycle};
use crate::registry::HandlerRegistry;
use crate::traits::{ControlHost, HideContext, InstanceId, ShowContext};

pub use composition::{Composition, SlotGroup, UsedControl, DEFAULT_SPLITTER_SIZE};
pub use pending::{NavigationRequest, NavigationTarget, Navigator, ShowOptions};
pub use tasks::TaskPool;
pub use transition::{Direction, Transition};

use composition::plan_visible_sub_views;
use lifecycle::ShowMode;
use transition::should_animate;

/// Where the engine is in a show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnginePhase {
    #[default]
    Idle,
    Hiding,
    Composing,
    Active,
}

/// Result of one event loop iteration, see [`Multiview::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub shown: Option<ViewDataId>,
    pub completed_tasks: usize,
    pub reconciled_actions: usize,
}

pub struct Multiview {
    session_id: Uuid,
    config: MultiviewConfig,
    registry: Rc<HandlerRegistry>,
    host: Box<dyn ControlHost>,
    history: NavigationHistory,
    cache: ControlCache,
    composition: Option<Composition>,
    phase: EnginePhase,
    transition: Option<Transition>,
    node_states: BTreeMap<String, NodeHandlerState>,
    splitter_defaults: BTreeMap<String, f32>,
    sidebar_state: serde_json::Value,
    expanded_tree_nodes: Vec<String>,
    navigator: Navigator,
    tasks: TaskPool,
    events: EventBus<ViewEvent>,
    actions: ActionSynchronizer,
    focused: Option<InstanceId>,
    next_instance: u64,
}

impl std::fmt::Debug for Multiview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Multiview")
            .field("session_id", &self.session_id)
            .field("phase", &self.phase)
            .field("active", &self.active())
            .field("history", &self.history.len())
            .field("cached_controls", &self.cache.len())
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl Multiview {
    pub fn new(registry: Rc<HandlerRegistry>, host: impl ControlHost + 'static, config: MultiviewConfig) -> Self {
        let session_id = Uuid::new_v4();
        tracing::info!(
            "Starting view session {} (animations: {}, history limit: {})",
            session_id,
            config.animations,
            config.history_limit
        );
        Self {
            session_id,
            history: NavigationHistory::new(config.history_limit),
            config,
            registry,
            host: Box::new(host),
            cache: ControlCache::new(),
            composition: None,
            phase: EnginePhase::Idle,
            transition: None,
            node_states: BTreeMap::new(),
            splitter_defaults: BTreeMap::new(),
            sidebar_state: serde_json::Value::Null,
            expanded_tree_nodes: Vec::new(),
            navigator: Navigator::new(),
            tasks: TaskPool::new(),
            events: EventBus::new(),
            actions: ActionSynchronizer::new(),
            focused: None,
            next_instance: 1,
        }
    }

    // ---------------------------------------------------------------------
    // Navigation requests
    // ---------------------------------------------------------------------

    /// Queue a navigation request. A later request replaces this one if
    /// neither has started.
    pub fn request(&self, target: NavigationTarget, options: ShowOptions) {
        self.navigator.request(target, options);
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Requests replaced before they started.
    pub fn superseded_requests(&self) -> u64 {
        self.navigator.superseded()
    }

    /// Execute the queued request, if any. Returns the descriptor shown.
    pub fn process_pending(&mut self) -> MultiviewResult<Option<ViewDataId>> {
        let Some(request) = self.navigator.take() else {
            return Ok(None);
        };
        let NavigationRequest { target, mut options } = request;
        tracing::debug!("Processing navigation request {:?}", target);

        let id = match target {
            NavigationTarget::Node(node) => {
                self.registry
                    .node_handler(&node.handler)
                    .with_context(|| ErrorContext::new("navigate").with_path(node.path()))
                    .inspect_err(log_failure)?;
                let visit = self.history.visit(node);
                if visit.evicted > 0 {
                    tracing::debug!("History limit evicted {} descriptor(s)", visit.evicted);
                }
                visit.id
            }
            NavigationTarget::Back => match self.history.back() {
                Some(id) => id,
                None => return Ok(None),
            },
            NavigationTarget::Forward => match self.history.forward() {
                Some(id) => id,
                None => return Ok(None),
            },
            NavigationTarget::ViewType(view_type) => {
                let id = self.active().ok_or(StateError::NothingActive)?;
                options.view_type = Some(view_type);
                id
            }
            NavigationTarget::Descriptor(id) => {
                if !self.history.select(id) {
                    return Err(StateError::UnknownDescriptor(id).into());
                }
                id
            }
        };

        self.show_view(id, options)?;
        Ok(Some(id))
    }

    /// Queue `node` and execute it right away.
    pub fn navigate(&mut self, node: NodeRef, options: ShowOptions) -> MultiviewResult<Option<ViewDataId>> {
        self.request(NavigationTarget::Node(node), options);
        self.process_pending()
    }

    pub fn go_back(&mut self) -> MultiviewResult<Option<ViewDataId>> {
        self.request(NavigationTarget::Back, ShowOptions::default());
        self.process_pending()
    }

    pub fn go_forward(&mut self) -> MultiviewResult<Option<ViewDataId>> {
        self.request(NavigationTarget::Forward, ShowOptions::default());
        self.process_pending()
    }

    /// Re-render the active descriptor with another view type.
    pub fn switch_view_type(&mut self, view_type: &str) -> MultiviewResult<Option<ViewDataId>> {
        self.request(
            NavigationTarget::ViewType(view_type.to_string()),
            ShowOptions::programmatic(),
        );
        self.process_pending()
    }

    /// One event loop iteration: run the queued request, poll tracked work,
    /// apply resolved action predicates.
    pub fn tick(&mut self) -> MultiviewResult<TickReport> {
        let shown = self.process_pending()?;
        let completed_tasks = self.tasks.run_until_stalled();
        let reconciled_actions = self.reconcile_actions();
        Ok(TickReport {
            shown,
            completed_tasks,
            reconciled_actions,
        })
    }

    // ---------------------------------------------------------------------
    // showView
    // ---------------------------------------------------------------------

    /// Compose and show descriptor `id`.
    ///
    /// A no-op when `id` is already shown with the resolved view type.
    pub fn show_view(&mut self, id: ViewDataId, options: ShowOptions) -> MultiviewResult<()> {
        let (node, remembered) = {
            let data = self.history.get(id).ok_or(StateError::UnknownDescriptor(id))?;
            (data.node.clone(), data.current_view_type.clone())
        };
        let context = || ErrorContext::new("show_view").with_path(node.path());

        let view_type = self
            .choose_view_type(&node, options.view_type.as_deref(), remembered.as_deref())
            .with_context(context)
            .inspect_err(log_failure)?;
        let handler = self
            .registry
            .resolve(&view_type)
            .with_context(context)
            .inspect_err(log_failure)?;

        let outgoing = self
            .composition
            .as_ref()
            .map(|c| (c.view_data(), Rc::clone(c.handler())));
        if let Some((active, active_handler)) = &outgoing {
            if *active == id && active_handler.id == view_type {
                tracing::trace!("View {} already shown as '{}'", id, view_type);
                self.history.select(id);
                return Ok(());
            }
        }

        let same_descriptor = outgoing.as_ref().is_some_and(|(active, _)| *active == id);
        let animate = should_animate(
            self.config.animations,
            options.animate,
            outgoing.as_ref().map(|(_, h)| h.as_ref()),
            &handler,
            same_descriptor,
        );
        let from = outgoing.as_ref().map(|(active, _)| *active);
        let direction = if same_descriptor {
            Direction::None
        } else {
            Direction::between(from.and_then(|f| self.history.index_of(f)), self.history.index_of(id))
        };

        tracing::debug!(
            "Showing {} '{}' as '{}' ({:?})",
            id,
            node.path(),
            view_type,
            direction
        );

        self.hide_active();
        self.history.select(id);
        self.compose(id, Rc::clone(&handler), &options)
            .with_context(|| context().with_view_type(view_type.clone()))
            .inspect_err(log_failure)?;

        self.node_states
            .entry(node.handler.clone())
            .or_default()
            .last_view_type = Some(view_type.clone());

        if animate {
            let transition = Transition {
                from,
                to: id,
                view_type: view_type.clone(),
                direction,
            };
            self.host.begin_transition(&transition);
            self.transition = Some(transition);
        }

        self.sync_actions();
        self.events.emit(&ViewEvent::ViewChanged {
            view_data: id,
            path: node.path(),
            view_type,
            direction,
        });
        Ok(())
    }

    fn choose_view_type(
        &self,
        node: &NodeRef,
        explicit: Option<&str>,
        remembered: Option<&str>,
    ) -> Result<String, ConfigError> {
        let available = self.registry.available_view_types(node)?;
        if let Some(view_type) = explicit {
            if available.iter().any(|v| v == view_type) {
                return Ok(view_type.to_string());
            }
            return Err(ConfigError::ViewTypeNotAvailable {
                view_type: view_type.to_string(),
                node_handler: node.handler.clone(),
            });
        }

        let node_handler = self.registry.node_handler(&node.handler)?;
        let last = self
            .node_states
            .get(&node.handler)
            .and_then(|state| state.last_view_type.as_deref());
        let chosen = [remembered, last, node_handler.default_view.as_deref()]
            .into_iter()
            .flatten()
            .find(|candidate| available.iter().any(|v| v == candidate))
            .map(str::to_string)
            .or_else(|| available.first().cloned())
            .ok_or_else(|| ConfigError::NoViewTypes(node.handler.clone()));
        chosen
    }

    fn hide_active(&mut self) {
        let Some(mut composition) = self.composition.take() else {
            return;
        };
        if self.transition.take().is_some() {
            tracing::debug!("Skipping unfinished transition");
            self.host.skip_transition();
        }
        self.phase = EnginePhase::Hiding;

        let id = composition.view_data();
        let main = composition.main_index();
        match self.history.get_mut(id) {
            Some(data) => {
                data.lifecycle = ViewLifecycle::Hiding;
                lifecycle::capture_state(&composition.controls, data, &mut self.splitter_defaults);
                let all: Vec<usize> = (0..composition.controls.len()).collect();
                lifecycle::fire_hide(&mut composition.controls, &all, main, data);
                let aborted = data.release();
                data.lifecycle = ViewLifecycle::Inactive;
                tracing::trace!("Released {} tracked item(s) of {}", aborted, id);
            }
            None => tracing::warn!("Descriptor {} left history while shown", id),
        }

        self.focused = None;
        for used in composition.controls.drain(..) {
            self.release_control(used);
        }
        self.phase = EnginePhase::Idle;
    }

    fn compose(&mut self, id: ViewDataId, handler: Rc<ViewHandler>, options: &ShowOptions) -> MultiviewResult<()> {
        self.phase = EnginePhase::Composing;
        let node_handler = self
            .history
            .get(id)
            .map(|data| data.node.handler.clone())
            .ok_or(StateError::UnknownDescriptor(id))?;
        let state = self.node_states.get(&node_handler).cloned().unwrap_or_default();

        let mut controls = Vec::with_capacity(1 + handler.sub_views.len());
        let main = self.acquire_control(&handler)?;
        controls.push(UsedControl::main(main, Rc::clone(&handler)));

        for decl_index in plan_visible_sub_views(&handler, &state) {
            let decl = &handler.sub_views[decl_index];
            let sub_handler = self.registry.resolve(&decl.view_type)?;
            let instance = self.acquire_control(&sub_handler)?;
            let splitter = decl
                .placement
                .has_splitter
                .then(|| self.splitter_size(id, &decl.view_type));
            controls.push(UsedControl::sub(instance, sub_handler, decl, decl_index, splitter));
        }

        for (index, used) in controls.iter().enumerate() {
            self.host.attach(used.id(), &used.slot_spec(index));
        }

        let mut composition = Composition::new(id, Rc::clone(&handler), controls);
        let data = self
            .history
            .get_mut(id)
            .ok_or(StateError::UnknownDescriptor(id))?;
        data.lifecycle = ViewLifecycle::Composing;
        data.current_view_type = Some(handler.id.clone());

        let all: Vec<usize> = (0..composition.controls.len()).collect();
        let main = composition.main_index();
        lifecycle::fire_show(
            &mut composition.controls,
            &all,
            main,
            data,
            &mut self.tasks,
            &self.navigator,
            ShowMode::default(),
        );
        if options.restore_state {
            let restored = lifecycle::restore_controls(&mut composition.controls, &all, data);
            tracing::trace!("Restored state of {} control(s)", restored);
        }
        data.lifecycle = ViewLifecycle::Active;

        self.composition = Some(composition);
        self.phase = EnginePhase::Active;
        Ok(())
    }

    fn splitter_size(&self, id: ViewDataId, slot: &str) -> f32 {
        self.history
            .get(id)
            .and_then(|data| data.splitters.get(slot).copied())
            .or_else(|| self.splitter_defaults.get(slot).copied())
            .unwrap_or(DEFAULT_SPLITTER_SIZE)
    }

    fn acquire_control(&mut self, handler: &ViewHandler) -> MultiviewResult<ControlInstance> {
        if handler.reusable {
            if let Some(instance) = self.cache.get(&handler.main_control_type) {
                tracing::trace!("Reusing cached {} for '{}'", instance.id, handler.id);
                return Ok(instance);
            }
        }
        let control = self.registry.create_control(&handler.main_control_type)?;
        let id = InstanceId(self.next_instance);
        self.next_instance += 1;
        tracing::trace!("Created {} ({}) for '{}'", id, handler.main_control_type, handler.id);
        Ok(ControlInstance { id, control })
    }

    fn release_control(&mut self, used: UsedControl) {
        self.host.detach(used.id());
        if used.handler.reusable {
            let key = used.cache_key().to_string();
            self.cache.put(&key, used.instance, self.host.as_mut());
        } else {
            used.instance.destroy(self.host.as_mut());
        }
    }

    // ---------------------------------------------------------------------
    // Data preparation
    // ---------------------------------------------------------------------

    /// Start loading the data a descriptor needs without showing it.
    ///
    /// The main control runs `on_show` in data-only mode and goes straight
    /// back to the cache. Does nothing for the active descriptor.
    pub fn prepare_data(&mut self, id: ViewDataId, view_type: Option<&str>) -> MultiviewResult<()> {
        if self.active() == Some(id) {
            return Ok(());
        }
        let (node, remembered) = {
            let data = self.history.get(id).ok_or(StateError::UnknownDescriptor(id))?;
            (data.node.clone(), data.current_view_type.clone())
        };
        let view_type = self
            .choose_view_type(&node, view_type, remembered.as_deref())
            .with_context(|| ErrorContext::new("prepare_data").with_path(node.path()))
            .inspect_err(log_failure)?;
        let handler = self.registry.resolve(&view_type)?;
        let mut instance = self.acquire_control(&handler)?;

        if let Some(data) = self.history.get_mut(id) {
            let mut ctx = ShowContext::new(
                data,
                None,
                instance.id,
                &handler.id,
                true,
                false,
                &mut self.tasks,
                &self.navigator,
            );
            instance.control.on_show(&mut ctx);
            let mut ctx = HideContext::new(data, None, instance.id, &handler.id);
            instance.control.on_hide(&mut ctx);
        }
        tracing::debug!("Prepared data of {} for '{}'", id, view_type);

        if handler.reusable {
            self.cache.put(&handler.main_control_type, instance, self.host.as_mut());
        } else {
            instance.destroy(self.host.as_mut());
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Layout
    // ---------------------------------------------------------------------

    /// Resize the splitter of sub-view `slot` in the active composition.
    ///
    /// Sizes are clamped to `0.0..=1.0`. Non-finite sizes are ignored and
    /// return `false`.
    pub fn resize_splitter(&mut self, slot: &str, size: f32) -> MultiviewResult<bool> {
        let composition = self.composition.as_mut().ok_or(StateError::NothingActive)?;
        let used = composition
            .controls
            .iter_mut()
            .find(|c| c.slot() == slot)
            .ok_or_else(|| StateError::UnknownSubView(slot.to_string()))?;
        if used.splitter.is_none() || !size.is_finite() {
            return Ok(false);
        }
        let size = size.clamp(0.0, 1.0);
        used.splitter = Some(size);
        self.splitter_defaults.insert(slot.to_string(), size);
        Ok(true)
    }

    /// Jump the running transition to its end.
    pub fn finish_transition(&mut self) -> bool {
        self.transition.take().is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    // ---------------------------------------------------------------------
    // Actions and focus
    // ---------------------------------------------------------------------

    /// Input focus moved. Controls outside the active composition count as
    /// no focus.
    pub fn focus_changed(&mut self, instance: Option<InstanceId>) {
        let focused = instance.filter(|id| {
            self.composition
                .as_ref()
                .is_some_and(|c| c.find_instance(*id).is_some())
        });
        if focused == self.focused {
            return;
        }
        self.focused = focused;
        self.sync_actions();
        self.events.emit(&ViewEvent::FocusChanged { instance: focused });
    }

    pub fn focused(&self) -> Option<InstanceId> {
        self.focused
    }

    fn sync_actions(&mut self) {
        let Some(composition) = self.composition.as_ref() else {
            self.actions.recompute(ActionInput::default());
            self.events.emit(&ViewEvent::ActionsChanged { count: 0 });
            return;
        };
        let handler = Rc::clone(composition.handler());
        let focused: Vec<_> = self
            .focused
            .and_then(|id| composition.find_instance(id))
            .map(|used| used.control().actions())
            .unwrap_or_default();
        let node = self
            .history
            .get(composition.view_data())
            .map(|data| data.node.clone());
        let node_handler = node
            .as_ref()
            .and_then(|node| self.registry.node_handler(&node.handler).ok());

        let switches: Vec<SwitchOption> = node
            .as_ref()
            .and_then(|node| self.registry.available_view_types(node).ok())
            .unwrap_or_default()
            .into_iter()
            .map(|view_type| SwitchOption {
                title: self.registry.view_title(&view_type),
                current: view_type == handler.id,
                view_type,
            })
            .collect();
        let toggles: Vec<ToggleOption> = handler
            .sub_views
            .iter()
            .filter(|decl| !decl.permanent)
            .map(|decl| ToggleOption {
                view_type: decl.view_type.clone(),
                title: self.registry.view_title(&decl.view_type),
                visible: composition.find(&decl.view_type).is_some(),
            })
            .collect();

        let count = self.actions.recompute(ActionInput {
            focused,
            view: &handler.actions,
            node: node_handler.as_ref().map(|h| h.actions.as_slice()).unwrap_or(&[]),
            switches,
            toggles,
        });
        self.events.emit(&ViewEvent::ActionsChanged { count });
    }

    /// Apply async predicates that resolved since the last call.
    pub fn reconcile_actions(&mut self) -> usize {
        let applied = self.actions.reconcile();
        if applied > 0 {
            self.events.emit(&ViewEvent::ActionsChanged {
                count: self.actions.entries().len(),
            });
        }
        applied
    }

    /// Wait for every pending async predicate.
    pub async fn settle_actions(&mut self) -> usize {
        let applied = self.actions.settle().await;
        if applied > 0 {
            self.events.emit(&ViewEvent::ActionsChanged {
                count: self.actions.entries().len(),
            });
        }
        applied
    }

    pub fn actions(&self) -> &[ContextAction] {
        self.actions.entries()
    }

    /// Trigger contextual action `id`. Returns `false` when the action is
    /// currently hidden or disabled.
    pub fn invoke_action(&mut self, id: &str) -> MultiviewResult<bool> {
        let entry = self
            .actions
            .get(id)
            .ok_or_else(|| StateError::UnknownAction(id.to_string()))?;
        if !entry.visible || !entry.enabled {
            tracing::debug!("Action '{}' is not available", id);
            return Ok(false);
        }
        let kind = self
            .actions
            .action(id)
            .map(|action| action.kind.clone())
            .ok_or_else(|| StateError::UnknownAction(id.to_string()))?;

        tracing::debug!("Invoking action '{}'", id);
        match kind {
            ActionKind::Command(command) => command(),
            ActionKind::SwitchViewType(view_type) => {
                self.switch_view_type(&view_type)?;
            }
            ActionKind::ToggleSubView(view_type) => {
                self.execute_sub_view(&view_type, None)?;
            }
        }
        Ok(true)
    }

    // ---------------------------------------------------------------------
    // Tracked work and events
    // ---------------------------------------------------------------------

    pub fn run_until_stalled(&mut self) -> usize {
        self.tasks.run_until_stalled()
    }

    /// Await all tracked work. Work of hidden views resolves as aborted.
    pub async fn drive(&mut self) -> usize {
        self.tasks.drive().await
    }

    pub fn subscribe(&self, listener: impl FnMut(&ViewEvent) + 'static) -> Subscription {
        self.events.subscribe(listener)
    }

    pub fn events(&self) -> &EventBus<ViewEvent> {
        &self.events
    }

    /// Hide the active view and destroy every control and descriptor.
    ///
    /// Save the session before calling this; history is gone afterwards.
    pub fn shutdown(&mut self) {
        self.hide_active();
        self.cache.cleanup(self.host.as_mut());
        let released = self.history.clear();
        self.tasks.clear();
        self.actions.recompute(ActionInput::default());
        tracing::info!(
            "View session {} shut down ({} descriptor(s) released)",
            self.session_id,
            released
        );
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn config(&self) -> &MultiviewConfig {
        &self.config
    }

    pub fn registry(&self) -> &Rc<HandlerRegistry> {
        &self.registry
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Descriptor of the active composition.
    pub fn active(&self) -> Option<ViewDataId> {
        self.composition.as_ref().map(Composition::view_data)
    }

    pub fn active_view_data(&self) -> Option<&ViewData> {
        self.active().and_then(|id| self.history.get(id))
    }

    pub fn composition(&self) -> Option<&Composition> {
        self.composition.as_ref()
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn view_data(&self, id: ViewDataId) -> Option<&ViewData> {
        self.history.get(id)
    }

    pub fn view_data_mut(&mut self, id: ViewDataId) -> Option<&mut ViewData> {
        self.history.get_mut(id)
    }

    pub fn cache(&self) -> &ControlCache {
        &self.cache
    }

    pub fn tasks(&self) -> &TaskPool {
        &self.tasks
    }

    pub fn node_state(&self, node_handler: &str) -> Option<&NodeHandlerState> {
        self.node_states.get(node_handler)
    }

    pub fn splitter_defaults(&self) -> &BTreeMap<String, f32> {
        &self.splitter_defaults
    }

    pub fn sidebar_state(&self) -> &serde_json::Value {
        &self.sidebar_state
    }

    pub fn set_sidebar_state(&mut self, state: serde_json::Value) {
        self.sidebar_state = state;
    }

    pub fn expanded_tree_nodes(&self) -> &[String] {
        &self.expanded_tree_nodes
    }

    pub fn set_expanded_tree_nodes(&mut self, nodes: Vec<String>) {
        self.expanded_tree_nodes = nodes;
    }
}

fn log_failure(err: &crate::error::MultiviewError) {
    match err.context() {
        Some(context) => tracing::error!("{} [{}] {}", err.inner(), err.error_code(), context.to_log_string()),
        None => tracing::error!("{} [{}]", err, err.error_code()),
    }
}
