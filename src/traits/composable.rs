//! The capability set every composed control implements.
//!
//! The engine never inherits behavior into controls; it calls the hooks on
//! [`Composable`] in a fixed order and hands each hook a context that
//! exposes exactly what the control may touch.

use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use crate::actions::Action;
use crate::engine::{Navigator, TaskPool};
use crate::events::EventBus;
use crate::models::{DataSource, DataSourceHandle, ViewData};
use crate::traits::DataProvider;

/// Identity of a live control instance, stable while it sits in the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub(crate) u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctl{}", self.0)
    }
}

pub trait Composable {
    /// Factory id this control was created from.
    fn control_type(&self) -> &str;

    /// The view became visible (or, with `is_data_only`, only its data is
    /// needed). Main controls run before sub-controls.
    fn on_show(&mut self, ctx: &mut ShowContext<'_>);

    /// The view is going away. Sub-controls run before the main control.
    fn on_hide(&mut self, _ctx: &mut HideContext<'_>) {}

    /// Layout state to persist under this control's slot name.
    fn store_state(&self) -> Option<serde_json::Value> {
        None
    }

    /// Apply previously stored state. Unknown fields must be ignored.
    fn restore_state(&mut self, _state: &serde_json::Value) {}

    /// Actions offered while this control has input focus.
    fn actions(&self) -> Vec<Action> {
        Vec::new()
    }

    /// Name of the data source this control renders, for sub-views that
    /// derive their content from the main control.
    fn primary_data_source(&self) -> Option<&str> {
        None
    }

    /// Called once before the control is dropped for good.
    fn destroy(&mut self) {}
}

/// Arguments of [`Composable::on_show`].
pub struct ShowContext<'a> {
    view_data: &'a mut ViewData,
    main: Option<&'a dyn Composable>,
    instance: InstanceId,
    slot: &'a str,
    data_only: bool,
    single_sub_view_change: bool,
    tasks: &'a mut TaskPool,
    navigator: &'a Navigator,
}

impl<'a> ShowContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        view_data: &'a mut ViewData,
        main: Option<&'a dyn Composable>,
        instance: InstanceId,
        slot: &'a str,
        data_only: bool,
        single_sub_view_change: bool,
        tasks: &'a mut TaskPool,
        navigator: &'a Navigator,
    ) -> Self {
        Self {
            view_data,
            main,
            instance,
            slot,
            data_only,
            single_sub_view_change,
            tasks,
            navigator,
        }
    }

    pub fn view_data(&self) -> &ViewData {
        self.view_data
    }

    pub fn view_data_mut(&mut self) -> &mut ViewData {
        self.view_data
    }

    /// The main control of the composition; `None` when called on the main
    /// control itself.
    pub fn main(&self) -> Option<&dyn Composable> {
        self.main
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn slot(&self) -> &str {
        self.slot
    }

    pub fn is_data_only(&self) -> bool {
        self.data_only
    }

    pub fn is_single_sub_view_change(&self) -> bool {
        self.single_sub_view_change
    }

    pub fn navigator(&self) -> &Navigator {
        self.navigator
    }

    /// Run `future` until it finishes or the view is hidden, whichever
    /// comes first.
    pub fn spawn(&mut self, future: impl Future<Output = ()> + 'static) {
        let tracked = self.view_data.scope.track(future);
        self.tasks.push(async move {
            if tracked.await.is_err() {
                tracing::trace!("Tracked task aborted after its view was hidden");
            }
        });
    }

    /// Listen on `bus` while the view is shown.
    pub fn listen<E: 'static>(&mut self, bus: &EventBus<E>, listener: impl FnMut(&E) + 'static) {
        let subscription = bus.subscribe(listener);
        self.view_data.scope.hold(subscription);
    }

    /// Return the descriptor's cached source `name`, starting a tracked load
    /// through `provider` when it is not cached yet.
    pub fn load_data_source(&mut self, name: &str, provider: &dyn DataProvider) -> DataSourceHandle {
        if let Some(handle) = self.view_data.data_source(name) {
            return handle;
        }

        let handle = Rc::new(RefCell::new(DataSource::Loading));
        self.view_data
            .data_sources
            .insert(name.to_string(), Rc::clone(&handle));

        let fetch = provider.fetch(&self.view_data.node, name);
        let target = Rc::clone(&handle);
        let source = name.to_string();
        self.spawn(async move {
            let loaded = match fetch.await {
                Ok(list) => DataSource::Ready(list),
                Err(message) => {
                    tracing::debug!("Data source '{}' failed to load: {}", source, message);
                    DataSource::Failed(message)
                }
            };
            *target.borrow_mut() = loaded;
        });

        handle
    }
}

/// Arguments of [`Composable::on_hide`].
pub struct HideContext<'a> {
    view_data: &'a mut ViewData,
    main: Option<&'a dyn Composable>,
    instance: InstanceId,
    slot: &'a str,
}

impl<'a> HideContext<'a> {
    pub(crate) fn new(
        view_data: &'a mut ViewData,
        main: Option<&'a dyn Composable>,
        instance: InstanceId,
        slot: &'a str,
    ) -> Self {
        Self {
            view_data,
            main,
            instance,
            slot,
        }
    }

    pub fn view_data(&self) -> &ViewData {
        self.view_data
    }

    pub fn view_data_mut(&mut self) -> &mut ViewData {
        self.view_data
    }

    pub fn main(&self) -> Option<&dyn Composable> {
        self.main
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn slot(&self) -> &str {
        self.slot
    }
}
