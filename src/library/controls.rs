//! Controls of the media library views.
//!
//! Rendering belongs to the host; these controls hold what the views know
//! about their data and layout, and persist it through
//! [`Composable::store_state`].

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::actions::{Action, Predicate};
use crate::models::{DataSource, DataSourceHandle};
use crate::traits::{Composable, DataProvider, HideContext, ShowContext};

/// Data source every list-like control renders.
pub const ITEMS_SOURCE: &str = "items";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    #[default]
    Grid,
    List,
    Columns,
}

impl ListMode {
    fn for_view_type(view_type: &str) -> Self {
        if view_type.ends_with("Grid") {
            ListMode::Grid
        } else {
            ListMode::List
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListState {
    pub scroll: u32,
    pub selection: Option<String>,
}

fn ready_count(handle: &Option<DataSourceHandle>) -> Option<usize> {
    handle
        .as_ref()
        .and_then(|h| h.borrow().list().map(|list| list.len()))
}

/// Grid or list of the node's items. Also serves as the column browser.
pub struct ItemListControl {
    control_type: String,
    provider: Rc<dyn DataProvider>,
    mode: ListMode,
    browser: bool,
    source: Option<DataSourceHandle>,
    state: Rc<RefCell<ListState>>,
}

impl std::fmt::Debug for ItemListControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemListControl")
            .field("control_type", &self.control_type)
            .field("mode", &self.mode)
            .field("state", &self.state.borrow())
            .finish()
    }
}

impl ItemListControl {
    pub fn new(provider: Rc<dyn DataProvider>) -> Self {
        Self {
            control_type: "ItemListControl".to_string(),
            provider,
            mode: ListMode::Grid,
            browser: false,
            source: None,
            state: Rc::new(RefCell::new(ListState::default())),
        }
    }

    pub fn browser(provider: Rc<dyn DataProvider>) -> Self {
        Self {
            control_type: "ColumnBrowser".to_string(),
            mode: ListMode::Columns,
            browser: true,
            ..Self::new(provider)
        }
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    pub fn select(&mut self, key: impl Into<String>) {
        self.state.borrow_mut().selection = Some(key.into());
    }

    pub fn scroll_to(&mut self, offset: u32) {
        self.state.borrow_mut().scroll = offset;
    }

    pub fn item_count(&self) -> Option<usize> {
        ready_count(&self.source)
    }
}

impl Composable for ItemListControl {
    fn control_type(&self) -> &str {
        &self.control_type
    }

    fn on_show(&mut self, ctx: &mut ShowContext<'_>) {
        if !self.browser {
            self.mode = ListMode::for_view_type(ctx.slot());
        }
        let provider = Rc::clone(&self.provider);
        let handle = ctx.load_data_source(ITEMS_SOURCE, provider.as_ref());
        if ctx.is_data_only() {
            return;
        }
        // A cached instance may carry the previous view's layout.
        *self.state.borrow_mut() = ListState::default();
        self.source = Some(handle);
    }

    fn on_hide(&mut self, _ctx: &mut HideContext<'_>) {
        self.source = None;
    }

    fn store_state(&self) -> Option<serde_json::Value> {
        serde_json::to_value(&*self.state.borrow()).ok()
    }

    fn restore_state(&mut self, state: &serde_json::Value) {
        match serde_json::from_value::<ListState>(state.clone()) {
            Ok(restored) => *self.state.borrow_mut() = restored,
            Err(err) => tracing::debug!("Ignoring unreadable list state: {}", err),
        }
    }

    fn actions(&self) -> Vec<Action> {
        let selection = Rc::clone(&self.state);
        let play = Rc::clone(&self.state);
        vec![Action::command("play-selection", "Play", move || {
            if let Some(key) = &play.borrow().selection {
                tracing::info!("Playing {}", key);
            }
        })
        .enabled_when(Predicate::sync(move || selection.borrow().selection.is_some()))]
    }

    fn primary_data_source(&self) -> Option<&str> {
        Some(ITEMS_SOURCE)
    }
}

/// Text filter above the list.
#[derive(Debug, Default)]
pub struct FilterBar {
    query: String,
    target: Option<String>,
}

impl FilterBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Data source the filter applies to.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

impl Composable for FilterBar {
    fn control_type(&self) -> &str {
        "FilterBar"
    }

    fn on_show(&mut self, ctx: &mut ShowContext<'_>) {
        self.query.clear();
        self.target = ctx
            .main()
            .and_then(|main| main.primary_data_source())
            .map(str::to_string);
    }

    fn store_state(&self) -> Option<serde_json::Value> {
        (!self.query.is_empty()).then(|| serde_json::json!({ "query": self.query }))
    }

    fn restore_state(&mut self, state: &serde_json::Value) {
        if let Some(query) = state.get("query").and_then(|q| q.as_str()) {
            self.query = query.to_string();
        }
    }
}

/// Details of the first item of the main control's data.
#[derive(Debug, Default)]
pub struct PreviewPanel {
    source: Option<DataSourceHandle>,
}

impl PreviewPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headline(&self) -> Option<String> {
        let source = self.source.as_ref()?.borrow();
        source
            .list()
            .and_then(|list| list.items.first())
            .map(|item| item.title.clone())
    }
}

impl Composable for PreviewPanel {
    fn control_type(&self) -> &str {
        "PreviewPanel"
    }

    fn on_show(&mut self, ctx: &mut ShowContext<'_>) {
        let name = ctx.main().and_then(|main| main.primary_data_source()).map(str::to_string);
        self.source = name.and_then(|name| ctx.view_data().data_source(&name));
    }

    fn on_hide(&mut self, _ctx: &mut HideContext<'_>) {
        self.source = None;
    }
}

/// Item count of the main control's data.
#[derive(Debug, Default)]
pub struct StatusBar {
    source: Option<DataSourceHandle>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        let Some(source) = &self.source else {
            return String::new();
        };
        match &*source.borrow() {
            DataSource::Loading => "Loading...".to_string(),
            DataSource::Ready(list) if list.len() == 1 => "1 item".to_string(),
            DataSource::Ready(list) => format!("{} items", list.len()),
            DataSource::Failed(message) => format!("Error: {}", message),
        }
    }
}

impl Composable for StatusBar {
    fn control_type(&self) -> &str {
        "StatusBar"
    }

    fn on_show(&mut self, ctx: &mut ShowContext<'_>) {
        let name = ctx.main().and_then(|main| main.primary_data_source()).map(str::to_string);
        self.source = name.and_then(|name| ctx.view_data().data_source(&name));
    }

    fn on_hide(&mut self, _ctx: &mut HideContext<'_>) {
        self.source = None;
    }
}

/// Landing page of the collection: recent albums and top artists.
pub struct DashboardControl {
    provider: Rc<dyn DataProvider>,
    sections: Vec<(String, DataSourceHandle)>,
}

impl std::fmt::Debug for DashboardControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardControl")
            .field("sections", &self.sections.len())
            .finish()
    }
}

impl DashboardControl {
    pub const SECTIONS: [&'static str; 2] = ["recentAlbums", "topArtists"];

    pub fn new(provider: Rc<dyn DataProvider>) -> Self {
        Self {
            provider,
            sections: Vec::new(),
        }
    }

    /// Sections whose data has arrived, with their item counts.
    pub fn ready_sections(&self) -> Vec<(&str, usize)> {
        self.sections
            .iter()
            .filter_map(|(name, handle)| {
                handle
                    .borrow()
                    .list()
                    .map(|list| (name.as_str(), list.len()))
            })
            .collect()
    }
}

impl Composable for DashboardControl {
    fn control_type(&self) -> &str {
        "DashboardControl"
    }

    fn on_show(&mut self, ctx: &mut ShowContext<'_>) {
        let provider = Rc::clone(&self.provider);
        let sections: Vec<(String, DataSourceHandle)> = Self::SECTIONS
            .iter()
            .map(|name| (name.to_string(), ctx.load_data_source(name, provider.as_ref())))
            .collect();
        if !ctx.is_data_only() {
            self.sections = sections;
        }
    }

    fn on_hide(&mut self, _ctx: &mut HideContext<'_>) {
        self.sections.clear();
    }

    fn primary_data_source(&self) -> Option<&str> {
        Some(Self::SECTIONS[0])
    }
}
