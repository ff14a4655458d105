//! View tables of the media library.
//!
//! | Node handler | View types                  | Default      |
//! |--------------|-----------------------------|--------------|
//! | `collection` | `collectionDashboard`       |              |
//! | `albums`     | `albumGrid`, `albumList`    | `albumGrid`  |
//! | `artists`    | `artistGrid`, `artistList`  | `artistGrid` |
//! | `album`      | `tracklist`                 |              |
//! | `nowPlaying` | `nowPlayingList`            |              |

mod controls;
mod provider;

use std::rc::Rc;

use crate::actions::Action;
use crate::error::ConfigError;
use crate::models::{NodeHandler, Placement, SubViewDecl, ViewHandler};
use crate::registry::HandlerRegistry;
use crate::traits::DataProvider;

pub use controls::{
    DashboardControl, FilterBar, ItemListControl, ListMode, ListState, PreviewPanel, StatusBar, ITEMS_SOURCE,
};
pub use provider::StaticLibrary;

fn filter_bar() -> SubViewDecl {
    SubViewDecl::new("filterBar", Placement::top()).permanent()
}

fn status_bar() -> SubViewDecl {
    SubViewDecl::new("statusBar", Placement::bottom())
}

fn preview_panel() -> SubViewDecl {
    SubViewDecl::new("previewPanel", Placement::right().with_splitter()).hidden()
}

fn list_view(id: &str, title: &str) -> ViewHandler {
    ViewHandler::new(id, "ItemListControl").title(title)
}

/// Registry with the media library's node handlers, view types and
/// controls. Data-bound controls load through `provider`.
pub fn media_library(provider: Rc<dyn DataProvider>) -> Result<HandlerRegistry, ConfigError> {
    let lists = Rc::clone(&provider);
    let browser = Rc::clone(&provider);
    let dashboard = provider;

    HandlerRegistry::builder()
        .view(
            ViewHandler::new("collectionDashboard", "DashboardControl")
                .title("Dashboard")
                .sub_view(status_bar()),
        )
        .view(
            list_view("albumGrid", "Album Grid")
                .sub_view(filter_bar())
                .sub_view(SubViewDecl::new("columnBrowser", Placement::top().in_scroller()).hidden())
                .sub_view(preview_panel().exclusive_with("columnBrowser"))
                .sub_view(status_bar())
                .action(Action::command("sort-by-year", "Sort by Year", || {
                    tracing::debug!("Sorting albums by year")
                })),
        )
        .view(
            list_view("albumList", "Album List")
                .sub_view(filter_bar())
                .sub_view(preview_panel())
                .sub_view(status_bar()),
        )
        .view(
            list_view("artistGrid", "Artist Grid")
                .sub_view(filter_bar())
                .sub_view(status_bar()),
        )
        .view(
            list_view("artistList", "Artist List")
                .sub_view(filter_bar())
                .sub_view(status_bar()),
        )
        .view(
            list_view("tracklist", "Tracks")
                .sub_view(preview_panel())
                .sub_view(status_bar()),
        )
        .view(list_view("nowPlayingList", "Now Playing").no_animation())
        .view(ViewHandler::new("filterBar", "FilterBar").title("Filter"))
        .view(ViewHandler::new("columnBrowser", "ColumnBrowser").title("Column Browser"))
        .view(ViewHandler::new("previewPanel", "PreviewPanel").title("Preview"))
        .view(ViewHandler::new("statusBar", "StatusBar").title("Status Bar"))
        .node(NodeHandler::new("collection", ["collectionDashboard"]))
        .node(
            NodeHandler::new("albums", ["albumGrid", "albumList"])
                .default_view("albumGrid")
                .action(Action::command("rescan", "Rescan Library", || {
                    tracing::info!("Rescanning library")
                })),
        )
        .node(NodeHandler::new("artists", ["artistGrid", "artistList"]).default_view("artistGrid"))
        .node(NodeHandler::new("album", ["tracklist"]))
        .node(NodeHandler::new("nowPlaying", ["nowPlayingList"]))
        .control("ItemListControl", move || ItemListControl::new(Rc::clone(&lists)))
        .control("ColumnBrowser", move || ItemListControl::browser(Rc::clone(&browser)))
        .control("DashboardControl", move || DashboardControl::new(Rc::clone(&dashboard)))
        .control("FilterBar", FilterBar::new)
        .control("PreviewPanel", PreviewPanel::new)
        .control("StatusBar", StatusBar::new)
        .build()
}
