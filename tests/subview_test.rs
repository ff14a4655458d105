//! Single sub-view show/hide without rebuilding the composition.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::*;
use multiview::error::ErrorCategory;
use multiview::events::ViewEvent;
use multiview::ShowOptions;
use serde_json::json;

fn shown_grid() -> Fixture {
    let mut fx = FixtureBuilder::new().build();
    fx.engine.navigate(folder("a"), ShowOptions::default()).unwrap();
    fx.journal.clear();
    fx.host.clear_ops();
    fx
}

#[test]
fn test_hiding_a_sub_view_touches_only_that_control() {
    let mut fx = shown_grid();

    assert!(fx.engine.execute_sub_view("status", None).unwrap());

    assert_eq!(fx.journal.events(), vec!["hide:status"]);
    assert_eq!(fx.host.attached_slots(), vec!["grid", "search", "tree"]);
    assert_eq!(
        fx.engine
            .node_state("folder")
            .and_then(|s| s.hidden_sub_views.get("status").copied()),
        Some(true)
    );
}

#[test]
fn test_showing_a_sub_view_keeps_declared_order() {
    let mut fx = shown_grid();
    fx.engine.execute_sub_view("tree", Some(false)).unwrap();
    fx.journal.clear();
    fx.host.clear_ops();

    assert!(fx.engine.execute_sub_view("tree", Some(true)).unwrap());

    assert_eq!(fx.journal.events(), vec!["toggle:tree"]);
    assert_eq!(fx.host.attached_slots(), vec!["grid", "search", "tree", "status"]);
    assert!(matches!(
        fx.host.ops().as_slice(),
        [HostOp::Attach { slot, index: 2, .. }] if slot == "tree"
    ));
    assert_eq!(
        fx.engine.composition().unwrap().slots(),
        vec!["grid", "search", "tree", "status"]
    );
}

#[test]
fn test_no_change_returns_false() {
    let mut fx = shown_grid();

    assert!(!fx.engine.execute_sub_view("status", Some(true)).unwrap());
    assert!(!fx.engine.execute_sub_view("search", Some(false)).unwrap());
    assert!(!fx.engine.execute_sub_view("search", None).unwrap());

    assert!(fx.journal.events().is_empty());
    assert!(fx.host.ops().is_empty());
}

#[test]
fn test_unknown_sub_view_and_nothing_active() {
    let mut fx = shown_grid();
    let err = fx.engine.execute_sub_view("sidebar", None).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Client);

    let mut idle = FixtureBuilder::new().build();
    assert!(idle.engine.execute_sub_view("status", None).is_err());
}

#[test]
fn test_showing_exclusive_sub_view_hides_its_counterpart() {
    let mut fx = shown_grid();
    let toggles = Rc::new(RefCell::new(Vec::new()));
    let seen = toggles.clone();
    let _sub = fx.engine.subscribe(move |event| {
        if let ViewEvent::SubViewToggled { view_type, visible } = event {
            seen.borrow_mut().push((view_type.clone(), *visible));
        }
    });

    assert!(fx.engine.execute_sub_view("preview", Some(true)).unwrap());

    assert_eq!(fx.journal.events(), vec!["hide:tree", "toggle:preview"]);
    assert_eq!(fx.host.attached_slots(), vec!["grid", "search", "preview", "status"]);
    assert_eq!(
        *toggles.borrow(),
        vec![("tree".to_string(), false), ("preview".to_string(), true)]
    );
}

#[test]
fn test_toggling_an_exclusive_sub_view_on_and_off_restores_the_composition() {
    let mut fx = shown_grid();
    let slots: Vec<String> = fx
        .engine
        .composition()
        .unwrap()
        .slots()
        .into_iter()
        .map(str::to_string)
        .collect();
    let instances = fx.engine.composition().unwrap().instance_ids();
    let attached = fx.host.attached_slots();

    assert!(fx.engine.execute_sub_view("preview", None).unwrap());
    assert!(fx.engine.execute_sub_view("preview", None).unwrap());

    let composition = fx.engine.composition().unwrap();
    assert_eq!(composition.slots(), slots);
    assert_eq!(composition.instance_ids(), instances);
    assert_eq!(fx.host.attached_slots(), attached);
    assert_eq!(
        fx.journal.events(),
        vec!["hide:tree", "toggle:preview", "hide:preview", "toggle:tree"]
    );
    let state = fx.engine.node_state("folder").unwrap();
    assert_eq!(state.hidden_sub_views.get("tree"), None);
    assert!(state.shown_sub_views.is_empty());
}

#[test]
fn test_hiding_the_excluder_keeps_a_sub_view_the_user_hid() {
    let mut fx = shown_grid();
    fx.engine.execute_sub_view("tree", Some(false)).unwrap();

    fx.engine.execute_sub_view("preview", Some(true)).unwrap();
    fx.engine.execute_sub_view("preview", Some(false)).unwrap();

    assert_eq!(
        fx.engine.composition().unwrap().slots(),
        vec!["grid", "search", "status"]
    );
}

#[test]
fn test_most_recently_shown_sub_view_wins_after_rebuild() {
    let mut fx = shown_grid();
    fx.engine.execute_sub_view("preview", Some(true)).unwrap();
    fx.engine.execute_sub_view("tree", Some(true)).unwrap();
    assert_eq!(
        fx.engine.composition().unwrap().slots(),
        vec!["grid", "search", "tree", "status"]
    );

    fx.engine.navigate(folder("b"), ShowOptions::default()).unwrap();
    assert_eq!(
        fx.engine.composition().unwrap().slots(),
        vec!["grid", "search", "tree", "status"]
    );
}

#[test]
fn test_full_rebuild_honors_the_same_choices() {
    let mut fx = shown_grid();
    fx.engine.execute_sub_view("status", Some(false)).unwrap();
    fx.engine.execute_sub_view("preview", Some(true)).unwrap();

    fx.engine.navigate(folder("b"), ShowOptions::default()).unwrap();
    assert_eq!(
        fx.engine.composition().unwrap().slots(),
        vec!["grid", "search", "preview"]
    );

    // Other node handlers keep their own choices.
    fx.engine.navigate(leaf("x"), ShowOptions::default()).unwrap();
    assert_eq!(fx.engine.composition().unwrap().slots(), vec!["detail", "status"]);
}

#[test]
fn test_reshown_sub_view_gets_its_stored_state() {
    let mut fx = shown_grid();
    fx.journal.set_state("status", json!({"x": 1}));
    fx.engine.execute_sub_view("status", Some(false)).unwrap();
    fx.journal.set_state("status", json!({"x": 2}));

    fx.engine.execute_sub_view("status", Some(true)).unwrap();

    assert_eq!(fx.journal.matching("restore:"), vec!["restore:status"]);
    assert_eq!(fx.journal.state("status"), Some(json!({"x": 1})));
}

#[test]
fn test_hiding_the_focused_sub_view_clears_focus() {
    let mut fx = shown_grid();
    let status = fx.engine.composition().unwrap().find("status").unwrap().id();
    fx.engine.focus_changed(Some(status));
    assert_eq!(fx.engine.focused(), Some(status));

    fx.engine.execute_sub_view("status", Some(false)).unwrap();

    assert_eq!(fx.engine.focused(), None);
}

#[test]
fn test_splitter_sizes_carry_to_the_next_descriptor() {
    let mut fx = shown_grid();
    let a = fx.engine.active().unwrap();

    assert!(fx.engine.resize_splitter("tree", 0.4).unwrap());
    assert!(!fx.engine.resize_splitter("status", 0.4).unwrap());
    assert!(fx.engine.resize_splitter("missing", 0.4).is_err());

    fx.engine.navigate(folder("b"), ShowOptions::default()).unwrap();

    assert_eq!(fx.engine.view_data(a).unwrap().splitters.get("tree"), Some(&0.4));
    assert_eq!(
        fx.engine.composition().unwrap().find("tree").unwrap().splitter(),
        Some(0.4)
    );
    assert_eq!(fx.engine.splitter_defaults().get("tree"), Some(&0.4));
}

#[test]
fn test_non_finite_splitter_size_is_ignored() {
    let mut fx = shown_grid();
    fx.engine.resize_splitter("tree", 0.3).unwrap();

    assert!(!fx.engine.resize_splitter("tree", f32::NAN).unwrap());
    assert!(!fx.engine.resize_splitter("tree", f32::INFINITY).unwrap());
    assert_eq!(
        fx.engine.composition().unwrap().find("tree").unwrap().splitter(),
        Some(0.3)
    );
    assert_eq!(fx.engine.splitter_defaults().get("tree"), Some(&0.3));

    let store = MemoryStore::new();
    fx.engine.save_session(&store).unwrap();
    let mut restored = FixtureBuilder::new().build();
    assert!(restored.engine.load_session(&store).unwrap().is_some());
    assert_eq!(restored.engine.splitter_defaults().get("tree"), Some(&0.3));
}

#[test]
fn test_splitter_size_is_clamped() {
    let mut fx = shown_grid();
    assert!(fx.engine.resize_splitter("tree", 1.5).unwrap());
    assert_eq!(fx.engine.splitter_defaults().get("tree"), Some(&1.0));
}
