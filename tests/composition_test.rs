//! Composition lifecycle tests: hook ordering, state capture and restore,
//! control reuse and the single active descriptor.

mod common;

use common::*;
use multiview::engine::{Direction, EnginePhase};
use multiview::error::ErrorCategory;
use multiview::models::{Position, ViewLifecycle};
use multiview::ShowOptions;
use serde_json::json;

// ============================================================================
// Hook ordering
// ============================================================================

#[test]
fn test_first_show_runs_main_then_sub_views_in_declared_order() {
    let mut fx = FixtureBuilder::new().build();

    let id = fx
        .engine
        .navigate(folder("a"), ShowOptions::default())
        .unwrap()
        .expect("navigation shows a view");

    assert_eq!(
        fx.journal.events(),
        vec!["show:grid", "show:search", "show:tree", "show:status"]
    );
    assert_eq!(fx.engine.active(), Some(id));
    assert_eq!(fx.engine.phase(), EnginePhase::Active);
    assert_eq!(
        fx.engine.view_data(id).unwrap().current_view_type.as_deref(),
        Some("grid")
    );
}

#[test]
fn test_hide_runs_sub_views_in_reverse_then_main() {
    let mut fx = FixtureBuilder::new().build();
    fx.engine.navigate(folder("a"), ShowOptions::default()).unwrap();
    fx.journal.clear();

    fx.engine.navigate(folder("b"), ShowOptions::default()).unwrap();

    assert_eq!(
        fx.journal.events(),
        vec![
            "hide:status",
            "hide:tree",
            "hide:search",
            "hide:grid",
            "show:grid",
            "show:search",
            "show:tree",
            "show:status",
        ]
    );
}

#[test]
fn test_host_receives_controls_in_composition_order() {
    let mut fx = FixtureBuilder::new().build();
    fx.engine.navigate(folder("a"), ShowOptions::default()).unwrap();

    assert_eq!(fx.host.attached_slots(), vec!["grid", "search", "tree", "status"]);

    let composition = fx.engine.composition().unwrap();
    assert_eq!(composition.slots(), vec!["grid", "search", "tree", "status"]);
    let layout = composition.layout();
    let positions: Vec<Position> = layout.iter().map(|g| g.position).collect();
    assert_eq!(positions, vec![Position::Top, Position::Left, Position::Bottom]);
    assert_eq!(composition.find("tree").unwrap().splitter(), Some(0.25));
}

// ============================================================================
// Same descriptor
// ============================================================================

#[test]
fn test_showing_the_active_view_again_is_a_no_op() {
    let mut fx = FixtureBuilder::new().build();
    let id = fx
        .engine
        .navigate(folder("a"), ShowOptions::default())
        .unwrap()
        .unwrap();
    fx.journal.clear();
    fx.host.clear_ops();

    let again = fx.engine.navigate(folder("a"), ShowOptions::default()).unwrap();

    assert_eq!(again, Some(id));
    assert!(fx.journal.events().is_empty());
    assert!(fx.host.ops().is_empty());
    assert_eq!(fx.engine.history().len(), 1);
}

#[test]
fn test_view_type_switch_rebuilds_without_animation() {
    let mut fx = FixtureBuilder::new().build();
    let id = fx
        .engine
        .navigate(folder("a"), ShowOptions::default())
        .unwrap()
        .unwrap();
    fx.journal.clear();

    fx.engine.switch_view_type("list").unwrap();

    assert_eq!(fx.engine.active(), Some(id));
    assert_eq!(
        fx.journal.events(),
        vec![
            "hide:status",
            "hide:tree",
            "hide:search",
            "hide:grid",
            "show:list",
            "show:search",
            "show:status",
        ]
    );
    assert!(fx.host.transitions().is_empty());
    assert!(!fx.engine.is_animating());
    assert_eq!(
        fx.engine
            .node_state("folder")
            .and_then(|s| s.last_view_type.as_deref()),
        Some("list")
    );
}

#[test]
fn test_remembered_view_type_applies_to_new_descriptors() {
    let mut fx = FixtureBuilder::new().build();
    fx.engine.navigate(folder("a"), ShowOptions::default()).unwrap();
    fx.engine.switch_view_type("list").unwrap();

    fx.engine.navigate(folder("b"), ShowOptions::default()).unwrap();

    assert_eq!(fx.engine.composition().unwrap().view_type(), "list");
}

// ============================================================================
// State capture and restore
// ============================================================================

#[test]
fn test_state_is_captured_on_hide_and_restored_on_return() {
    let mut fx = FixtureBuilder::new().build();
    let a = fx
        .engine
        .navigate(folder("a"), ShowOptions::default())
        .unwrap()
        .unwrap();
    fx.journal.set_state("grid", json!({"scroll": 5}));

    fx.engine.navigate(folder("b"), ShowOptions::default()).unwrap();
    assert_eq!(
        fx.engine.view_data(a).unwrap().controls_state.get("grid"),
        Some(&json!({"scroll": 5}))
    );

    // b scrolls somewhere else before the user goes back.
    fx.journal.set_state("grid", json!({"scroll": 9}));
    fx.journal.clear();
    fx.engine.go_back().unwrap();

    assert!(fx.journal.events().contains(&"restore:grid".to_string()));
    assert_eq!(fx.journal.state("grid"), Some(json!({"scroll": 5})));
}

#[test]
fn test_restore_can_be_skipped() {
    let mut fx = FixtureBuilder::new().build();
    let a = fx
        .engine
        .navigate(folder("a"), ShowOptions::default())
        .unwrap()
        .unwrap();
    fx.journal.set_state("grid", json!({"scroll": 5}));
    fx.engine.navigate(folder("b"), ShowOptions::default()).unwrap();
    fx.journal.clear();

    let options = ShowOptions {
        restore_state: false,
        ..ShowOptions::default()
    };
    fx.engine.show_view(a, options).unwrap();

    assert!(fx.journal.matching("restore:").is_empty());
}

// ============================================================================
// Control reuse
// ============================================================================

#[test]
fn test_controls_are_reused_across_descriptors() {
    let mut fx = FixtureBuilder::new().build();
    fx.engine.navigate(folder("a"), ShowOptions::default()).unwrap();
    let first = fx.engine.composition().unwrap().instance_ids();

    fx.engine.navigate(folder("b"), ShowOptions::default()).unwrap();
    let second = fx.engine.composition().unwrap().instance_ids();

    assert_eq!(first, second);
    assert!(fx.host.destroyed().is_empty());
    let (hits, misses) = fx.engine.cache().stats();
    assert_eq!((hits, misses), (4, 4));
}

#[test]
fn test_each_visit_runs_one_show_hide_pair_per_control() {
    let mut fx = FixtureBuilder::new().build();
    fx.engine.navigate(folder("a"), ShowOptions::default()).unwrap();
    let first = fx.engine.composition().unwrap().instance_ids();

    fx.engine.navigate(leaf("x"), ShowOptions::default()).unwrap();
    fx.engine.go_back().unwrap();

    assert_eq!(fx.engine.composition().unwrap().instance_ids(), first);
    for slot in ["grid", "search", "tree"] {
        assert_eq!(fx.journal.matching(&format!("show:{slot}")).len(), 2, "{slot}");
        assert_eq!(fx.journal.matching(&format!("hide:{slot}")).len(), 1, "{slot}");
    }
    assert_eq!(fx.journal.matching("show:detail").len(), 1);
    assert_eq!(fx.journal.matching("hide:detail").len(), 1);
    // The detail view has its own status bar.
    assert_eq!(fx.journal.matching("show:status").len(), 3);
    assert_eq!(fx.journal.matching("hide:status").len(), 2);
}

#[test]
fn test_non_reusable_control_is_destroyed_on_hide() {
    let mut fx = FixtureBuilder::new().build();
    fx.engine.navigate(leaf("x"), ShowOptions::default()).unwrap();
    let detail = fx.engine.composition().unwrap().main().unwrap().id();

    fx.engine.navigate(folder("a"), ShowOptions::default()).unwrap();

    assert_eq!(fx.host.destroyed(), vec![detail]);
    assert_eq!(fx.journal.matching("destroy:"), vec!["destroy:Detail"]);
    assert!(!fx.engine.cache().contains("Detail"));
}

#[test]
fn test_exactly_one_descriptor_is_active() {
    let mut fx = FixtureBuilder::new().build();
    for key in ["a", "b", "c"] {
        fx.engine.navigate(folder(key), ShowOptions::default()).unwrap();
    }
    fx.engine.go_back().unwrap();

    let active: Vec<_> = fx
        .engine
        .history()
        .iter()
        .filter(|data| data.lifecycle() == ViewLifecycle::Active)
        .map(|data| data.id())
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(Some(active[0]), fx.engine.active());
}

// ============================================================================
// Animation
// ============================================================================

#[test]
fn test_transitions_follow_history_direction() {
    let mut fx = FixtureBuilder::new().build();
    fx.engine.navigate(folder("a"), ShowOptions::default()).unwrap();
    fx.engine.navigate(folder("b"), ShowOptions::default()).unwrap();
    assert!(fx.engine.is_animating());
    fx.engine.finish_transition();

    fx.engine.go_back().unwrap();

    assert_eq!(fx.host.transitions(), vec![Direction::ZoomIn, Direction::ZoomOut]);
}

#[test]
fn test_unfinished_transition_is_skipped_before_hiding() {
    let mut fx = FixtureBuilder::new().build();
    fx.engine.navigate(folder("a"), ShowOptions::default()).unwrap();
    fx.engine.navigate(folder("b"), ShowOptions::default()).unwrap();
    fx.host.clear_ops();

    fx.engine.navigate(folder("c"), ShowOptions::default()).unwrap();

    assert_eq!(fx.host.ops().first(), Some(&HostOp::SkipTransition));
}

#[test]
fn test_no_animation_when_disabled_or_programmatic() {
    let mut config = test_config();
    config.animations = false;
    let mut fx = FixtureBuilder::new().config(config).build();
    fx.engine.navigate(folder("a"), ShowOptions::default()).unwrap();
    fx.engine.navigate(folder("b"), ShowOptions::default()).unwrap();
    assert!(fx.host.transitions().is_empty());

    let mut fx = FixtureBuilder::new().build();
    fx.engine.navigate(folder("a"), ShowOptions::programmatic()).unwrap();
    fx.engine.navigate(folder("b"), ShowOptions::programmatic()).unwrap();
    fx.engine
        .navigate(multiview::models::NodeRef::new("queue", ""), ShowOptions::default())
        .unwrap();
    assert!(fx.host.transitions().is_empty());
}

// ============================================================================
// Data-only preparation
// ============================================================================

#[test]
fn test_prepare_data_runs_data_only_and_caches_the_control() {
    let mut fx = FixtureBuilder::new().build();
    let a = fx
        .engine
        .navigate(folder("a"), ShowOptions::default())
        .unwrap()
        .unwrap();
    fx.engine.navigate(folder("b"), ShowOptions::default()).unwrap();
    fx.journal.clear();

    fx.engine.prepare_data(a, None).unwrap();

    assert_eq!(fx.journal.events(), vec!["prepare:grid", "hide:grid"]);
    assert!(fx.engine.cache().contains("Grid"));
    assert_ne!(fx.engine.active(), Some(a));
    assert!(!fx.engine.view_data(a).unwrap().is_active());
}

#[test]
fn test_prepare_data_ignores_active_descriptor() {
    let mut fx = FixtureBuilder::new().build();
    let a = fx
        .engine
        .navigate(folder("a"), ShowOptions::default())
        .unwrap()
        .unwrap();
    fx.journal.clear();

    fx.engine.prepare_data(a, None).unwrap();

    assert!(fx.journal.events().is_empty());
}

// ============================================================================
// Configuration errors
// ============================================================================

#[test]
fn test_unknown_node_handler_is_a_configuration_error() {
    let mut fx = FixtureBuilder::new().build();
    fx.engine.navigate(folder("a"), ShowOptions::default()).unwrap();

    let err = fx
        .engine
        .navigate(multiview::models::NodeRef::new("nope", "1"), ShowOptions::default())
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert!(!err.is_recoverable());
    assert_eq!(fx.engine.history().len(), 1);
}

#[test]
fn test_unavailable_view_type_leaves_active_view_alone() {
    let mut fx = FixtureBuilder::new().build();
    let a = fx
        .engine
        .navigate(folder("a"), ShowOptions::default())
        .unwrap()
        .unwrap();
    fx.journal.clear();

    let err = fx.engine.switch_view_type("detail").unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert_eq!(fx.engine.active(), Some(a));
    assert!(fx.journal.events().is_empty());
}
