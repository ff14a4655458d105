//! Performance benchmarks for view composition
//!
//! Measures full rebuilds, cached control reuse and single sub-view toggles
//! over the media library tables.
//! Run with: cargo bench

use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use multiview::adapters::LogHost;
use multiview::config::MultiviewConfig;
use multiview::library::{media_library, StaticLibrary};
use multiview::models::NodeRef;
use multiview::{Multiview, ShowOptions};

fn engine(history_limit: usize) -> Multiview {
    let library = StaticLibrary::new();
    let registry = media_library(Rc::new(library)).expect("library tables are valid");
    let config = MultiviewConfig {
        animations: false,
        history_limit,
        ..MultiviewConfig::default()
    };
    Multiview::new(Rc::new(registry), LogHost::new(), config)
}

/// Benchmark walking through albums, reusing cached controls
fn bench_navigate_albums(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigate_albums");

    for limit in [2, 10, 50].iter() {
        let mut engine = engine(*limit);
        let nodes = StaticLibrary::new().album_nodes();

        group.bench_with_input(BenchmarkId::from_parameter(format!("history_{}", limit)), limit, |b, _| {
            b.iter(|| {
                for node in &nodes {
                    let _ = black_box(engine.navigate(node.clone(), ShowOptions::default()));
                    engine.run_until_stalled();
                }
            });
        });
    }

    group.finish();
}

/// Benchmark switching view type on the same descriptor
fn bench_switch_view_type(c: &mut Criterion) {
    let mut engine = engine(50);
    engine
        .navigate(NodeRef::new("albums", ""), ShowOptions::default())
        .expect("albums node is registered");

    c.bench_function("switch_view_type", |b| {
        b.iter(|| {
            let _ = black_box(engine.switch_view_type("albumList"));
            let _ = black_box(engine.switch_view_type("albumGrid"));
        });
    });
}

/// Benchmark toggling a sub-view without rebuilding the composition
fn bench_toggle_sub_view(c: &mut Criterion) {
    let mut engine = engine(50);
    engine
        .navigate(NodeRef::new("albums", ""), ShowOptions::default())
        .expect("albums node is registered");

    c.bench_function("toggle_preview_panel", |b| {
        b.iter(|| {
            let _ = black_box(engine.execute_sub_view("previewPanel", None));
        });
    });
}

criterion_group!(
    benches,
    bench_navigate_albums,
    bench_switch_view_type,
    bench_toggle_sub_view
);
criterion_main!(benches);
