//! Grid layout benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lightgrid::{run_scene, Scene};

fn grid_scene(items: usize, columns: u32, resizes: usize) -> Scene {
    let items_json: Vec<String> = (0..items)
        .map(|i| {
            let row = i as u32 / columns;
            let col = i as u32 % columns;
            format!(r#"{{"rows": 1, "cols": 1, "x": {}, "y": {}}}"#, row, col)
        })
        .collect();
    let resizes_json: Vec<String> = (0..resizes)
        .map(|i| format!(r#"{{"width": {}, "height": 720}}"#, 800 + 40 * i))
        .collect();

    let json = format!(
        r#"{{"options": {{"cols": {}, "fluid": true}}, "items": [{}], "resizes": [{}]}}"#,
        columns,
        items_json.join(","),
        resizes_json.join(",")
    );
    Scene::from_json(&json).expect("benchmark scene is valid")
}

/// Benchmark the initial layout pass.
fn bench_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialize");
    for items in [16, 256, 4096] {
        let scene = grid_scene(items, 8, 0);
        group.bench_with_input(BenchmarkId::from_parameter(items), &scene, |b, scene| {
            b.iter(|| run_scene(black_box(scene)).expect("layout succeeds"))
        });
    }
    group.finish();
}

/// Benchmark fluid recomputes.
fn bench_resize_replay(c: &mut Criterion) {
    let scene = grid_scene(256, 8, 10);
    c.bench_function("resize_replay_256x10", |b| {
        b.iter(|| run_scene(black_box(&scene)).expect("layout succeeds"))
    });
}

criterion_group!(benches, bench_initialize, bench_resize_replay);
criterion_main!(benches);
