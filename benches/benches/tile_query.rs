// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use spyglass_tiles::{FlatTiles, GridSpec, TileGrid, TileSource};
use spyglass_view::{ScreenSize, ViewMode, Viewport};

const TILE: f64 = 32.0;

fn grid(n: u32) -> TileGrid<u8> {
    TileGrid::generate_seeded(&GridSpec::centered(n, n, TILE), 123, |_, tone| tone)
        .expect("valid grid spec")
}

/// Camera-sized boxes scattered over the grid.
fn gen_view_boxes(spec: &GridSpec, count: usize, size: (f64, f64)) -> Vec<Rect> {
    let world = spec.world_rect();
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_B0C5);
    (0..count)
        .map(|_| {
            let center = Point::new(
                rng.gen_range(world.x0..world.x1),
                rng.gen_range(world.y0..world.y1),
            );
            Rect::from_center_size(center, size)
        })
        .collect()
}

fn count_tiles<S: TileSource<u8>>(source: &S, boxes: &[Rect]) -> usize {
    boxes.iter().map(|&bbox| source.tiles_in(bbox).count()).sum()
}

fn bench_query_vs_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_viewport_400x300");
    for &n in &[16_u32, 50, 200] {
        let grid = grid(n);
        let flat = FlatTiles::from_grid(&grid);
        let boxes = gen_view_boxes(&GridSpec::centered(n, n, TILE), 64, (400.0, 300.0));
        group.throughput(Throughput::Elements(boxes.len() as u64));
        group.bench_function(BenchmarkId::new("TileGrid", n), |b| {
            b.iter(|| black_box(count_tiles(&grid, &boxes)));
        });
        group.bench_function(BenchmarkId::new("FlatTiles", n), |b| {
            b.iter(|| black_box(count_tiles(&flat, &boxes)));
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_seeded");
    for &n in &[50_u32, 200] {
        let spec = GridSpec::centered(n, n, TILE);
        group.throughput(Throughput::Elements(u64::from(n) * u64::from(n)));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                let grid = TileGrid::generate_seeded(&spec, 123, |_, tone| tone);
                black_box(grid.map(|g| g.len()))
            });
        });
    }
    group.finish();
}

fn bench_camera_frame(c: &mut Criterion) {
    let grid = grid(50);
    let screen = ScreenSize::new(1000, 600);
    let mut group = c.benchmark_group("camera_frame");
    for mode in [ViewMode::Letterbox, ViewMode::Expand] {
        let mut view =
            Viewport::new(mode, Rect::new(0.0, 0.0, 400.0, 300.0)).expect("valid region");
        group.bench_function(format!("{mode:?}"), |b| {
            let mut t = 0.0_f64;
            b.iter(|| {
                t += 1.0;
                view.lerp_to(Point::new(t.sin() * 500.0, t.cos() * 500.0), 0.1);
                let bbox = view.get_bounding_box(screen).expect("non-empty screen");
                black_box(grid.query(bbox).count())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_query_vs_scan, bench_generate, bench_camera_frame);
criterion_main!(benches);
