//! Placement benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scatter_core::{Rect, Viewport, Zone};
use scatter_layout::{place, PlacementConfig, PlacementRequest};

/// A desktop scene with the usual chrome: header, center badge, footnote.
fn desktop_request(count: usize) -> PlacementRequest {
    let viewport = Viewport::new(1920.0, 1080.0);
    PlacementRequest::new(count, viewport)
        .with_zone(Zone::Rect(Rect::new(0.0, 0.0, 1920.0, 100.0)))
        .with_zone(Zone::Circle {
            center: viewport.center(),
            radius: 200.0,
        })
        .with_zone(Zone::Rect(Rect::new(0.0, 1040.0, 1920.0, 40.0)))
}

fn place_sparse(c: &mut Criterion) {
    let request = desktop_request(12);
    c.bench_function("place_sparse", |b| {
        b.iter(|| place(black_box(&request), &mut StdRng::seed_from_u64(7)))
    });
}

fn place_crowded(c: &mut Criterion) {
    // Enough items to force several shrink passes.
    let request = desktop_request(250)
        .with_config(PlacementConfig::default().with_min_size(12.0));
    c.bench_function("place_crowded", |b| {
        b.iter(|| place(black_box(&request), &mut StdRng::seed_from_u64(7)))
    });
}

criterion_group!(benches, place_sparse, place_crowded);
criterion_main!(benches);
