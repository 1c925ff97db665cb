// Copyright 2025 the Stackyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use stackyard_geom::CenteredRect;
use stackyard_yard::{BundleTemplate, Yard};

/// Populate a yard with an n-by-n grid of slightly overlapping bundles, so
/// every creation collides with a handful of neighbors.
fn populate_grid(n: usize, spacing: f64) -> Yard {
    let template = BundleTemplate {
        width: spacing * 1.2,
        length: spacing * 1.2,
        height: 1.0,
        angle: 15.0,
        ..BundleTemplate::default()
    };
    let mut yard = Yard::new();
    for y in 0..n {
        for x in 0..n {
            yard.create_bundle(
                &template,
                Point::new(x as f64 * spacing, y as f64 * spacing),
            );
        }
    }
    yard
}

fn bench_overlap(c: &mut Criterion) {
    let a = CenteredRect::new(Point::new(0.0, 0.0), 4.0, 8.0, 30.0);
    let b = CenteredRect::new(Point::new(3.0, 2.0), 4.0, 8.0, -20.0);
    let far = CenteredRect::new(Point::new(40.0, 2.0), 4.0, 8.0, -20.0);
    c.bench_function("overlap/colliding", |bench| {
        bench.iter(|| black_box(a).overlaps(black_box(&b)));
    });
    c.bench_function("overlap/separated", |bench| {
        bench.iter(|| black_box(a).overlaps(black_box(&far)));
    });
}

fn bench_create(c: &mut Criterion) {
    for n in [8_usize, 16, 32] {
        let id = format!("create_bundle/{}x{}", n, n);
        c.bench_function(&id, |bench| {
            let template = BundleTemplate::default();
            bench.iter_batched(
                || populate_grid(n, 3.0),
                |mut yard| {
                    yard.create_bundle(&template, Point::new(1.5, 1.5));
                    yard
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_move(c: &mut Criterion) {
    for n in [8_usize, 16, 32] {
        let id = format!("move_bundle/{}x{}", n, n);
        c.bench_function(&id, |bench| {
            let yard = populate_grid(n, 3.0);
            let target = yard.bundles().next().expect("grid is non-empty").id();
            bench.iter_batched(
                || yard.clone(),
                |mut yard| {
                    yard.move_bundle(target, Point::new(4.5, 4.5))
                        .expect("target exists");
                    yard
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_queries(c: &mut Criterion) {
    let yard = populate_grid(32, 3.0);
    let probe = Point::new(48.0, 48.0);
    c.bench_function("bundles_at/32x32", |bench| {
        bench.iter(|| yard.bundles_at(black_box(probe)));
    });
    c.bench_function("top_bundle_at/32x32", |bench| {
        bench.iter(|| yard.top_bundle_at(black_box(probe)));
    });
}

criterion_group!(
    benches,
    bench_overlap,
    bench_create,
    bench_move,
    bench_queries
);
criterion_main!(benches);
