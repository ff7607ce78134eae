// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_dominance::{DominanceIndex, Point};

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point<f64>> {
    // Row-major over x, so the output is already sorted by x then y.
    let mut out = Vec::with_capacity(n * n);
    for x in 0..n {
        for y in 0..n {
            out.push(Point::new(x as f64 * cell, y as f64 * cell));
        }
    }
    out
}

fn to_rstar_points(v: &[Point<f64>]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_rstar_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("dominance_rstar_compare_f64");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10.0);
        let q = Point::new(400.0, 400.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("understory_build_query_n{}", n), |b| {
            b.iter(|| {
                let idx = DominanceIndex::build(&points).unwrap();
                black_box(idx.count(q));
            })
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    let aabb = AABB::from_corners([f64::MIN, f64::MIN], [q.x, q.y]);
                    let hits: usize = tree.locate_in_envelope(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        let idx = DominanceIndex::build(&points).unwrap();
        let tree = RTree::bulk_load(to_rstar_points(&points));
        group.bench_function(format!("understory_query_n{}", n), |b| {
            b.iter(|| black_box(idx.count(q)))
        });
        group.bench_function(format!("rstar_query_n{}", n), |b| {
            b.iter(|| {
                let aabb = AABB::from_corners([f64::MIN, f64::MIN], [q.x, q.y]);
                black_box(tree.locate_in_envelope(&aabb).count())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_compare_f64);
criterion_main!(benches);
