// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_dominance::{DominanceIndex, Params, Point};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn sorted(mut v: Vec<Point<f64>>) -> Vec<Point<f64>> {
    v.sort_by(|a, b| a.partial_cmp_xy(b).unwrap());
    v
}

fn gen_uniform_points(count: usize, extent: f64) -> Vec<Point<f64>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    sorted(
        (0..count)
            .map(|_| Point::new(rng.next_f64() * extent, rng.next_f64() * extent))
            .collect(),
    )
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point<f64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    sorted(out)
}

fn gen_queries(count: usize, extent: f64) -> Vec<Point<f64>> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("dominance_build");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n, 1000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{}", n), |b| {
            b.iter(|| {
                let idx = DominanceIndex::build(black_box(&points)).unwrap();
                black_box(idx.len());
            })
        });
    }
    let points = gen_clustered_points(64, 256, 40.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("clustered", |b| {
        b.iter(|| {
            let idx = DominanceIndex::build(black_box(&points)).unwrap();
            black_box(idx.len());
        })
    });
    for &leaf_span in &[1usize, 8, 32] {
        let points = gen_uniform_points(10_000, 1000.0);
        let params = Params::new().with_leaf_span(leaf_span);
        group.bench_function(format!("uniform_n10000_leaf{}", leaf_span), |b| {
            b.iter(|| {
                let idx = DominanceIndex::build_with(black_box(&points), params).unwrap();
                black_box(idx.len());
            })
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("dominance_query");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n, 1000.0);
        let idx = DominanceIndex::build(&points).unwrap();
        // Small corners keep the output size low so pruning dominates.
        let queries = gen_queries(256, 200.0);
        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_function(format!("index_query_n{}", n), |b| {
            b.iter_batched(
                Vec::new,
                |mut out| {
                    for q in &queries {
                        out.clear();
                        idx.query_into(*q, &mut out);
                        black_box(out.len());
                    }
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("index_count_n{}", n), |b| {
            b.iter(|| {
                let total: usize = queries.iter().map(|q| idx.count(*q)).sum();
                black_box(total);
            })
        });

        group.bench_function(format!("linear_scan_n{}", n), |b| {
            b.iter(|| {
                let total: usize = queries
                    .iter()
                    .map(|q| points.iter().filter(|p| p.is_dominated_by(*q)).count())
                    .sum();
                black_box(total);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
