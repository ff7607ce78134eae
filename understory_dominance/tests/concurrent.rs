// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A built index answers queries from many threads at once.

use std::sync::Arc;
use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_dominance::{DominanceIndex, Point};

fn input(n: usize) -> Vec<Point<i64>> {
    let mut rng = StdRng::seed_from_u64(0xC0C0_0001);
    let mut v: Vec<_> = (0..n)
        .map(|_| Point::new(rng.gen_range(0..1000), rng.gen_range(0..1000)))
        .collect();
    v.sort_by(|a, b| a.partial_cmp_xy(b).unwrap());
    v
}

#[test]
fn scoped_threads_share_a_borrowed_index() {
    let points = input(10_000);
    let idx = DominanceIndex::build(&points).unwrap();
    let expected: Vec<_> = (0..8)
        .map(|t| {
            let q = Point::new(t * 125, 1000 - t * 125);
            points.iter().filter(|p| p.is_dominated_by(q)).count()
        })
        .collect();

    thread::scope(|s| {
        for (t, want) in expected.iter().enumerate() {
            let idx = &idx;
            s.spawn(move || {
                let t = t as i64;
                let q = Point::new(t * 125, 1000 - t * 125);
                for _ in 0..50 {
                    assert_eq!(idx.count(q), *want);
                    assert_eq!(idx.query(q).len(), *want);
                }
            });
        }
    });
}

#[test]
fn arc_shared_index_across_spawned_threads() {
    let points = input(2_000);
    let idx = Arc::new(DominanceIndex::build(&points).unwrap());
    let handles: Vec<_> = (0..4_i64)
        .map(|t| {
            let idx = Arc::clone(&idx);
            thread::spawn(move || idx.count(Point::new(250 * (t + 1), 999)))
        })
        .collect();
    let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(counts.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(counts[3], points.iter().filter(|p| p.y <= 999).count());
}
