// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dominance queries.
//!
//! Build an index over a small integer grid and run a few 2-sided queries,
//! checking each answer against a linear scan.
//!
//! Run:
//! - `cargo run -p understory_demos --example dominance_query`

use understory_dominance::{BuildError, DominanceIndexI64, Point};

fn main() {
    // A sheared grid: every column holds the same y values shifted by x.
    let mut points = Vec::new();
    for x in 0..12_i64 {
        for k in 0..6_i64 {
            points.push(Point::new(x, (k * 5 + x * 3) % 17));
        }
    }
    points.sort_by(|a, b| a.partial_cmp_xy(b).unwrap());

    let idx = DominanceIndexI64::build(&points).unwrap();
    println!(
        "built index: {} points in {} blocks, bounds {:?}",
        idx.len(),
        idx.blocks().len(),
        idx.bounds()
    );

    for q in [
        Point::new(0, 0),
        Point::new(3, 4),
        Point::new(6, 10),
        Point::new(11, 16),
        Point::new(-1, 20),
    ] {
        let mut hits = idx.query(q);
        let expected = points.iter().filter(|p| p.is_dominated_by(q)).count();
        assert_eq!(hits.len(), expected);
        assert_eq!(idx.count(q), expected);
        hits.sort_by(|a, b| a.partial_cmp_xy(b).unwrap());
        println!("q = ({}, {}): {} hits", q.x, q.y, hits.len());
        for p in hits.iter().take(6) {
            println!("  ({}, {})", p.x, p.y);
        }
        if hits.len() > 6 {
            println!("  ...");
        }
    }

    // Unsorted input is rejected with the offending position.
    let bad = [Point::new(2, 0), Point::new(1, 0)];
    match DominanceIndexI64::build(&bad) {
        Err(BuildError::Unsorted { index }) => println!("rejected unsorted input at {index}"),
        other => println!("unexpected: {other:?}"),
    }
}
