// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dominance layout.
//!
//! Build an index over a handful of points and print the van Emde Boas
//! layout block by block, followed by the summary tree.
//!
//! Run:
//! - `cargo run -p understory_demos --example dominance_layout`

use understory_dominance::{DominanceIndex, NodeId, Params, Point, SummaryTree};

fn print_layout(label: &str, idx: &DominanceIndex<f64>) {
    println!("== {label}: {} points, capacity {} ==", idx.len(), idx.capacity());
    for (level, block) in idx.blocks().iter().enumerate() {
        print!("  block {level} [{}..{}):", block.start, block.end);
        for p in &idx.points()[block.clone()] {
            print!(" ({}, {})", p.x, p.y);
        }
        println!();
    }
    let tree = idx.summary();
    println!(
        "  summary: {} leaf slots, {} nodes, height {}",
        tree.leaf_slots(),
        tree.node_count(),
        tree.height()
    );
    print_node(tree, NodeId::ROOT);
}

fn print_node(tree: &SummaryTree<f64>, id: NodeId) {
    let indent = 4 + 2 * id.depth() as usize;
    match tree.bounds(id) {
        Some(b) => println!(
            "{:indent$}node {} slots {:?}: x [{}, {}] y [{}, {}]",
            "",
            id.get(),
            tree.span(id),
            b.min_x,
            b.max_x,
            b.min_y,
            b.max_y
        ),
        // Padding subtrees hold nothing below them either.
        None => {
            println!("{:indent$}node {}: empty", "", id.get());
            return;
        }
    }
    if !tree.is_leaf(id) {
        print_node(tree, id.left());
        print_node(tree, id.right());
    }
}

fn main() {
    let four = [
        Point::new(-2.0, 1.0),
        Point::new(-1.0, 0.0),
        Point::new(1.0, -1.0),
        Point::new(2.0, 1.0),
    ];
    let idx = DominanceIndex::build(&four).unwrap();
    print_layout("four points", &idx);

    let eight = [
        Point::new(-4.0, 1.0),
        Point::new(-3.0, 0.0),
        Point::new(-2.0, 1.0),
        Point::new(-1.0, 0.0),
        Point::new(1.0, -1.0),
        Point::new(2.0, 1.0),
        Point::new(3.0, -1.0),
        Point::new(4.0, 1.0),
    ];
    let idx = DominanceIndex::build(&eight).unwrap();
    print_layout("eight points", &idx);

    let idx = DominanceIndex::build_with(&eight, Params::new().with_leaf_span(2)).unwrap();
    print_layout("eight points, two slots per leaf", &idx);
}
