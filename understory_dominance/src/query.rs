// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dominance query traversal.

use alloc::vec::Vec;
use core::slice;

use crate::summary::{NodeId, SummaryTree};
use crate::types::Point;

/// Visit every point of `points` dominated by `q`, in layout order.
///
/// `emit` receives runs of dominated points: a whole subtree span when the
/// node's box lies inside the query region, or single points tested at leaves.
/// Subtrees whose box lies entirely outside are skipped.
pub(crate) fn for_each_dominated<T, F>(
    tree: &SummaryTree<T>,
    points: &[Point<T>],
    q: Point<T>,
    mut emit: F,
) where
    T: Copy + PartialOrd,
    F: FnMut(&[Point<T>]),
{
    // Depth-first with the left child on top: at most one pending sibling per level.
    let mut stack: Vec<NodeId> = Vec::with_capacity(tree.height() as usize + 2);
    stack.push(NodeId::ROOT);
    while let Some(id) = stack.pop() {
        let Some(bounds) = tree.bounds(id) else {
            continue;
        };
        if bounds.is_outside_dominance_of(q) {
            continue;
        }
        if bounds.is_dominated_by(q) {
            emit(&points[tree.span(id)]);
        } else if tree.is_leaf(id) {
            for p in &points[tree.span(id)] {
                if p.is_dominated_by(q) {
                    emit(slice::from_ref(p));
                }
            }
        } else {
            stack.push(id.right());
            stack.push(id.left());
        }
    }
}
