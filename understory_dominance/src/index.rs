// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `DominanceIndex` API.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;
use core::ops::Range;

use log::debug;

use crate::error::BuildError;
use crate::layout::build_layout;
use crate::params::Params;
use crate::query::for_each_dominated;
use crate::summary::{NodeId, SummaryTree};
use crate::types::{Aabb2D, Point};

/// A static index answering 2-sided (dominance) queries over a fixed point set.
///
/// Built once from points sorted by x then y; immutable afterwards. Queries take
/// `&self`, so a built index can be shared across threads freely.
#[derive(Clone, Debug)]
pub struct DominanceIndex<T> {
    params: Params,
    points: Vec<Point<T>>,
    blocks: Vec<Range<usize>>,
    tree: SummaryTree<T>,
}

impl<T: Copy + PartialOrd + Debug> DominanceIndex<T> {
    /// Build an index with default [`Params`].
    ///
    /// `points` must be non-empty, free of incomparable coordinates, and sorted
    /// by x, then y. The index keeps its own copy of the points.
    pub fn build(points: &[Point<T>]) -> Result<Self, BuildError> {
        Self::build_with(points, Params::default())
    }

    /// Build an index with explicit parameters.
    pub fn build_with(points: &[Point<T>], params: Params) -> Result<Self, BuildError> {
        params.validate()?;
        check_input(points)?;
        let layout = build_layout(points, &params)?;
        let tree = SummaryTree::build(&layout.points, params.leaf_span());
        debug!(
            "built dominance index: {} points, capacity {}, {} blocks, {} leaf slots",
            layout.points.len(),
            layout.points.capacity(),
            layout.blocks.len(),
            tree.leaf_slots()
        );
        Ok(Self {
            params,
            points: layout.points,
            blocks: layout.blocks,
            tree,
        })
    }

    /// All stored points `p` with `p.x <= q.x` and `p.y <= q.y`, in layout order.
    pub fn query(&self, q: Point<T>) -> Vec<Point<T>> {
        let mut out = Vec::new();
        self.query_into(q, &mut out);
        out
    }

    /// Iterate the stored points dominated by `q`, in layout order.
    pub fn query_iter(&self, q: Point<T>) -> impl Iterator<Item = Point<T>> + '_ {
        self.query(q).into_iter()
    }

    /// Like [`query`](Self::query), but appends to `out`.
    pub fn query_into(&self, q: Point<T>, out: &mut Vec<Point<T>>) {
        for_each_dominated(&self.tree, &self.points, q, |run| out.extend_from_slice(run));
    }

    /// Number of stored points dominated by `q`.
    ///
    /// Subtrees entirely inside the query region are counted by span length
    /// without visiting their points.
    pub fn count(&self, q: Point<T>) -> usize {
        let mut n = 0;
        for_each_dominated(&self.tree, &self.points, q, |run| n += run.len());
        n
    }

    /// Bounding box of all stored points.
    pub fn bounds(&self) -> Aabb2D<T> {
        // A built index is never empty, so the root always has bounds.
        self.tree
            .bounds(NodeId::ROOT)
            .unwrap_or_else(|| Aabb2D::from_point(self.points[0]))
    }
}

impl<T> DominanceIndex<T> {
    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: building from zero points is an error.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Slots reserved for the layout at construction time.
    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    /// Stored points in van Emde Boas layout order.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Slot ranges of the layout blocks, one per construction level plus the
    /// flushed tail if it was non-empty.
    pub fn blocks(&self) -> &[Range<usize>] {
        &self.blocks
    }

    /// The summary tree over [`points`](Self::points).
    pub fn summary(&self) -> &SummaryTree<T> {
        &self.tree
    }

    /// Number of summary-tree nodes, including empty padding.
    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    /// Number of summary-tree leaves that hold points.
    pub fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }

    /// Parameters the index was built with.
    pub fn params(&self) -> Params {
        self.params
    }
}

fn check_input<T: Copy + PartialOrd>(points: &[Point<T>]) -> Result<(), BuildError> {
    let Some(first) = points.first() else {
        return Err(BuildError::Empty);
    };
    if !first.is_comparable() {
        return Err(BuildError::Incomparable { index: 0 });
    }
    for (i, w) in points.windows(2).enumerate() {
        let index = i + 1;
        if !w[1].is_comparable() {
            return Err(BuildError::Incomparable { index });
        }
        if w[0].partial_cmp_xy(&w[1]) == Some(Ordering::Greater) {
            return Err(BuildError::Unsorted { index });
        }
    }
    Ok(())
}

/// Dominance index with `f32` coordinates.
pub type DominanceIndexF32 = DominanceIndex<f32>;

/// Dominance index with `f64` coordinates.
pub type DominanceIndexF64 = DominanceIndex<f64>;

/// Dominance index with `i64` coordinates.
pub type DominanceIndexI64 = DominanceIndex<i64>;
