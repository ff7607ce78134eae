// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Summary tree: a complete binary tree of bounding boxes over the layout.
//!
//! Nodes live in one vector in heap order: the root is `1`, the children of
//! `i` are `2i` and `2i + 1`, and its parent is `i / 2`. Slot `0` is unused.
//! There are `leaf_slots` leaves (a power of two); leaf `j` is node
//! `leaf_slots + j` and summarizes layout slots
//! `[j * leaf_span, (j + 1) * leaf_span)`, clipped to the layout length.
//! Leaves past the end are empty padding.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use crate::types::{Aabb2D, Point, union_opt};

/// Identifier of a node in a [`SummaryTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node.
    pub const ROOT: Self = Self(1);

    /// Heap index of this node.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Parent node, or `None` for the root.
    pub const fn parent(self) -> Option<Self> {
        if self.0 > 1 {
            Some(Self(self.0 / 2))
        } else {
            None
        }
    }

    /// Left child. Only meaningful for internal nodes.
    pub const fn left(self) -> Self {
        Self(2 * self.0)
    }

    /// Right child. Only meaningful for internal nodes.
    pub const fn right(self) -> Self {
        Self(2 * self.0 + 1)
    }

    /// Depth below the root.
    pub const fn depth(self) -> u32 {
        self.0.ilog2()
    }
}

/// Complete binary tree of bounding boxes over a layout.
#[derive(Clone, Debug)]
pub struct SummaryTree<T> {
    /// `None` marks an empty subtree.
    nodes: Vec<Option<Aabb2D<T>>>,
    leaf_slots: usize,
    leaf_span: usize,
    len: usize,
}

impl<T: Copy + PartialOrd> SummaryTree<T> {
    /// Build the tree bottom-up over `points` with `leaf_span` slots per leaf.
    ///
    /// `leaf_span` must be at least 1.
    pub(crate) fn build(points: &[Point<T>], leaf_span: usize) -> Self {
        let leaves = points.len().div_ceil(leaf_span).max(1);
        let leaf_slots = leaves.next_power_of_two();
        let mut nodes = vec![None; 2 * leaf_slots];
        for (j, chunk) in points.chunks(leaf_span).enumerate() {
            nodes[leaf_slots + j] = Aabb2D::from_points(chunk);
        }
        for i in (1..leaf_slots).rev() {
            nodes[i] = union_opt(nodes[2 * i], nodes[2 * i + 1]);
        }
        Self {
            nodes,
            leaf_slots,
            leaf_span,
            len: points.len(),
        }
    }

    /// Bounding box of the node's subtree, or `None` if it holds no points.
    pub fn bounds(&self, id: NodeId) -> Option<Aabb2D<T>> {
        self.nodes.get(id.0).copied().flatten()
    }
}

impl<T> SummaryTree<T> {
    /// Number of leaf slots, including empty padding. Always a power of two.
    pub fn leaf_slots(&self) -> usize {
        self.leaf_slots
    }

    /// Number of leaves holding at least one layout slot.
    pub fn leaf_count(&self) -> usize {
        self.len.div_ceil(self.leaf_span)
    }

    /// Number of nodes, including empty ones.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Layout slots summarized by one leaf.
    pub fn leaf_span(&self) -> usize {
        self.leaf_span
    }

    /// Depth of the leaves.
    pub fn height(&self) -> u32 {
        self.leaf_slots.trailing_zeros()
    }

    /// Whether `id` names a node of this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 >= 1 && id.0 < self.nodes.len()
    }

    /// Whether `id` is a leaf.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        id.0 >= self.leaf_slots
    }

    /// Layout slots covered by the node's subtree.
    ///
    /// Empty for padding, and for ids that do not name a node of this tree.
    pub fn span(&self, id: NodeId) -> Range<usize> {
        if !self.contains(id) {
            return 0..0;
        }
        let shift = self.height() - id.depth();
        let first_leaf = (id.0 << shift) - self.leaf_slots;
        let start = (first_leaf * self.leaf_span).min(self.len);
        let end = ((first_leaf + (1 << shift)) * self.leaf_span).min(self.len);
        start..end
    }
}
