// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use thiserror::Error;

/// Errors returned by [`DominanceIndex::build`](crate::DominanceIndex::build).
///
/// The first four variants are caller mistakes. The remaining ones signal a
/// broken internal invariant during layout construction; construction stops
/// before anything is written out of bounds.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The input contained no points.
    #[error("cannot build an index over zero points")]
    Empty,

    /// The point at `index` sorts before its predecessor (order is x, then y).
    #[error("input is not sorted by x then y at index {index}")]
    Unsorted {
        /// Position of the first out-of-order point.
        index: usize,
    },

    /// The point at `index` has a coordinate that does not compare (e.g. NaN).
    #[error("point at index {index} has an incomparable coordinate")]
    Incomparable {
        /// Position of the offending point.
        index: usize,
    },

    /// Construction parameters are out of range.
    #[error("invalid parameters: {0}")]
    InvalidParams(&'static str),

    /// A level would write past the fixed layout capacity.
    #[error("layout capacity {capacity} exceeded: {required} slots required")]
    CapacityExceeded {
        /// Slots reserved for the layout.
        capacity: usize,
        /// Slots the next write would need.
        required: usize,
    },

    /// The layout (or one partition step) did not account for every point.
    #[error("layout holds {filled} points, expected {expected}")]
    LengthMismatch {
        /// Number of points that should have been placed.
        expected: usize,
        /// Number of points actually placed.
        filled: usize,
    },

    /// A construction level did not shrink the residual set.
    #[error("construction level {level} made no progress on {size} points")]
    Stalled {
        /// Zero-based level number.
        level: usize,
        /// Residual size at that level.
        size: usize,
    },
}
