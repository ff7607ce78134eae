// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Split one construction level into a promoted block and a residual set.

use alloc::vec::Vec;

use crate::sparse::{is_at_or_below, sparse_x, sparse_y};
use crate::types::Point;

/// Per-level thresholds. `None` means no point falls at or below.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Thresholds<T> {
    pub(crate) x: Option<T>,
    pub(crate) y: Option<T>,
}

impl<T: Copy + PartialOrd> Thresholds<T> {
    /// Compute both thresholds for a sorted level.
    pub(crate) fn compute(points: &[Point<T>], budget: usize, candidates: &mut Vec<T>) -> Self {
        let y = sparse_y(points, budget, candidates);
        let x = sparse_x(points, y, budget);
        Self { x, y }
    }

    fn is_x_sparse(&self, p: &Point<T>) -> bool {
        is_at_or_below(p.x, self.x)
    }

    fn is_y_sparse(&self, p: &Point<T>) -> bool {
        is_at_or_below(p.y, self.y)
    }

    /// Whether `p` stays in the residual set for the next level.
    fn keeps(&self, p: &Point<T>) -> bool {
        !self.is_x_sparse(p) || self.is_y_sparse(p)
    }
}

/// Append the promoted points of `level` to `out`; return how many were appended.
///
/// These are the points of the x-sparse prefix that are not y-sparse. Points that
/// are both stay in the residual, so no point is placed twice.
pub(crate) fn extract_promoted<T: Copy + PartialOrd>(
    level: &[Point<T>],
    th: &Thresholds<T>,
    out: &mut Vec<Point<T>>,
) -> usize {
    let before = out.len();
    out.extend(
        level
            .iter()
            .take_while(|p| th.is_x_sparse(p))
            .filter(|p| !th.keeps(p)),
    );
    out.len() - before
}

/// Append the residual points of `level` to `out` in order; return how many were appended.
///
/// A point is residual when its x is above the x threshold or its y is at or
/// below the y threshold.
pub(crate) fn extract_residual<T: Copy + PartialOrd>(
    level: &[Point<T>],
    th: &Thresholds<T>,
    out: &mut Vec<Point<T>>,
) -> usize {
    let before = out.len();
    out.extend(level.iter().filter(|p| th.keeps(p)));
    out.len() - before
}
