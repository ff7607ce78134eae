// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse-threshold finder.
//!
//! For a point set of size `n` and a budget `b` (see [`Params::sparse_budget`]),
//! a subset is *sparse* when it holds at most `b` points.
//!
//! - [`sparse_y`] finds the largest y value `t` such that `{p : p.y <= t}` is sparse.
//! - [`sparse_x`] finds the largest x value `t` such that the y-sparse points with
//!   `p.x <= t` are still within the budget.
//!
//! Both take a slice sorted by x then y and run in a single left-to-right pass.
//!
//! [`Params::sparse_budget`]: crate::Params::sparse_budget

use alloc::vec::Vec;

use crate::types::{Point, cmp_or_equal, le, lt, max_t};

/// Largest y value `t` of `points` with `|{p : p.y <= t}| <= budget`.
///
/// Returns `None` when no such value exists (zero budget, or the smallest y is
/// shared by more than `budget` points).
///
/// The pass keeps an upper cutoff: every y at or above it already has more than
/// `budget` points at or below it, so such points are skipped. All other points
/// are candidates. When the candidate buffer reaches `2 * (budget + 1)` entries,
/// the `(budget + 1)`-th smallest candidate becomes the new cutoff and every
/// candidate at or above it is dropped, which discards at least half of the
/// buffer. Each point is therefore pushed once and dropped at most once.
///
/// `candidates` is scratch space; it is cleared on entry.
pub(crate) fn sparse_y<T: Copy + PartialOrd>(
    points: &[Point<T>],
    budget: usize,
    candidates: &mut Vec<T>,
) -> Option<T> {
    candidates.clear();
    let limit = 2 * (budget + 1);
    // Invariant: `candidates` holds the y of every point seen so far below `cutoff`.
    let mut cutoff: Option<T> = None;
    for p in points {
        if cutoff.is_some_and(|c| !lt(p.y, c)) {
            continue;
        }
        candidates.push(p.y);
        if candidates.len() >= limit {
            cutoff = Some(compact(candidates, budget));
        }
    }
    if candidates.len() > budget {
        compact(candidates, budget);
    }
    candidates.iter().copied().reduce(max_t)
}

/// Drop every candidate at or above the `(budget + 1)`-th smallest; return that value.
///
/// Requires `candidates.len() > budget`. At most `budget` candidates survive.
fn compact<T: Copy + PartialOrd>(candidates: &mut Vec<T>, budget: usize) -> T {
    let (_, nth, _) = candidates.select_nth_unstable_by(budget, cmp_or_equal);
    let bound = *nth;
    candidates.retain(|&y| lt(y, bound));
    bound
}

/// Largest x value `t` of `points` such that the points with `p.x <= t` and
/// `p.y <= y_threshold` number at most `budget`.
///
/// Points sharing an x value are taken together. Returns `None` when even the
/// first x group exceeds the budget, i.e. the threshold falls just below the
/// first point's x and no point is x-sparse.
///
/// With `y_threshold` taken from [`sparse_y`] over the same points, the total
/// count never exceeds `budget`, so the result is always the largest x.
pub(crate) fn sparse_x<T: Copy + PartialOrd>(
    points: &[Point<T>],
    y_threshold: Option<T>,
    budget: usize,
) -> Option<T> {
    let mut threshold = None;
    let mut count = 0_usize;
    for group in points.chunk_by(|a, b| !lt(a.x, b.x)) {
        count += group
            .iter()
            .filter(|p| is_at_or_below(p.y, y_threshold))
            .count();
        if count > budget {
            break;
        }
        threshold = Some(group[0].x);
    }
    threshold
}

/// Whether `v <= t`, where a missing threshold admits nothing.
pub(crate) fn is_at_or_below<T: Copy + PartialOrd>(v: T, t: Option<T>) -> bool {
    t.is_some_and(|t| le(v, t))
}
