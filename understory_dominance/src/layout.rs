// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Van Emde Boas layout construction by repeated sparse-subset extraction.
//!
//! Each level splits the current residual set into a promoted block, appended
//! to the layout, and a smaller residual set for the next level. Once the
//! residual has at most `cutoff` points it is appended verbatim and
//! construction ends.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use log::{error, trace};

use crate::error::BuildError;
use crate::params::Params;
use crate::partition::{Thresholds, extract_promoted, extract_residual};
use crate::types::Point;

/// Two residual buffers whose roles alternate between levels.
///
/// Both are allocated once with room for the whole input; they are cleared and
/// refilled in place, never grown.
#[derive(Debug)]
struct ScratchPair<T> {
    front: Vec<Point<T>>,
    back: Vec<Point<T>>,
    front_active: bool,
}

impl<T: Copy> ScratchPair<T> {
    fn with_input(points: &[Point<T>]) -> Self {
        let mut front = Vec::with_capacity(points.len());
        front.extend_from_slice(points);
        Self {
            front,
            back: Vec::with_capacity(points.len()),
            front_active: true,
        }
    }

    /// The current residual set.
    fn active(&self) -> &[Point<T>] {
        if self.front_active {
            &self.front
        } else {
            &self.back
        }
    }

    /// The current residual set and the (cleared) buffer for the next one.
    fn split(&mut self) -> (&[Point<T>], &mut Vec<Point<T>>) {
        let (active, inactive) = if self.front_active {
            (&self.front, &mut self.back)
        } else {
            (&self.back, &mut self.front)
        };
        inactive.clear();
        (active.as_slice(), inactive)
    }

    fn flip(&mut self) {
        self.front_active = !self.front_active;
    }
}

/// Result of layout construction.
#[derive(Clone, Debug)]
pub(crate) struct Layout<T> {
    /// Points in layout order. Capacity is the fixed bound from [`Params::capacity`].
    pub(crate) points: Vec<Point<T>>,
    /// Slot range of each non-empty block, in order. The last one may be the flushed tail.
    pub(crate) blocks: Vec<Range<usize>>,
}

/// Lay out sorted `input` in van Emde Boas order.
///
/// `input` must be non-empty and sorted by x then y, and `params` valid; the
/// caller checks both.
pub(crate) fn build_layout<T: Copy + PartialOrd + Debug>(
    input: &[Point<T>],
    params: &Params,
) -> Result<Layout<T>, BuildError> {
    let n = input.len();
    let capacity = params.capacity(n);
    let mut points = Vec::with_capacity(capacity);
    let mut blocks = Vec::new();
    let mut scratch = ScratchPair::with_input(input);
    let mut candidates = Vec::with_capacity(2 * (params.sparse_budget(n) + 1));

    let mut level = 0_usize;
    while scratch.active().len() > params.cutoff() {
        let (residual, next) = scratch.split();
        let size = residual.len();
        // The promoted block is a subset of the residual.
        ensure_capacity(capacity, points.len() + size)?;

        let th = Thresholds::compute(residual, params.sparse_budget(size), &mut candidates);
        let start = points.len();
        let promoted = extract_promoted(residual, &th, &mut points);
        let kept = extract_residual(residual, &th, next);
        trace!(
            "level {level}: {size} points, x <= {:?}, y <= {:?}, promoted {promoted}, kept {kept}",
            th.x, th.y
        );

        if promoted + kept != size {
            error!("level {level} split {size} points into {promoted} + {kept}");
            return Err(BuildError::LengthMismatch {
                expected: size,
                filled: promoted + kept,
            });
        }
        if kept >= size {
            error!("level {level} kept all {size} points");
            return Err(BuildError::Stalled { level, size });
        }

        blocks.push(start..points.len());
        scratch.flip();
        level += 1;
    }

    let tail = scratch.active();
    ensure_capacity(capacity, points.len() + tail.len())?;
    if !tail.is_empty() {
        let start = points.len();
        points.extend_from_slice(tail);
        blocks.push(start..points.len());
    }

    if points.len() != n {
        error!("layout holds {} of {n} points", points.len());
        return Err(BuildError::LengthMismatch {
            expected: n,
            filled: points.len(),
        });
    }
    Ok(Layout { points, blocks })
}

fn ensure_capacity(capacity: usize, required: usize) -> Result<(), BuildError> {
    if required > capacity {
        error!("layout needs {required} slots but only {capacity} are reserved");
        return Err(BuildError::CapacityExceeded { capacity, required });
    }
    Ok(())
}
