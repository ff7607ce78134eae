// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction parameters.

use crate::error::BuildError;

/// Default density parameter `alpha`.
pub const DEFAULT_ALPHA: usize = 2;

/// Default recursion cutoff: residual sets this small are flushed verbatim.
pub const DEFAULT_CUTOFF: usize = 2;

/// Default number of layout slots summarized by one leaf of the summary tree.
pub const DEFAULT_LEAF_SPAN: usize = 1;

/// Knobs for [`DominanceIndex::build_with`](crate::DominanceIndex::build_with).
///
/// - `alpha`: density parameter. A subset of an `n`-point set is *sparse* when it
///   holds at most `(n - 1) / alpha` points. Must be at least 2.
/// - `cutoff`: the layout stops recursing once the residual set has at most this
///   many points and appends the rest as a final block.
/// - `leaf_span`: layout slots per summary-tree leaf. Must be at least 1.
///
/// ```rust
/// use understory_dominance::Params;
///
/// let params = Params::new().with_alpha(3).with_leaf_span(4);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.capacity(10), 30);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Params {
    alpha: usize,
    cutoff: usize,
    leaf_span: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

impl Params {
    /// Default parameters: `alpha = 2`, `cutoff = 2`, `leaf_span = 1`.
    pub const fn new() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            cutoff: DEFAULT_CUTOFF,
            leaf_span: DEFAULT_LEAF_SPAN,
        }
    }

    /// Set the density parameter.
    pub const fn with_alpha(mut self, alpha: usize) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the recursion cutoff.
    pub const fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Set the number of layout slots per summary-tree leaf.
    pub const fn with_leaf_span(mut self, leaf_span: usize) -> Self {
        self.leaf_span = leaf_span;
        self
    }

    /// Density parameter.
    pub const fn alpha(&self) -> usize {
        self.alpha
    }

    /// Recursion cutoff.
    pub const fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Layout slots per summary-tree leaf.
    pub const fn leaf_span(&self) -> usize {
        self.leaf_span
    }

    /// Check that the parameters are usable.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.alpha < 2 {
            return Err(BuildError::InvalidParams("alpha must be at least 2"));
        }
        if self.leaf_span == 0 {
            return Err(BuildError::InvalidParams("leaf_span must be at least 1"));
        }
        Ok(())
    }

    /// Largest sparse subset of an `n`-point set: `(n - 1) / alpha`, strictly below `n / alpha`.
    pub const fn sparse_budget(&self, n: usize) -> usize {
        let alpha = if self.alpha > 0 { self.alpha } else { 1 };
        n.saturating_sub(1) / alpha
    }

    /// Fixed layout capacity for `n` points: `(ceil(alpha / (alpha - 1)) + 1) * n`.
    ///
    /// This is reserved up front and never grown during construction.
    pub const fn capacity(&self, n: usize) -> usize {
        let denom = if self.alpha > 1 { self.alpha - 1 } else { 1 };
        (self.alpha.div_ceil(denom) + 1).saturating_mul(n)
    }
}
