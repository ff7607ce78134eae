// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dominance --heading-base-level=0

//! Understory Dominance: a static, cache-oblivious 2D dominance index.
//!
//! Given a fixed set of points, the index answers *dominance* (2-sided range)
//! queries: for a query point `q`, report every stored `p` with `p.x <= q.x`
//! and `p.y <= q.y`. Comparisons are inclusive.
//!
//! - Build once from points sorted by x, then y. There is no insert or remove.
//! - Points are laid out in a recursive van Emde Boas order by repeatedly
//!   peeling a promoted block off a shrinking residual set, so the layout has
//!   good locality for every cache block size without knowing any of them.
//! - A complete binary tree of bounding boxes over the layout lets queries
//!   report whole subtrees inside the query region and skip subtrees outside it.
//!
//! It is generic over the scalar type `T` (`f32`, `f64`, `i64`, …) and does not
//! depend on any geometry crate.
//!
//! # Example
//!
//! ```rust
//! use understory_dominance::{DominanceIndex, Point};
//!
//! let points = [
//!     Point::new(-2.0, 1.0),
//!     Point::new(-1.0, 0.0),
//!     Point::new(1.0, -1.0),
//!     Point::new(2.0, 1.0),
//! ];
//! let idx = DominanceIndex::build(&points).unwrap();
//!
//! let hits = idx.query(Point::new(0.0, 0.0));
//! assert_eq!(hits, [Point::new(-1.0, 0.0)]);
//! assert_eq!(idx.count(Point::new(2.0, 1.0)), 4);
//! ```
//!
//! Input that is empty, unsorted, or contains NaN is rejected:
//!
//! ```rust
//! use understory_dominance::{BuildError, DominanceIndex, Point};
//!
//! let unsorted = [Point::new(1, 0), Point::new(0, 0)];
//! assert_eq!(
//!     DominanceIndex::build(&unsorted).unwrap_err(),
//!     BuildError::Unsorted { index: 1 }
//! );
//! ```
//!
//! ## Parameters
//!
//! [`Params`] tunes construction: the density parameter `alpha` (default 2),
//! the recursion `cutoff` below which the residual is flushed verbatim
//! (default 2), and the number of layout slots per summary-tree leaf
//! (default 1). The layout buffer is reserved once at
//! [`Params::capacity`] slots and never grown.
//!
//! ### Float semantics
//!
//! NaN coordinates are rejected at build time. A query point with a NaN
//! coordinate matches nothing.
//!
//! ### Logging
//!
//! Construction emits `debug` and `trace` records through the [`log`] facade.
//! Internal invariant failures are logged at `error` before the corresponding
//! [`BuildError`] is returned. Queries do not log.

#![no_std]

extern crate alloc;

pub mod error;
pub mod index;
pub mod params;
pub mod summary;
pub mod types;

mod layout;
mod partition;
mod query;
mod sparse;

pub use error::BuildError;
pub use index::{DominanceIndex, DominanceIndexF32, DominanceIndexF64, DominanceIndexI64};
pub use params::Params;
pub use summary::{NodeId, SummaryTree};
pub use types::{Aabb2D, Point};
