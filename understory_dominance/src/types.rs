// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;

/// A point in 2D.
///
/// Points are plain values. Construction orders them by `x` ascending, with
/// ties broken by `y` ascending (see [`Point::partial_cmp_xy`]).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point<T> {
    /// x coordinate
    pub x: T,
    /// y coordinate
    pub y: T,
}

impl<T> Point<T> {
    /// Create a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy + PartialOrd> Point<T> {
    /// Whether `q` dominates this point, i.e. `self.x <= q.x` and `self.y <= q.y`.
    ///
    /// Equal coordinates count as dominated.
    pub fn is_dominated_by(&self, q: Self) -> bool {
        le(self.x, q.x) && le(self.y, q.y)
    }

    /// Compare by `x`, then by `y`. `None` if either comparison is undefined (NaN).
    pub fn partial_cmp_xy(&self, other: &Self) -> Option<Ordering> {
        match self.x.partial_cmp(&other.x)? {
            Ordering::Equal => self.y.partial_cmp(&other.y),
            ord => Some(ord),
        }
    }

    /// Whether both coordinates compare equal to themselves (no NaN).
    pub(crate) fn is_comparable(&self) -> bool {
        self.x.partial_cmp(&self.x).is_some() && self.y.partial_cmp(&self.y).is_some()
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(p: Point<T>) -> Self {
        (p.x, p.y)
    }
}

/// Axis-aligned bounding box in 2D.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb2D<T> {
    /// Minimum x
    pub min_x: T,
    /// Minimum y
    pub min_y: T,
    /// Maximum x
    pub max_x: T,
    /// Maximum y
    pub max_y: T,
}

impl<T> Aabb2D<T> {
    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Copy + PartialOrd> Aabb2D<T> {
    /// The degenerate AABB covering a single point.
    pub const fn from_point(p: Point<T>) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    /// Smallest AABB covering all `points`, or `None` for an empty slice.
    pub fn from_points(points: &[Point<T>]) -> Option<Self> {
        points
            .iter()
            .map(|p| Self::from_point(*p))
            .reduce(union_aabb)
    }

    /// Whether this AABB contains the point (inclusive on all edges).
    pub fn contains_point(&self, p: Point<T>) -> bool {
        le(self.min_x, p.x) && le(self.min_y, p.y) && le(p.x, self.max_x) && le(p.y, self.max_y)
    }

    /// Whether every point inside this AABB is dominated by `q`.
    pub fn is_dominated_by(&self, q: Point<T>) -> bool {
        le(self.max_x, q.x) && le(self.max_y, q.y)
    }

    /// Whether no point inside this AABB can be dominated by `q`.
    pub fn is_outside_dominance_of(&self, q: Point<T>) -> bool {
        lt(q.x, self.min_x) || lt(q.y, self.min_y)
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

/// Ordering for sorts and selections; incomparable values are treated as equal.
pub(crate) fn cmp_or_equal<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

pub(crate) fn union_aabb<T: PartialOrd + Copy>(a: Aabb2D<T>, b: Aabb2D<T>) -> Aabb2D<T> {
    Aabb2D {
        min_x: min_t(a.min_x, b.min_x),
        min_y: min_t(a.min_y, b.min_y),
        max_x: max_t(a.max_x, b.max_x),
        max_y: max_t(a.max_y, b.max_y),
    }
}

/// Union where `None` (empty) is the identity.
pub(crate) fn union_opt<T: PartialOrd + Copy>(
    a: Option<Aabb2D<T>>,
    b: Option<Aabb2D<T>>,
) -> Option<Aabb2D<T>> {
    match (a, b) {
        (Some(a), Some(b)) => Some(union_aabb(a, b)),
        (a, None) => a,
        (None, b) => b,
    }
}
