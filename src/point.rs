//! Lattice points and the componentwise partial order.
//!
//! A [`Point`] is a fixed-length vector of integer coordinates, one per
//! objective dimension. Points are compared under the componentwise order:
//! `a <= b` iff every coordinate of `a` is at most the matching coordinate
//! of `b`. Two points where neither relation holds are *incomparable*; a set
//! of pairwise incomparable points is an antichain.
//!
//! All other structures in this crate (the negative cache, the search
//! frontier, the enumerated front) are built on these two comparisons.

use smallvec::SmallVec;
use std::fmt;

/// A point of the search lattice: one integer coordinate per dimension.
///
/// Immutable value semantics once constructed; cloning is cheap for the
/// typical small dimension counts (inline storage up to four coordinates).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    coords: SmallVec<[i64; 4]>,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(coords: impl IntoIterator<Item = i64>) -> Self {
        Self {
            coords: coords.into_iter().collect(),
        }
    }

    /// Number of dimensions.
    pub fn num_dims(&self) -> usize {
        self.coords.len()
    }

    /// Coordinate in dimension `dim`. Panics if `dim` is out of range.
    pub fn coord(&self, dim: usize) -> i64 {
        self.coords[dim]
    }

    /// All coordinates as a slice.
    pub fn coords(&self) -> &[i64] {
        &self.coords
    }

    /// Copy of this point with the coordinate in `dim` replaced by `value`.
    pub fn with_coord(&self, dim: usize, value: i64) -> Self {
        let mut copy = self.clone();
        copy.coords[dim] = value;
        copy
    }

    pub(crate) fn set_coord(&mut self, dim: usize, value: i64) {
        self.coords[dim] = value;
    }

    /// Componentwise `<=`: every coordinate of `self` is at most the
    /// matching coordinate of `other`.
    ///
    /// Both points must have the same dimension count; this is a caller
    /// contract checked only in debug builds.
    pub fn is_leq(&self, other: &Point) -> bool {
        debug_assert_eq!(self.coords.len(), other.coords.len());
        self.coords.iter().zip(&other.coords).all(|(a, b)| a <= b)
    }

    /// Strict componentwise order: `self <= other` and `self != other`.
    pub fn is_strictly_less(&self, other: &Point) -> bool {
        self.is_leq(other) && self != other
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}
