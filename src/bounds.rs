//! Per-dimension coordinate ranges defining the search lattice.

use crate::error::{ParetoError, Result};
use crate::point::Point;

/// Inclusive `(lower, upper)` coordinate ranges, one per dimension.
///
/// A `Bounds` value defines the finite lattice the enumerator explores:
/// all integer points `p` with `lower(i) <= p[i] <= upper(i)` in every
/// dimension. Construction validates that every range is non-empty; an
/// empty dimension list is allowed and yields the degenerate lattice whose
/// only member is the zero-dimensional point.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    ranges: Vec<(i64, i64)>,
}

impl Bounds {
    /// Create bounds from `(lower, upper)` pairs.
    ///
    /// Returns [`ParetoError::EmptyRange`] if any pair has `lower > upper`.
    pub fn new(ranges: impl IntoIterator<Item = (i64, i64)>) -> Result<Self> {
        let ranges: Vec<(i64, i64)> = ranges.into_iter().collect();
        for (dim, &(lower, upper)) in ranges.iter().enumerate() {
            if lower > upper {
                return Err(ParetoError::EmptyRange { dim, lower, upper });
            }
        }
        Ok(Self { ranges })
    }

    /// Number of dimensions.
    pub fn num_dims(&self) -> usize {
        self.ranges.len()
    }

    /// Lower bound of dimension `dim`. Panics if `dim` is out of range.
    pub fn lower(&self, dim: usize) -> i64 {
        self.ranges[dim].0
    }

    /// Upper bound of dimension `dim`. Panics if `dim` is out of range.
    pub fn upper(&self, dim: usize) -> i64 {
        self.ranges[dim].1
    }

    /// All ranges as a slice of `(lower, upper)` pairs.
    pub fn ranges(&self) -> &[(i64, i64)] {
        &self.ranges
    }

    /// The lattice point with every coordinate at its upper bound.
    pub fn maximal_point(&self) -> Point {
        Point::new(self.ranges.iter().map(|&(_, upper)| upper))
    }

    /// The lattice point with every coordinate at its lower bound.
    pub fn minimal_point(&self) -> Point {
        Point::new(self.ranges.iter().map(|&(lower, _)| lower))
    }

    /// Whether `point` lies inside the lattice.
    ///
    /// A point with the wrong dimension count is simply not a member.
    pub fn contains(&self, point: &Point) -> bool {
        point.num_dims() == self.num_dims()
            && self
                .ranges
                .iter()
                .zip(point.coords())
                .all(|(&(lower, upper), &c)| lower <= c && c <= upper)
    }

    /// Validate that `point` has this lattice's dimension count.
    pub fn check_dims(&self, point: &Point) -> Result<()> {
        if point.num_dims() != self.num_dims() {
            return Err(ParetoError::DimensionMismatch {
                expected: self.num_dims(),
                got: point.num_dims(),
            });
        }
        Ok(())
    }
}
