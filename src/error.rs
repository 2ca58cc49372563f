//! Error types for lattice construction and point validation.

use thiserror::Error;

/// Errors reported when building or validating a search lattice.
///
/// The enumeration loop itself is infallible: once a [`crate::Bounds`] value
/// exists, every point the enumerator constructs lies inside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParetoError {
    /// A dimension's lower bound exceeds its upper bound.
    #[error("empty range in dimension {dim}: lower {lower} exceeds upper {upper}")]
    EmptyRange {
        /// Offending dimension index.
        dim: usize,
        /// Lower bound supplied for that dimension.
        lower: i64,
        /// Upper bound supplied for that dimension.
        upper: i64,
    },
    /// A point's dimension count disagrees with the bounds.
    #[error("dimension mismatch: bounds define {expected} dimensions, point has {got}")]
    DimensionMismatch {
        /// Dimension count of the bounds.
        expected: usize,
        /// Dimension count of the point.
        got: usize,
    },
}

/// Result alias for fallible lattice operations.
pub type Result<T> = std::result::Result<T, ParetoError>;
