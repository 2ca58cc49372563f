//! Exact Pareto front enumeration for monotone feasibility oracles over
//! finite integer lattices.
//!
//! Given per-dimension integer bounds and a caller-supplied *monotone*
//! feasibility predicate (raising a coordinate never turns `true` into
//! `false`), this crate enumerates the complete antichain of minimal
//! feasible points — the Pareto front — while keeping the number of oracle
//! calls far below the lattice volume. Three mechanisms work together:
//!
//! - a cache of maximal known-infeasible witnesses that answers dominated
//!   probes without consulting the oracle,
//! - a shrinking frontier of unresolved box corners driving the search,
//! - per-dimension binary search that pins each discovered point down with
//!   a logarithmic number of probes.
//!
//! The oracle is treated as an opaque, expensive capability; everything
//! here exists to call it as rarely as possible.
//!
//! # Examples
//!
//! ```
//! use pareto_enum::{enumerate_pareto_front, Bounds, Point};
//!
//! // Feasible iff the first coordinate clears 5, or the second clears 2
//! // and the third clears 7.
//! let bounds = Bounds::new([(0, 10), (0, 10), (0, 10)]).unwrap();
//! let front = enumerate_pareto_front(
//!     |p: &Point| p.coord(0) > 5 || (p.coord(1) >= 3 && p.coord(2) > 7),
//!     bounds,
//! );
//!
//! assert_eq!(front.len(), 2);
//! assert!(front.contains(&Point::new([6, 0, 0])));
//! assert!(front.contains(&Point::new([0, 3, 8])));
//! ```
//!
//! For observability, drive [`ParetoEnumerator`] directly:
//!
//! ```
//! use pareto_enum::{Bounds, ParetoEnumerator, Point};
//!
//! let bounds = Bounds::new([(0, 20), (0, 20)]).unwrap();
//! let mut enumerator = ParetoEnumerator::new(bounds);
//! enumerator.run(&mut |p: &Point| p.coord(0) + p.coord(1) >= 25);
//!
//! assert_eq!(enumerator.front().len(), 16);
//! assert!(enumerator.stats().oracle_calls < 21 * 21);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bounds;
pub mod cache;
pub mod enumerate;
pub mod error;
pub mod front;
pub mod frontier;
pub mod oracle;
pub mod point;

pub use bounds::Bounds;
pub use cache::NegativeCache;
pub use enumerate::{enumerate_pareto_front, EnumerationStats, ParetoEnumerator};
pub use error::{ParetoError, Result};
pub use front::ParetoFront;
pub use frontier::{maximal_elements, minimal_elements, SearchFrontier};
pub use oracle::FeasibilityOracle;
pub use point::Point;
