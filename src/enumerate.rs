//! Main enumeration loop and binary-search refinement.
//!
//! The enumerator locates every minimal feasible point of a monotone oracle
//! over a bounded integer lattice while keeping the oracle-call count far
//! below the lattice volume:
//!
//! 1. Pop a corner from the search frontier. If the negative cache already
//!    proves it infeasible, discard it without an oracle call.
//! 2. Otherwise ask the oracle. A `false` answer becomes a new cache
//!    witness and the corner is discarded.
//! 3. A `true` answer is refined into an exact Pareto point: each dimension
//!    in turn is binary-searched down to the smallest value that keeps the
//!    oracle satisfied, consulting the cache before every probe. The point
//!    is recorded and its upward closure is carved out of the frontier.
//! 4. Repeat until the frontier is empty.
//!
//! Monotonicity makes step 3 sound without a final re-check: infeasibility
//! established while later dimensions still held larger values stays valid
//! as those dimensions shrink, so the assembled point is feasible and
//! cannot be reduced in any single coordinate — which, for a monotone
//! oracle, is exactly lattice-wide minimality.
//!
//! ## References
//!
//! - Ehrgott: "Multicriteria Optimization" (2005)
//! - Legriel et al.: "Approximating the Pareto Front of Multi-criteria
//!   Optimization Problems" (TACAS 2010)

use crate::bounds::Bounds;
use crate::cache::NegativeCache;
use crate::front::ParetoFront;
use crate::frontier::SearchFrontier;
use crate::oracle::FeasibilityOracle;
use crate::point::Point;

/// Counters describing one enumeration run.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumerationStats {
    /// Oracle invocations.
    pub oracle_calls: u64,
    /// Probes answered by the negative cache instead of the oracle.
    pub cache_hits: u64,
    /// Pareto points located.
    pub points_found: u64,
    /// Frontier corners taken off the work list.
    pub corners_processed: u64,
    /// Binary-search probes across all refinements.
    pub refinement_steps: u64,
    /// Largest frontier size observed.
    pub peak_frontier: u64,
}

/// Driver for one Pareto front enumeration over a fixed lattice.
///
/// Owns the run-local state (negative cache, search frontier, result set)
/// and exposes [`stats`](Self::stats) for observability. For the common
/// one-shot case, [`enumerate_pareto_front`] wraps construction, the run,
/// and extraction of the result.
pub struct ParetoEnumerator {
    bounds: Bounds,
    cache: NegativeCache,
    frontier: SearchFrontier,
    front: ParetoFront,
    stats: EnumerationStats,
}

impl ParetoEnumerator {
    /// Create an enumerator for the lattice defined by `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        let frontier = SearchFrontier::new(bounds.maximal_point());
        Self {
            bounds,
            cache: NegativeCache::new(),
            frontier,
            front: ParetoFront::new(),
            stats: EnumerationStats::default(),
        }
    }

    /// The lattice being enumerated.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Counters for the run so far.
    pub fn stats(&self) -> &EnumerationStats {
        &self.stats
    }

    /// The points discovered so far.
    pub fn front(&self) -> &ParetoFront {
        &self.front
    }

    /// Consume the enumerator, yielding the front.
    pub fn into_front(self) -> ParetoFront {
        self.front
    }

    /// Run the enumeration to completion and return the full front.
    ///
    /// Calling `run` again after the frontier has drained returns the same
    /// front without further oracle calls.
    pub fn run<O: FeasibilityOracle>(&mut self, oracle: &mut O) -> &ParetoFront {
        while let Some(corner) = self.frontier.pop() {
            self.stats.corners_processed += 1;

            if self.cache.covers(&corner) {
                self.stats.cache_hits += 1;
                continue;
            }
            if !self.query(oracle, &corner) {
                self.cache.insert(corner);
                continue;
            }

            let point = self.refine(oracle, corner.clone());
            tracing::debug!(point = %point, "pareto point located");

            // The corner's box is only partially resolved by the new point;
            // it must take part in the split like every other corner.
            self.frontier.push(corner);
            self.frontier.split_below(&point, &self.bounds);
            self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len() as u64);

            self.front.push(point);
            self.stats.points_found += 1;
        }
        &self.front
    }

    /// Reduce the feasible corner `x` to a coordinate-wise minimal feasible
    /// point, one dimension at a time.
    ///
    /// Dimension `i` is binary-searched over `[lower_i, x[i]]` with all
    /// other coordinates held at their current values; the cache is
    /// consulted before every probe and fed every `false` answer. Later
    /// dimensions then shrink against the already-fixed earlier ones.
    fn refine<O: FeasibilityOracle>(&mut self, oracle: &mut O, mut x: Point) -> Point {
        for dim in 0..self.bounds.num_dims() {
            let mut min = self.bounds.lower(dim);
            let mut max = x.coord(dim) + 1;
            while max - min > 1 {
                let mid = min + (max - min - 1) / 2;
                x.set_coord(dim, mid);
                self.stats.refinement_steps += 1;

                if self.cache.covers(&x) {
                    self.stats.cache_hits += 1;
                    min = mid + 1;
                } else if self.query(oracle, &x) {
                    max = mid + 1;
                } else {
                    self.cache.insert(x.clone());
                    min = mid + 1;
                }
            }
            x.set_coord(dim, min);
        }
        x
    }

    fn query<O: FeasibilityOracle>(&mut self, oracle: &mut O, point: &Point) -> bool {
        self.stats.oracle_calls += 1;
        let feasible = oracle.is_feasible(point);
        tracing::trace!(point = %point, feasible, "oracle call");
        feasible
    }
}

/// Enumerate the complete Pareto front of `oracle` over `bounds`.
///
/// Returns the antichain of minimal feasible lattice points. The oracle
/// must be monotone nondecreasing (see [`FeasibilityOracle`]); the result
/// is independent of internal processing order.
///
/// # Examples
///
/// ```
/// use pareto_enum::{enumerate_pareto_front, Bounds, Point};
///
/// let bounds = Bounds::new([(0, 10), (0, 10)]).unwrap();
/// let front = enumerate_pareto_front(|p: &Point| p.coord(0) + p.coord(1) >= 12, bounds);
/// assert_eq!(front.len(), 9);
/// assert!(front.contains(&Point::new([2, 10])));
/// assert!(front.contains(&Point::new([10, 2])));
/// ```
pub fn enumerate_pareto_front<O: FeasibilityOracle>(mut oracle: O, bounds: Bounds) -> ParetoFront {
    let mut enumerator = ParetoEnumerator::new(bounds);
    enumerator.run(&mut oracle);
    enumerator.into_front()
}
