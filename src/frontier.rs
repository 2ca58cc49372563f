//! Search frontier of unresolved lattice corners.
//!
//! The frontier is an antichain of *maximal* points ("corners"), each
//! standing for the downward-closed box of lattice points below it that is
//! not yet known to be resolved. It starts as the single maximal point of
//! the lattice and shrinks monotonically: every discovered Pareto point
//! carves its upward closure out of each overlapping box, and the run ends
//! when no corner remains.
//!
//! Updates rebuild the corner list and swap it in rather than mutating
//! during traversal.

use crate::bounds::Bounds;
use crate::point::Point;
use rustc_hash::FxHashSet;

/// Retain only the maximal elements of `points`.
///
/// Drops every point strictly below another and collapses exact duplicates
/// to one occurrence. Quadratic in the input size, which stays small in
/// practice — the frontier tracks the monotone boundary, not the lattice
/// volume.
pub fn maximal_elements(points: Vec<Point>) -> Vec<Point> {
    let unique = dedup(points);
    unique
        .iter()
        .filter(|p| !unique.iter().any(|q| p.is_strictly_less(q)))
        .cloned()
        .collect()
}

/// Retain only the minimal elements of `points` — the dual of
/// [`maximal_elements`], used to clean reference fronts.
pub fn minimal_elements(points: Vec<Point>) -> Vec<Point> {
    let unique = dedup(points);
    unique
        .iter()
        .filter(|p| !unique.iter().any(|q| q.is_strictly_less(p)))
        .cloned()
        .collect()
}

fn dedup(points: Vec<Point>) -> Vec<Point> {
    let mut seen = FxHashSet::default();
    let mut unique = Vec::with_capacity(points.len());
    for p in points {
        if seen.insert(p.clone()) {
            unique.push(p);
        }
    }
    unique
}

/// Antichain of maximal corners of unresolved sub-boxes.
#[derive(Debug, Clone)]
pub struct SearchFrontier {
    corners: Vec<Point>,
}

impl SearchFrontier {
    /// Create a frontier holding the single corner `origin` — for a fresh
    /// run, the maximal point of the lattice.
    pub fn new(origin: Point) -> Self {
        Self {
            corners: vec![origin],
        }
    }

    /// Remove and return one corner, or `None` once the lattice is resolved.
    pub fn pop(&mut self) -> Option<Point> {
        self.corners.pop()
    }

    /// Reinstate a corner removed by [`pop`](Self::pop).
    ///
    /// The corner came out of an antichain the frontier has not grown since,
    /// so pushing it back preserves the invariant.
    pub(crate) fn push(&mut self, corner: Point) {
        self.corners.push(corner);
    }

    /// Carve the upward closure of the discovered point `x` out of every
    /// box on the frontier.
    ///
    /// Corners `y` with `x <= y` are replaced by up to `n` shrunken copies,
    /// one per dimension `i` with `x[i]` above its lower bound: the copy has
    /// coordinate `i` set to `x[i] - 1`, splitting `box(y)` minus the
    /// resolved region into axis-aligned sub-boxes. Corners not above `x`
    /// are kept as-is. The rebuilt collection is then cleaned back to a
    /// minimal antichain.
    pub fn split_below(&mut self, x: &Point, bounds: &Bounds) {
        let mut rebuilt = Vec::with_capacity(self.corners.len() + bounds.num_dims());
        for corner in self.corners.drain(..) {
            if !x.is_leq(&corner) {
                rebuilt.push(corner);
                continue;
            }
            for dim in 0..bounds.num_dims() {
                if x.coord(dim) > bounds.lower(dim) {
                    rebuilt.push(corner.with_coord(dim, x.coord(dim) - 1));
                }
            }
        }
        self.corners = maximal_elements(rebuilt);
    }

    /// The current corners.
    pub fn corners(&self) -> &[Point] {
        &self.corners
    }

    /// Number of corners.
    pub fn len(&self) -> usize {
        self.corners.len()
    }

    /// Whether the whole lattice has been resolved.
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }
}
