//! Randomized end-to-end enumeration properties.
//!
//! Instances are implicit-set oracles: a random seed set `S` inside random
//! bounds, with `feasible(p)` iff some `s` in `S` is `<= p`. The true front
//! is then exactly the minimal elements of `S`, computed independently of
//! the enumerator.

use pareto_enum::{
    enumerate_pareto_front, minimal_elements, Bounds, ParetoEnumerator, Point,
};
use proptest::prelude::*;
use rustc_hash::FxHashSet;

/// Random dimension count, per-dimension ranges (negative lowers included),
/// and a seed set drawn from inside those ranges.
fn instance() -> impl Strategy<Value = (Vec<(i64, i64)>, Vec<Vec<i64>>)> {
    (1usize..=4)
        .prop_flat_map(|dims| {
            prop::collection::vec(
                (-20i64..=20).prop_flat_map(|lower| (Just(lower), lower..=lower + 15)),
                dims,
            )
        })
        .prop_flat_map(|ranges| {
            let coord_ranges: Vec<std::ops::RangeInclusive<i64>> =
                ranges.iter().map(|&(lower, upper)| lower..=upper).collect();
            let seeds = prop::collection::vec(coord_ranges, 1..=8);
            (Just(ranges), seeds)
        })
}

fn to_points(coords: &[Vec<i64>]) -> Vec<Point> {
    coords
        .iter()
        .map(|c| Point::new(c.iter().copied()))
        .collect()
}

fn point_set(points: &[Point]) -> FxHashSet<Point> {
    points.iter().cloned().collect()
}

proptest! {
    /// The computed front equals the minimal elements of the seed set.
    #[test]
    fn front_equals_seed_minima((ranges, seed_coords) in instance()) {
        let bounds = Bounds::new(ranges).unwrap();
        let seeds = to_points(&seed_coords);

        let front = enumerate_pareto_front(
            |p: &Point| seeds.iter().any(|s| s.is_leq(p)),
            bounds,
        );

        let reference = minimal_elements(seeds);
        prop_assert_eq!(point_set(front.points()), point_set(&reference));
    }

    /// Soundness, antichain shape, per-coordinate minimality, and
    /// completeness, checked directly rather than via the reference front.
    #[test]
    fn front_invariants_hold((ranges, seed_coords) in instance()) {
        let bounds = Bounds::new(ranges).unwrap();
        let seeds = to_points(&seed_coords);
        let feasible = |p: &Point| seeds.iter().any(|s| s.is_leq(p));

        let front = enumerate_pareto_front(
            |p: &Point| feasible(p),
            bounds.clone(),
        );

        for a in front.points() {
            prop_assert!(feasible(a), "unsound point {}", a);
            for b in front.points() {
                prop_assert!(a == b || !a.is_leq(b), "comparable pair {} <= {}", a, b);
            }
            // Dropping any single coordinate below the found value must
            // leave the feasible region.
            for dim in 0..bounds.num_dims() {
                if a.coord(dim) > bounds.lower(dim) {
                    let below = a.with_coord(dim, a.coord(dim) - 1);
                    prop_assert!(!feasible(&below), "{} not minimal in dim {}", a, dim);
                }
            }
        }
        for s in &seeds {
            prop_assert!(front.covers(s), "seed {} not covered", s);
        }
    }

    /// No oracle call is ever implied by an earlier answer.
    #[test]
    fn no_redundant_oracle_calls((ranges, seed_coords) in instance()) {
        let bounds = Bounds::new(ranges).unwrap();
        let seeds = to_points(&seed_coords);

        let mut known_true: Vec<Point> = Vec::new();
        let mut known_false: Vec<Point> = Vec::new();
        let front = enumerate_pareto_front(
            |p: &Point| {
                assert!(
                    !known_true.iter().any(|t| t.is_leq(p)),
                    "call on {p} implied by an earlier true answer"
                );
                assert!(
                    !known_false.iter().any(|f| p.is_leq(f)),
                    "call on {p} implied by an earlier false answer"
                );
                if seeds.iter().any(|s| s.is_leq(p)) {
                    known_true.push(p.clone());
                    true
                } else {
                    known_false.push(p.clone());
                    false
                }
            },
            bounds,
        );
        // Seeds lie inside the bounds, so the front is never empty here.
        prop_assert!(!front.is_empty());
    }

    /// Re-running the enumeration yields the same set.
    #[test]
    fn rerun_is_deterministic((ranges, seed_coords) in instance()) {
        let bounds = Bounds::new(ranges).unwrap();
        let seeds = to_points(&seed_coords);
        let oracle = |p: &Point| seeds.iter().any(|s| s.is_leq(p));

        let first = enumerate_pareto_front(oracle, bounds.clone());
        let second = enumerate_pareto_front(oracle, bounds);
        prop_assert_eq!(point_set(first.points()), point_set(second.points()));
    }

    /// Oracle calls stay well under the lattice volume once it is
    /// non-trivial.
    #[test]
    fn call_count_is_sublinear_in_volume((ranges, seed_coords) in instance()) {
        let volume: i64 = ranges.iter().map(|&(lo, hi)| hi - lo + 1).product();
        prop_assume!(volume >= 512);

        let bounds = Bounds::new(ranges).unwrap();
        let seeds = to_points(&seed_coords);

        let mut enumerator = ParetoEnumerator::new(bounds);
        enumerator.run(&mut |p: &Point| seeds.iter().any(|s| s.is_leq(p)));

        prop_assert!(enumerator.stats().oracle_calls < volume as u64);
    }
}
