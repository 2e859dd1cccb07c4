//! Property-based invariant tests for geometry primitives (Pos, Extent).
//!
//! 1. `normalized` is symmetric.
//! 2. `normalized` yields ordered corners that bound both inputs.
//! 3. `with` replaces exactly one coordinate.
//! 4. Fixed extents admit exactly the indices below their size.

use chalk_core::geometry::{Axis, Extent, Pos};
use proptest::prelude::*;

fn pos_strategy() -> impl Strategy<Value = Pos> {
    (0usize..=10_000, 0usize..=10_000).prop_map(|(x, y)| Pos::new(x, y))
}

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y)]
}

proptest! {
    #[test]
    fn normalized_is_symmetric(a in pos_strategy(), b in pos_strategy()) {
        prop_assert_eq!(a.normalized(b), b.normalized(a));
    }
}

proptest! {
    #[test]
    fn normalized_corners_bound_inputs(a in pos_strategy(), b in pos_strategy()) {
        let (lo, hi) = a.normalized(b);
        prop_assert!(lo.x <= hi.x && lo.y <= hi.y);
        for p in [a, b] {
            prop_assert!(lo.x <= p.x && p.x <= hi.x);
            prop_assert!(lo.y <= p.y && p.y <= hi.y);
        }
    }
}

proptest! {
    #[test]
    fn with_replaces_one_coordinate(p in pos_strategy(), axis in axis_strategy(), v in 0usize..1000) {
        let q = p.with(axis, v);
        prop_assert_eq!(q.along(axis), v);
        let other = match axis {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        };
        prop_assert_eq!(q.along(other), p.along(other));
    }
}

proptest! {
    #[test]
    fn fixed_extent_admits_below_size(size in 0usize..500, index in 0usize..1000) {
        prop_assert_eq!(Extent::Fixed(size).admits(index), index < size);
        prop_assert!(Extent::Unbounded.admits(index));
    }
}
