//! Region algebra law helpers.
//!
//! These functions check the properties every region tree must satisfy,
//! whatever its shape. Reused by the proptest blocks in `region` and
//! `prism`.

use detgeom_core::Point;
use proptest::prelude::*;

use crate::halfspace::{HalfSpace, Sense};
use crate::region::{complement, intersect, union, Region};
use crate::surface::{Axis, Surface};

/// Random axis-aligned half-space with its plane in `[-10, 10]`.
pub fn arb_halfspace() -> impl Strategy<Value = HalfSpace> {
    (0usize..3, -10.0f64..10.0, any::<bool>()).prop_map(|(axis, at, positive)| {
        let surface = Surface::plane(Axis::ALL[axis], at).into_shared();
        let sense = if positive {
            Sense::Positive
        } else {
            Sense::Negative
        };
        HalfSpace::new(surface, sense)
    })
}

/// Random region tree up to `depth` operators deep.
pub fn arb_region(depth: u32) -> impl Strategy<Value = Region> {
    arb_halfspace()
        .prop_map(Region::Leaf)
        .prop_recursive(depth, 32, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(a, b)| intersect(a, b)),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| union(a, b)),
                inner.prop_map(|a| !a),
            ]
        })
}

/// Random point in the cube `[-12, 12]^3`.
pub fn arb_point() -> impl Strategy<Value = Point> {
    [-12.0f64..12.0, -12.0f64..12.0, -12.0f64..12.0]
}

/// Assert `bbox(a & b)` lies within both `bbox(a)` and `bbox(b)`.
pub fn assert_intersection_box_within_operands(a: &Region, b: &Region) {
    let both = intersect(a, b).bounding_box();
    let (ba, bb) = (a.bounding_box(), b.bounding_box());
    assert!(
        ba.contains_box(&both),
        "bbox(a & b) = {both} escapes bbox(a) = {ba}"
    );
    assert!(
        bb.contains_box(&both),
        "bbox(a & b) = {both} escapes bbox(b) = {bb}"
    );
}

/// Assert `bbox(a | a) == bbox(a)`.
pub fn assert_union_idempotent(a: &Region) {
    assert_eq!(union(a, a).bounding_box(), a.bounding_box());
}

/// Assert `~~a` and `a` agree on every point in `points`.
pub fn assert_double_complement(a: &Region, points: &[Point]) {
    let twice = complement(complement(a));
    for &p in points {
        assert_eq!(
            twice.contains(p),
            a.contains(p),
            "double complement disagrees with {a} at {p:?}"
        );
    }
}
