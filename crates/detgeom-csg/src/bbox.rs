//! Axis-aligned bounding boxes with infinite extents.

use std::fmt;

use detgeom_core::Point;

use crate::surface::Axis;

/// Conservative axis-aligned box around a region.
///
/// Unconstrained directions use `±f64::INFINITY`. A box whose lower corner
/// exceeds its upper corner on some axis is *empty*; that is a legal result
/// of intersecting disjoint regions, not an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub lower_left: Point,
    /// Maximum corner.
    pub upper_right: Point,
}

impl BoundingBox {
    /// Box from explicit corners. No ordering check: inverted boxes are empty.
    pub fn new(lower_left: Point, upper_right: Point) -> Self {
        Self {
            lower_left,
            upper_right,
        }
    }

    /// All of space.
    pub fn infinite() -> Self {
        Self::new([f64::NEG_INFINITY; 3], [f64::INFINITY; 3])
    }

    /// Infinite box clipped to `[min, max]` along one axis.
    pub fn along(axis: Axis, min: f64, max: f64) -> Self {
        let mut bb = Self::infinite();
        bb.lower_left[axis.index()] = min;
        bb.upper_right[axis.index()] = max;
        bb
    }

    /// Component-wise max of mins, min of maxes.
    pub fn intersection(&self, other: &BoundingBox) -> BoundingBox {
        let mut out = *self;
        for i in 0..3 {
            out.lower_left[i] = self.lower_left[i].max(other.lower_left[i]);
            out.upper_right[i] = self.upper_right[i].min(other.upper_right[i]);
        }
        out
    }

    /// Component-wise min of mins, max of maxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let mut out = *self;
        for i in 0..3 {
            out.lower_left[i] = self.lower_left[i].min(other.lower_left[i]);
            out.upper_right[i] = self.upper_right[i].max(other.upper_right[i]);
        }
        out
    }

    /// Whether the box is inverted on any axis.
    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.lower_left[i] > self.upper_right[i])
    }

    /// Whether every extent is finite.
    pub fn is_bounded(&self) -> bool {
        self.lower_left
            .iter()
            .chain(self.upper_right.iter())
            .all(|v| v.is_finite())
    }

    /// Whether `other` lies within `self` on every axis.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        (0..3).all(|i| {
            self.lower_left[i] <= other.lower_left[i] && other.upper_right[i] <= self.upper_right[i]
        })
    }

    /// Whether `point` lies within the closed box.
    pub fn contains_point(&self, point: Point) -> bool {
        (0..3).all(|i| self.lower_left[i] <= point[i] && point[i] <= self.upper_right[i])
    }

    /// Midpoint per axis (infinite or NaN on unbounded axes).
    pub fn center(&self) -> Point {
        let mut c = [0.0; 3];
        for (i, v) in c.iter_mut().enumerate() {
            *v = (self.lower_left[i] + self.upper_right[i]) / 2.0;
        }
        c
    }

    /// Extent per axis (infinite on unbounded axes).
    pub fn width(&self) -> Point {
        let mut w = [0.0; 3];
        for (i, v) in w.iter_mut().enumerate() {
            *v = self.upper_right[i] - self.lower_left[i];
        }
        w
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundingBox(lower_left={:?}, upper_right={:?})",
            self.lower_left, self.upper_right
        )
    }
}
