//! Rectangular prism and slab builders.

use detgeom_core::{BuildError, Point};

use crate::boundary::BoundaryType;
use crate::region::Region;
use crate::surface::{Axis, Surface};

/// An infinite prism with rectangular cross-section.
///
/// The prism runs along `axis`; `width` is measured along the first
/// cross-section axis and `height` along the second (see
/// [`Axis::cross_section`]). All four bounding planes carry `boundary`.
///
/// # Examples
///
/// ```
/// use detgeom_csg::{Axis, BoundaryType, RectangularPrism};
///
/// let prism = RectangularPrism::new(2.0, 1.0)
///     .with_axis(Axis::X)
///     .with_boundary(BoundaryType::Reflective)
///     .build()
///     .unwrap();
/// let bb = prism.bounding_box();
/// // Runs along x; width spans y, height spans z.
/// assert_eq!(bb.lower_left, [f64::NEG_INFINITY, -1.0, -0.5]);
/// assert_eq!(bb.upper_right, [f64::INFINITY, 1.0, 0.5]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RectangularPrism {
    /// Extent along the first cross-section axis. Must be positive.
    pub width: f64,
    /// Extent along the second cross-section axis. Must be positive.
    pub height: f64,
    /// Axis the prism extends along. Default: `Z`.
    pub axis: Axis,
    /// Centre of the cross-section; the component along `axis` is ignored.
    pub origin: Point,
    /// Classification attached to all four planes. Default: transmission.
    pub boundary: BoundaryType,
}

impl RectangularPrism {
    /// Prism along `z` centred on the origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            axis: Axis::Z,
            origin: [0.0; 3],
            boundary: BoundaryType::Transmission,
        }
    }

    /// Set the axis the prism runs along.
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the cross-section centre.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Set the boundary classification.
    pub fn with_boundary(mut self, boundary: BoundaryType) -> Self {
        self.boundary = boundary;
        self
    }

    /// Build `+min_a & -max_a & +min_b & -max_b`.
    ///
    /// Returns [`BuildError::NonPositiveDimension`] if `width` or `height`
    /// is not a positive finite number.
    pub fn build(&self) -> Result<Region, BuildError> {
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        let (a, b) = self.axis.cross_section();
        let (ca, cb) = (self.origin[a.index()], self.origin[b.index()]);
        let plane = |axis: Axis, at: f64| {
            Surface::plane(axis, at)
                .with_boundary(self.boundary)
                .into_shared()
        };

        let a_min = plane(a, ca - self.width / 2.0);
        let a_max = plane(a, ca + self.width / 2.0);
        let b_min = plane(b, cb - self.height / 2.0);
        let b_max = plane(b, cb + self.height / 2.0);

        Ok(Surface::positive(&a_min)
            & Surface::negative(&a_max)
            & Surface::positive(&b_min)
            & Surface::negative(&b_max))
    }
}

/// Infinite prism along `z` with the given cross-section.
///
/// `width` spans x and `height` spans y around `origin`.
pub fn rectangular_prism(
    width: f64,
    height: f64,
    origin: Point,
    boundary: BoundaryType,
) -> Result<Region, BuildError> {
    RectangularPrism::new(width, height)
        .with_origin(origin)
        .with_boundary(boundary)
        .build()
}

/// The region `min < p[axis] < max`.
///
/// Returns [`BuildError::InvalidExtent`] unless `min < max` and both are finite.
pub fn slab(axis: Axis, min: f64, max: f64, boundary: BoundaryType) -> Result<Region, BuildError> {
    if !(min.is_finite() && max.is_finite() && min < max) {
        return Err(BuildError::InvalidExtent { min, max });
    }
    let lo = Surface::plane(axis, min).with_boundary(boundary).into_shared();
    let hi = Surface::plane(axis, max).with_boundary(boundary).into_shared();
    Ok(Surface::positive(&lo) & Surface::negative(&hi))
}

fn check_positive(name: &'static str, value: f64) -> Result<(), BuildError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BuildError::NonPositiveDimension { name, value })
    }
}
