//! Axis-aligned plane surfaces.

use std::fmt;
use std::sync::Arc;

use detgeom_core::{Point, SurfaceId};

use crate::boundary::BoundaryType;
use crate::halfspace::{HalfSpace, Sense};

/// A coordinate axis of model space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// The x axis (component 0).
    X,
    /// The y axis (component 1).
    Y,
    /// The z axis (component 2).
    Z,
}

impl Axis {
    /// All three axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into a [`Point`].
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// The two axes spanning the plane normal to `self`, in cyclic order
    /// (`Z -> (X, Y)`, `X -> (Y, Z)`, `Y -> (Z, X)`).
    pub fn cross_section(self) -> (Axis, Axis) {
        match self {
            Self::X => (Self::Y, Self::Z),
            Self::Y => (Self::Z, Self::X),
            Self::Z => (Self::X, Self::Y),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        })
    }
}

/// An immutable plane `p[axis] = position`.
///
/// Surfaces are shared between half-spaces through `Arc`, so one plane can
/// bound several regions while keeping a single [`SurfaceId`].
///
/// # Examples
///
/// ```
/// use detgeom_csg::{Axis, Surface};
///
/// let ceil = Surface::plane(Axis::Z, 2500.0).into_shared();
/// let below = Surface::negative(&ceil);
/// assert!(below.contains([0.0, 0.0, 0.0]));
/// assert!(!below.contains([0.0, 0.0, 3000.0]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    id: SurfaceId,
    axis: Axis,
    position: f64,
    boundary: BoundaryType,
    name: Option<String>,
}

impl Surface {
    /// Plane normal to `axis` at `position`, with transmission boundary.
    pub fn plane(axis: Axis, position: f64) -> Self {
        Self {
            id: SurfaceId::next(),
            axis,
            position,
            boundary: BoundaryType::Transmission,
            name: None,
        }
    }

    /// Plane `x = x0`.
    pub fn x_plane(x0: f64) -> Self {
        Self::plane(Axis::X, x0)
    }

    /// Plane `y = y0`.
    pub fn y_plane(y0: f64) -> Self {
        Self::plane(Axis::Y, y0)
    }

    /// Plane `z = z0`.
    pub fn z_plane(z0: f64) -> Self {
        Self::plane(Axis::Z, z0)
    }

    /// Replace the boundary classification.
    pub fn with_boundary(mut self, boundary: BoundaryType) -> Self {
        self.boundary = boundary;
        self
    }

    /// Attach a human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Wrap in an `Arc` for sharing between half-spaces.
    pub fn into_shared(self) -> Arc<Surface> {
        Arc::new(self)
    }

    /// Unique ID of this surface.
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Axis the plane is normal to.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Coordinate of the plane along its axis.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Boundary classification.
    pub fn boundary(&self) -> BoundaryType {
        self.boundary
    }

    /// Optional name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Signed distance of `point` from the plane along its axis.
    pub fn evaluate(&self, point: Point) -> f64 {
        point[self.axis.index()] - self.position
    }

    /// The half-space `+surface` (coordinates above the plane).
    pub fn positive(surface: &Arc<Surface>) -> HalfSpace {
        HalfSpace::new(Arc::clone(surface), Sense::Positive)
    }

    /// The half-space `-surface` (coordinates below the plane).
    pub fn negative(surface: &Arc<Surface>) -> HalfSpace {
        HalfSpace::new(Arc::clone(surface), Sense::Negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_is_signed_offset_along_axis() {
        let s = Surface::y_plane(1.5);
        assert_eq!(s.evaluate([9.0, 2.0, -4.0]), 0.5);
        assert_eq!(s.evaluate([9.0, 1.0, -4.0]), -0.5);
    }

    #[test]
    fn clone_preserves_identity() {
        let s = Surface::x_plane(0.0).with_name("mid");
        let t = s.clone();
        assert_eq!(s.id(), t.id());
        assert_eq!(t.name(), Some("mid"));
    }

    #[test]
    fn distinct_planes_get_distinct_ids() {
        assert_ne!(Surface::z_plane(1.0).id(), Surface::z_plane(1.0).id());
    }

    #[test]
    fn cross_section_is_cyclic() {
        assert_eq!(Axis::Z.cross_section(), (Axis::X, Axis::Y));
        assert_eq!(Axis::X.cross_section(), (Axis::Y, Axis::Z));
        assert_eq!(Axis::Y.cross_section(), (Axis::Z, Axis::X));
    }
}
