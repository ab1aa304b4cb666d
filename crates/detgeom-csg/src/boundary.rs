//! Boundary classification attached to surfaces.

use std::fmt;

/// How the transport collaborator treats a particle reaching a surface.
///
/// This is metadata only: region algebra, bounding boxes and point
/// containment ignore it. It travels with the surface so an exporter can
/// honor it. Coincident surfaces with different classifications are the
/// caller's problem to reconcile.
///
/// # Examples
///
/// ```
/// use detgeom_csg::{Axis, BoundaryType, Surface};
///
/// let wall = Surface::plane(Axis::X, 500.0).with_boundary(BoundaryType::Vacuum);
/// assert_eq!(wall.boundary(), BoundaryType::Vacuum);
///
/// // Planes default to transmission.
/// assert_eq!(Surface::plane(Axis::Z, 0.0).boundary(), BoundaryType::Transmission);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryType {
    /// Particles cross freely.
    #[default]
    Transmission,
    /// Particles leaving through the surface are killed.
    Vacuum,
    /// Particles are mirrored back.
    Reflective,
    /// Particles re-enter through the paired opposite surface.
    Periodic,
}

impl BoundaryType {
    /// Lower-case keyword used by exporters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transmission => "transmission",
            Self::Vacuum => "vacuum",
            Self::Reflective => "reflective",
            Self::Periodic => "periodic",
        }
    }
}

impl fmt::Display for BoundaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
