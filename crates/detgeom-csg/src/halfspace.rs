//! Half-spaces: one side of a surface.

use std::fmt;
use std::ops::Neg;
use std::sync::Arc;

use detgeom_core::Point;

use crate::bbox::BoundingBox;
use crate::surface::Surface;

/// Which side of a surface a half-space covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sense {
    /// Points where the surface evaluates above zero.
    Positive,
    /// Points where the surface evaluates below zero.
    Negative,
}

impl Sense {
    /// The other side.
    pub fn flip(self) -> Sense {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// The set of points strictly on one side of a [`Surface`].
///
/// The sense is fixed at construction. Points exactly on the surface belong
/// to neither side.
#[derive(Clone, Debug, PartialEq)]
pub struct HalfSpace {
    surface: Arc<Surface>,
    sense: Sense,
}

impl HalfSpace {
    /// Half-space of `surface` on the `sense` side.
    pub fn new(surface: Arc<Surface>, sense: Sense) -> Self {
        Self { surface, sense }
    }

    /// The bounding surface.
    pub fn surface(&self) -> &Arc<Surface> {
        &self.surface
    }

    /// The side covered.
    pub fn sense(&self) -> Sense {
        self.sense
    }

    /// Strict point membership.
    pub fn contains(&self, point: Point) -> bool {
        let v = self.surface.evaluate(point);
        match self.sense {
            Sense::Positive => v > 0.0,
            Sense::Negative => v < 0.0,
        }
    }

    /// The plane clips one side of its axis; every other extent is infinite.
    pub fn bounding_box(&self) -> BoundingBox {
        let axis = self.surface.axis();
        let at = self.surface.position();
        match self.sense {
            Sense::Positive => BoundingBox::along(axis, at, f64::INFINITY),
            Sense::Negative => BoundingBox::along(axis, f64::NEG_INFINITY, at),
        }
    }
}

impl Neg for HalfSpace {
    type Output = HalfSpace;

    fn neg(self) -> HalfSpace {
        HalfSpace::new(self.surface, self.sense.flip())
    }
}

impl Neg for &HalfSpace {
    type Output = HalfSpace;

    fn neg(self) -> HalfSpace {
        HalfSpace::new(Arc::clone(&self.surface), self.sense.flip())
    }
}

impl fmt::Display for HalfSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.sense {
            Sense::Positive => '+',
            Sense::Negative => '-',
        };
        write!(f, "{sign}{}", self.surface.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Axis;

    #[test]
    fn points_on_the_plane_are_in_neither_side() {
        let s = Surface::x_plane(1.0).into_shared();
        let on = [1.0, 0.0, 0.0];
        assert!(!Surface::positive(&s).contains(on));
        assert!(!Surface::negative(&s).contains(on));
    }

    #[test]
    fn negation_flips_sense_and_keeps_surface() {
        let s = Surface::z_plane(0.0).into_shared();
        let up = Surface::positive(&s);
        let down = -&up;
        assert_eq!(down.sense(), Sense::Negative);
        assert_eq!(down.surface().id(), s.id());
        assert_eq!(up.sense(), Sense::Positive);
    }

    #[test]
    fn bounding_box_clips_only_its_axis() {
        let s = Surface::plane(Axis::Y, -2.0).into_shared();
        let bb = Surface::positive(&s).bounding_box();
        assert_eq!(bb.lower_left, [f64::NEG_INFINITY, -2.0, f64::NEG_INFINITY]);
        assert_eq!(bb.upper_right, [f64::INFINITY; 3]);

        let bb = Surface::negative(&s).bounding_box();
        assert_eq!(bb.upper_right, [f64::INFINITY, -2.0, f64::INFINITY]);
    }

    #[test]
    fn display_uses_signed_surface_id() {
        let s = Surface::x_plane(0.0).into_shared();
        let id = s.id();
        assert_eq!(Surface::positive(&s).to_string(), format!("+{id}"));
        assert_eq!(Surface::negative(&s).to_string(), format!("-{id}"));
    }
}
