//! Region trees: boolean combinations of half-spaces.
//!
//! A [`Region`] is immutable. Combining regions allocates a new node and
//! shares the operands through `Arc`, so the same sub-tree can appear in
//! many regions (e.g. a holder box used both as a cell and, complemented,
//! as the hole in the surrounding domain).

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use detgeom_core::{Point, SurfaceId};
use indexmap::IndexMap;

use crate::bbox::BoundingBox;
use crate::halfspace::HalfSpace;
use crate::surface::Surface;

/// A node of a constructive-solid-geometry expression.
///
/// # Examples
///
/// ```
/// use detgeom_csg::{Region, Surface};
///
/// let lo = Surface::x_plane(-1.0).into_shared();
/// let hi = Surface::x_plane(1.0).into_shared();
/// let slab = Surface::positive(&lo) & Surface::negative(&hi);
///
/// assert!(slab.contains([0.0, 5.0, 5.0]));
/// let bb = slab.bounding_box();
/// assert_eq!((bb.lower_left[0], bb.upper_right[0]), (-1.0, 1.0));
///
/// // Complement is exact for membership but unbounded as a box.
/// let outside = !&slab;
/// assert!(outside.contains([2.0, 0.0, 0.0]));
/// assert!(!outside.bounding_box().is_bounded());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Region {
    /// A single half-space.
    Leaf(HalfSpace),
    /// Points in both operands.
    Intersection(Arc<Region>, Arc<Region>),
    /// Points in either operand.
    Union(Arc<Region>, Arc<Region>),
    /// Points not in the operand.
    Complement(Arc<Region>),
}

/// `a & b`. Never fails; an empty result is a valid region.
pub fn intersect(a: impl Into<Region>, b: impl Into<Region>) -> Region {
    Region::Intersection(Arc::new(a.into()), Arc::new(b.into()))
}

/// `a | b`.
pub fn union(a: impl Into<Region>, b: impl Into<Region>) -> Region {
    Region::Union(Arc::new(a.into()), Arc::new(b.into()))
}

/// `~a`.
pub fn complement(a: impl Into<Region>) -> Region {
    Region::Complement(Arc::new(a.into()))
}

impl Region {
    /// Exact point membership, evaluated on the tree.
    ///
    /// Use this, not [`bounding_box`](Self::bounding_box), for containment.
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Self::Leaf(hs) => hs.contains(point),
            Self::Intersection(a, b) => a.contains(point) && b.contains(point),
            Self::Union(a, b) => a.contains(point) || b.contains(point),
            Self::Complement(a) => !a.contains(point),
        }
    }

    /// Conservative axis-aligned box, by structural recursion.
    ///
    /// Intersections may come out inverted (empty). Complements are always
    /// the infinite box, whatever their operand.
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Self::Leaf(hs) => hs.bounding_box(),
            Self::Intersection(a, b) => a.bounding_box().intersection(&b.bounding_box()),
            Self::Union(a, b) => a.bounding_box().union(&b.bounding_box()),
            Self::Complement(_) => BoundingBox::infinite(),
        }
    }

    /// Unique surfaces referenced by the tree, in first-appearance order.
    pub fn surfaces(&self) -> IndexMap<SurfaceId, Arc<Surface>> {
        let mut out = IndexMap::new();
        self.collect_surfaces(&mut out);
        out
    }

    fn collect_surfaces(&self, out: &mut IndexMap<SurfaceId, Arc<Surface>>) {
        match self {
            Self::Leaf(hs) => {
                let s = hs.surface();
                out.entry(s.id()).or_insert_with(|| Arc::clone(s));
            }
            Self::Intersection(a, b) | Self::Union(a, b) => {
                a.collect_surfaces(out);
                b.collect_surfaces(out);
            }
            Self::Complement(a) => a.collect_surfaces(out),
        }
    }
}

impl From<HalfSpace> for Region {
    fn from(hs: HalfSpace) -> Self {
        Self::Leaf(hs)
    }
}

impl From<&HalfSpace> for Region {
    fn from(hs: &HalfSpace) -> Self {
        Self::Leaf(hs.clone())
    }
}

impl From<&Region> for Region {
    fn from(r: &Region) -> Self {
        r.clone()
    }
}

// ── operators ────────────────────────────────────────────────────────

impl<R: Into<Region>> BitAnd<R> for Region {
    type Output = Region;
    fn bitand(self, rhs: R) -> Region {
        intersect(self, rhs)
    }
}

impl<R: Into<Region>> BitAnd<R> for &Region {
    type Output = Region;
    fn bitand(self, rhs: R) -> Region {
        intersect(self, rhs)
    }
}

impl<R: Into<Region>> BitAnd<R> for HalfSpace {
    type Output = Region;
    fn bitand(self, rhs: R) -> Region {
        intersect(self, rhs)
    }
}

impl<R: Into<Region>> BitOr<R> for Region {
    type Output = Region;
    fn bitor(self, rhs: R) -> Region {
        union(self, rhs)
    }
}

impl<R: Into<Region>> BitOr<R> for &Region {
    type Output = Region;
    fn bitor(self, rhs: R) -> Region {
        union(self, rhs)
    }
}

impl<R: Into<Region>> BitOr<R> for HalfSpace {
    type Output = Region;
    fn bitor(self, rhs: R) -> Region {
        union(self, rhs)
    }
}

impl Not for Region {
    type Output = Region;
    fn not(self) -> Region {
        complement(self)
    }
}

impl Not for &Region {
    type Output = Region;
    fn not(self) -> Region {
        complement(self)
    }
}

impl Not for HalfSpace {
    type Output = Region;
    fn not(self) -> Region {
        complement(self)
    }
}

// ── display ──────────────────────────────────────────────────────────

/// Infix form over surface IDs: `+1 -2` (intersection), `a | b` (union),
/// `~(a)` (complement).
impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(hs) => write!(f, "{hs}"),
            Self::Intersection(a, b) => {
                write_operand(f, a)?;
                f.write_str(" ")?;
                write_operand(f, b)
            }
            Self::Union(a, b) => write!(f, "{a} | {b}"),
            Self::Complement(a) => write!(f, "~({a})"),
        }
    }
}

/// Unions bind looser than intersections and need parentheses inside one.
fn write_operand(f: &mut fmt::Formatter<'_>, r: &Region) -> fmt::Result {
    match r {
        Region::Union(..) => write!(f, "({r})"),
        _ => write!(f, "{r}"),
    }
}
