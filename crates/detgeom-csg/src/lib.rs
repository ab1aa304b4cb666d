//! Constructive solid geometry for detgeom models.
//!
//! This crate turns axis-aligned planes into closed regions:
//!
//! - [`Surface`]: an immutable plane normal to an [`Axis`], tagged with a
//!   [`BoundaryType`] for the exporting collaborator
//! - [`HalfSpace`]: one side of a surface
//! - [`Region`]: an immutable tree of intersections, unions and complements,
//!   with exact [`contains`](Region::contains) and conservative
//!   [`bounding_box`](Region::bounding_box)
//! - [`RectangularPrism`] / [`slab`]: the builders used to assemble detector
//!   blocks and their enclosing domain
//!
//! Regions combine with `&`, `|` and `!`:
//!
//! ```
//! use detgeom_csg::{rectangular_prism, slab, Axis, BoundaryType};
//!
//! let prism = rectangular_prism(0.35, 0.175, [0.0; 3], BoundaryType::Transmission).unwrap();
//! let block = prism & slab(Axis::Z, -0.175, 0.175, BoundaryType::Transmission).unwrap();
//! assert!(block.bounding_box().is_bounded());
//! assert!(!(!&block).bounding_box().is_bounded());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bbox;
pub mod boundary;
pub mod halfspace;
pub mod prism;
pub mod region;
pub mod surface;

#[cfg(test)]
pub(crate) mod laws;

pub use bbox::BoundingBox;
pub use boundary::BoundaryType;
pub use halfspace::{HalfSpace, Sense};
pub use prism::{rectangular_prism, slab, RectangularPrism};
pub use region::{complement, intersect, union, Region};
pub use surface::{Axis, Surface};
