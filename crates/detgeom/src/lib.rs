//! detgeom: constructive solid geometry for radiation-detector arrays.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! detgeom sub-crates. For most users, adding `detgeom` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use detgeom::prelude::*;
//!
//! // The default column: eight 0.35 x 0.175 x 0.35 detectors on a 0.4 pitch.
//! let array = DetectorArray::build(&ArrayConfig::default()).unwrap();
//!
//! // One universe fills every lattice slot, so the search finds one cell.
//! let detectors = array.detector_cells().unwrap();
//! assert_eq!(detectors.len(), 1);
//!
//! // Centre of the lowest element.
//! let hit = array.geometry().locate([5.175, -1.4, 0.0]).unwrap().unwrap();
//! assert_eq!(hit.cell(), array.detector());
//!
//! let tally = array.flux_tally().unwrap();
//! let model = Model::new(array.into_geometry(), RunSettings::default(), vec![tally]).unwrap();
//! assert_eq!(model.tallies()[0].name(), "flux");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `detgeom-core` | IDs, coordinates, error enums |
//! | [`csg`] | `detgeom-csg` | Surfaces, half-spaces, regions, bounding boxes, prism builders |
//! | [`model`] | `detgeom-model` | Geometry arena, lattices, search, location, assembly, settings |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core IDs, coordinates and errors (`detgeom-core`).
pub use detgeom_core as types;

/// Region algebra and prism builders (`detgeom-csg`).
///
/// [`csg::Region`] values combine with `&`, `|` and `!`; their
/// [`csg::BoundingBox`] is inferred structurally.
pub use detgeom_csg as csg;

/// Geometry arena and the operations on it (`detgeom-model`).
///
/// Start from [`model::GeometryBuilder`] for hand-built models or
/// [`model::DetectorArray`] for the detector column.
pub use detgeom_model as model;

/// Common imports for typical detgeom usage.
///
/// ```rust
/// use detgeom::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use detgeom_core::{
        BuildError, CellId, LatticeId, LatticeIndex, MaterialId, Point, QueryError, UniverseId,
    };

    // Region algebra
    pub use detgeom_csg::{
        rectangular_prism, slab, Axis, BoundaryType, BoundingBox, HalfSpace, RectangularPrism,
        Region, Surface,
    };

    // Geometry
    pub use detgeom_model::{
        by_name, find_cells, CellDef, CellMatch, Fill, Geometry, GeometryBuilder, Location,
        RectLattice, UniverseDef,
    };

    // Detector array and run setup
    pub use detgeom_model::{
        ArrayConfig, CellTally, DetectorArray, Model, RunSettings, TallyTargets,
    };
}
