//! Core types for the detgeom geometry workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! arena identifiers shared by every other crate (surfaces, cells,
//! universes, lattices, materials), the coordinate aliases, and the two
//! error enums that split construction failures from query failures.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::{BuildError, QueryError};
pub use id::{CellId, LatticeId, LatticeIndex, MaterialId, Point, SurfaceId, UniverseId};
