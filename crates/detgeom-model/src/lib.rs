//! Arena-backed geometry models for detgeom.
//!
//! Cells bind a [`Region`](detgeom_csg::Region) to a [`Fill`]; universes
//! group cells in one coordinate frame; rectilinear lattices replicate
//! universes on a regular grid. Everything is addressed by integer handle.
//!
//! # Architecture
//!
//! ```text
//! GeometryBuilder (mutable, insertion-ordered)
//! ├── materials  MaterialId → Material
//! ├── cells      CellId     → Cell { region, fill }
//! ├── universes  UniverseId → Universe { cells }
//! └── lattices   LatticeId  → RectLattice { pitch, lower_left, shape, slots }
//!         │
//!         ▼ build(roots)
//! Geometry (immutable, Send + Sync)
//! ├── find_cells / by_name   one-level search below the roots
//! └── locate                 point location down to a material
//! ```
//!
//! A fill can only name something that already exists, so insertion order
//! is a topological order and no fill cycle can be expressed.
//!
//! [`DetectorArray`] assembles the column-of-detectors model from an
//! [`ArrayConfig`], and [`Model`] bundles a geometry with [`RunSettings`]
//! and [`CellTally`] values for the transport collaborator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assembly;
pub mod builder;
pub mod cell;
pub mod config;
pub mod geometry;
pub mod lattice;
pub mod locate;
pub mod search;
pub mod settings;
pub mod tally;

// Public re-exports for the primary API surface.
pub use assembly::{ArrayMaterials, DetectorArray, DETECTOR_NAME};
pub use builder::GeometryBuilder;
pub use cell::{Cell, CellDef, Fill, Material, Universe, UniverseDef};
pub use config::{ArrayConfig, DetectorConfig, DomainConfig};
pub use geometry::Geometry;
pub use lattice::RectLattice;
pub use locate::Location;
pub use search::{by_name, find_cells, CellMatch};
pub use settings::{Particle, PointSource, RunMode, RunSettings};
pub use tally::{CellTally, Model, TallyTargets};
