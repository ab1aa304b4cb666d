//! Test utilities for detgeom development.
//!
//! Provides small hand-built geometries ([`fixtures`]) that exercise the
//! sharing and lattice paths of the model, and proptest strategies
//! ([`strategies`]) for configs and points.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{
    lattice_column, nested_geometry, shared_universe_geometry, square, LatticeColumn,
    NestedGeometry, SharedUniverse,
};
pub use strategies::{arb_array_config, arb_point_in};
