//! Error types for geometry construction and queries.
//!
//! Organized by phase: [`BuildError`] for anything rejected while the model
//! is being assembled, [`QueryError`] for failures while reading a finished
//! geometry. Geometric degeneracy (an empty intersection) is never an error.

use std::error::Error;
use std::fmt;

use crate::{CellId, LatticeId, LatticeIndex, MaterialId, UniverseId};

/// Errors raised at the construction call that introduced the problem.
#[derive(Clone, Debug, PartialEq)]
pub enum BuildError {
    /// A length that must be strictly positive and finite was not.
    NonPositiveDimension {
        /// Parameter name (e.g. `"width"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A `[min, max]` extent was empty, inverted, or non-finite.
    InvalidExtent {
        /// Lower bound as supplied.
        min: f64,
        /// Upper bound as supplied.
        max: f64,
    },
    /// Lattice `pitch`, `lower_left` and `shape` disagree on rank, or the
    /// rank is outside `1..=3`.
    LatticeRankMismatch {
        /// Length of `pitch`.
        pitch: usize,
        /// Length of `lower_left`.
        lower_left: usize,
        /// Length of `shape`.
        shape: usize,
    },
    /// The lattice universes array does not match its declared shape.
    LatticeShapeMismatch {
        /// Number of slots implied by the shape.
        expected: usize,
        /// Number of universes supplied.
        got: usize,
    },
    /// A fill references a material that was never registered.
    UnknownMaterial(MaterialId),
    /// A fill or lattice slot references a universe that does not exist yet.
    UnknownUniverse(UniverseId),
    /// A fill references a lattice that does not exist yet.
    UnknownLattice(LatticeId),
    /// A universe or root list references a cell that does not exist.
    UnknownCell(CellId),
    /// A cell was placed in a second universe (or listed as a root while
    /// already owned by a universe).
    CellAlreadyOwned {
        /// The cell being placed twice.
        cell: CellId,
        /// The universe that already owns it.
        owner: UniverseId,
    },
    /// A configuration struct failed validation.
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDimension { name, value } => {
                write!(f, "{name} must be positive and finite, got {value}")
            }
            Self::InvalidExtent { min, max } => {
                write!(f, "invalid extent [{min}, {max}]: min must be below max")
            }
            Self::LatticeRankMismatch {
                pitch,
                lower_left,
                shape,
            } => write!(
                f,
                "lattice rank mismatch: pitch has {pitch} axes, lower_left {lower_left}, \
                 shape {shape} (all must agree, 1 to 3)"
            ),
            Self::LatticeShapeMismatch { expected, got } => {
                write!(f, "lattice shape needs {expected} universes, got {got}")
            }
            Self::UnknownMaterial(id) => write!(f, "unknown material {id}"),
            Self::UnknownUniverse(id) => write!(f, "unknown universe {id}"),
            Self::UnknownLattice(id) => write!(f, "unknown lattice {id}"),
            Self::UnknownCell(id) => write!(f, "unknown cell {id}"),
            Self::CellAlreadyOwned { cell, owner } => {
                write!(f, "cell {cell} already belongs to universe {owner}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for BuildError {}

/// Errors from reading a finished geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// The requested cell is not in the geometry.
    UnknownCell(CellId),
    /// A cell's fill handle resolves to nothing in the arena.
    ///
    /// A geometry produced by the builder never contains one; seeing this
    /// means handles from a different geometry were mixed in.
    DanglingFill {
        /// The cell whose fill failed to resolve.
        cell: CellId,
        /// Description of the unresolved handle.
        fill: String,
    },
    /// A lattice index outside the configured extent.
    LatticeIndexOutOfBounds {
        /// The offending index.
        index: LatticeIndex,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A search that must produce targets matched nothing.
    NoMatchingCells {
        /// What was being looked for.
        target: String,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCell(id) => write!(f, "unknown cell {id}"),
            Self::DanglingFill { cell, fill } => {
                write!(f, "cell {cell} has a dangling fill: {fill}")
            }
            Self::LatticeIndexOutOfBounds { index, bounds } => {
                write!(f, "lattice index {index:?} out of bounds: {bounds}")
            }
            Self::NoMatchingCells { target } => {
                write!(f, "no {target} found")
            }
        }
    }
}

impl Error for QueryError {}
