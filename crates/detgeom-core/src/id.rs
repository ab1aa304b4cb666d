//! Strongly-typed identifiers and the [`Point`] / [`LatticeIndex`] aliases.

use smallvec::SmallVec;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Counter for unique [`SurfaceId`] allocation.
static SURFACE_ID_COUNTER: AtomicU32 = AtomicU32::new(1);

/// Unique per-instance identifier for a surface.
///
/// Allocated from a monotonic atomic counter via [`SurfaceId::next`], so two
/// surfaces built at different call sites never share an ID even if they
/// describe the same plane. Cloning a surface preserves its ID, which is
/// correct because surfaces are immutable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u32);

impl SurfaceId {
    /// Allocate a fresh, unique surface ID. Thread-safe.
    pub fn next() -> Self {
        Self(SURFACE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value, as written into region expressions.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a cell within a geometry arena.
///
/// Cells are registered with a `GeometryBuilder` and assigned sequential IDs.
/// `CellId(n)` is the n-th cell added to the builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u32);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a universe within a geometry arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniverseId(pub u32);

impl fmt::Display for UniverseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for UniverseId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a lattice within a geometry arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticeId(pub u32);

impl fmt::Display for LatticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LatticeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Opaque handle to a material owned by the materials collaborator.
///
/// The geometry never inspects material contents; it only checks that a
/// handle was registered before a cell is filled with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u32);

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MaterialId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// A point in 3D model space, `[x, y, z]`.
pub type Point = [f64; 3];

/// An integer index into a lattice, one component per lattice axis.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for lattices up to
/// 4 dimensions; geometry lattices never exceed 3.
pub type LatticeIndex = SmallVec<[i32; 4]>;
