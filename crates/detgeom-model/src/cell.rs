//! Cells, their fills, and the universes that group them.

use std::fmt;

use detgeom_core::{CellId, LatticeId, MaterialId, UniverseId};
use detgeom_csg::Region;

/// What occupies a cell's region.
///
/// A lattice fill resolves to the universes in its slots, so every non-material
/// fill ends up as "some universes", whichever way it got there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fill {
    /// A homogeneous material supplied by the materials collaborator.
    Material(MaterialId),
    /// A nested universe in the cell's own coordinate frame.
    Universe(UniverseId),
    /// A regular array of universes.
    Lattice(LatticeId),
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Material(id) => write!(f, "material {id}"),
            Self::Universe(id) => write!(f, "universe {id}"),
            Self::Lattice(id) => write!(f, "lattice {id}"),
        }
    }
}

/// Builder input for a cell.
///
/// Passed to [`GeometryBuilder::cell`](crate::GeometryBuilder::cell), which
/// validates the fill and assigns the [`CellId`].
#[derive(Clone, Debug)]
pub struct CellDef {
    /// Optional name; several cells may share one.
    pub name: Option<String>,
    /// Region the cell occupies.
    pub region: Region,
    /// What fills it.
    pub fill: Fill,
}

impl CellDef {
    /// Unnamed cell.
    pub fn new(region: Region, fill: Fill) -> Self {
        Self {
            name: None,
            region,
            fill,
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A region bound to a fill. Immutable once inside a geometry.
#[derive(Clone, Debug)]
pub struct Cell {
    id: CellId,
    name: Option<String>,
    region: Region,
    fill: Fill,
}

impl Cell {
    pub(crate) fn from_def(id: CellId, def: CellDef) -> Self {
        Self {
            id,
            name: def.name,
            region: def.region,
            fill: def.fill,
        }
    }

    /// Arena identity.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Occupied region.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Fill.
    pub fn fill(&self) -> Fill {
        self.fill
    }
}

/// Builder input for a universe.
#[derive(Clone, Debug, Default)]
pub struct UniverseDef {
    /// Optional name.
    pub name: Option<String>,
    /// Member cells, in insertion order.
    pub cells: Vec<CellId>,
}

impl UniverseDef {
    /// Unnamed universe over `cells`.
    pub fn new(cells: impl IntoIterator<Item = CellId>) -> Self {
        Self {
            name: None,
            cells: cells.into_iter().collect(),
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Cells sharing one coordinate frame.
///
/// A universe may be referenced by any number of cells and lattice slots;
/// it is stored once and addressed by [`UniverseId`].
#[derive(Clone, Debug)]
pub struct Universe {
    id: UniverseId,
    name: Option<String>,
    cells: Vec<CellId>,
}

impl Universe {
    pub(crate) fn from_def(id: UniverseId, def: UniverseDef) -> Self {
        Self {
            id,
            name: def.name,
            cells: def.cells,
        }
    }

    /// Arena identity.
    pub fn id(&self) -> UniverseId {
        self.id
    }

    /// Name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Member cells in insertion order.
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }
}

/// A material handle registered with the geometry.
#[derive(Clone, Debug)]
pub struct Material {
    id: MaterialId,
    name: String,
}

impl Material {
    pub(crate) fn new(id: MaterialId, name: String) -> Self {
        Self { id, name }
    }

    /// Handle.
    pub fn id(&self) -> MaterialId {
        self.id
    }

    /// Name given by the materials collaborator.
    pub fn name(&self) -> &str {
        &self.name
    }
}
