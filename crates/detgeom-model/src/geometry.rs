//! The immutable geometry arena.

use std::sync::Arc;

use detgeom_core::{CellId, LatticeId, MaterialId, QueryError, SurfaceId, UniverseId};
use detgeom_csg::{BoundingBox, Surface};
use indexmap::IndexMap;

use crate::cell::{Cell, Fill, Material, Universe};
use crate::lattice::RectLattice;

/// A finished model: materials, cells, universes and lattices addressed by
/// handle, plus the ordered root cells.
///
/// Produced by [`GeometryBuilder::build`](crate::GeometryBuilder::build) and
/// never mutated afterwards, so it can be shared across threads freely.
/// Universes are stored once however many cells or lattice slots refer to
/// them; a per-cell owner table records which universe contains each cell.
#[derive(Clone, Debug)]
pub struct Geometry {
    materials: Vec<Material>,
    cells: Vec<Cell>,
    owners: Vec<Option<UniverseId>>,
    universes: Vec<Universe>,
    lattices: Vec<RectLattice>,
    root: Vec<CellId>,
}

impl Geometry {
    pub(crate) fn from_parts(
        materials: Vec<Material>,
        cells: Vec<Cell>,
        owners: Vec<Option<UniverseId>>,
        universes: Vec<Universe>,
        lattices: Vec<RectLattice>,
        root: Vec<CellId>,
    ) -> Self {
        Self {
            materials,
            cells,
            owners,
            universes,
            lattices,
            root,
        }
    }

    /// Look up a cell.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0 as usize)
    }

    /// Look up a universe.
    pub fn universe(&self, id: UniverseId) -> Option<&Universe> {
        self.universes.get(id.0 as usize)
    }

    /// Look up a lattice.
    pub fn lattice(&self, id: LatticeId) -> Option<&RectLattice> {
        self.lattices.get(id.0 as usize)
    }

    /// Look up a material.
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    /// Universe containing `cell`, or `None` for root and unplaced cells.
    pub fn owner(&self, cell: CellId) -> Option<UniverseId> {
        self.owners.get(cell.0 as usize).copied().flatten()
    }

    /// Root cell IDs in order.
    pub fn root_ids(&self) -> &[CellId] {
        &self.root
    }

    /// Root cells in order.
    pub fn root_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.root.iter().filter_map(move |&id| self.cell(id))
    }

    /// All cells in arena order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All universes in arena order.
    pub fn universes(&self) -> &[Universe] {
        &self.universes
    }

    /// All lattices in arena order.
    pub fn lattices(&self) -> &[RectLattice] {
        &self.lattices
    }

    /// All materials in registration order.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Universes a cell's fill resolves to, in traversal order.
    ///
    /// Material fills resolve to nothing. Lattice fills yield one entry per
    /// slot, repeats included.
    pub fn fill_universes(&self, cell: &Cell) -> Result<Vec<UniverseId>, QueryError> {
        let dangling = || QueryError::DanglingFill {
            cell: cell.id(),
            fill: cell.fill().to_string(),
        };
        match cell.fill() {
            Fill::Material(id) => self.material(id).map(|_| Vec::new()).ok_or_else(dangling),
            Fill::Universe(id) => self.universe(id).map(|u| vec![u.id()]).ok_or_else(dangling),
            Fill::Lattice(id) => {
                let lattice = self.lattice(id).ok_or_else(dangling)?;
                Ok(lattice.universes().to_vec())
            }
        }
    }

    /// Union of the bounding boxes of a universe's cells.
    ///
    /// `None` if the universe does not exist or has no cells.
    pub fn universe_bounding_box(&self, id: UniverseId) -> Option<BoundingBox> {
        let universe = self.universe(id)?;
        union_of(universe.cells().iter().filter_map(|&c| self.cell(c)))
    }

    /// Union of the root cells' bounding boxes.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        union_of(self.root_cells())
    }

    /// Every surface used by any cell, deduplicated, in first-use order.
    pub fn surfaces(&self) -> IndexMap<SurfaceId, Arc<Surface>> {
        let mut out = IndexMap::new();
        for cell in &self.cells {
            for (id, s) in cell.region().surfaces() {
                out.entry(id).or_insert(s);
            }
        }
        out
    }
}

fn union_of<'a>(cells: impl Iterator<Item = &'a Cell>) -> Option<BoundingBox> {
    cells
        .map(|c| c.region().bounding_box())
        .reduce(|acc, bb| acc.union(&bb))
}
