//! Point location through the fill hierarchy.

use detgeom_core::{CellId, LatticeId, LatticeIndex, MaterialId, Point, QueryError, UniverseId};

use crate::cell::{Cell, Fill};
use crate::geometry::Geometry;

/// Where a point ended up after descending from a root cell to a material.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    /// Cells entered, root first, material cell last.
    pub cells: Vec<CellId>,
    /// Lattice elements crossed on the way down, outermost first.
    pub lattice_indices: Vec<(LatticeId, LatticeIndex)>,
    /// Material of the innermost cell.
    pub material: MaterialId,
    /// The point in the innermost cell's frame.
    pub local: Point,
}

impl Location {
    /// Innermost cell.
    pub fn cell(&self) -> CellId {
        // `cells` always holds at least the root.
        self.cells[self.cells.len() - 1]
    }

    /// Root cell the point was found in.
    pub fn root(&self) -> CellId {
        self.cells[0]
    }
}

impl Geometry {
    /// Find the material cell containing `point`.
    ///
    /// The first root cell whose region contains the point is entered.
    /// Universe fills are searched in the same frame; lattice fills pick the
    /// element containing the point and continue in that element's local
    /// frame. Returns `Ok(None)` when the point is outside every root cell,
    /// outside a lattice's extent, or inside a fill where no sub-cell
    /// contains it. Points exactly on a surface are in neither half-space
    /// and so usually locate to `None`.
    ///
    /// # Errors
    ///
    /// [`QueryError::DanglingFill`] if a fill handle does not resolve.
    pub fn locate(&self, point: Point) -> Result<Option<Location>, QueryError> {
        let Some(root) = self.root_cells().find(|c| c.region().contains(point)) else {
            return Ok(None);
        };

        let mut cells = vec![root.id()];
        let mut lattice_indices = Vec::new();
        let mut local = point;
        let mut current = root;
        loop {
            let universe = match current.fill() {
                Fill::Material(material) => {
                    return Ok(Some(Location {
                        cells,
                        lattice_indices,
                        material,
                        local,
                    }));
                }
                Fill::Universe(id) => id,
                Fill::Lattice(id) => {
                    let lattice = self
                        .lattice(id)
                        .ok_or_else(|| dangling(current))?;
                    let Some(index) = lattice.find_element(local) else {
                        return Ok(None);
                    };
                    let universe = lattice.universe_at(&index)?;
                    local = lattice.local_coordinates(local, &index)?;
                    lattice_indices.push((id, index));
                    universe
                }
            };
            match self.cell_in_universe(current, universe, local)? {
                Some(next) => {
                    cells.push(next.id());
                    current = next;
                }
                None => return Ok(None),
            }
        }
    }

    fn cell_in_universe(
        &self,
        parent: &Cell,
        universe: UniverseId,
        point: Point,
    ) -> Result<Option<&Cell>, QueryError> {
        let universe = self.universe(universe).ok_or_else(|| dangling(parent))?;
        for &id in universe.cells() {
            let cell = self.cell(id).ok_or(QueryError::UnknownCell(id))?;
            if cell.region().contains(point) {
                return Ok(Some(cell));
            }
        }
        Ok(None)
    }
}

fn dangling(cell: &Cell) -> QueryError {
    QueryError::DanglingFill {
        cell: cell.id(),
        fill: cell.fill().to_string(),
    }
}
