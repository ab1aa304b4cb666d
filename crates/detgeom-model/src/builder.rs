//! Build-phase arena for geometry models.
//!
//! Entities may only reference entities that already exist: a cell's fill
//! must name a registered material, universe or lattice; a universe may
//! only contain existing cells; a lattice may only hold existing universes.
//! Insertion order is therefore a topological order and the finished
//! geometry cannot contain a fill cycle.

use detgeom_core::{BuildError, CellId, LatticeId, MaterialId, UniverseId};
use indexmap::IndexSet;
use tracing::debug;

use crate::cell::{Cell, CellDef, Fill, Material, Universe, UniverseDef};
use crate::geometry::Geometry;
use crate::lattice::RectLattice;

/// Mutable arena used while a model is assembled.
///
/// Call [`build`](Self::build) to freeze it into an immutable [`Geometry`].
///
/// # Examples
///
/// ```
/// use detgeom_csg::{rectangular_prism, BoundaryType};
/// use detgeom_model::{CellDef, Fill, GeometryBuilder, UniverseDef};
///
/// let mut b = GeometryBuilder::new();
/// let water = b.material("h2o");
/// let inner = rectangular_prism(1.0, 1.0, [0.0; 3], BoundaryType::Transmission).unwrap();
/// let pin = b.cell(CellDef::new(inner.clone(), Fill::Material(water)).with_name("pin")).unwrap();
/// let u = b.universe(UniverseDef::new([pin])).unwrap();
/// let root = b.cell(CellDef::new(inner, Fill::Universe(u))).unwrap();
/// let geometry = b.build(&[root]).unwrap();
/// assert_eq!(geometry.cell_count(), 2);
/// assert_eq!(geometry.owner(pin), Some(u));
/// ```
#[derive(Debug, Default)]
pub struct GeometryBuilder {
    materials: Vec<Material>,
    cells: Vec<Cell>,
    owners: Vec<Option<UniverseId>>,
    universes: Vec<Universe>,
    lattices: Vec<RectLattice>,
}

impl GeometryBuilder {
    /// Empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a material handle.
    pub fn material(&mut self, name: impl Into<String>) -> MaterialId {
        let id = MaterialId(next_id(self.materials.len()));
        self.materials.push(Material::new(id, name.into()));
        id
    }

    /// Add a cell. Its fill must already be registered.
    pub fn cell(&mut self, def: CellDef) -> Result<CellId, BuildError> {
        self.check_fill(def.fill)?;
        let id = CellId(next_id(self.cells.len()));
        self.cells.push(Cell::from_def(id, def));
        self.owners.push(None);
        Ok(id)
    }

    /// Add a universe over existing cells.
    ///
    /// Each cell can belong to one universe only; listing a cell twice, or
    /// in a second universe, is [`BuildError::CellAlreadyOwned`].
    pub fn universe(&mut self, def: UniverseDef) -> Result<UniverseId, BuildError> {
        let id = UniverseId(next_id(self.universes.len()));
        let mut claimed = IndexSet::with_capacity(def.cells.len());
        for &cell in &def.cells {
            let owner = self
                .owners
                .get(cell.0 as usize)
                .ok_or(BuildError::UnknownCell(cell))?;
            if let Some(owner) = *owner {
                return Err(BuildError::CellAlreadyOwned { cell, owner });
            }
            if !claimed.insert(cell) {
                return Err(BuildError::CellAlreadyOwned { cell, owner: id });
            }
        }
        for &cell in &claimed {
            self.owners[cell.0 as usize] = Some(id);
        }
        self.universes.push(Universe::from_def(id, def));
        Ok(id)
    }

    /// Add a lattice whose slots all name existing universes.
    pub fn lattice(&mut self, lattice: RectLattice) -> Result<LatticeId, BuildError> {
        if let Some(&missing) = lattice
            .universes()
            .iter()
            .find(|u| u.0 as usize >= self.universes.len())
        {
            return Err(BuildError::UnknownUniverse(missing));
        }
        let id = LatticeId(next_id(self.lattices.len()));
        self.lattices.push(lattice);
        Ok(id)
    }

    /// Freeze the arena with `root` as the top-level cells, in order.
    ///
    /// Root cells must exist, must not belong to a universe, and must be
    /// listed once.
    pub fn build(self, root: &[CellId]) -> Result<Geometry, BuildError> {
        let mut roots = IndexSet::with_capacity(root.len());
        for &cell in root {
            match self.owners.get(cell.0 as usize) {
                None => return Err(BuildError::UnknownCell(cell)),
                Some(Some(owner)) => {
                    return Err(BuildError::CellAlreadyOwned { cell, owner: *owner })
                }
                Some(None) => {}
            }
            if !roots.insert(cell) {
                return Err(BuildError::InvalidConfig {
                    reason: format!("cell {cell} listed twice as a root"),
                });
            }
        }
        debug!(
            materials = self.materials.len(),
            cells = self.cells.len(),
            universes = self.universes.len(),
            lattices = self.lattices.len(),
            roots = roots.len(),
            "geometry built"
        );
        Ok(Geometry::from_parts(
            self.materials,
            self.cells,
            self.owners,
            self.universes,
            self.lattices,
            roots.into_iter().collect(),
        ))
    }

    fn check_fill(&self, fill: Fill) -> Result<(), BuildError> {
        match fill {
            Fill::Material(id) if (id.0 as usize) < self.materials.len() => Ok(()),
            Fill::Material(id) => Err(BuildError::UnknownMaterial(id)),
            Fill::Universe(id) if (id.0 as usize) < self.universes.len() => Ok(()),
            Fill::Universe(id) => Err(BuildError::UnknownUniverse(id)),
            Fill::Lattice(id) if (id.0 as usize) < self.lattices.len() => Ok(()),
            Fill::Lattice(id) => Err(BuildError::UnknownLattice(id)),
        }
    }
}

/// Arena slots are addressed by `u32`; more than that many entities is a
/// programming error, not a recoverable condition.
fn next_id(len: usize) -> u32 {
    u32::try_from(len).expect("arena holds more than u32::MAX entities")
}
