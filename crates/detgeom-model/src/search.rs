//! Predicate-based cell search one level below the root cells.
//!
//! For each root cell the search resolves the fill to universes (a lattice
//! contributes the universe in every slot) and tests each member cell of
//! those universes against the predicate. It does not descend further:
//! cells inside universes that fill *those* cells are not inspected.
//!
//! Matches are keyed by `(root, cell)`. A universe repeated across the
//! slots of one lattice reports its cells once for that root; a universe
//! shared by two roots reports its matching cells once per root. Use
//! [`TallyTargets`](crate::TallyTargets) to collapse matches to unique
//! cell identities.

use detgeom_core::{CellId, QueryError, UniverseId};
use detgeom_csg::BoundingBox;
use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::cell::Cell;
use crate::geometry::Geometry;

/// A cell that satisfied the search predicate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMatch {
    /// Root cell under which the match was found.
    pub root: CellId,
    /// The matching cell.
    pub cell: CellId,
    /// Bounding box of the matching cell's region, in its universe's frame.
    pub bounding_box: BoundingBox,
}

/// Predicate matching cells whose name equals `name`.
pub fn by_name(name: &str) -> impl Fn(&Cell) -> bool + '_ {
    move |cell| cell.name() == Some(name)
}

/// Collect cells one level below `roots` that satisfy `predicate`.
///
/// Results follow root order, then universe traversal order (lattice slots
/// in canonical order), then cell insertion order. An empty result is
/// `Ok(vec![])`, not an error.
///
/// # Errors
///
/// [`QueryError::UnknownCell`] if a root ID is not in the geometry, and
/// [`QueryError::DanglingFill`] if a fill handle does not resolve.
///
/// # Examples
///
/// ```
/// use detgeom_csg::{rectangular_prism, BoundaryType};
/// use detgeom_model::{by_name, find_cells, CellDef, Fill, GeometryBuilder, UniverseDef};
///
/// let sq = || rectangular_prism(1.0, 1.0, [0.0; 3], BoundaryType::Transmission).unwrap();
/// let mut b = GeometryBuilder::new();
/// let m = b.material("cdte");
/// let det = b.cell(CellDef::new(sq(), Fill::Material(m)).with_name("detector")).unwrap();
/// let u = b.universe(UniverseDef::new([det])).unwrap();
/// let root = b.cell(CellDef::new(sq(), Fill::Universe(u))).unwrap();
/// let g = b.build(&[root]).unwrap();
///
/// let found = find_cells(&g, &[root], by_name("detector")).unwrap();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].cell, det);
///
/// assert!(find_cells(&g, &[root], by_name("shield")).unwrap().is_empty());
/// ```
pub fn find_cells<P>(
    geometry: &Geometry,
    roots: &[CellId],
    predicate: P,
) -> Result<Vec<CellMatch>, QueryError>
where
    P: Fn(&Cell) -> bool,
{
    let mut matches = Vec::new();
    let mut seen_roots = IndexSet::with_capacity(roots.len());
    for &root_id in roots {
        if !seen_roots.insert(root_id) {
            continue;
        }
        let root = geometry
            .cell(root_id)
            .ok_or(QueryError::UnknownCell(root_id))?;

        // A cell belongs to exactly one universe, so visiting each universe
        // once per root is enough to report each cell once per root.
        let mut visited: IndexSet<UniverseId> = IndexSet::new();
        for universe_id in geometry.fill_universes(root)? {
            if !visited.insert(universe_id) {
                continue;
            }
            let universe = geometry
                .universe(universe_id)
                .ok_or_else(|| QueryError::DanglingFill {
                    cell: root_id,
                    fill: format!("universe {universe_id}"),
                })?;
            if let Some(bb) = geometry.universe_bounding_box(universe_id) {
                debug!(root = %root_id, universe = %universe_id, bounding_box = %bb, "searching universe");
            }
            for &cell_id in universe.cells() {
                let cell = geometry
                    .cell(cell_id)
                    .ok_or(QueryError::UnknownCell(cell_id))?;
                if predicate(cell) {
                    let bounding_box = cell.region().bounding_box();
                    trace!(root = %root_id, cell = %cell_id, bounding_box = %bounding_box, "cell matched");
                    matches.push(CellMatch {
                        root: root_id,
                        cell: cell_id,
                        bounding_box,
                    });
                }
            }
        }
    }
    debug!(roots = seen_roots.len(), matches = matches.len(), "cell search complete");
    Ok(matches)
}

impl Geometry {
    /// [`find_cells`] over every root cell of the geometry.
    pub fn find_cells<P>(&self, predicate: P) -> Result<Vec<CellMatch>, QueryError>
    where
        P: Fn(&Cell) -> bool,
    {
        find_cells(self, self.root_ids(), predicate)
    }
}
