//! Reusable geometry fixtures.
//!
//! - [`shared_universe_geometry`]: one universe filling two root cells.
//! - [`lattice_column`]: a root cell filled with an n-element lattice.
//! - [`nested_geometry`]: a matching cell two levels below the root.
//!
//! All fixtures panic on construction failure; they are only used from
//! tests, where a broken fixture should fail loudly.

use detgeom_core::{CellId, LatticeId, MaterialId, UniverseId};
use detgeom_csg::{rectangular_prism, BoundaryType, Region};
use detgeom_model::{CellDef, Fill, Geometry, GeometryBuilder, RectLattice, UniverseDef};

/// Axis-aligned square of side `side` centred at `(x, y)`, infinite in z.
pub fn square(side: f64, x: f64, y: f64) -> Region {
    rectangular_prism(side, side, [x, y, 0.0], BoundaryType::Transmission)
        .expect("fixture square has positive side")
}

/// Two roots, both filled with the same universe containing one `detector`
/// cell and one unnamed cell.
pub struct SharedUniverse {
    pub geometry: Geometry,
    pub left: CellId,
    pub right: CellId,
    pub universe: UniverseId,
    pub detector: CellId,
    pub filler: CellId,
    pub material: MaterialId,
}

pub fn shared_universe_geometry() -> SharedUniverse {
    let mut b = GeometryBuilder::new();
    let material = b.material("m");
    let detector = b
        .cell(CellDef::new(square(1.0, 0.0, 0.0), Fill::Material(material)).with_name("detector"))
        .expect("detector cell");
    let filler = b
        .cell(CellDef::new(!square(1.0, 0.0, 0.0), Fill::Material(material)))
        .expect("filler cell");
    let universe = b
        .universe(UniverseDef::new([detector, filler]))
        .expect("shared universe");
    let left = b
        .cell(CellDef::new(square(3.0, -2.0, 0.0), Fill::Universe(universe)))
        .expect("left root");
    let right = b
        .cell(CellDef::new(square(3.0, 2.0, 0.0), Fill::Universe(universe)))
        .expect("right root");
    let geometry = b.build(&[left, right]).expect("shared universe geometry");
    SharedUniverse {
        geometry,
        left,
        right,
        universe,
        detector,
        filler,
        material,
    }
}

/// A 1 x n column of unit elements, lower-left at the origin, each element
/// a `detector` square of side 0.5 in a background cell.
pub struct LatticeColumn {
    pub geometry: Geometry,
    pub root: CellId,
    pub lattice: LatticeId,
    pub element: UniverseId,
    pub detector: CellId,
    pub background: CellId,
}

pub fn lattice_column(n: usize) -> LatticeColumn {
    let mut b = GeometryBuilder::new();
    let det_mat = b.material("cdte");
    let bg_mat = b.material("h2o");
    let detector = b
        .cell(CellDef::new(square(0.5, 0.0, 0.0), Fill::Material(det_mat)).with_name("detector"))
        .expect("detector cell");
    let background = b
        .cell(CellDef::new(!square(0.5, 0.0, 0.0), Fill::Material(bg_mat)))
        .expect("background cell");
    let element = b
        .universe(UniverseDef::new([detector, background]))
        .expect("element universe");
    let lattice = b
        .lattice(RectLattice::filled(&[1.0, 1.0], &[0.0, 0.0], &[1, n], element).expect("lattice"))
        .expect("lattice registered");
    let region = rectangular_prism(1.0, n as f64, [0.5, n as f64 / 2.0, 0.0], BoundaryType::Vacuum)
        .expect("holder region");
    let root = b
        .cell(CellDef::new(region, Fill::Lattice(lattice)))
        .expect("root cell");
    let geometry = b.build(&[root]).expect("lattice column geometry");
    LatticeColumn {
        geometry,
        root,
        lattice,
        element,
        detector,
        background,
    }
}

/// root -> module (universe fill) -> `detector` (material), so the detector
/// sits two levels below the root.
pub struct NestedGeometry {
    pub geometry: Geometry,
    pub root: CellId,
    pub module: CellId,
    pub detector: CellId,
}

pub fn nested_geometry() -> NestedGeometry {
    let mut b = GeometryBuilder::new();
    let m = b.material("m");
    let detector = b
        .cell(CellDef::new(square(1.0, 0.0, 0.0), Fill::Material(m)).with_name("detector"))
        .expect("detector cell");
    let inner = b.universe(UniverseDef::new([detector])).expect("inner universe");
    let module = b
        .cell(CellDef::new(square(2.0, 0.0, 0.0), Fill::Universe(inner)).with_name("module"))
        .expect("module cell");
    let outer = b.universe(UniverseDef::new([module])).expect("outer universe");
    let root = b
        .cell(CellDef::new(square(4.0, 0.0, 0.0), Fill::Universe(outer)))
        .expect("root cell");
    let geometry = b.build(&[root]).expect("nested geometry");
    NestedGeometry {
        geometry,
        root,
        module,
        detector,
    }
}
