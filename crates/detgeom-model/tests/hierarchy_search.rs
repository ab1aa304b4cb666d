//! Integration test: one-level search and point location over shared and
//! repeated universes.

use detgeom_core::{CellId, QueryError};
use detgeom_model::{by_name, find_cells, CellTally, Geometry, TallyTargets};
use detgeom_test_utils::{lattice_column, nested_geometry, shared_universe_geometry};

// ── Search ───────────────────────────────────────────────────────────

#[test]
fn shared_universe_matches_once_per_root() {
    let f = shared_universe_geometry();
    let found = f.geometry.find_cells(by_name("detector")).unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].root, f.left);
    assert_eq!(found[1].root, f.right);
    assert!(found.iter().all(|m| m.cell == f.detector));

    let targets = TallyTargets::from_matches(&found);
    assert_eq!(targets.len(), 1);
    assert!(targets.contains(f.detector));
}

#[test]
fn searching_one_root_only_sees_that_root() {
    let f = shared_universe_geometry();
    let found = find_cells(&f.geometry, &[f.right], by_name("detector")).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].root, f.right);
}

#[test]
fn no_matching_name_is_empty_not_error() {
    let f = shared_universe_geometry();
    assert_eq!(f.geometry.find_cells(by_name("shield")).unwrap(), vec![]);
}

#[test]
fn predicate_sees_every_member_cell() {
    let f = shared_universe_geometry();
    let all: Vec<CellId> = find_cells(&f.geometry, &[f.left], |_| true)
        .unwrap()
        .into_iter()
        .map(|m| m.cell)
        .collect();
    assert_eq!(all, vec![f.detector, f.filler]);
}

#[test]
fn lattice_of_one_universe_matches_once() {
    for n in [1, 2, 8, 33] {
        let f = lattice_column(n);
        let found = f.geometry.find_cells(by_name("detector")).unwrap();
        assert_eq!(found.len(), 1, "n = {n}");
        assert_eq!(found[0].cell, f.detector);
    }
}

#[test]
fn search_does_not_reach_grandchildren() {
    let f = nested_geometry();
    assert!(f.geometry.find_cells(by_name("detector")).unwrap().is_empty());
    let modules = f.geometry.find_cells(by_name("module")).unwrap();
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].cell, f.module);
}

#[test]
fn cell_ids_from_another_geometry_are_rejected() {
    let f = shared_universe_geometry();
    let small: Geometry = nested_geometry().geometry;
    assert_eq!(
        find_cells(&small, &[CellId(40)], by_name("detector")),
        Err(QueryError::UnknownCell(CellId(40)))
    );
    assert!(f.geometry.cell(CellId(40)).is_none());
}

// ── Tallies ──────────────────────────────────────────────────────────

#[test]
fn tally_over_missing_detectors_fails() {
    let f = nested_geometry();
    let targets = TallyTargets::from_matches(&f.geometry.find_cells(by_name("detector")).unwrap());
    match CellTally::new("flux", ["flux"], targets) {
        Err(QueryError::NoMatchingCells { target }) => assert!(target.contains("flux")),
        other => panic!("expected NoMatchingCells, got {other:?}"),
    }
}

// ── Point location ───────────────────────────────────────────────────

#[test]
fn locate_walks_lattice_elements() {
    let f = lattice_column(4);
    for j in 0..4 {
        let y = j as f64 + 0.5;
        let hit = f.geometry.locate([0.5, y, 0.0]).unwrap().unwrap();
        assert_eq!(hit.cells, vec![f.root, f.detector]);
        assert_eq!(hit.lattice_indices[0].0, f.lattice);
        assert_eq!(hit.lattice_indices[0].1.as_slice(), &[0, j]);

        let edge = f.geometry.locate([0.9, y + 0.4, 0.0]).unwrap().unwrap();
        assert_eq!(edge.cell(), f.background);
    }
    assert_eq!(f.geometry.locate([0.5, 4.5, 0.0]).unwrap(), None);
}

#[test]
fn locate_in_shared_universe_uses_root_frame() {
    let f = shared_universe_geometry();
    let hit = f.geometry.locate([-2.0, 0.0, 0.0]).unwrap().unwrap();
    assert_eq!(hit.root(), f.left);
    assert_eq!(hit.cell(), f.filler);
    assert_eq!(hit.material, f.material);
    assert_eq!(hit.local, [-2.0, 0.0, 0.0]);
}
