//! Integration test: detector-array assembly over arbitrary valid configs.

use detgeom_model::{ArrayConfig, DetectorArray, Model, RunSettings};
use detgeom_test_utils::arb_array_config;
use proptest::prelude::*;

#[test]
fn default_model_bundles_flux_tally() {
    let array = DetectorArray::build(&ArrayConfig::default()).unwrap();
    let tally = array.flux_tally().unwrap();
    let detector = array.detector();
    let model = Model::new(array.into_geometry(), RunSettings::default(), vec![tally]).unwrap();
    assert_eq!(model.tallies().len(), 1);
    assert_eq!(model.tallies()[0].cells(), &[detector]);
    assert_eq!(model.settings().particles, 100_000);
    assert_eq!(model.geometry().root_ids().len(), 2);
}

#[test]
fn model_rejects_invalid_settings() {
    let array = DetectorArray::build(&ArrayConfig::default()).unwrap();
    let settings = RunSettings {
        inactive: 10,
        ..RunSettings::default()
    };
    assert!(Model::new(array.into_geometry(), settings, vec![]).is_err());
}

#[test]
fn model_rejects_tally_cells_from_a_larger_geometry() {
    let big = DetectorArray::build(&ArrayConfig::default()).unwrap();
    let tally = big.flux_tally().unwrap();
    let empty = detgeom_model::GeometryBuilder::new().build(&[]).unwrap();
    assert!(Model::new(empty, RunSettings::default(), vec![tally]).is_err());
}

proptest! {
    #[test]
    fn any_valid_config_yields_one_detector_match(cfg in arb_array_config()) {
        prop_assert!(cfg.validate().is_ok());
        let array = DetectorArray::build(&cfg).unwrap();
        let found = array.detector_cells().unwrap();
        prop_assert_eq!(found.len(), 1);
        prop_assert_eq!(found[0].cell, array.detector());
    }

    #[test]
    fn element_centres_locate_to_detectors(cfg in arb_array_config()) {
        let array = DetectorArray::build(&cfg).unwrap();
        let lattice = array.geometry().lattice(array.lattice()).unwrap();
        for index in lattice.indices() {
            let centre = lattice.place(&index).unwrap();
            let hit = array.geometry().locate(centre).unwrap().unwrap();
            prop_assert_eq!(hit.cell(), array.detector());
            prop_assert_eq!(hit.material, array.materials().detector);
        }
    }

    #[test]
    fn holder_box_matches_lattice_footprint(cfg in arb_array_config()) {
        let array = DetectorArray::build(&cfg).unwrap();
        let g = array.geometry();
        let holder = g.cell(array.holder()).unwrap().region().bounding_box();
        let footprint = g.lattice(array.lattice()).unwrap().bounding_box();
        for axis in 0..2 {
            prop_assert!((holder.lower_left[axis] - footprint.lower_left[axis]).abs() < 1e-9);
            prop_assert!((holder.upper_right[axis] - footprint.upper_right[axis]).abs() < 1e-9);
        }
    }
}
