//! Assembly of a detector column inside a vacuum-bounded domain.
//!
//! The model has two root cells:
//!
//! - the *holder*, a box around the column filled with a 1 x n lattice whose
//!   every slot is the element universe (detector block between two spacers)
//! - the *surround*, the domain box minus the holder
//!
//! The element universe is centred on its own origin; the lattice places
//! element `j` at `y = lower_left.y + (j + 0.5) * pitch_y`.

use detgeom_core::{BuildError, CellId, LatticeId, MaterialId, QueryError, UniverseId};
use detgeom_csg::{rectangular_prism, slab, Axis, BoundaryType, Region};
use tracing::debug;

use crate::builder::GeometryBuilder;
use crate::cell::{CellDef, Fill, UniverseDef};
use crate::config::ArrayConfig;
use crate::geometry::Geometry;
use crate::lattice::RectLattice;
use crate::search::{by_name, find_cells, CellMatch};
use crate::tally::{CellTally, TallyTargets};

/// Name shared by the detector cell and the element universe.
pub const DETECTOR_NAME: &str = "detector";

/// Materials the array is filled with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayMaterials {
    /// Detector blocks.
    pub detector: MaterialId,
    /// Spacers between detectors.
    pub spacer: MaterialId,
    /// Everything in the domain outside the holder.
    pub surround: MaterialId,
}

/// A finished detector-array geometry with handles to its landmarks.
///
/// # Examples
///
/// ```
/// use detgeom_model::{ArrayConfig, DetectorArray};
///
/// let array = DetectorArray::build(&ArrayConfig::default()).unwrap();
/// let detectors = array.detector_cells().unwrap();
/// assert_eq!(detectors.len(), 1);
/// assert_eq!(detectors[0].cell, array.detector());
/// ```
#[derive(Clone, Debug)]
pub struct DetectorArray {
    config: ArrayConfig,
    geometry: Geometry,
    materials: ArrayMaterials,
    detector: CellId,
    element: UniverseId,
    lattice: LatticeId,
    holder: CellId,
    surround: CellId,
}

impl DetectorArray {
    /// Build with materials named `cdte` (detector) and `h2o` (spacers and
    /// surround).
    pub fn build(config: &ArrayConfig) -> Result<Self, BuildError> {
        let mut builder = GeometryBuilder::new();
        let cdte = builder.material("cdte");
        let water = builder.material("h2o");
        let materials = ArrayMaterials {
            detector: cdte,
            spacer: water,
            surround: water,
        };
        Self::build_with(builder, config, materials)
    }

    /// Build into an existing builder whose materials are already registered.
    pub fn build_with(
        mut builder: GeometryBuilder,
        config: &ArrayConfig,
        materials: ArrayMaterials,
    ) -> Result<Self, BuildError> {
        config.validate()?;
        let det = &config.detector;
        let transmission = BoundaryType::Transmission;
        let z_slab = || slab(Axis::Z, -det.depth / 2.0, det.depth / 2.0, transmission);

        // Element universe: detector block with a spacer above and below.
        let spacer_h = config.spacer_height();
        let spacer_y = det.height / 2.0 + spacer_h / 2.0;
        let block = rectangular_prism(det.width, det.height, [0.0; 3], transmission)? & z_slab()?;
        let upper = rectangular_prism(det.width, spacer_h, [0.0, spacer_y, 0.0], transmission)?
            & z_slab()?;
        let lower = rectangular_prism(det.width, spacer_h, [0.0, -spacer_y, 0.0], transmission)?
            & z_slab()?;

        let detector = builder.cell(
            CellDef::new(block, Fill::Material(materials.detector)).with_name(DETECTOR_NAME),
        )?;
        let upper = builder.cell(CellDef::new(upper, Fill::Material(materials.spacer)))?;
        let lower = builder.cell(CellDef::new(lower, Fill::Material(materials.spacer)))?;
        let element = builder
            .universe(UniverseDef::new([detector, upper, lower]).with_name(DETECTOR_NAME))?;

        // Lattice: one column of n elements.
        let ll = config.lower_left();
        let lattice = builder.lattice(
            RectLattice::filled(
                &[det.width, config.pitch_y],
                &ll,
                &[1, config.n_elements],
                element,
            )?
            .with_name(DETECTOR_NAME),
        )?;

        // Holder: exactly the lattice footprint, bounded in z.
        let holder_region: Region = rectangular_prism(
            det.width,
            config.array_height(),
            [config.offset_x + det.width / 2.0, 0.0, 0.0],
            transmission,
        )? & z_slab()?;
        let holder = builder.cell(CellDef::new(holder_region.clone(), Fill::Lattice(lattice)))?;

        // Surround: vacuum-bounded domain with the holder cut out.
        let domain = &config.domain;
        let surround_region = rectangular_prism(
            domain.width,
            domain.height,
            [0.0; 3],
            BoundaryType::Vacuum,
        )? & slab(Axis::Z, domain.z_min, domain.z_max, BoundaryType::Transmission)?
            & !holder_region;
        let surround =
            builder.cell(CellDef::new(surround_region, Fill::Material(materials.surround)))?;

        let geometry = builder.build(&[holder, surround])?;
        debug!(
            n_elements = config.n_elements,
            pitch_y = config.pitch_y,
            spacer_height = spacer_h,
            "detector array assembled"
        );
        Ok(Self {
            config: config.clone(),
            geometry,
            materials,
            detector,
            element,
            lattice,
            holder,
            surround,
        })
    }

    /// Configuration the array was built from.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// The finished geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Consume the array, keeping the geometry.
    pub fn into_geometry(self) -> Geometry {
        self.geometry
    }

    /// Materials used.
    pub fn materials(&self) -> ArrayMaterials {
        self.materials
    }

    /// The detector cell of the element universe.
    pub fn detector(&self) -> CellId {
        self.detector
    }

    /// Element universe repeated in every lattice slot.
    pub fn element(&self) -> UniverseId {
        self.element
    }

    /// The column lattice.
    pub fn lattice(&self) -> LatticeId {
        self.lattice
    }

    /// Root cell filled with the lattice.
    pub fn holder(&self) -> CellId {
        self.holder
    }

    /// Root cell covering the rest of the domain.
    pub fn surround(&self) -> CellId {
        self.surround
    }

    /// Cells named `detector` one level below the holder.
    ///
    /// The element universe is shared by every slot, so this is a single
    /// match however many elements the column has.
    pub fn detector_cells(&self) -> Result<Vec<CellMatch>, QueryError> {
        find_cells(&self.geometry, &[self.holder], by_name(DETECTOR_NAME))
    }

    /// A `flux` tally over the detector cells.
    ///
    /// # Errors
    ///
    /// [`QueryError::NoMatchingCells`] if the holder contains no detector.
    pub fn flux_tally(&self) -> Result<CellTally, QueryError> {
        let targets =
            TallyTargets::from_matches(&self.detector_cells()?).non_empty("detector volumes")?;
        CellTally::new("flux", ["flux"], targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use detgeom_csg::BoundingBox;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn default_array_layout() {
        let array = DetectorArray::build(&ArrayConfig::default()).unwrap();
        let g = array.geometry();
        assert_eq!(g.root_ids(), &[array.holder(), array.surround()]);
        assert_eq!(g.universe(array.element()).unwrap().cells().len(), 3);
        assert_eq!(g.lattice(array.lattice()).unwrap().len(), 8);
        assert_eq!(g.owner(array.detector()), Some(array.element()));

        let holder = g.cell(array.holder()).unwrap().region().bounding_box();
        assert!(close(holder.lower_left[0], 5.0));
        assert!(close(holder.upper_right[0], 5.35));
        assert!(close(holder.lower_left[1], -1.6));
        assert!(close(holder.upper_right[1], 1.6));
        assert!(close(holder.lower_left[2], -0.175));
        assert!(close(holder.upper_right[2], 0.175));

        // Cutting out the holder does not shrink the surround's box.
        let surround = g.cell(array.surround()).unwrap().region().bounding_box();
        assert_eq!(
            surround,
            BoundingBox::new([-500.0, -500.0, -2500.0], [500.0, 500.0, 2500.0])
        );
    }

    #[test]
    fn element_cells_tile_one_pitch() {
        let array = DetectorArray::build(&ArrayConfig::default()).unwrap();
        let bb = array
            .geometry()
            .universe_bounding_box(array.element())
            .unwrap();
        assert!(close(bb.lower_left[1], -0.2));
        assert!(close(bb.upper_right[1], 0.2));
        assert!(close(bb.lower_left[0], -0.175));
        assert!(close(bb.upper_right[0], 0.175));
    }

    #[test]
    fn detector_search_yields_one_match() {
        let array = DetectorArray::build(&ArrayConfig::default()).unwrap();
        let found = array.detector_cells().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].root, array.holder());
        let bb = found[0].bounding_box;
        assert!(close(bb.lower_left[0], -0.175) && close(bb.upper_right[0], 0.175));
        assert!(close(bb.lower_left[1], -0.0875) && close(bb.upper_right[1], 0.0875));
    }

    #[test]
    fn points_locate_to_expected_materials() {
        let array = DetectorArray::build(&ArrayConfig::default()).unwrap();
        let g = array.geometry();
        let m = array.materials();

        // Centre of element 0.
        let hit = g.locate([5.175, -1.4, 0.0]).unwrap().unwrap();
        assert_eq!(hit.cells, vec![array.holder(), array.detector()]);
        assert_eq!(hit.material, m.detector);
        assert_eq!(hit.lattice_indices[0].1.as_slice(), &[0, 0]);

        // Spacer region just above element 7's detector.
        let hit = g.locate([5.175, 1.4 + 0.15, 0.0]).unwrap().unwrap();
        assert_eq!(hit.material, m.spacer);
        assert_eq!(hit.lattice_indices[0].1.as_slice(), &[0, 7]);

        // The source position is in the surround.
        let hit = g.locate([0.0, 0.0, 0.0]).unwrap().unwrap();
        assert_eq!(hit.cells, vec![array.surround()]);

        // Outside the domain.
        assert_eq!(g.locate([600.0, 0.0, 0.0]).unwrap(), None);
    }

    #[test]
    fn flux_tally_targets_the_detector() {
        let array = DetectorArray::build(&ArrayConfig::default()).unwrap();
        let tally = array.flux_tally().unwrap();
        assert_eq!(tally.name(), "flux");
        assert_eq!(tally.scores(), &["flux".to_string()]);
        assert_eq!(tally.cells(), &[array.detector()]);
    }

    #[test]
    fn invalid_config_fails_before_building() {
        let mut cfg = ArrayConfig::default();
        cfg.n_elements = 0;
        assert!(matches!(
            DetectorArray::build(&cfg),
            Err(BuildError::InvalidConfig { .. })
        ));
    }
}
