//! Tally targets and the finished model value.

use detgeom_core::{BuildError, CellId, QueryError};
use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::geometry::Geometry;
use crate::search::CellMatch;
use crate::settings::RunSettings;

/// Unique cells a tally should score in, in first-match order.
///
/// Search results are keyed by `(root, cell)`; a cell reached from two
/// roots appears twice there but once here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TallyTargets {
    cells: IndexSet<CellId>,
}

impl TallyTargets {
    /// Collapse search matches to unique cells.
    pub fn from_matches(matches: &[CellMatch]) -> Self {
        let cells: IndexSet<CellId> = matches.iter().map(|m| m.cell).collect();
        debug!(matches = matches.len(), unique = cells.len(), "tally targets collected");
        Self { cells }
    }

    /// Number of unique cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether there are no targets.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` is a target.
    pub fn contains(&self, cell: CellId) -> bool {
        self.cells.contains(&cell)
    }

    /// Targets in first-match order.
    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().copied()
    }

    /// Pass the targets through, or fail with
    /// [`QueryError::NoMatchingCells`] naming `target` if there are none.
    pub fn non_empty(self, target: &str) -> Result<Self, QueryError> {
        if self.is_empty() {
            warn!(target_kind = target, "tally requested over an empty target set");
            return Err(QueryError::NoMatchingCells {
                target: target.to_string(),
            });
        }
        Ok(self)
    }
}

impl FromIterator<CellId> for TallyTargets {
    fn from_iter<I: IntoIterator<Item = CellId>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// A tally restricted to a set of cells.
#[derive(Clone, Debug, PartialEq)]
pub struct CellTally {
    name: String,
    scores: Vec<String>,
    cells: Vec<CellId>,
}

impl CellTally {
    /// Tally named `name` scoring `scores` in every target cell.
    ///
    /// # Errors
    ///
    /// [`QueryError::NoMatchingCells`] if `targets` is empty.
    pub fn new<S>(
        name: impl Into<String>,
        scores: impl IntoIterator<Item = S>,
        targets: TallyTargets,
    ) -> Result<Self, QueryError>
    where
        S: Into<String>,
    {
        let name = name.into();
        let targets = targets.non_empty(&format!("cells for tally '{name}'"))?;
        Ok(Self {
            name,
            scores: scores.into_iter().map(Into::into).collect(),
            cells: targets.iter().collect(),
        })
    }

    /// Tally name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quantities scored.
    pub fn scores(&self) -> &[String] {
        &self.scores
    }

    /// Cells scored in.
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }
}

/// Geometry, run settings and tallies ready to hand to a transport run.
#[derive(Clone, Debug)]
pub struct Model {
    geometry: Geometry,
    settings: RunSettings,
    tallies: Vec<CellTally>,
}

impl Model {
    /// Bundle the parts after validating the settings and checking every
    /// tally cell exists in `geometry`.
    pub fn new(
        geometry: Geometry,
        settings: RunSettings,
        tallies: Vec<CellTally>,
    ) -> Result<Self, BuildError> {
        settings.validate()?;
        for tally in &tallies {
            if let Some(&missing) = tally.cells().iter().find(|&&c| geometry.cell(c).is_none()) {
                return Err(BuildError::UnknownCell(missing));
            }
        }
        Ok(Self {
            geometry,
            settings,
            tallies,
        })
    }

    /// The geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Run settings.
    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Tallies.
    pub fn tallies(&self) -> &[CellTally] {
        &self.tallies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use detgeom_csg::BoundingBox;

    fn hit(root: u32, cell: u32) -> CellMatch {
        CellMatch {
            root: CellId(root),
            cell: CellId(cell),
            bounding_box: BoundingBox::infinite(),
        }
    }

    #[test]
    fn targets_dedupe_across_roots() {
        let t = TallyTargets::from_matches(&[hit(0, 5), hit(1, 5), hit(1, 6)]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.iter().collect::<Vec<_>>(), vec![CellId(5), CellId(6)]);
        assert!(t.contains(CellId(6)));
    }

    #[test]
    fn empty_targets_fail_with_description() {
        let err = TallyTargets::default()
            .non_empty("detector volumes")
            .unwrap_err();
        assert_eq!(err.to_string(), "no detector volumes found");
    }

    #[test]
    fn tally_over_nothing_is_an_error() {
        assert!(matches!(
            CellTally::new("flux", ["flux"], TallyTargets::default()),
            Err(QueryError::NoMatchingCells { .. })
        ));
    }

    #[test]
    fn tally_keeps_target_order() {
        let targets: TallyTargets = [CellId(3), CellId(1), CellId(3)].into_iter().collect();
        let tally = CellTally::new("flux", ["flux", "absorption"], targets).unwrap();
        assert_eq!(tally.cells(), &[CellId(3), CellId(1)]);
        assert_eq!(tally.scores().len(), 2);
    }
}
