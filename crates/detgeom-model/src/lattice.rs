//! Rectilinear lattices of universe references.

use detgeom_core::{BuildError, LatticeIndex, Point, QueryError, UniverseId};
use detgeom_csg::BoundingBox;
use smallvec::SmallVec;

/// A regular N-dimensional array of universes (`1 <= N <= 3`).
///
/// Axis `i` of the lattice is model axis `i` (x, then y, then z). Slots are
/// stored flattened with the last axis varying fastest, which is also the
/// canonical iteration order of [`indices`](Self::indices). Every slot holds
/// a universe: there is no implicit "outside" filler.
///
/// # Examples
///
/// ```
/// use detgeom_core::UniverseId;
/// use detgeom_model::RectLattice;
///
/// let lat = RectLattice::filled(&[0.35, 0.4], &[5.0, -1.6], &[1, 8], UniverseId(0)).unwrap();
/// assert_eq!(lat.len(), 8);
///
/// let origin = lat.place(&vec![0, 0].into()).unwrap();
/// assert!((origin[0] - 5.175).abs() < 1e-12);
/// assert!((origin[1] + 1.4).abs() < 1e-12);
///
/// // Index 8 along y is outside the extent.
/// assert!(lat.place(&vec![0, 8].into()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RectLattice {
    name: Option<String>,
    pitch: SmallVec<[f64; 3]>,
    lower_left: SmallVec<[f64; 3]>,
    shape: SmallVec<[usize; 3]>,
    universes: Vec<UniverseId>,
}

impl RectLattice {
    /// Highest supported rank.
    pub const MAX_RANK: usize = 3;

    /// Largest extent along one axis: indices are `i32`.
    pub const MAX_EXTENT: usize = i32::MAX as usize;

    /// Create a lattice from flattened slots (last axis fastest).
    ///
    /// Fails with [`BuildError::LatticeRankMismatch`] if `pitch`,
    /// `lower_left` and `shape` disagree in length or the rank is outside
    /// `1..=3`, [`BuildError::NonPositiveDimension`] for a bad pitch,
    /// [`BuildError::InvalidConfig`] for a zero, oversized or non-finite
    /// extent/anchor, and [`BuildError::LatticeShapeMismatch`] if
    /// `universes.len()` is not the product of `shape`.
    pub fn new(
        pitch: &[f64],
        lower_left: &[f64],
        shape: &[usize],
        universes: Vec<UniverseId>,
    ) -> Result<Self, BuildError> {
        let rank = shape.len();
        if pitch.len() != rank || lower_left.len() != rank || !(1..=Self::MAX_RANK).contains(&rank)
        {
            return Err(BuildError::LatticeRankMismatch {
                pitch: pitch.len(),
                lower_left: lower_left.len(),
                shape: rank,
            });
        }
        for &p in pitch {
            if !(p.is_finite() && p > 0.0) {
                return Err(BuildError::NonPositiveDimension {
                    name: "pitch",
                    value: p,
                });
            }
        }
        if let Some(ll) = lower_left.iter().find(|v| !v.is_finite()) {
            return Err(BuildError::InvalidConfig {
                reason: format!("lattice lower_left must be finite, got {ll}"),
            });
        }
        for (axis, &n) in shape.iter().enumerate() {
            if n == 0 || n > Self::MAX_EXTENT {
                return Err(BuildError::InvalidConfig {
                    reason: format!(
                        "lattice extent along axis {axis} must be in [1, {}], got {n}",
                        Self::MAX_EXTENT
                    ),
                });
            }
        }
        let expected = shape
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .ok_or_else(|| BuildError::InvalidConfig {
                reason: format!("lattice shape {shape:?} overflows usize"),
            })?;
        if universes.len() != expected {
            return Err(BuildError::LatticeShapeMismatch {
                expected,
                got: universes.len(),
            });
        }
        Ok(Self {
            name: None,
            pitch: SmallVec::from_slice(pitch),
            lower_left: SmallVec::from_slice(lower_left),
            shape: SmallVec::from_slice(shape),
            universes,
        })
    }

    /// Create a lattice with every slot set to `universe`.
    pub fn filled(
        pitch: &[f64],
        lower_left: &[f64],
        shape: &[usize],
        universe: UniverseId,
    ) -> Result<Self, BuildError> {
        let slots = shape
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .unwrap_or(0);
        Self::new(pitch, lower_left, shape, vec![universe; slots])
    }

    /// Attach a human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of lattice axes.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Spacing per axis.
    pub fn pitch(&self) -> &[f64] {
        &self.pitch
    }

    /// Lower-left anchor per axis.
    pub fn lower_left(&self) -> &[f64] {
        &self.lower_left
    }

    /// Extent per axis.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total number of slots.
    pub fn len(&self) -> usize {
        self.universes.len()
    }

    /// Always `false`: construction rejects zero extents.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Slot contents in canonical order.
    pub fn universes(&self) -> &[UniverseId] {
        &self.universes
    }

    /// Flat slot position of `index`, or `None` if it is out of range.
    pub fn slot(&self, index: &[i32]) -> Option<usize> {
        if index.len() != self.ndim() {
            return None;
        }
        let mut rank = 0usize;
        for (&i, &n) in index.iter().zip(&self.shape) {
            if i < 0 || (i as usize) >= n {
                return None;
            }
            rank = rank * n + i as usize;
        }
        Some(rank)
    }

    fn check_index(&self, index: &LatticeIndex) -> Result<usize, QueryError> {
        self.slot(index)
            .ok_or_else(|| QueryError::LatticeIndexOutOfBounds {
                index: index.clone(),
                bounds: self.describe_bounds(),
            })
    }

    fn describe_bounds(&self) -> String {
        self.shape
            .iter()
            .map(|n| format!("[0, {n})"))
            .collect::<Vec<_>>()
            .join(" x ")
    }

    /// Universe at `index`.
    pub fn universe_at(&self, index: &LatticeIndex) -> Result<UniverseId, QueryError> {
        let slot = self.check_index(index)?;
        Ok(self.universes[slot])
    }

    /// Centre of the element at `index`: `lower_left + (index + 0.5) * pitch`.
    ///
    /// Components beyond the lattice rank are `0.0`.
    pub fn place(&self, index: &LatticeIndex) -> Result<Point, QueryError> {
        self.check_index(index)?;
        let mut origin = [0.0; 3];
        for (axis, o) in origin.iter_mut().enumerate().take(self.ndim()) {
            *o = self.lower_left[axis] + (f64::from(index[axis]) + 0.5) * self.pitch[axis];
        }
        Ok(origin)
    }

    /// Index of the element containing `point`, or `None` outside the lattice.
    ///
    /// Elements are half-open: a point on a shared face belongs to the
    /// element above it.
    pub fn find_element(&self, point: Point) -> Option<LatticeIndex> {
        let mut index = LatticeIndex::new();
        for axis in 0..self.ndim() {
            let f = ((point[axis] - self.lower_left[axis]) / self.pitch[axis]).floor();
            if !(f >= 0.0 && f < self.shape[axis] as f64) {
                return None;
            }
            index.push(f as i32);
        }
        Some(index)
    }

    /// `point` relative to the centre of the element at `index`.
    ///
    /// Components beyond the lattice rank pass through unchanged.
    pub fn local_coordinates(&self, point: Point, index: &LatticeIndex) -> Result<Point, QueryError> {
        let origin = self.place(index)?;
        let mut local = point;
        for (axis, l) in local.iter_mut().enumerate().take(self.ndim()) {
            *l -= origin[axis];
        }
        Ok(local)
    }

    /// All indices in canonical order (last axis fastest).
    pub fn indices(&self) -> impl Iterator<Item = LatticeIndex> + '_ {
        (0..self.len()).map(move |mut rank| {
            let mut index: LatticeIndex = SmallVec::from_elem(0, self.ndim());
            for axis in (0..self.ndim()).rev() {
                let n = self.shape[axis];
                index[axis] = (rank % n) as i32;
                rank /= n;
            }
            index
        })
    }

    /// `(index, universe)` for every slot in canonical order.
    pub fn slots(&self) -> impl Iterator<Item = (LatticeIndex, UniverseId)> + '_ {
        self.indices().zip(self.universes.iter().copied())
    }

    /// Box spanned by all elements; unbounded along axes beyond the rank.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bb = BoundingBox::infinite();
        for axis in 0..self.ndim() {
            bb.lower_left[axis] = self.lower_left[axis];
            bb.upper_right[axis] = self.lower_left[axis] + self.shape[axis] as f64 * self.pitch[axis];
        }
        bb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use smallvec::smallvec;

    fn array() -> RectLattice {
        RectLattice::filled(&[0.35, 0.4], &[5.0, -1.6], &[1, 8], UniverseId(0)).unwrap()
    }

    #[test]
    fn place_is_cell_centred() {
        let o = array().place(&smallvec![0, 0]).unwrap();
        assert!((o[0] - 5.175).abs() < 1e-12);
        assert!((o[1] - -1.4).abs() < 1e-12);
        assert_eq!(o[2], 0.0);

        let top = array().place(&smallvec![0, 7]).unwrap();
        assert!((top[1] - 1.4).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_indices_are_not_addressable() {
        let lat = array();
        for bad in [
            smallvec![0, 8],
            smallvec![1, 0],
            smallvec![-1, 0],
            smallvec![0],
            smallvec![0, 0, 0],
        ] {
            match lat.place(&bad) {
                Err(QueryError::LatticeIndexOutOfBounds { index, bounds }) => {
                    assert_eq!(index, bad);
                    assert_eq!(bounds, "[0, 1) x [0, 8)");
                }
                other => panic!("expected LatticeIndexOutOfBounds for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn shape_mismatch_rejected_at_construction() {
        let err = RectLattice::new(&[1.0, 1.0], &[0.0, 0.0], &[2, 2], vec![UniverseId(0); 3]);
        assert_eq!(
            err,
            Err(BuildError::LatticeShapeMismatch {
                expected: 4,
                got: 3
            })
        );
    }

    #[test]
    fn rank_mismatch_rejected_at_construction() {
        assert!(matches!(
            RectLattice::filled(&[1.0], &[0.0, 0.0], &[2, 2], UniverseId(0)),
            Err(BuildError::LatticeRankMismatch { .. })
        ));
        assert!(matches!(
            RectLattice::filled(&[], &[], &[], UniverseId(0)),
            Err(BuildError::LatticeRankMismatch { .. })
        ));
        assert!(matches!(
            RectLattice::filled(&[1.0; 4], &[0.0; 4], &[1; 4], UniverseId(0)),
            Err(BuildError::LatticeRankMismatch { .. })
        ));
    }

    #[test]
    fn bad_pitch_and_extent_rejected() {
        assert!(matches!(
            RectLattice::filled(&[0.0], &[0.0], &[2], UniverseId(0)),
            Err(BuildError::NonPositiveDimension { name: "pitch", .. })
        ));
        assert!(matches!(
            RectLattice::filled(&[1.0], &[0.0], &[0], UniverseId(0)),
            Err(BuildError::InvalidConfig { .. })
        ));
        assert!(matches!(
            RectLattice::filled(&[1.0], &[f64::NAN], &[2], UniverseId(0)),
            Err(BuildError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn indices_are_last_axis_fastest() {
        let lat = RectLattice::new(
            &[1.0, 1.0],
            &[0.0, 0.0],
            &[2, 3],
            (0..6).map(UniverseId).collect(),
        )
        .unwrap();
        let idx: Vec<LatticeIndex> = lat.indices().collect();
        assert_eq!(idx[0].as_slice(), &[0, 0]);
        assert_eq!(idx[1].as_slice(), &[0, 1]);
        assert_eq!(idx[3].as_slice(), &[1, 0]);
        assert_eq!(idx[5].as_slice(), &[1, 2]);
        for (index, u) in lat.slots() {
            assert_eq!(lat.universe_at(&index).unwrap(), u);
        }
    }

    #[test]
    fn find_element_inverts_place() {
        let lat = array();
        for index in lat.indices() {
            let centre = lat.place(&index).unwrap();
            assert_eq!(lat.find_element(centre), Some(index.clone()));
            let local = lat.local_coordinates(centre, &index).unwrap();
            assert!(local[0].abs() < 1e-12 && local[1].abs() < 1e-12);
        }
        assert_eq!(lat.find_element([4.9, 0.0, 0.0]), None);
        assert_eq!(lat.find_element([5.1, 1.7, 0.0]), None);
    }

    #[test]
    fn bounding_box_spans_elements() {
        let bb = array().bounding_box();
        assert_eq!(bb.lower_left[0], 5.0);
        assert!((bb.upper_right[0] - 5.35).abs() < 1e-12);
        assert!((bb.lower_left[1] + 1.6).abs() < 1e-12);
        assert!((bb.upper_right[1] - 1.6).abs() < 1e-12);
        assert!(!bb.is_bounded());
    }

    proptest! {
        #[test]
        fn consecutive_indices_are_one_pitch_apart(
            px in 0.01f64..10.0,
            py in 0.01f64..10.0,
            llx in -100.0f64..100.0,
            lly in -100.0f64..100.0,
            nx in 2usize..12,
            ny in 2usize..12,
            axis in 0usize..2,
            seed_i in 0usize..1000,
            seed_j in 0usize..1000,
        ) {
            let lat = RectLattice::filled(&[px, py], &[llx, lly], &[nx, ny], UniverseId(0)).unwrap();
            let mut a: LatticeIndex = smallvec![(seed_i % nx) as i32, (seed_j % ny) as i32];
            if a[axis] as usize + 1 >= lat.shape()[axis] {
                a[axis] -= 1;
            }
            let mut b = a.clone();
            b[axis] += 1;
            let oa = lat.place(&a).unwrap();
            let ob = lat.place(&b).unwrap();
            let pitch = [px, py];
            for k in 0..2 {
                let expected = if k == axis { pitch[k] } else { 0.0 };
                prop_assert!(((ob[k] - oa[k]) - expected).abs() < 1e-9);
            }
            prop_assert_eq!(oa[2], ob[2]);
        }
    }
}
