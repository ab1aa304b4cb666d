//! Detector-array configuration and validation.
//!
//! [`ArrayConfig`] is the builder-input for
//! [`DetectorArray::build`](crate::DetectorArray::build). All lengths are in
//! model units (cm). [`validate()`](ArrayConfig::validate) checks every
//! structural invariant up front so assembly never fails halfway.

use detgeom_core::BuildError;

// ── DetectorConfig ─────────────────────────────────────────────────

/// Extents of one detector block.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectorConfig {
    /// Extent along x. Default: 0.35.
    pub width: f64,
    /// Extent along y. Default: 0.175.
    pub height: f64,
    /// Extent along z. Default: 0.35.
    pub depth: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            width: 0.35,
            height: 0.175,
            depth: 0.35,
        }
    }
}

impl DetectorConfig {
    /// Check every extent is finite and positive.
    pub fn validate(&self) -> Result<(), BuildError> {
        positive("detector.width", self.width)?;
        positive("detector.height", self.height)?;
        positive("detector.depth", self.depth)
    }
}

// ── DomainConfig ───────────────────────────────────────────────────

/// The vacuum-bounded world box surrounding the array.
#[derive(Clone, Debug, PartialEq)]
pub struct DomainConfig {
    /// Extent along x, centred on the origin. Default: 1000.
    pub width: f64,
    /// Extent along y, centred on the origin. Default: 1000.
    pub height: f64,
    /// Floor plane. Default: -2500.
    pub z_min: f64,
    /// Ceiling plane. Default: 2500.
    pub z_max: f64,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            z_min: -2500.0,
            z_max: 2500.0,
        }
    }
}

// ── ArrayConfig ────────────────────────────────────────────────────

/// A column of identical detectors stacked along y.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayConfig {
    /// Detector block extents.
    pub detector: DetectorConfig,
    /// Centre-to-centre spacing along y. Default: 0.4. Must exceed
    /// `detector.height` so the spacers have positive height.
    pub pitch_y: f64,
    /// Number of detectors. Default: 8.
    pub n_elements: usize,
    /// x coordinate of the array's left face. Default: 5.0.
    pub offset_x: f64,
    /// Enclosing domain.
    pub domain: DomainConfig,
}

impl ArrayConfig {
    /// Default y pitch.
    pub const DEFAULT_PITCH_Y: f64 = 0.4;

    /// Default detector count.
    pub const DEFAULT_N_ELEMENTS: usize = 8;

    /// Default x offset.
    pub const DEFAULT_OFFSET_X: f64 = 5.0;

    /// Config with the default detector, domain and spacing.
    pub fn new() -> Self {
        Self {
            detector: DetectorConfig::default(),
            pitch_y: Self::DEFAULT_PITCH_Y,
            n_elements: Self::DEFAULT_N_ELEMENTS,
            offset_x: Self::DEFAULT_OFFSET_X,
            domain: DomainConfig::default(),
        }
    }

    /// Total y extent of the array.
    pub fn array_height(&self) -> f64 {
        self.pitch_y * self.n_elements as f64
    }

    /// Height of each spacer above and below a detector.
    pub fn spacer_height(&self) -> f64 {
        (self.pitch_y - self.detector.height) / 2.0
    }

    /// Lower-left corner of the array in the xy plane.
    pub fn lower_left(&self) -> [f64; 2] {
        [self.offset_x, -self.array_height() / 2.0]
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), BuildError> {
        // 1. Detector extents.
        self.detector.validate()?;
        // 2. Spacing leaves room for spacers.
        positive("pitch_y", self.pitch_y)?;
        if self.pitch_y <= self.detector.height {
            return Err(BuildError::InvalidConfig {
                reason: format!(
                    "pitch_y ({}) must exceed detector.height ({})",
                    self.pitch_y, self.detector.height,
                ),
            });
        }
        // 3. At least one element, addressable by an i32 lattice index.
        if self.n_elements == 0 || i32::try_from(self.n_elements).is_err() {
            return Err(BuildError::InvalidConfig {
                reason: format!(
                    "n_elements must be in [1, {}], got {}",
                    i32::MAX,
                    self.n_elements
                ),
            });
        }
        if !self.offset_x.is_finite() {
            return Err(BuildError::InvalidConfig {
                reason: format!("offset_x must be finite, got {}", self.offset_x),
            });
        }
        // 4. Domain is a proper box.
        let d = &self.domain;
        positive("domain.width", d.width)?;
        positive("domain.height", d.height)?;
        if !(d.z_min.is_finite() && d.z_max.is_finite() && d.z_min < d.z_max) {
            return Err(BuildError::InvalidExtent {
                min: d.z_min,
                max: d.z_max,
            });
        }
        // 5. Domain strictly encloses the holder.
        let half_w = d.width / 2.0;
        let half_h = d.height / 2.0;
        let half_depth = self.detector.depth / 2.0;
        let x_max = self.offset_x + self.detector.width;
        let y_max = self.array_height() / 2.0;
        if self.offset_x <= -half_w
            || x_max >= half_w
            || y_max >= half_h
            || -half_depth <= d.z_min
            || half_depth >= d.z_max
        {
            return Err(BuildError::InvalidConfig {
                reason: format!(
                    "domain {}x{} z[{}, {}] does not enclose holder x[{}, {}] y[{}, {}] z[{}, {}]",
                    d.width,
                    d.height,
                    d.z_min,
                    d.z_max,
                    self.offset_x,
                    x_max,
                    -y_max,
                    y_max,
                    -half_depth,
                    half_depth,
                ),
            });
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), BuildError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BuildError::NonPositiveDimension { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let cfg = ArrayConfig::new();
        assert!(cfg.validate().is_ok());
        assert!((cfg.array_height() - 3.2).abs() < 1e-12);
        assert!((cfg.spacer_height() - 0.1125).abs() < 1e-12);
        let ll = cfg.lower_left();
        assert_eq!(ll[0], 5.0);
        assert!((ll[1] + 1.6).abs() < 1e-12);
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(ArrayConfig::default(), ArrayConfig::new());
    }

    #[test]
    fn pitch_must_exceed_detector_height() {
        let mut cfg = ArrayConfig::new();
        cfg.pitch_y = cfg.detector.height;
        match cfg.validate() {
            Err(BuildError::InvalidConfig { reason }) => assert!(reason.contains("pitch_y")),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn zero_elements_rejected() {
        let mut cfg = ArrayConfig::new();
        cfg.n_elements = 0;
        assert!(matches!(cfg.validate(), Err(BuildError::InvalidConfig { .. })));
    }

    #[test]
    fn nonpositive_detector_extent_rejected() {
        let mut cfg = ArrayConfig::new();
        cfg.detector.depth = -1.0;
        assert_eq!(
            cfg.validate(),
            Err(BuildError::NonPositiveDimension {
                name: "detector.depth",
                value: -1.0
            })
        );
        cfg.detector.depth = 0.35;
        cfg.detector.width = f64::INFINITY;
        assert!(matches!(
            cfg.validate(),
            Err(BuildError::NonPositiveDimension { name: "detector.width", .. })
        ));
    }

    #[test]
    fn inverted_domain_z_rejected() {
        let mut cfg = ArrayConfig::new();
        cfg.domain.z_min = 10.0;
        cfg.domain.z_max = -10.0;
        assert_eq!(
            cfg.validate(),
            Err(BuildError::InvalidExtent {
                min: 10.0,
                max: -10.0
            })
        );
    }

    #[test]
    fn domain_must_enclose_holder() {
        let mut cfg = ArrayConfig::new();
        cfg.domain.width = 10.0;
        assert!(matches!(cfg.validate(), Err(BuildError::InvalidConfig { .. })));

        let mut cfg = ArrayConfig::new();
        cfg.domain.height = 3.0;
        assert!(matches!(cfg.validate(), Err(BuildError::InvalidConfig { .. })));

        let mut cfg = ArrayConfig::new();
        cfg.domain.z_min = 0.0;
        assert!(matches!(cfg.validate(), Err(BuildError::InvalidConfig { .. })));
    }
}
