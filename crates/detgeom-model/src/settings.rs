//! Run parameters handed to the transport collaborator.
//!
//! Nothing here is interpreted by this crate beyond validation; the values
//! travel with the [`Model`](crate::Model) to whatever runs the transport.

use std::fmt;

use detgeom_core::{BuildError, Point};

/// How the transport collaborator drives the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Particles start from an external source each batch.
    #[default]
    FixedSource,
    /// k-eigenvalue iteration.
    Eigenvalue,
}

/// Source particle species.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Particle {
    /// Gamma and X-ray photons.
    #[default]
    Photon,
    /// Neutrons.
    Neutron,
}

impl Particle {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Photon => "photon",
            Self::Neutron => "neutron",
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monoenergetic isotropic point source.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSource {
    /// Emission point. Default: the origin.
    pub position: Point,
    /// Emitted species. Default: photon.
    pub particle: Particle,
    /// Emission energy in eV. Default: 1 MeV.
    pub energy_ev: f64,
}

impl Default for PointSource {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            particle: Particle::Photon,
            energy_ev: 1.0e6,
        }
    }
}

impl PointSource {
    /// Check the position is finite and the energy finite and positive.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.position.iter().any(|c| !c.is_finite()) {
            return Err(BuildError::InvalidConfig {
                reason: format!("source position must be finite, got {:?}", self.position),
            });
        }
        if !(self.energy_ev.is_finite() && self.energy_ev > 0.0) {
            return Err(BuildError::NonPositiveDimension {
                name: "source.energy_ev",
                value: self.energy_ev,
            });
        }
        Ok(())
    }
}

/// Batch structure and source of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSettings {
    /// Run mode. Default: fixed source.
    pub run_mode: RunMode,
    /// Total batches. Default: 10.
    pub batches: u32,
    /// Leading batches excluded from tallies. Default: 2.
    pub inactive: u32,
    /// Particles per batch. Default: 100_000.
    pub particles: u64,
    /// Whether photons are transported. Default: true.
    pub photon_transport: bool,
    /// The source.
    pub source: PointSource,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            run_mode: RunMode::FixedSource,
            batches: 10,
            inactive: 2,
            particles: 100_000,
            photon_transport: true,
            source: PointSource::default(),
        }
    }
}

impl RunSettings {
    /// Batches that contribute to tallies.
    pub fn active_batches(&self) -> u32 {
        self.batches.saturating_sub(self.inactive)
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.particles == 0 {
            return Err(BuildError::InvalidConfig {
                reason: "particles must be at least 1".to_string(),
            });
        }
        if self.batches <= self.inactive {
            return Err(BuildError::InvalidConfig {
                reason: format!(
                    "batches ({}) must exceed inactive ({})",
                    self.batches, self.inactive,
                ),
            });
        }
        if self.source.particle == Particle::Photon && !self.photon_transport {
            return Err(BuildError::InvalidConfig {
                reason: "photon source requires photon_transport".to_string(),
            });
        }
        self.source.validate()
    }
}
