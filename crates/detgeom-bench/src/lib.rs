//! Benchmark profiles and utilities for the detgeom workspace.
//!
//! Provides pre-built [`ArrayConfig`] profiles for benchmarks:
//!
//! - [`reference_profile`]: the default 8-element column
//! - [`stress_profile`]: a 4096-element column in a proportionally larger domain
//! - [`sample_points`]: deterministic points inside a box via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use detgeom_core::Point;
use detgeom_csg::BoundingBox;
use detgeom_model::{ArrayConfig, DomainConfig};

/// Reference benchmark profile: the default detector column.
pub fn reference_profile() -> ArrayConfig {
    ArrayConfig::default()
}

/// Stress benchmark profile: 4096 detectors.
///
/// The domain grows with the column so the config still validates.
pub fn stress_profile() -> ArrayConfig {
    let mut config = ArrayConfig {
        n_elements: 4096,
        ..ArrayConfig::default()
    };
    let span = config.array_height() * 2.0;
    config.domain = DomainConfig {
        width: span,
        height: span,
        ..DomainConfig::default()
    };
    config
}

/// Generate `n` deterministic points inside `bb`.
///
/// Uses a multiplicative hash of the seed, so the same arguments always
/// give the same points. `bb` must be bounded.
pub fn sample_points(bb: &BoundingBox, n: usize, seed: u64) -> Vec<Point> {
    const MULT: [u64; 3] = [6364136223846793005, 1442695040888963407, 2862933555777941757];
    (0..n as u64)
        .map(|i| {
            let mut p = [0.0; 3];
            for (axis, c) in p.iter_mut().enumerate() {
                let h = seed
                    .wrapping_add(i)
                    .wrapping_mul(MULT[axis])
                    .rotate_left(17 + axis as u32 * 7);
                let t = (h >> 11) as f64 / (1u64 << 53) as f64;
                *c = bb.lower_left[axis] + t * (bb.upper_right[axis] - bb.lower_left[axis]);
            }
            p
        })
        .collect()
}
