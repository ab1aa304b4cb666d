//! Proptest strategies.

use detgeom_core::Point;
use detgeom_csg::BoundingBox;
use detgeom_model::{ArrayConfig, DetectorConfig, DomainConfig};
use proptest::prelude::*;

/// Valid detector-array configs: spacing always exceeds the detector
/// height and the domain always encloses the holder.
pub fn arb_array_config() -> impl Strategy<Value = ArrayConfig> {
    (
        0.05f64..2.0,
        0.05f64..2.0,
        0.05f64..2.0,
        1.05f64..3.0,
        1usize..24,
        -20.0f64..20.0,
    )
        .prop_map(|(width, height, depth, pitch_ratio, n_elements, offset_x)| {
            let pitch_y = height * pitch_ratio;
            let span = (offset_x.abs() + width) * 2.0 + pitch_y * n_elements as f64 + 10.0;
            ArrayConfig {
                detector: DetectorConfig {
                    width,
                    height,
                    depth,
                },
                pitch_y,
                n_elements,
                offset_x,
                domain: DomainConfig {
                    width: span,
                    height: span,
                    z_min: -span,
                    z_max: span,
                },
            }
        })
}

/// Points strictly inside a bounded box.
pub fn arb_point_in(bb: BoundingBox) -> impl Strategy<Value = Point> {
    let axis = |i: usize| {
        let lo = bb.lower_left[i];
        let hi = bb.upper_right[i];
        let pad = (hi - lo) * 1e-6;
        (lo + pad)..(hi - pad)
    };
    (axis(0), axis(1), axis(2)).prop_map(|(x, y, z)| [x, y, z])
}
