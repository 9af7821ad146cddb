//! Foot slot cuts
//!
//! A fan of identical rectangular cuts around the rim of a round foot. The
//! angular step is the angle subtended by `cut_space` at the foot radius and
//! the fan is symmetric about the Y axis. No tray uses feet at the moment;
//! the helper is kept for tray variants that stand on them.

use crate::error::{GeneratorError, GeneratorResult};
use crate::params::FootCutParameters;
use dicetray_core::Solid;

/// Angle in degrees between neighbouring cuts.
pub fn cut_step_degrees(params: &FootCutParameters) -> f64 {
    (params.cut_space / (params.foot_diameter / 2.0))
        .asin()
        .to_degrees()
}

/// Z rotation of each of `count` cuts, first to last.
pub fn cut_angles(count: usize, params: &FootCutParameters) -> Vec<f64> {
    let step = cut_step_degrees(params);
    let start = step * count.saturating_sub(1) as f64 / 2.0;
    (0..count).map(|i| start - step * i as f64).collect()
}

/// Union of `count` rotated copies of the slot cut.
pub fn gencuts(count: usize, params: &FootCutParameters) -> GeneratorResult<Solid> {
    if count == 0 {
        return Err(GeneratorError::InvalidParameters(
            "foot cut count must be at least 1".to_string(),
        ));
    }
    params.validate()?;

    let cut = Solid::cube([params.cut_width, params.cut_depth, params.cut_height]).translate([
        -params.cut_width / 2.0,
        -params.foot_diameter / 2.0,
        (params.foot_height - params.cut_height) / 2.0,
    ]);

    Ok(Solid::union(
        cut_angles(count, params)
            .into_iter()
            .map(|angle| cut.clone().rotate([0.0, 0.0, angle])),
    ))
}
