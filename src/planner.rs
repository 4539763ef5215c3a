//! Rotation-sweep planning helpers.
//!
//! Consulted between captures: pick the next rotation increment and keep
//! candidate positions inside motor and field-of-view limits.

use log::warn;

/// Signed rotation increment (degrees) for the next capture.
///
/// The sweep covers half a rotation in `num_images` even steps. The
/// increment is negated when a further half rotation from `omega` would run
/// past `upper_limit`, sending the sweep back towards zero instead of
/// through the limit.
pub fn rotation_increment(num_images: usize, omega: f64, upper_limit: f64) -> f64 {
    assert!(num_images > 0, "a sweep needs at least one image");
    let increment = 180.0 / num_images as f64;
    if omega + 180.0 > upper_limit {
        -increment
    } else {
        increment
    }
}

/// Clamps `value` into `[lower, upper]` inclusive.
pub fn keep_inside_bounds(value: f64, lower: f64, upper: f64) -> f64 {
    assert!(lower <= upper, "bounds must be ordered");
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// Clamps `x` to within `max_tip_distance` pixels of the pin tip at
/// `tip_x`.
///
/// A centre estimate far from the tip is chasing a reflection or a
/// segmentation artefact rather than the pin, so it is pulled back to the
/// nearest acceptable position.
pub fn clamp_to_tip_distance(max_tip_distance: f64, tip_x: f64, x: f64) -> f64 {
    let offset = x - tip_x;
    if offset.abs() > max_tip_distance {
        warn!(
            "planner: x={x:.1} is more than {max_tip_distance:.1} px from the tip at {tip_x:.1}, clamping"
        );
        tip_x + max_tip_distance * offset.signum()
    } else {
        x
    }
}
