//! Angle utilities used across the centring pipeline.
//!
//! Stage angles arrive as plain signed degrees with no range guarantee, so
//! every comparison here goes through modular reduction rather than plain
//! subtraction.

/// Normalizes an angle into the range [0, 360).
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let norm = angle.rem_euclid(360.0);
    if norm >= 360.0 {
        0.0
    } else {
        norm
    }
}

/// Computes the smallest unsigned angular difference between two angles in
/// degrees, with wraparound at the 0°/360° boundary. Returns a value in
/// [0, 180].
#[inline]
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Distance (degrees) of `angle` from the nearest of `reference ± 90°`.
///
/// Works modulo 180° so that a view 90° behind the reference counts as
/// orthogonal just like one 90° ahead. Returns a value in [0, 90].
#[inline]
pub fn orthogonal_distance(angle: f64, reference: f64) -> f64 {
    let target = (reference + 90.0).rem_euclid(180.0);
    let folded = angle.rem_euclid(180.0);
    let diff = (folded - target).rem_euclid(180.0);
    diff.min(180.0 - diff)
}
