//! Pixel-space to motor-space conversion.
//!
//! The camera's horizontal pixel axis runs along the rotation axis, so a
//! horizontal offset maps straight onto motor x. The vertical pixel axis is
//! fixed in the lab frame while the sample's y/z motor axes rotate with the
//! stage, so a vertical offset splits between y and z according to the
//! stage angle at which the frame was captured.

use nalgebra::Vector3;

use crate::types::MotorDisplacement;

const MM_PER_MICRON: f64 = 1e-3;

/// Converts a pixel offset from the beam centre into a relative motor move
/// in millimetres.
///
/// `horizontal` and `vertical` are pixel offsets, `omega_deg` the stage
/// angle in degrees, and the calibration constants are microns per pixel at
/// the active zoom level. Viewed from behind the goniometer with the beam
/// coming from the left, a positive pixel offset moves the sample towards
/// negative motor x and (at `omega = 0`) negative motor y.
pub fn camera_coordinates_to_xyz(
    horizontal: f64,
    vertical: f64,
    omega_deg: f64,
    microns_per_x_pixel: f64,
    microns_per_y_pixel: f64,
) -> MotorDisplacement {
    let x_mm = horizontal * microns_per_x_pixel * MM_PER_MICRON;
    let v_mm = vertical * microns_per_y_pixel * MM_PER_MICRON;
    let omega = omega_deg.to_radians();
    Vector3::new(-x_mm, -v_mm * omega.cos(), v_mm * omega.sin())
}
