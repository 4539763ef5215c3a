//! End-to-end centring pipeline.
//!
//! The [`CentringPipeline`] exposes a simple API: feed one pair of edge
//! profiles per captured rotation angle, then ask for the recentring move.
//!
//! Typical usage:
//! ```no_run
//! use pin_centring::{CentringParams, CentringPipeline};
//!
//! # fn example(frames: Vec<(Vec<f64>, Vec<f64>, f64)>) {
//! let mut pipeline = CentringPipeline::new(CentringParams::default());
//! for (top, bottom, omega) in &frames {
//!     pipeline.add_frame(top, bottom, *omega);
//! }
//! match pipeline.solve() {
//!     Ok(result) => println!("move by {:?} mm", result.displacement),
//!     Err(err) => eprintln!("sweep unusable: {err}"),
//! }
//! # }
//! ```

use log::debug;
use std::time::Instant;

use super::params::CentringParams;
use crate::centre::extract_pixel_centre;
use crate::config::Calibration;
use crate::error::CentringError;
use crate::sweep::{filter_rotation_data, RotationSweep};
use crate::transform::camera_coordinates_to_xyz;
use crate::types::{CentringResult, FrameMeasurement};
use crate::waveform::find_midpoint_with;

/// Accumulates per-frame measurements across a rotation sweep and computes
/// the recentring move once the sweep is complete.
pub struct CentringPipeline {
    params: CentringParams,
    sweep: RotationSweep,
}

impl CentringPipeline {
    /// Create a pipeline with the supplied parameters.
    pub fn new(params: CentringParams) -> Self {
        Self {
            params,
            sweep: RotationSweep::new(),
        }
    }

    /// Extracts the midpoint measurement from one frame's edge profiles and
    /// appends it to the sweep. `omega` is the stage angle in degrees at
    /// capture time.
    pub fn add_frame(&mut self, top: &[f64], bottom: &[f64], omega: f64) -> FrameMeasurement {
        let measurement = find_midpoint_with(top, bottom, &self.params.midpoint);
        debug!(
            "CentringPipeline::add_frame omega={:.2} x={} width={:.1}",
            omega, measurement.x_pos, measurement.width
        );
        self.sweep.push(measurement, omega);
        measurement
    }

    /// Number of frames accumulated so far.
    pub fn frames(&self) -> usize {
        self.sweep.len()
    }

    /// Drops the accumulated sweep, ready for the next centring cycle.
    pub fn reset(&mut self) {
        self.sweep.clear();
    }

    /// Update the microns-per-pixel calibration (e.g. after a zoom change).
    pub fn set_calibration(&mut self, calibration: Calibration) {
        self.params.calibration = calibration;
    }

    /// Update the beam centre in pixels.
    pub fn set_beam_centre(&mut self, x: f64, y: f64) {
        self.params.beam_centre_x = x;
        self.params.beam_centre_y = y;
    }

    /// Runs validity filtering, frame selection and the coordinate
    /// transform over the accumulated sweep.
    ///
    /// The widest view fixes the horizontal offset and the in-plane
    /// vertical component at its angle; the orthogonal view supplies the
    /// component perpendicular to it. Summing the two single-view
    /// transforms yields the full 3-D move.
    pub fn solve(&self) -> Result<CentringResult, CentringError> {
        let start = Instant::now();

        let (filtered, diagnostics) = filter_rotation_data(&self.sweep, &self.params.filter)?;
        let centre =
            extract_pixel_centre(&filtered, self.params.search.orthogonal_tolerance_deg)?;
        debug!(
            "CentringPipeline::solve centre x={:.1} omega_widest={:.1} omega_orthogonal={:.1}",
            centre.x, centre.omega_widest, centre.omega_orthogonal
        );

        let cal = self.params.calibration;
        let h = centre.x - self.params.beam_centre_x;
        let v_widest = centre.y_widest - self.params.beam_centre_y;
        let v_orthogonal = centre.y_orthogonal - self.params.beam_centre_y;

        let displacement = camera_coordinates_to_xyz(
            h,
            v_widest,
            centre.omega_widest,
            cal.microns_per_x_pixel,
            cal.microns_per_y_pixel,
        ) + camera_coordinates_to_xyz(
            0.0,
            v_orthogonal,
            centre.omega_orthogonal,
            cal.microns_per_x_pixel,
            cal.microns_per_y_pixel,
        );

        Ok(CentringResult {
            centre,
            displacement,
            frames_used: diagnostics.kept,
            frames_rejected: diagnostics.total - diagnostics.kept,
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}
