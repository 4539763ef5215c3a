//! Rotation-sweep accumulation and validity filtering.
//!
//! A sweep is four parallel columns of equal length; index `i` across all
//! four describes one captured frame. The filter prunes frames that cannot
//! describe the real pin before the widest-point search runs: sentinel
//! widths, positions off the sensor, and x positions far from the sweep
//! median (a frame whose widest column jumps sideways is a segmentation
//! glitch, not the pin).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::CentringError;
use crate::types::FrameMeasurement;

/// Batch of per-frame measurements collected across one rotation sweep.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RotationSweep {
    x_positions: Vec<f64>,
    y_positions: Vec<f64>,
    widths: Vec<f64>,
    omegas: Vec<f64>,
}

impl RotationSweep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sweep from pre-assembled parallel columns.
    pub fn from_columns(
        x_positions: Vec<f64>,
        y_positions: Vec<f64>,
        widths: Vec<f64>,
        omegas: Vec<f64>,
    ) -> Self {
        let len = omegas.len();
        assert!(
            x_positions.len() == len && y_positions.len() == len && widths.len() == len,
            "sweep columns must have equal length"
        );
        Self {
            x_positions,
            y_positions,
            widths,
            omegas,
        }
    }

    /// Appends one frame's measurement captured at `omega` degrees.
    pub fn push(&mut self, measurement: FrameMeasurement, omega: f64) {
        self.x_positions.push(measurement.x_pos as f64);
        self.y_positions.push(measurement.y_pos);
        self.widths.push(measurement.width);
        self.omegas.push(omega);
    }

    pub fn len(&self) -> usize {
        self.omegas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.omegas.is_empty()
    }

    pub fn clear(&mut self) {
        self.x_positions.clear();
        self.y_positions.clear();
        self.widths.clear();
        self.omegas.clear();
    }

    pub fn x_positions(&self) -> &[f64] {
        &self.x_positions
    }

    pub fn y_positions(&self) -> &[f64] {
        &self.y_positions
    }

    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    pub fn omegas(&self) -> &[f64] {
        &self.omegas
    }
}

/// Validity thresholds applied to a sweep before the widest-point search.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Largest accepted deviation of a sample's x position from the sweep
    /// median, in pixels.
    pub max_x_deviation: f64,
    /// Addressable sensor width in pixels; x positions outside `[0, width)`
    /// are rejected.
    pub image_width: f64,
    /// Addressable sensor height in pixels.
    pub image_height: f64,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            max_x_deviation: 100.0,
            image_width: 1024.0,
            image_height: 768.0,
        }
    }
}

/// Diagnostics emitted by the validity filter.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct FilterDiagnostics {
    pub total: usize,
    pub kept: usize,
    pub rejected_sentinel: usize,
    pub rejected_out_of_range: usize,
    pub rejected_outlier: usize,
}

/// Removes samples that cannot describe the real pin.
///
/// Valid samples keep their relative order. Fails with
/// [`CentringError::NoRotationsPassValidityTest`] when nothing survives,
/// signalling that the sweep itself must be retried.
pub fn filter_rotation_data(
    sweep: &RotationSweep,
    params: &FilterParams,
) -> Result<(RotationSweep, FilterDiagnostics), CentringError> {
    let mut diag = FilterDiagnostics {
        total: sweep.len(),
        ..Default::default()
    };
    let x_median = median(sweep.x_positions());

    let mut kept = RotationSweep::new();
    for i in 0..sweep.len() {
        let x = sweep.x_positions[i];
        let y = sweep.y_positions[i];
        let width = sweep.widths[i];

        if width <= 0.0 {
            diag.rejected_sentinel += 1;
            continue;
        }
        if !(0.0..params.image_width).contains(&x) || !(0.0..params.image_height).contains(&y) {
            diag.rejected_out_of_range += 1;
            continue;
        }
        if (x - x_median).abs() > params.max_x_deviation {
            diag.rejected_outlier += 1;
            continue;
        }

        kept.x_positions.push(x);
        kept.y_positions.push(y);
        kept.widths.push(width);
        kept.omegas.push(sweep.omegas[i]);
    }

    diag.kept = kept.len();
    debug!(
        "filter: kept {}/{} samples (sentinel {}, out-of-range {}, outlier {})",
        diag.kept, diag.total, diag.rejected_sentinel, diag.rejected_out_of_range,
        diag.rejected_outlier
    );

    if kept.is_empty() {
        return Err(CentringError::NoRotationsPassValidityTest);
    }
    Ok((kept, diag))
}

/// Median of the raw batch, invalid samples included, so that a handful of
/// glitched frames cannot drag the reference away from the pin.
fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("finite x positions"));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) * 0.5
    } else {
        sorted[mid]
    }
}
