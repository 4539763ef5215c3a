//! Parameter types configuring the centring stages.
//!
//! Defaults are calibrated for a 1024×768 on-axis camera; for tuning,
//! start with the filter thresholds and the orthogonality tolerance.

use serde::{Deserialize, Serialize};

use crate::config::Calibration;
use crate::search::SearchParams;
use crate::sweep::FilterParams;
use crate::waveform::MidpointParams;

/// Pipeline-wide parameters controlling the multi-stage computation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CentringParams {
    /// Beam centre in pixels at the active zoom level.
    pub beam_centre_x: f64,
    pub beam_centre_y: f64,
    /// Microns-per-pixel calibration at the active zoom level.
    pub calibration: Calibration,
    /// Per-frame midpoint extraction.
    pub midpoint: MidpointParams,
    /// Sweep validity filtering.
    pub filter: FilterParams,
    /// Widest/orthogonal frame selection.
    pub search: SearchParams,
}

impl Default for CentringParams {
    fn default() -> Self {
        Self {
            beam_centre_x: 512.0,
            beam_centre_y: 384.0,
            calibration: Calibration::default(),
            midpoint: MidpointParams::default(),
            filter: FilterParams::default(),
            search: SearchParams::default(),
        }
    }
}
