//! Calibration data supplied by the beamline configuration store.
//!
//! The microns-per-pixel factors depend on the active camera zoom level.
//! The external store keeps one entry per zoom detent; the table is loaded
//! once per session and individual entries are handed to the pipeline.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Microns-per-pixel calibration for one zoom level.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Calibration {
    pub microns_per_x_pixel: f64,
    pub microns_per_y_pixel: f64,
}

impl Default for Calibration {
    /// One micron per pixel on both axes.
    fn default() -> Self {
        Self {
            microns_per_x_pixel: 1.0,
            microns_per_y_pixel: 1.0,
        }
    }
}

/// One row of the per-zoom calibration table.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ZoomCalibration {
    pub zoom: f64,
    #[serde(flatten)]
    pub calibration: Calibration,
}

/// Per-zoom calibration table, as stored by the configuration collaborator.
#[derive(Clone, Debug, Deserialize)]
pub struct CalibrationTable {
    pub levels: Vec<ZoomCalibration>,
}

impl CalibrationTable {
    /// Calibration for `zoom`, matched exactly (zoom levels are discrete
    /// detents, not a continuum).
    pub fn for_zoom(&self, zoom: f64) -> Option<Calibration> {
        self.levels
            .iter()
            .find(|level| (level.zoom - zoom).abs() < 1e-9)
            .map(|level| level.calibration)
    }
}

pub fn load_calibration_table(path: &Path) -> Result<CalibrationTable, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read calibration table {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse calibration table {}: {e}", path.display()))
}
