#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod centring;
pub mod config;
pub mod error;
pub mod types;

// Stage-level modules – still public, for tools and advanced users.
pub mod angle;
pub mod centre;
pub mod planner;
pub mod search;
pub mod sweep;
pub mod transform;
pub mod waveform;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + results.
pub use crate::centring::{CentringParams, CentringPipeline};
pub use crate::error::CentringError;
pub use crate::types::{CentringResult, FrameMeasurement, MotorDisplacement, PixelCentre};

// Convenience helpers that are generally useful on their own.
pub use crate::transform::camera_coordinates_to_xyz;
pub use crate::waveform::find_midpoint;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use pin_centring::prelude::*;
///
/// # fn main() {
/// let mut pipeline = CentringPipeline::new(CentringParams::default());
/// let top: Vec<f64> = (0..1024)
///     .map(|i| if (300..700).contains(&i) { 350.0 } else { 0.0 })
///     .collect();
/// let bottom: Vec<f64> = (0..1024)
///     .map(|i| if (300..700).contains(&i) { 420.0 } else { 0.0 })
///     .collect();
/// pipeline.add_frame(&top, &bottom, 0.0);
/// # }
/// ```
pub mod prelude {
    pub use crate::config::Calibration;
    pub use crate::{CentringError, CentringParams, CentringPipeline, CentringResult};
}
