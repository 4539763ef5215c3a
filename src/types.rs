use nalgebra::Vector3;
use serde::Serialize;

/// Relative motor move in millimetres, as consumed by the motion layer.
pub type MotorDisplacement = Vector3<f64>;

/// Per-frame measurement derived from one pair of edge profiles.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FrameMeasurement {
    /// Column index of the widest vertical cross-section.
    pub x_pos: usize,
    /// Vertical midpoint between the two edges at that column (pixels).
    pub y_pos: f64,
    /// Vertical gap between the two edges at that column (pixels).
    pub width: f64,
}

/// Pixel-space centring estimate distilled from a rotation sweep.
///
/// Combines the widest-silhouette frame (most reliable view of the pin
/// centre) with the frame closest to 90° away, which resolves the spatial
/// axis the widest view cannot see.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PixelCentre {
    pub x: f64,
    pub y_widest: f64,
    pub y_orthogonal: f64,
    pub omega_widest: f64,
    pub omega_orthogonal: f64,
}

/// Result of one full centring computation.
#[derive(Clone, Debug, Serialize)]
pub struct CentringResult {
    pub centre: PixelCentre,
    /// Relative move (millimetres) that recentres the pin under the beam.
    pub displacement: MotorDisplacement,
    /// Samples that survived validity filtering.
    pub frames_used: usize,
    /// Samples rejected by validity filtering.
    pub frames_rejected: usize,
    pub latency_ms: f64,
}
