//! Widest-cross-section and orthogonal-view selection.
//!
//! The widest silhouette is the most reliable view of the pin centre; the
//! frame closest to 90° away supplies the spatial axis that view cannot
//! see. Both searches are first-best linear scans so degenerate sweeps
//! (repeated widths, symmetric angle sets) still centre reproducibly.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::angle::orthogonal_distance;
use crate::error::CentringError;

/// Default largest accepted deviation from true orthogonal, in degrees.
pub const DEFAULT_ORTHOGONAL_TOLERANCE_DEG: f64 = 5.0;

/// Knobs for the widest/orthogonal frame selection.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Largest accepted angular deviation from `reference ± 90°`, in
    /// degrees.
    pub orthogonal_tolerance_deg: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            orthogonal_tolerance_deg: DEFAULT_ORTHOGONAL_TOLERANCE_DEG,
        }
    }
}

/// Finds the widest-silhouette frame and its closest-to-orthogonal
/// companion.
///
/// Returns `(widest_index, orthogonal_index)`. Fails with
/// [`CentringError::MissingRotations`] when no sampled angle lies within
/// `tolerance_deg` of orthogonal to the widest frame's angle.
pub fn find_widest_point_and_orthogonal_point(
    widths: &[f64],
    omegas: &[f64],
    tolerance_deg: f64,
) -> Result<(usize, usize), CentringError> {
    assert_eq!(
        widths.len(),
        omegas.len(),
        "widths and omegas must have equal length"
    );
    assert!(!widths.is_empty(), "cannot search an empty sweep");

    let mut widest = 0usize;
    for (i, &width) in widths.iter().enumerate().skip(1) {
        if width > widths[widest] {
            widest = i;
        }
    }

    let orthogonal = get_orthogonal_index(omegas, omegas[widest], tolerance_deg)?;
    Ok((widest, orthogonal))
}

/// Index of the angle nearest to orthogonal of `reference_deg`.
///
/// Distance is measured with wraparound, modulo 180°, so views 90° ahead
/// and 90° behind the reference both qualify. The first index wins ties.
/// Fails with [`CentringError::MissingRotations`] when even the nearest
/// candidate deviates more than `tolerance_deg` from true orthogonal.
pub fn get_orthogonal_index(
    omegas: &[f64],
    reference_deg: f64,
    tolerance_deg: f64,
) -> Result<usize, CentringError> {
    assert!(!omegas.is_empty(), "cannot search an empty angle array");

    let mut best = 0usize;
    let mut best_distance = orthogonal_distance(omegas[0], reference_deg);
    for (i, &omega) in omegas.iter().enumerate().skip(1) {
        let distance = orthogonal_distance(omega, reference_deg);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }

    if best_distance > tolerance_deg {
        debug!(
            "search: closest angle {:.3} is {:.3} deg from orthogonal of {:.3} (tolerance {:.1})",
            omegas[best], best_distance, reference_deg, tolerance_deg
        );
        return Err(CentringError::MissingRotations {
            reference_deg,
            tolerance_deg,
        });
    }
    Ok(best)
}
