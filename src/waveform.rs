//! Edge-profile handling for a single captured frame.
//!
//! The upstream segmentation step reduces each video frame to two profiles:
//! the top and bottom boundary of the pin silhouette as a function of image
//! column. A profile value of `0.0` is its sentinel for "no edge detected in
//! this column"; the sentinel is decoded here, once, into per-column
//! validity so a genuine zero coordinate can never be confused with a
//! missing edge further down the pipeline.

use serde::{Deserialize, Serialize};

use crate::types::FrameMeasurement;

/// Knobs for the per-frame midpoint extraction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MidpointParams {
    /// Box-filter window applied to the width profile before picking the
    /// widest column. `0` or `1` selects on the raw profile. The reported
    /// width and midline always come from the raw profiles at the chosen
    /// column.
    pub smoothing_window: usize,
}

impl Default for MidpointParams {
    fn default() -> Self {
        Self {
            smoothing_window: 1,
        }
    }
}

/// Zero-padded centred box filter; output has the input's length.
pub fn box_smooth(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window > 0, "smoothing window must be positive");
    if window == 1 || values.is_empty() {
        return values.to_vec();
    }
    // Matches a same-length convolution with a ones(window)/window kernel:
    // the window reaches `window - 1 - half` back and `half` forward.
    let half = (window - 1) / 2;
    let reach_back = window - 1 - half;
    let norm = window as f64;
    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let lo = i.saturating_sub(reach_back);
        let hi = (i + half).min(values.len() - 1);
        let sum: f64 = values[lo..=hi].iter().sum();
        out.push(sum / norm);
    }
    out
}

/// Finds the widest vertical cross-section of the pin silhouette.
///
/// Scans the paired profiles for the column with the largest `bottom - top`
/// gap among columns where both edges were detected; the first such column
/// wins ties. Returns that column together with the vertical midline and
/// the gap itself.
///
/// Both profiles must have the same, non-zero length and at least one
/// column must carry both edges; violations panic, since they indicate a
/// broken caller rather than a bad sweep.
pub fn find_midpoint(top: &[f64], bottom: &[f64]) -> FrameMeasurement {
    find_midpoint_with(top, bottom, &MidpointParams::default())
}

/// [`find_midpoint`] with explicit extraction parameters.
pub fn find_midpoint_with(
    top: &[f64],
    bottom: &[f64],
    params: &MidpointParams,
) -> FrameMeasurement {
    assert_eq!(
        top.len(),
        bottom.len(),
        "edge profiles must have equal length"
    );
    assert!(!top.is_empty(), "edge profiles must not be empty");

    let widths: Vec<f64> = top.iter().zip(bottom).map(|(&t, &b)| b - t).collect();
    let smoothed;
    let selection: &[f64] = if params.smoothing_window > 1 {
        smoothed = box_smooth(&widths, params.smoothing_window);
        &smoothed
    } else {
        &widths
    };

    let mut best: Option<(usize, f64)> = None;
    for i in 0..top.len() {
        if top[i] == 0.0 || bottom[i] == 0.0 {
            continue;
        }
        match best {
            Some((_, value)) if selection[i] <= value => {}
            _ => best = Some((i, selection[i])),
        }
    }

    let (x_pos, _) = best.expect("at least one column must carry both edges");
    FrameMeasurement {
        x_pos,
        y_pos: (top[x_pos] + bottom[x_pos]) * 0.5,
        width: widths[x_pos],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parabolic silhouette sampled like the on-axis camera sees a pin tip:
    /// edges meet where the silhouette ends, sentinel zeros outside.
    fn parabolic_pin(len: usize, x_start: f64, x_span: f64) -> (Vec<f64>, Vec<f64>) {
        let step = x_span / len as f64;
        let mut top = Vec::with_capacity(len);
        let mut bottom = Vec::with_capacity(len);
        for i in 0..len {
            let x = x_start + step * i as f64;
            let upper = x * x - 100.0 + 500.0;
            let lower = -x * x + 100.0 + 500.0;
            if upper <= lower {
                top.push(upper);
                bottom.push(lower);
            } else {
                top.push(0.0);
                bottom.push(0.0);
            }
        }
        (top, bottom)
    }

    #[test]
    fn symmetric_pin_midpoint() {
        let (top, bottom) = parabolic_pin(1024, -15.0, 25.0);
        let m = find_midpoint(&top, &bottom);
        assert_eq!(m.x_pos, 614);
        assert!((m.y_pos - 500.0).abs() < 1e-9);
        let x = -15.0 + 25.0 / 1024.0 * 614.0;
        assert!((m.width - (200.0 - 2.0 * x * x)).abs() < 1e-9);
    }

    #[test]
    fn asymmetric_pin_midpoint() {
        let len = 1024usize;
        let step = 6.35 / len as f64;
        let mut top = Vec::with_capacity(len);
        let mut bottom = Vec::with_capacity(len);
        for i in 0..len {
            let x = -4.0 + step * i as f64;
            let upper = x.powi(4) - 5.0 * x * x - 3.0 + 400.0;
            let lower = -x * x + 6.0 + 400.0;
            if upper <= lower {
                top.push(upper);
                bottom.push(lower);
            } else {
                top.push(0.0);
                bottom.push(0.0);
            }
        }
        let m = find_midpoint(&top, &bottom);
        // Widest gap sits at the first stationary point of the width,
        // x = -sqrt(2), between the tip and the shank bulge.
        assert_eq!(m.x_pos, 417);
        assert_eq!(m.y_pos.floor(), 397.0);
    }

    #[test]
    fn tie_resolves_to_first_column() {
        let top = vec![0.0, 10.0, 10.0, 10.0];
        let bottom = vec![0.0, 30.0, 30.0, 20.0];
        let m = find_midpoint(&top, &bottom);
        assert_eq!(m.x_pos, 1);
        assert!((m.width - 20.0).abs() < 1e-12);
    }

    #[test]
    fn sentinel_columns_are_skipped() {
        // Column 0 shows a huge gap but only one detected edge.
        let top = vec![0.0, 100.0, 0.0];
        let bottom = vec![500.0, 150.0, 0.0];
        let m = find_midpoint(&top, &bottom);
        assert_eq!(m.x_pos, 1);
        assert!((m.y_pos - 125.0).abs() < 1e-12);
        assert!((m.width - 50.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn mismatched_profiles_panic() {
        find_midpoint(&[0.0, 1.0], &[0.0]);
    }

    #[test]
    #[should_panic(expected = "both edges")]
    fn all_sentinel_profiles_panic() {
        find_midpoint(&[0.0, 0.0], &[0.0, 0.0]);
    }

    #[test]
    fn box_smooth_window_one_is_identity() {
        let values = vec![1.0, -2.0, 3.5];
        assert_eq!(box_smooth(&values, 1), values);
    }

    #[test]
    fn box_smooth_pads_with_zeros() {
        let smoothed = box_smooth(&[3.0, 3.0, 3.0], 3);
        assert_eq!(smoothed, vec![2.0, 3.0, 2.0]);
    }

    #[test]
    fn smoothing_changes_the_selected_column() {
        // Raw widths: [_, 10, 0, 9, 8, 9, _]; the lone 10 wins unsmoothed,
        // the plateau around column 4 wins once smoothed.
        let widths = [0.0, 10.0, 0.0, 9.0, 8.0, 9.0, 0.0];
        let top: Vec<f64> = widths.iter().map(|&w| if w > 0.0 { 100.0 } else { 0.0 }).collect();
        let bottom: Vec<f64> = widths
            .iter()
            .map(|&w| if w > 0.0 { 100.0 + w } else { 0.0 })
            .collect();

        let raw = find_midpoint(&top, &bottom);
        assert_eq!(raw.x_pos, 1);

        let params = MidpointParams {
            smoothing_window: 3,
        };
        let smoothed = find_midpoint_with(&top, &bottom, &params);
        assert_eq!(smoothed.x_pos, 4);
        // Reported width stays raw.
        assert!((smoothed.width - 8.0).abs() < 1e-12);
    }
}
