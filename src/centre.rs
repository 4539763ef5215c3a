//! Distils a filtered sweep into a pixel-space centre estimate.

use crate::error::CentringError;
use crate::search::find_widest_point_and_orthogonal_point;
use crate::sweep::RotationSweep;
use crate::types::PixelCentre;

/// Projects the widest and orthogonal frames of a filtered sweep into one
/// [`PixelCentre`].
///
/// The sweep must already be validity-filtered. Propagates
/// [`CentringError::MissingRotations`] from the underlying search
/// unchanged.
pub fn extract_pixel_centre(
    sweep: &RotationSweep,
    tolerance_deg: f64,
) -> Result<PixelCentre, CentringError> {
    let (widest, orthogonal) =
        find_widest_point_and_orthogonal_point(sweep.widths(), sweep.omegas(), tolerance_deg)?;
    Ok(PixelCentre {
        x: sweep.x_positions()[widest],
        y_widest: sweep.y_positions()[widest],
        y_orthogonal: sweep.y_positions()[orthogonal],
        omega_widest: sweep.omegas()[widest],
        omega_orthogonal: sweep.omegas()[orthogonal],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::DEFAULT_ORTHOGONAL_TOLERANCE_DEG;

    #[test]
    fn centre_comes_from_widest_and_orthogonal_frames() {
        let sweep = RotationSweep::from_columns(
            vec![400.0, 450.0, 7.0, 500.0, 475.0, 412.0],
            vec![500.0, 512.0, 518.0, 498.0, 486.0, 530.0],
            vec![400.0, 450.0, 7.0, 500.0, 600.0, 400.0],
            vec![0.0, 30.0, 60.0, 90.0, 120.0, 180.0],
        );
        let centre = extract_pixel_centre(&sweep, DEFAULT_ORTHOGONAL_TOLERANCE_DEG).unwrap();
        assert_eq!(centre.x, 475.0);
        assert_eq!(centre.y_widest, 486.0);
        assert_eq!(centre.y_orthogonal, 512.0);
        assert_eq!(centre.omega_widest, 120.0);
        assert_eq!(centre.omega_orthogonal, 30.0);
    }

    #[test]
    fn missing_rotations_propagates() {
        let sweep = RotationSweep::from_columns(
            vec![400.0, 500.0, 600.0],
            vec![400.0, 500.0, 600.0],
            vec![100.0, 300.0, 200.0],
            vec![0.0, 10.0, 20.0],
        );
        let err = extract_pixel_centre(&sweep, DEFAULT_ORTHOGONAL_TOLERANCE_DEG).unwrap_err();
        assert!(matches!(err, CentringError::MissingRotations { .. }));
    }
}
