/// Generates a parabolic pin silhouette as a pair of edge profiles.
///
/// The silhouette spans `half_span` columns either side of `centre_column`
/// with its widest cross-section (`2 * max_half_width` pixels) at the
/// centre; columns outside the silhouette carry the sentinel zero.
pub fn parabolic_pin_profiles(
    columns: usize,
    centre_column: usize,
    centre_y: f64,
    half_span: usize,
    max_half_width: f64,
) -> (Vec<f64>, Vec<f64>) {
    assert!(columns > 0, "profiles must have at least one column");
    assert!(half_span > 0, "silhouette must span at least one column");
    assert!(max_half_width > 0.0, "pin must have positive width");

    let mut top = vec![0.0; columns];
    let mut bottom = vec![0.0; columns];
    for i in 0..columns {
        let offset = (i as f64 - centre_column as f64) / half_span as f64;
        if offset.abs() < 1.0 {
            let half_width = max_half_width * (1.0 - offset * offset);
            top[i] = centre_y - half_width;
            bottom[i] = centre_y + half_width;
        }
    }
    (top, bottom)
}

/// Vertical pixel offset at which a pin sitting `(y_mm, z_mm)` away from
/// the rotation axis appears on the camera when the stage is at
/// `omega_deg`.
pub fn lab_vertical_offset_px(
    y_mm: f64,
    z_mm: f64,
    omega_deg: f64,
    microns_per_y_pixel: f64,
) -> f64 {
    let omega = omega_deg.to_radians();
    (y_mm * omega.cos() - z_mm * omega.sin()) / (microns_per_y_pixel * 1e-3)
}
