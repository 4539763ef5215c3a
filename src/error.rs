use thiserror::Error;

/// Recoverable failures raised while distilling a rotation sweep.
///
/// Both kinds signal a problem with the captured data, not with the caller:
/// the orchestrating layer is expected to retry the sweep with different
/// capture settings or abort centring for this sample.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CentringError {
    /// Every sample in the sweep failed the validity test.
    #[error("no rotations pass the validity test")]
    NoRotationsPassValidityTest,
    /// No sampled angle lies close enough to orthogonal of the reference.
    #[error(
        "no angle within {tolerance_deg} degrees of orthogonal to {reference_deg} degrees"
    )]
    MissingRotations {
        /// Angle (degrees) of the widest-silhouette frame.
        reference_deg: f64,
        /// Largest accepted deviation from true orthogonal, in degrees.
        tolerance_deg: f64,
    },
}
