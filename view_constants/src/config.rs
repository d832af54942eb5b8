//! Construction settings for `ViewConstants`

/// Tolerances applied when building a `ViewConstants`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConstantsConfig {
    /// Maximum element of `RᵀR - I` for the pose rotation block `R`
    ///
    /// Keep it well below `identity_tolerance`: the rigid inverse uses `Rᵀ`, so
    /// this bounds how far `view_to_world * world_to_view` drifts from identity.
    pub pose_tolerance: f32,
    /// Maximum relative deviation of `inverse * matrix` from identity. Every
    /// built record is checked against it.
    pub identity_tolerance: f32,
}

impl Default for ViewConstantsConfig {
    fn default() -> Self {
        Self {
            pose_tolerance: 2.5e-6,
            identity_tolerance: 1e-5,
        }
    }
}
