//! Error types for view constants construction
//!
//! Every variant is a construction-time validation failure. A `ViewConstants`
//! that exists is valid; consumers never see these errors.

use std::fmt;

/// Result type for view constants construction
pub type ViewConstantsResult<T> = Result<T, ViewConstantsError>;

/// View constants construction errors
#[derive(Debug, Clone, PartialEq)]
pub enum ViewConstantsError {
    /// Projection parameters would produce a non-invertible view-to-clip matrix
    DegenerateProjection(String),

    /// Render extent has a zero dimension (pixel jitter cannot be converted)
    DegenerateViewport(String),

    /// Camera pose is not a rigid transform
    DegeneratePose(String),
}

impl fmt::Display for ViewConstantsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewConstantsError::DegenerateProjection(msg) => write!(f, "Degenerate projection: {}", msg),
            ViewConstantsError::DegenerateViewport(msg) => write!(f, "Degenerate viewport: {}", msg),
            ViewConstantsError::DegeneratePose(msg) => write!(f, "Degenerate pose: {}", msg),
        }
    }
}

impl std::error::Error for ViewConstantsError {}

/// Build a `ViewConstantsError` variant, log it at ERROR severity with the
/// caller's file:line, and evaluate to the error.
///
/// ```ignore
/// return Err(view_err!("view_constants::Projection", DegenerateProjection, "near ({}) >= far", near));
/// ```
#[macro_export]
macro_rules! view_err {
    ($source:expr, $kind:ident, $($arg:tt)*) => {{
        let error = $crate::view3d::ViewConstantsError::$kind(format!($($arg)*));
        $crate::view_error!($source, "{}", error);
        error
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
