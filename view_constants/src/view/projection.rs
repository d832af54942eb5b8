/// Projection — the lens half of a view.
///
/// Clip convention used everywhere in this crate:
/// - Right-handed view space, camera looks down -Z, +Y up.
/// - Clip +Y up (no Y flip baked into the matrix).
/// - Depth mapped to 0..1.

use glam::Mat4;
use crate::error::ViewConstantsResult;
use super::jitter::RenderExtent;

const SOURCE: &str = "view_constants::Projection";

/// Camera projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective(Perspective),
    Orthographic(Orthographic),
}

impl Projection {
    /// Check that the parameters describe a non-degenerate frustum.
    ///
    /// # Errors
    ///
    /// `ViewConstantsError::DegenerateProjection` when the parameters are out
    /// of range. Parameters in range can still overflow f32; `view_to_clip()`
    /// checks the built matrix as well.
    pub fn validate(&self) -> ViewConstantsResult<()> {
        match self {
            Self::Perspective(p) => p.validate(),
            Self::Orthographic(o) => o.validate(),
        }
    }

    /// View-to-clip matrix. Validates the parameters, then rejects a built
    /// matrix that is non-finite or has a zero or non-finite determinant.
    pub fn view_to_clip(&self) -> ViewConstantsResult<Mat4> {
        self.validate()?;
        let matrix = match self {
            Self::Perspective(p) => p.matrix(),
            Self::Orthographic(o) => o.matrix(),
        };

        if !matrix.is_finite() {
            return Err(crate::view_err!(
                SOURCE,
                DegenerateProjection,
                "view-to-clip matrix overflows f32 for {:?}",
                self
            ));
        }
        let det = matrix.determinant();
        if !det.is_finite() || det == 0.0 {
            return Err(crate::view_err!(
                SOURCE,
                DegenerateProjection,
                "view-to-clip determinant is {} for {:?}",
                det,
                self
            ));
        }

        Ok(matrix)
    }

    /// Match the aspect ratio to a render extent.
    pub fn set_aspect_from_extent(&mut self, extent: RenderExtent) {
        let aspect = extent.aspect();
        match self {
            Self::Perspective(p) => p.aspect = aspect,
            Self::Orthographic(o) => o.aspect = aspect,
        }
    }

    pub fn near_far(&self) -> (f32, f32) {
        match self {
            Self::Perspective(p) => (p.near, p.far),
            Self::Orthographic(o) => (o.near, o.far),
        }
    }

    pub fn is_perspective(&self) -> bool {
        matches!(self, Self::Perspective(_))
    }
}

impl From<Perspective> for Projection {
    fn from(p: Perspective) -> Self {
        Self::Perspective(p)
    }
}

impl From<Orthographic> for Projection {
    fn from(o: Orthographic) -> Self {
        Self::Orthographic(o)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    /// Vertical FOV in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Perspective {
    /// Stores the parameters as given. Degenerate values are reported by
    /// `validate()`, never clamped.
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self { fov_y, aspect, near, far }
    }

    pub fn validate(&self) -> ViewConstantsResult<()> {
        let all_finite = [self.fov_y, self.aspect, self.near, self.far]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(crate::view_err!(
                SOURCE,
                DegenerateProjection,
                "non-finite perspective parameters {:?}",
                self
            ));
        }
        if self.fov_y <= 0.0 || self.fov_y >= std::f32::consts::PI {
            return Err(crate::view_err!(
                SOURCE,
                DegenerateProjection,
                "fov_y must be in (0, pi), got {}",
                self.fov_y
            ));
        }
        if self.aspect <= 0.0 {
            return Err(crate::view_err!(
                SOURCE,
                DegenerateProjection,
                "aspect must be positive, got {}",
                self.aspect
            ));
        }
        if self.near <= 0.0 {
            return Err(crate::view_err!(
                SOURCE,
                DegenerateProjection,
                "near must be positive, got {}",
                self.near
            ));
        }
        if self.near >= self.far {
            return Err(crate::view_err!(
                SOURCE,
                DegenerateProjection,
                "near ({}) must be less than far ({})",
                self.near,
                self.far
            ));
        }
        Ok(())
    }

    /// RH perspective, Z: 0..1, no Y flip.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orthographic {
    /// Half-height in view-space units.
    pub half_height: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Orthographic {
    pub fn new(half_height: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self { half_height, aspect, near, far }
    }

    pub fn validate(&self) -> ViewConstantsResult<()> {
        let all_finite = [self.half_height, self.aspect, self.near, self.far]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(crate::view_err!(
                SOURCE,
                DegenerateProjection,
                "non-finite orthographic parameters {:?}",
                self
            ));
        }
        if self.half_height <= 0.0 {
            return Err(crate::view_err!(
                SOURCE,
                DegenerateProjection,
                "half_height must be positive, got {}",
                self.half_height
            ));
        }
        if self.aspect <= 0.0 {
            return Err(crate::view_err!(
                SOURCE,
                DegenerateProjection,
                "aspect must be positive, got {}",
                self.aspect
            ));
        }
        if self.near == self.far {
            return Err(crate::view_err!(
                SOURCE,
                DegenerateProjection,
                "zero depth extent (near = far = {})",
                self.near
            ));
        }
        Ok(())
    }

    /// RH orthographic, Z: 0..1, no Y flip.
    pub fn matrix(&self) -> Mat4 {
        let hh = self.half_height;
        let hw = hh * self.aspect;
        Mat4::orthographic_rh(-hw, hw, -hh, hh, self.near, self.far)
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
