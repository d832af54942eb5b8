/// Jitter — sub-pixel sample offsets for temporal antialiasing.
///
/// Pixel space: origin at the top-left corner of the image, +X right, +Y down.
/// Clip space: +X right, +Y up. Converting a pixel offset to clip space therefore
/// scales by `2 / extent` and flips the vertical component.

use glam::Vec2;
use crate::error::ViewConstantsResult;

/// Render target resolution in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderExtent {
    pub width: u32,
    pub height: u32,
}

impl RenderExtent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// # Errors
    ///
    /// `ViewConstantsError::DegenerateViewport` when either dimension is zero.
    pub fn validate(&self) -> ViewConstantsResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(crate::view_err!(
                "view_constants::RenderExtent",
                DegenerateViewport,
                "render extent {}x{} has a zero dimension",
                self.width,
                self.height
            ));
        }
        Ok(())
    }

    /// Width over height. Zero dimensions are treated as one.
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Convert a pixel-space offset into clip-space units for `extent`.
///
/// `(2 * px.x / width, -2 * px.y / height)`.
pub fn pixel_offset_to_clip(offset_pixels: Vec2, extent: RenderExtent) -> ViewConstantsResult<Vec2> {
    extent.validate()?;
    let scale = Vec2::new(2.0, -2.0) / extent.as_vec2();
    Ok(offset_pixels * scale)
}

/// Radical inverse of `index` in `base` (one Halton dimension).
pub fn halton(mut index: u32, base: u32) -> f32 {
    let mut result = 0.0f32;
    let mut f = 1.0 / base as f32;

    while index > 0 {
        result += f * (index % base) as f32;
        index /= base;
        f /= base as f32;
    }

    result
}

/// Repeating Halton(2, 3) jitter pattern, in pixels, centered on the pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JitterSequence {
    /// Period of the pattern. Zero disables jitter.
    pub sample_count: u32,
}

impl Default for JitterSequence {
    fn default() -> Self {
        Self { sample_count: 16 }
    }
}

impl JitterSequence {
    pub fn new(sample_count: u32) -> Self {
        Self { sample_count }
    }

    /// A sequence that always yields a zero offset.
    pub fn disabled() -> Self {
        Self { sample_count: 0 }
    }

    /// Pixel offset for `index` (wrapped to the period), each component in [-0.5, 0.5).
    pub fn sample(&self, index: u32) -> Vec2 {
        if self.sample_count == 0 {
            return Vec2::ZERO;
        }
        // Halton index 0 is (0, 0) in every base; start at 1.
        let i = index % self.sample_count + 1;
        Vec2::new(halton(i, 2), halton(i, 3)) - Vec2::splat(0.5)
    }

    /// Pixel offsets for one full period.
    pub fn samples(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.sample_count).map(move |i| self.sample(i))
    }
}

#[cfg(test)]
#[path = "jitter_tests.rs"]
mod tests;
