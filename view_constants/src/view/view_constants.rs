/// ViewConstants — per-frame camera transform record.
///
/// Built once per frame (or once per jittered sub-frame) by the view setup code,
/// then shared read-only with every shading stage of that frame/pass. It is
/// never mutated: the next frame builds a new one.
///
/// Every inverse is computed here, once, and stored. Consumers must read the
/// stored inverse instead of re-deriving it so that all stages observe the
/// same bits.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3, Vec4};
use crate::config::ViewConstantsConfig;
use crate::error::ViewConstantsResult;
use super::jitter::{self, JitterSequence, RenderExtent};
use super::pose;
use super::projection::Projection;

const SOURCE: &str = "view_constants::ViewConstants";

/// Camera view and projection state for one frame/pass.
///
/// GPU layout: `#[repr(C)]`, six column-major 4x4 matrices (64 bytes each,
/// columns on 16-byte boundaries) followed by two `vec2`s packing the last
/// 16 bytes. 400 bytes in total, valid as a std140 or std430 block.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewConstants {
    view_to_clip: Mat4,
    clip_to_view: Mat4,
    view_to_sample: Mat4,
    sample_to_view: Mat4,
    world_to_view: Mat4,
    view_to_world: Mat4,
    sample_offset_pixels: Vec2,
    sample_offset_clip: Vec2,
}

const _: () = assert!(std::mem::size_of::<ViewConstants>() == 400);

/// Inputs for building a `ViewConstants`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewDesc {
    /// View-to-world rigid transform (the camera pose).
    pub pose: Mat4,
    pub projection: Projection,
    pub extent: RenderExtent,
    /// Sub-pixel jitter for this frame/pass. Zero for non-antialiased passes.
    pub sample_offset_pixels: Vec2,
}

impl ViewDesc {
    pub fn new(pose: impl Into<Mat4>, projection: impl Into<Projection>, extent: RenderExtent) -> Self {
        Self {
            pose: pose.into(),
            projection: projection.into(),
            extent,
            sample_offset_pixels: Vec2::ZERO,
        }
    }

    pub fn with_pixel_offset(mut self, offset_pixels: Vec2) -> Self {
        self.sample_offset_pixels = offset_pixels;
        self
    }

    /// Use sample `index` of `sequence` as the jitter.
    pub fn with_jitter_sample(self, sequence: &JitterSequence, index: u32) -> Self {
        self.with_pixel_offset(sequence.sample(index))
    }
}

impl ViewConstants {
    /// Build with the default configuration.
    pub fn new(desc: &ViewDesc) -> ViewConstantsResult<Self> {
        Self::with_config(desc, &ViewConstantsConfig::default())
    }

    /// Build a fully populated record from `desc`.
    ///
    /// The record is only returned once every pairwise inverse and the jitter
    /// relationship hold within `config.identity_tolerance`.
    ///
    /// # Errors
    ///
    /// - `ViewConstantsError::DegenerateProjection` if the projection is not
    ///   invertible in f32
    /// - `ViewConstantsError::DegeneratePose` if the pose is not a rigid transform
    /// - `ViewConstantsError::DegenerateViewport` if the extent has a zero
    ///   dimension, or the pixel offset is not finite or too large to invert
    pub fn with_config(desc: &ViewDesc, config: &ViewConstantsConfig) -> ViewConstantsResult<Self> {
        let view_to_clip = desc.projection.view_to_clip()?;

        pose::validate_rigid(&desc.pose, config.pose_tolerance)?;
        let view_to_world = desc.pose;
        let world_to_view = pose::rigid_inverse(&view_to_world);

        let sample_offset_pixels = desc.sample_offset_pixels;
        if !sample_offset_pixels.is_finite() {
            return Err(crate::view_err!(
                SOURCE,
                DegenerateViewport,
                "sample offset {} is not finite",
                sample_offset_pixels
            ));
        }
        let sample_offset_clip = jitter::pixel_offset_to_clip(sample_offset_pixels, desc.extent)?;
        if !sample_offset_clip.is_finite() {
            return Err(crate::view_err!(
                SOURCE,
                DegenerateViewport,
                "sample offset {} px overflows clip space on a {}x{} extent",
                sample_offset_pixels,
                desc.extent.width,
                desc.extent.height
            ));
        }

        let clip_to_view = view_to_clip.inverse();
        if !clip_to_view.is_finite() {
            return Err(crate::view_err!(
                SOURCE,
                DegenerateProjection,
                "clip-to-view inverse is not finite for {:?}",
                desc.projection
            ));
        }

        let (view_to_sample, sample_to_view) = if sample_offset_clip == Vec2::ZERO {
            (view_to_clip, clip_to_view)
        } else {
            let view_to_sample = clip_translation(sample_offset_clip) * view_to_clip;
            (view_to_sample, view_to_sample.inverse())
        };
        if !view_to_sample.is_finite() || !sample_to_view.is_finite() {
            return Err(crate::view_err!(
                SOURCE,
                DegenerateViewport,
                "jittered projection is not invertible in f32 for sample offset {} px",
                sample_offset_pixels
            ));
        }

        let constants = Self {
            view_to_clip,
            clip_to_view,
            view_to_sample,
            sample_to_view,
            world_to_view,
            view_to_world,
            sample_offset_pixels,
            sample_offset_clip,
        };

        if let Some(broken) = constants.broken_invariant(config.identity_tolerance) {
            let tolerance = config.identity_tolerance;
            return Err(match broken {
                Invariant::ClipInverse => crate::view_err!(
                    SOURCE,
                    DegenerateProjection,
                    "{} exceeds identity tolerance {}",
                    broken,
                    tolerance
                ),
                Invariant::PoseInverse => crate::view_err!(
                    SOURCE,
                    DegeneratePose,
                    "{} exceeds identity tolerance {}",
                    broken,
                    tolerance
                ),
                Invariant::SampleInverse | Invariant::SampleJitter => crate::view_err!(
                    SOURCE,
                    DegenerateViewport,
                    "{} exceeds identity tolerance {}",
                    broken,
                    tolerance
                ),
            });
        }

        crate::view_debug!(
            SOURCE,
            "Built view constants: extent {}x{}, sample offset {} px / {} clip",
            desc.extent.width,
            desc.extent.height,
            sample_offset_pixels,
            sample_offset_clip
        );

        Ok(constants)
    }

    // ===== GETTERS =====

    /// View space -> clip space (projection).
    pub fn view_to_clip(&self) -> &Mat4 {
        &self.view_to_clip
    }

    /// Inverse of `view_to_clip`.
    pub fn clip_to_view(&self) -> &Mat4 {
        &self.clip_to_view
    }

    /// View space -> jittered sample space.
    pub fn view_to_sample(&self) -> &Mat4 {
        &self.view_to_sample
    }

    /// Inverse of `view_to_sample`.
    pub fn sample_to_view(&self) -> &Mat4 {
        &self.sample_to_view
    }

    /// World space -> view space.
    pub fn world_to_view(&self) -> &Mat4 {
        &self.world_to_view
    }

    /// View space -> world space (the camera pose).
    pub fn view_to_world(&self) -> &Mat4 {
        &self.view_to_world
    }

    /// Jitter in pixels.
    pub fn sample_offset_pixels(&self) -> Vec2 {
        self.sample_offset_pixels
    }

    /// Jitter in clip-space units.
    pub fn sample_offset_clip(&self) -> Vec2 {
        self.sample_offset_clip
    }

    // ===== DERIVED READS =====

    pub fn eye_position(&self) -> Vec3 {
        (self.view_to_world * Vec4::new(0.0, 0.0, 0.0, 1.0)).truncate()
    }

    pub fn eye_direction(&self) -> Vec3 {
        (self.view_to_world * Vec4::new(0.0, 0.0, -1.0, 0.0))
            .truncate()
            .normalize()
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.view_to_clip.y_axis.y / self.view_to_clip.x_axis.x
    }

    /// World space -> clip space (projection * view).
    pub fn world_to_clip(&self) -> Mat4 {
        self.view_to_clip * self.world_to_view
    }

    /// World space -> jittered sample space.
    pub fn world_to_sample(&self) -> Mat4 {
        self.view_to_sample * self.world_to_view
    }

    /// Raw bytes for a GPU constant buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Check the pairwise inverse invariants and the jitter relationship.
    ///
    /// `tolerance` is relative: it is scaled by the magnitude of the
    /// matrices being multiplied.
    pub fn satisfies_invariants(&self, tolerance: f32) -> bool {
        self.broken_invariant(tolerance).is_none()
    }

    /// First relationship between the fields that does not hold.
    fn broken_invariant(&self, tolerance: f32) -> Option<Invariant> {
        if !is_inverse_pair(&self.view_to_clip, &self.clip_to_view, tolerance) {
            return Some(Invariant::ClipInverse);
        }
        if !is_inverse_pair(&self.view_to_sample, &self.sample_to_view, tolerance) {
            return Some(Invariant::SampleInverse);
        }
        if !is_inverse_pair(&self.world_to_view, &self.view_to_world, tolerance) {
            return Some(Invariant::PoseInverse);
        }

        let expected_sample = clip_translation(self.sample_offset_clip) * self.view_to_clip;
        let jitter_tolerance = tolerance * max_abs(&self.view_to_clip).max(1.0);
        if !expected_sample.abs_diff_eq(self.view_to_sample, jitter_tolerance) {
            return Some(Invariant::SampleJitter);
        }

        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Invariant {
    ClipInverse,
    SampleInverse,
    PoseInverse,
    SampleJitter,
}

impl std::fmt::Display for Invariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Invariant::ClipInverse => "clip_to_view * view_to_clip",
            Invariant::SampleInverse => "sample_to_view * view_to_sample",
            Invariant::PoseInverse => "view_to_world * world_to_view",
            Invariant::SampleJitter => "view_to_sample vs translated view_to_clip",
        };
        f.write_str(text)
    }
}

/// Pure clip-space XY translation.
fn clip_translation(offset_clip: Vec2) -> Mat4 {
    Mat4::from_translation(offset_clip.extend(0.0))
}

fn max_abs(m: &Mat4) -> f32 {
    m.to_cols_array().iter().fold(0.0f32, |acc, v| acc.max(v.abs()))
}

/// `inverse * forward` is the identity within a tolerance relative to the operands.
///
/// Operands too large for the scaled tolerance to be finite never pass.
pub(crate) fn is_inverse_pair(forward: &Mat4, inverse: &Mat4, tolerance: f32) -> bool {
    let scale = max_abs(forward).max(1.0) * max_abs(inverse).max(1.0);
    let bound = tolerance * scale;
    bound.is_finite() && (*inverse * *forward).abs_diff_eq(Mat4::IDENTITY, bound)
}

#[cfg(test)]
#[path = "view_constants_tests.rs"]
mod tests;
