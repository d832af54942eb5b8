/// Reprojection — pairs the current frame's view constants with the previous
/// frame's, for motion vectors and history reprojection.
///
/// Both records are supplied by the caller; no history is kept here. Only the
/// stored matrices are used, never locally re-derived inverses.

use glam::{Mat4, Vec2, Vec3, Vec4};
use super::view_constants::ViewConstants;

/// Current clip space -> previous clip space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reprojection {
    clip_to_prev_clip: Mat4,
}

impl Reprojection {
    pub fn new(current: &ViewConstants, previous: &ViewConstants) -> Self {
        let clip_to_prev_clip = *previous.view_to_clip()
            * *previous.world_to_view()
            * *current.view_to_world()
            * *current.clip_to_view();

        Self { clip_to_prev_clip }
    }

    pub fn clip_to_prev_clip(&self) -> &Mat4 {
        &self.clip_to_prev_clip
    }

    /// Map a current-frame clip position to the previous frame's clip space.
    pub fn reproject_clip(&self, clip: Vec4) -> Vec4 {
        self.clip_to_prev_clip * clip
    }

    /// Screen-space motion of a static point at current NDC `ndc`:
    /// previous NDC xy minus current NDC xy.
    pub fn motion_vector_ndc(&self, ndc: Vec3) -> Vec2 {
        let prev = self.reproject_clip(ndc.extend(1.0));
        prev.truncate().truncate() / prev.w - ndc.truncate()
    }
}

#[cfg(test)]
#[path = "reprojection_tests.rs"]
mod tests;
