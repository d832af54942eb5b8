//! View module — camera pose, projection, jitter and the per-frame view constants.
//!
//! Everything here is a passive value. Construction validates its inputs once;
//! the resulting `ViewConstants` is immutable and freely shared across threads.

mod jitter;
mod pose;
mod projection;
mod reprojection;
mod view_constants;

pub use jitter::{halton, pixel_offset_to_clip, JitterSequence, RenderExtent};
pub use pose::{rigid_inverse, validate_rigid, CameraPose};
pub use projection::{Orthographic, Perspective, Projection};
pub use reprojection::Reprojection;
pub use view_constants::{ViewConstants, ViewDesc};
