/*!
# View Constants

Per-frame camera transform state for a real-time renderer.

A `ViewConstants` record carries every matrix a shading or post-processing
stage needs to move between world, view, clip and jittered sample space, plus
the sub-pixel jitter used for temporal antialiasing. It is built once per
frame/pass from a rigid camera pose, a projection and a render extent, and
is immutable afterwards.

## Architecture

- **Projection**: perspective/orthographic parameters and their view-to-clip matrix
- **CameraPose**: rigid view-to-world transform, validation and rigid inverse
- **JitterSequence**: Halton sub-pixel offsets and pixel-to-clip conversion
- **ViewConstants**: the record, its factory and its GPU byte layout
- **Reprojection**: current/previous frame clip-space mapping

## Conventions

Right-handed view space looking down -Z, clip +Y up, depth 0..1. Pixel
+Y points down, so a pixel jitter of `(x, y)` becomes `(2x / width, -2y / height)`
in clip space.
*/

mod config;
mod error;
pub mod log;
pub mod view;

// Main view3d namespace module
pub mod view3d {
    // Error types
    pub use crate::error::{ViewConstantsError, ViewConstantsResult};

    // Construction settings
    pub use crate::config::ViewConstantsConfig;

    // Core record and its inputs
    pub use crate::view::{
        CameraPose, JitterSequence, Orthographic, Perspective, Projection, RenderExtent,
        Reprojection, ViewConstants, ViewDesc,
    };

    // Logging sub-module (types and configuration, NOT macros)
    pub mod log {
        pub use crate::log::{
            format_entry, min_severity, reset_logger, set_logger, set_min_severity,
            DefaultLogger, LogEntry, LogSeverity, Logger,
        };
    }

    // Math helpers for poses and jitter
    pub mod math {
        pub use crate::view::{halton, pixel_offset_to_clip, rigid_inverse, validate_rigid};
    }
}

// Re-export math library at crate root
pub use glam;
