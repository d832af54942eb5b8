/// Camera pose — rigid view-to-world transform.
///
/// The pose is purely spatial; projection is handled separately by `Projection`.
/// Convention: camera forward is -Z, up is +Y, right is +X (right-handed).

use glam::{Mat3, Mat4, Quat, Vec3, Vec4};
use crate::error::ViewConstantsResult;

const SOURCE: &str = "view_constants::CameraPose";

/// Camera transform in world space (rotation + translation, no scale or shear).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl CameraPose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Creates a pose looking from `position` towards `target`.
    ///
    /// Falls back to +Y, then +X, as the reference up axis when `up` is
    /// parallel to the view direction.
    ///
    /// # Errors
    ///
    /// `ViewConstantsError::DegeneratePose` when `target` coincides with `position`.
    pub fn from_look_at(position: Vec3, target: Vec3, up: Vec3) -> ViewConstantsResult<Self> {
        let f = (target - position).normalize_or_zero();
        if f.length_squared() < 1e-8 {
            return Err(crate::view_err!(
                SOURCE,
                DegeneratePose,
                "look-at target equals position {}",
                position
            ));
        }

        // Camera -Z points towards the target.
        let z_axis = -f;
        let mut x_axis = up.cross(z_axis);
        if x_axis.length_squared() < 1e-8 {
            x_axis = Vec3::Y.cross(z_axis);
            if x_axis.length_squared() < 1e-8 {
                x_axis = Vec3::X.cross(z_axis);
            }
        }
        let x_axis = x_axis.normalize();
        let y_axis = z_axis.cross(x_axis).normalize();

        let rotation = Quat::from_mat3(&Mat3::from_cols(x_axis, y_axis, z_axis)).normalize();
        Ok(Self { position, rotation })
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// View->World matrix (T * R).
    pub fn view_to_world(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

impl From<CameraPose> for Mat4 {
    fn from(pose: CameraPose) -> Self {
        pose.view_to_world()
    }
}

/// Check that `matrix` is a proper rigid transform.
///
/// Requires finite elements, a bottom row of (0, 0, 0, 1), a rotation block
/// `R` with every element of `RᵀR - I` and `RRᵀ - I` within `tolerance`, and a determinant
/// of +1 (reflections are rejected).
///
/// `rigid_inverse` uses `Rᵀ` as the inverse rotation, so `tolerance` bounds
/// how far `pose * rigid_inverse(pose)` can drift from the identity.
pub fn validate_rigid(matrix: &Mat4, tolerance: f32) -> ViewConstantsResult<()> {
    if !matrix.is_finite() {
        return Err(crate::view_err!(SOURCE, DegeneratePose, "pose contains non-finite elements"));
    }

    let bottom = matrix.row(3);
    if !bottom.abs_diff_eq(Vec4::W, tolerance) {
        return Err(crate::view_err!(
            SOURCE,
            DegeneratePose,
            "pose bottom row is {}, expected (0, 0, 0, 1)",
            bottom
        ));
    }

    let r = Mat3::from_mat4(*matrix);
    let deviation = orthonormal_deviation(&r);
    if deviation > tolerance {
        return Err(crate::view_err!(
            SOURCE,
            DegeneratePose,
            "rotation block is {} away from orthonormal (scale or shear), tolerance {}",
            deviation,
            tolerance
        ));
    }

    let det = r.determinant();
    if (det - 1.0).abs() > tolerance * 3.0 {
        return Err(crate::view_err!(
            SOURCE,
            DegeneratePose,
            "rotation determinant is {}, expected +1",
            det
        ));
    }

    Ok(())
}

/// Largest element of `|RᵀR - I|` or `|RRᵀ - I|`.
fn orthonormal_deviation(r: &Mat3) -> f32 {
    let rt = r.transpose();
    [rt * *r, *r * rt]
        .iter()
        .flat_map(|gram| (*gram - Mat3::IDENTITY).to_cols_array())
        .fold(0.0f32, |acc, v| acc.max(v.abs()))
}

/// Inverse of a rigid transform: transposed rotation, translation `-R^T * t`.
///
/// Only valid for matrices accepted by `validate_rigid`.
pub fn rigid_inverse(matrix: &Mat4) -> Mat4 {
    let rt = Mat3::from_mat4(*matrix).transpose();
    let t = matrix.w_axis.truncate();
    Mat4::from_cols(
        rt.x_axis.extend(0.0),
        rt.y_axis.extend(0.0),
        rt.z_axis.extend(0.0),
        (-(rt * t)).extend(1.0),
    )
}

#[cfg(test)]
#[path = "pose_tests.rs"]
mod tests;
