use glam::{Mat4, Vec4};
use crate::error::ViewConstantsError;
use super::*;

fn hd_perspective() -> Perspective {
    Perspective::new(std::f32::consts::FRAC_PI_2, 16.0 / 9.0, 0.1, 100.0)
}

// ============================================================================
// Perspective
// ============================================================================

#[test]
fn test_perspective_matches_closed_form() {
    let p = hd_perspective();
    let m = Projection::from(p).view_to_clip().unwrap();

    let f = 1.0 / (0.5 * p.fov_y).tan();
    let r = p.far / (p.near - p.far);
    let expected = Mat4::from_cols(
        Vec4::new(f / p.aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, f, 0.0, 0.0),
        Vec4::new(0.0, 0.0, r, -1.0),
        Vec4::new(0.0, 0.0, r * p.near, 0.0),
    );

    assert!(m.abs_diff_eq(expected, 1e-6), "got {:?}", m);
}

#[test]
fn test_perspective_depth_range() {
    let m = hd_perspective().matrix();

    let near = m * Vec4::new(0.0, 0.0, -0.1, 1.0);
    let far = m * Vec4::new(0.0, 0.0, -100.0, 1.0);

    assert!((near.z / near.w).abs() < 1e-6);
    assert!((far.z / far.w - 1.0).abs() < 1e-5);
}

#[test]
fn test_perspective_clip_y_up() {
    let m = hd_perspective().matrix();
    let clip = m * Vec4::new(0.0, 1.0, -5.0, 1.0);
    assert!(clip.y / clip.w > 0.0);
}

#[test]
fn test_perspective_zero_fov_is_degenerate() {
    let p = Perspective::new(0.0, 16.0 / 9.0, 0.1, 100.0);
    assert!(matches!(p.validate(), Err(ViewConstantsError::DegenerateProjection(_))));
    assert!(matches!(
        Projection::from(p).view_to_clip(),
        Err(ViewConstantsError::DegenerateProjection(_))
    ));
}

#[test]
fn test_perspective_straight_angle_fov_is_degenerate() {
    let p = Perspective::new(std::f32::consts::PI, 1.0, 0.1, 100.0);
    assert!(matches!(p.validate(), Err(ViewConstantsError::DegenerateProjection(_))));
}

#[test]
fn test_perspective_near_not_positive_is_degenerate() {
    assert!(Perspective::new(1.0, 1.0, 0.0, 100.0).validate().is_err());
    assert!(Perspective::new(1.0, 1.0, -1.0, 100.0).validate().is_err());
}

#[test]
fn test_perspective_near_not_before_far_is_degenerate() {
    let err = Perspective::new(1.0, 1.0, 10.0, 10.0).validate().unwrap_err();
    assert!(matches!(err, ViewConstantsError::DegenerateProjection(ref msg) if msg.contains("far")));
    assert!(Perspective::new(1.0, 1.0, 10.0, 1.0).validate().is_err());
}

#[test]
fn test_perspective_bad_aspect_or_nan_is_degenerate() {
    assert!(Perspective::new(1.0, 0.0, 0.1, 100.0).validate().is_err());
    assert!(Perspective::new(f32::NAN, 1.0, 0.1, 100.0).validate().is_err());
    assert!(Perspective::new(1.0, 1.0, 0.1, f32::INFINITY).validate().is_err());
}

#[test]
fn test_perspective_subnormal_fov_overflows_to_degenerate() {
    // In range, but 1 / tan(fov / 2) overflows f32.
    let p = Perspective::new(1e-40, 16.0 / 9.0, 0.1, 100.0);
    assert!(p.validate().is_ok());
    assert!(!p.matrix().is_finite());

    let err = Projection::from(p).view_to_clip().unwrap_err();
    assert!(matches!(err, ViewConstantsError::DegenerateProjection(ref msg) if msg.contains("overflows")));
}

#[test]
fn test_perspective_determinant_overflow_is_degenerate() {
    // Finite elements, but their product overflows.
    let p = Perspective::new(1e-20, 1.0, 0.1, 100.0);
    assert!(p.matrix().is_finite());
    assert!(matches!(
        Projection::from(p).view_to_clip(),
        Err(ViewConstantsError::DegenerateProjection(_))
    ));
}

#[test]
fn test_orthographic_determinant_underflow_is_degenerate() {
    let o = Orthographic::new(1e30, 1.0, -1e30, 1e30);
    assert!(matches!(
        Projection::from(o).view_to_clip(),
        Err(ViewConstantsError::DegenerateProjection(_))
    ));
}

// ============================================================================
// Orthographic
// ============================================================================

#[test]
fn test_orthographic_maps_extents_to_unit_square() {
    let o = Orthographic::new(5.0, 2.0, 0.1, 50.0);
    let m = Projection::from(o).view_to_clip().unwrap();

    let corner = m * Vec4::new(10.0, 5.0, -0.1, 1.0);
    assert!(corner.abs_diff_eq(Vec4::new(1.0, 1.0, 0.0, 1.0), 1e-6));

    let far = m * Vec4::new(-10.0, -5.0, -50.0, 1.0);
    assert!(far.abs_diff_eq(Vec4::new(-1.0, -1.0, 1.0, 1.0), 1e-5));
}

#[test]
fn test_orthographic_zero_extent_is_degenerate() {
    assert!(matches!(
        Orthographic::new(0.0, 1.0, 0.1, 10.0).validate(),
        Err(ViewConstantsError::DegenerateProjection(_))
    ));
    assert!(Orthographic::new(1.0, 0.0, 0.1, 10.0).validate().is_err());
    assert!(Orthographic::new(1.0, 1.0, 3.0, 3.0).validate().is_err());
}

#[test]
fn test_orthographic_allows_negative_near() {
    assert!(Orthographic::new(1.0, 1.0, -10.0, 10.0).validate().is_ok());
}

// ============================================================================
// Projection helpers
// ============================================================================

#[test]
fn test_set_aspect_from_extent() {
    let mut projection = Projection::from(Perspective::new(1.0, 1.0, 0.1, 100.0));
    projection.set_aspect_from_extent(RenderExtent::new(1920, 1080));

    match projection {
        Projection::Perspective(p) => assert!((p.aspect - 16.0 / 9.0).abs() < 1e-6),
        Projection::Orthographic(_) => panic!("variant changed"),
    }
}

#[test]
fn test_near_far_and_kind() {
    let persp = Projection::from(hd_perspective());
    assert_eq!(persp.near_far(), (0.1, 100.0));
    assert!(persp.is_perspective());

    let ortho = Projection::from(Orthographic::new(1.0, 1.0, -1.0, 1.0));
    assert_eq!(ortho.near_far(), (-1.0, 1.0));
    assert!(!ortho.is_perspective());
}
