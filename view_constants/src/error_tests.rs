//! Unit tests for error.rs
//!
//! Tests all ViewConstantsError variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{ViewConstantsError, ViewConstantsResult};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_degenerate_projection_display() {
    let err = ViewConstantsError::DegenerateProjection("fov_y must be in (0, pi), got 0".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Degenerate projection"));
    assert!(display.contains("fov_y must be in (0, pi), got 0"));
}

#[test]
fn test_degenerate_viewport_display() {
    let err = ViewConstantsError::DegenerateViewport("extent 0x1080".to_string());
    let display = format!("{}", err);
    assert_eq!(display, "Degenerate viewport: extent 0x1080");
}

#[test]
fn test_degenerate_pose_display() {
    let err = ViewConstantsError::DegeneratePose("rotation block is not orthonormal".to_string());
    let display = format!("{}", err);
    assert!(display.starts_with("Degenerate pose: "));
    assert!(display.contains("orthonormal"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = ViewConstantsError::DegenerateViewport("zero".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug1 = format!("{:?}", ViewConstantsError::DegenerateProjection("a".to_string()));
    assert!(debug1.contains("DegenerateProjection"));

    let debug2 = format!("{:?}", ViewConstantsError::DegenerateViewport("b".to_string()));
    assert!(debug2.contains("DegenerateViewport"));

    let debug3 = format!("{:?}", ViewConstantsError::DegeneratePose("c".to_string()));
    assert!(debug3.contains("DegeneratePose"));
}

#[test]
fn test_error_clone_and_eq() {
    let err1 = ViewConstantsError::DegeneratePose("scale".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, ViewConstantsError::DegeneratePose("shear".to_string()));
    assert_ne!(err1, ViewConstantsError::DegenerateProjection("scale".to_string()));
}

// ============================================================================
// RESULT TYPE
// ============================================================================

#[test]
fn test_result_propagation() {
    fn inner() -> ViewConstantsResult<u32> {
        Err(ViewConstantsError::DegenerateViewport("0x0".to_string()))
    }

    fn outer() -> ViewConstantsResult<u32> {
        let value = inner()?;
        Ok(value + 1)
    }

    match outer() {
        Err(ViewConstantsError::DegenerateViewport(msg)) => assert_eq!(msg, "0x0"),
        other => panic!("unexpected result: {:?}", other),
    }
}
