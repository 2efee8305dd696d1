//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and the validated configuration snapshot.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_weld_tolerance_is_positive() {
    assert!(WELD_TOLERANCE > 0.0, "WELD_TOLERANCE must be positive");
}

#[test]
fn test_degenerate_epsilon_smaller_than_weld_tolerance() {
    assert!(
        DEGENERATE_AREA_EPSILON < WELD_TOLERANCE,
        "DEGENERATE_AREA_EPSILON should be below WELD_TOLERANCE"
    );
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_sphere_resolution() {
    assert_eq!(SPHERE_LAT_SEGMENTS, 16);
    assert_eq!(SPHERE_LON_SEGMENTS, 32);
}

#[test]
fn test_cylinder_resolution() {
    assert_eq!(CYLINDER_SEGMENTS, 16);
    assert!(CYLINDER_SEGMENTS >= MIN_SEGMENTS);
}

// =============================================================================
// SHAPE SIZE TESTS
// =============================================================================

#[test]
fn test_shape_sizes_are_ordered() {
    assert!(SMALL_SHAPE_SIZE < DEFAULT_SHAPE_SIZE);
    assert!(DEFAULT_SHAPE_SIZE < LARGE_SHAPE_SIZE);
    assert!(SMALL_SHAPE_SIZE > 0.0);
}

// =============================================================================
// GLOBAL CONFIG TESTS
// =============================================================================

#[test]
fn test_default_config_uses_constants() {
    let cfg = GlobalConfig::default();
    assert_eq!(cfg.weld_tolerance, WELD_TOLERANCE);
    assert_eq!(cfg.degenerate_area_epsilon, DEGENERATE_AREA_EPSILON);
}

#[test]
fn test_config_accepts_zero_tolerance() {
    let cfg = GlobalConfig::new(0.0, 0.0).unwrap();
    assert_eq!(cfg.weld_tolerance, 0.0);
}

#[test]
fn test_config_rejects_invalid_values() {
    assert_eq!(
        GlobalConfig::new(-1.0, 1e-10).unwrap_err(),
        ConfigError::InvalidWeldTolerance(-1.0)
    );
    assert_eq!(
        GlobalConfig::new(1e-6, -0.5).unwrap_err(),
        ConfigError::InvalidAreaEpsilon(-0.5)
    );
    assert!(GlobalConfig::new(f64::NAN, 1e-10).is_err());
    assert!(GlobalConfig::new(1e-6, f64::INFINITY).is_err());
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidWeldTolerance(-2.0);
    assert!(err.to_string().contains("weld tolerance"));
    assert!(err.to_string().contains("-2"));
}
