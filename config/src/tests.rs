//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_closure_tolerance_matches_unit_scale() {
    // Closed sweeps must coincide within 1e-6 of the unit scale
    assert_eq!(CLOSURE_TOLERANCE, 1e-6);
}

#[test]
fn test_point_merge_epsilon_below_closure_tolerance() {
    assert!(
        POINT_MERGE_EPSILON < CLOSURE_TOLERANCE,
        "coincident-point tolerance should be tighter than closure tolerance"
    );
}

#[test]
fn test_scaled_closure_tolerance_never_shrinks() {
    assert_eq!(scaled_closure_tolerance(1e-6, 0.0), 1e-6);
    assert_eq!(scaled_closure_tolerance(1e-6, 0.25), 1e-6);
    assert!((scaled_closure_tolerance(1e-6, 30.0) - 3e-5).abs() < 1e-18);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_min_slices_is_start_and_end() {
    assert_eq!(MIN_SLICES, 2);
}

#[test]
fn test_profile_limits_form_polygon() {
    // A polygon needs at least 3 points
    assert!(MIN_PROFILE_POINTS >= 3);
    assert!(MAX_PROFILE_POINTS > MIN_PROFILE_POINTS);
}

#[test]
fn test_max_triangles_reasonable() {
    assert!(MAX_TRIANGLES >= 1_000_000);
}

// =============================================================================
// PRESET TESTS
// =============================================================================

#[test]
fn test_star_inner_radius_inside_outer() {
    assert!(COLUMN_STAR_INNER_RADIUS < COLUMN_STAR_OUTER_RADIUS);
}

#[test]
fn test_form_radius_clears_strip_offset() {
    // The Möbius centre line is offset by width / 4 and must stay off the axis
    assert!(FORM_RADIUS > FORM_WIDTH / 4.0);
}

#[test]
fn test_saddle_skew_keeps_scale_positive() {
    assert!(TILE_SADDLE_SKEW > 0.0 && TILE_SADDLE_SKEW < 1.0);
}

#[test]
fn test_column_top_scale_positive() {
    assert!(COLUMN_TOP_SCALE > 0.0);
}

// =============================================================================
// GLOBAL CONFIG TESTS
// =============================================================================

#[test]
fn test_global_config_default() {
    let cfg = GlobalConfig::default();
    assert_eq!(cfg.closure_tolerance, CLOSURE_TOLERANCE);
    assert_eq!(cfg.point_tolerance, POINT_MERGE_EPSILON);
}

#[test]
fn test_global_config_rejects_zero_tolerance() {
    assert_eq!(
        GlobalConfig::new(0.0, 1e-9),
        Err(ConfigError::InvalidTolerance(0.0))
    );
}

#[test]
fn test_global_config_rejects_nan_tolerance() {
    assert!(GlobalConfig::new(1e-6, f64::NAN).is_err());
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidTolerance(-1.0);
    assert!(err.to_string().contains("-1"));
}

// =============================================================================
// RANGE TESTS
// =============================================================================

#[test]
fn test_preset_defaults_inside_ranges() {
    assert!(COLUMN_HEIGHT_RANGE.contains(&COLUMN_HEIGHT));
    assert!(COLUMN_SLICES_RANGE.contains(&COLUMN_SLICES));
    assert!(COLUMN_TWIST_RANGE.contains(&COLUMN_TWIST_DEGREES));
    assert!(COLUMN_TOP_SCALE_RANGE.contains(&COLUMN_TOP_SCALE));
    assert!(COLUMN_WAVE_AMPLITUDE_RANGE.contains(&COLUMN_WAVE_AMPLITUDE));
    assert!(COLUMN_WAVE_FREQUENCY_RANGE.contains(&COLUMN_WAVE_FREQUENCY));
    assert!(FORM_RADIUS_RANGE.contains(&FORM_RADIUS));
    assert!(FORM_WIDTH_RANGE.contains(&FORM_WIDTH));
    assert!(FORM_THICKNESS_RANGE.contains(&FORM_THICKNESS));
    assert!(FORM_SEGMENTS_RANGE.contains(&FORM_SEGMENTS));
    assert!(FORM_TWISTS_RANGE.contains(&FORM_TWISTS));
    assert!(TILE_SIZE_RANGE.contains(&TILE_SIZE));
    assert!(TILE_HEIGHT_RANGE.contains(&TILE_HEIGHT));
}

#[test]
fn test_form_ranges_keep_strip_clear_of_axis() {
    // smallest radius against the widest strip
    assert!(*FORM_RADIUS_RANGE.start() > *FORM_WIDTH_RANGE.end() / 4.0);
}
