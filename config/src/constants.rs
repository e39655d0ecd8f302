//! # Configuration Constants
//!
//! Centralized constants for the sweep kernel. Geometry tolerances, loft
//! limits and sculpture preset defaults are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Limits**: Slice and profile bounds
//! - **Presets**: Default parameters of the sculpture generators

use std::fmt;
use std::ops::RangeInclusive;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for the closure check of looping sweeps.
///
/// The last slice of a closed loft must coincide with the first slice
/// within this distance, scaled by the size of the cross-section when the
/// cross-section is larger than one unit.
///
/// # Example
///
/// ```rust
/// use config::constants::CLOSURE_TOLERANCE;
///
/// let extent: f64 = 30.0;
/// let allowed = CLOSURE_TOLERANCE * extent.max(1.0);
/// assert!(allowed < 1e-4);
/// ```
pub const CLOSURE_TOLERANCE: f64 = 1e-6;

/// Minimum distance between consecutive profile points.
///
/// Points closer than this are considered coincident and make a profile
/// invalid.
pub const POINT_MERGE_EPSILON: f64 = 1e-9;

/// Minimum absolute doubled area for a triangle to count as non-degenerate
/// during ear clipping and area checks.
pub const AREA_EPSILON: f64 = 1e-12;

/// Minimum cosine between the sweep direction and the profile plane normal
/// for the pair to decide the winding of the side wall.
///
/// Pairs below this value sweep (almost) inside the profile plane and are
/// skipped when choosing the winding sign.
pub const WINDING_COSINE_EPSILON: f64 = 1e-6;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of slices in a loft (start and end).
pub const MIN_SLICES: usize = 2;

/// Maximum number of slices per traversal.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_SLICES, MIN_SLICES};
///
/// let requested = 121;
/// assert!((MIN_SLICES..=MAX_SLICES).contains(&requested));
/// ```
pub const MAX_SLICES: usize = 100_000;

/// Minimum number of points in a profile.
pub const MIN_PROFILE_POINTS: usize = 3;

/// Maximum number of points in a profile.
pub const MAX_PROFILE_POINTS: usize = 100_000;

/// Maximum number of triangles a single loft may produce.
///
/// Checked before any buffer is allocated.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// TWISTED COLUMN PRESET
// =============================================================================

/// Default column height in millimetres.
pub const COLUMN_HEIGHT: f64 = 100.0;

/// Default number of slices along the column.
pub const COLUMN_SLICES: usize = 80;

/// Default total twist of the column in degrees.
pub const COLUMN_TWIST_DEGREES: f64 = 180.0;

/// Default ratio of the top cross-section size to the base size.
pub const COLUMN_TOP_SCALE: f64 = 0.3;

/// Default lateral wave amplitude in millimetres.
pub const COLUMN_WAVE_AMPLITUDE: f64 = 0.0;

/// Default number of lateral wave cycles over the column height.
pub const COLUMN_WAVE_FREQUENCY: f64 = 2.0;

/// Radius of the circle and hexagon base shapes.
pub const COLUMN_CIRCLE_RADIUS: f64 = 20.0;

/// Segment count of the circle base shape.
pub const COLUMN_CIRCLE_SEGMENTS: u32 = 32;

/// Edge length of the square base shape.
pub const COLUMN_SQUARE_SIZE: f64 = 35.0;

/// Outer radius of the star base shape.
pub const COLUMN_STAR_OUTER_RADIUS: f64 = 22.0;

/// Inner radius of the star base shape.
pub const COLUMN_STAR_INNER_RADIUS: f64 = 12.0;

/// Number of star tips.
pub const COLUMN_STAR_POINTS: u32 = 5;

/// Accepted column heights.
pub const COLUMN_HEIGHT_RANGE: RangeInclusive<f64> = 50.0..=200.0;

/// Accepted column slice counts.
pub const COLUMN_SLICES_RANGE: RangeInclusive<usize> = 20..=150;

/// Accepted column twists in degrees.
pub const COLUMN_TWIST_RANGE: RangeInclusive<f64> = 0.0..=720.0;

/// Accepted top scale ratios.
pub const COLUMN_TOP_SCALE_RANGE: RangeInclusive<f64> = 0.1..=2.0;

/// Accepted wave amplitudes.
pub const COLUMN_WAVE_AMPLITUDE_RANGE: RangeInclusive<f64> = 0.0..=20.0;

/// Accepted wave frequencies.
pub const COLUMN_WAVE_FREQUENCY_RANGE: RangeInclusive<f64> = 1.0..=8.0;

// =============================================================================
// TOPOLOGICAL FORMS PRESET
// =============================================================================

/// Default main radius of looping surfaces in millimetres.
pub const FORM_RADIUS: f64 = 40.0;

/// Default strip width in millimetres.
pub const FORM_WIDTH: f64 = 15.0;

/// Default strip thickness in millimetres.
pub const FORM_THICKNESS: f64 = 2.0;

/// Default number of segments around one traversal.
pub const FORM_SEGMENTS: usize = 120;

/// Default number of half-twists of the Möbius strip.
pub const FORM_TWISTS: u32 = 1;

/// Accepted main radii.
pub const FORM_RADIUS_RANGE: RangeInclusive<f64> = 20.0..=80.0;

/// Accepted strip widths.
pub const FORM_WIDTH_RANGE: RangeInclusive<f64> = 5.0..=30.0;

/// Accepted strip thicknesses.
pub const FORM_THICKNESS_RANGE: RangeInclusive<f64> = 1.0..=5.0;

/// Accepted segment counts.
pub const FORM_SEGMENTS_RANGE: RangeInclusive<usize> = 40..=200;

/// Accepted half-twist counts.
pub const FORM_TWISTS_RANGE: RangeInclusive<u32> = 1..=5;

// =============================================================================
// MODULAR UNITS PRESET
// =============================================================================

/// Default base size of a modular tile in millimetres.
pub const TILE_SIZE: f64 = 40.0;

/// Default tile height in millimetres.
pub const TILE_HEIGHT: f64 = 20.0;

/// Number of slices used by the tile sweeps.
pub const TILE_SLICES: usize = 20;

/// Wave amplitude as a fraction of the tile height.
pub const TILE_WAVE_AMPLITUDE_RATIO: f64 = 0.2;

/// Number of wave cycles per tile period.
pub const TILE_WAVE_CYCLES: f64 = 4.0;

/// Anisotropic scale skew of the saddle tile at either end.
pub const TILE_SADDLE_SKEW: f64 = 0.3;

/// Twist of the twisted block unit in degrees.
pub const TILE_BLOCK_TWIST_DEGREES: f64 = 45.0;

/// Twist steps of the twisted block unit.
pub const TILE_BLOCK_STEPS: usize = 20;

/// Gap between units of the 3×3 array in millimetres.
pub const TILE_ARRAY_GAP: f64 = 2.0;

/// Accepted tile sizes.
pub const TILE_SIZE_RANGE: RangeInclusive<f64> = 20.0..=80.0;

/// Accepted tile heights.
pub const TILE_HEIGHT_RANGE: RangeInclusive<f64> = 10.0..=50.0;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the tolerances used by the loft engine.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.closure_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Closure tolerance for looping sweeps.
    pub closure_tolerance: f64,
    /// Minimum spacing between consecutive profile points.
    pub point_tolerance: f64,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting non-positive or non-finite
    /// tolerances.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-5, 1.0e-9).expect("valid config");
    /// assert_eq!(cfg.closure_tolerance, 1.0e-5);
    /// ```
    pub fn new(closure_tolerance: f64, point_tolerance: f64) -> Result<Self, ConfigError> {
        if !(closure_tolerance.is_finite() && closure_tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(closure_tolerance));
        }
        if !(point_tolerance.is_finite() && point_tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(point_tolerance));
        }
        Ok(Self {
            closure_tolerance,
            point_tolerance,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            closure_tolerance: CLOSURE_TOLERANCE,
            point_tolerance: POINT_MERGE_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Scales the closure tolerance to the size of a cross-section.
///
/// Cross-sections smaller than one unit use the raw tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::{scaled_closure_tolerance, CLOSURE_TOLERANCE};
///
/// assert_eq!(scaled_closure_tolerance(CLOSURE_TOLERANCE, 0.5), CLOSURE_TOLERANCE);
/// assert_eq!(scaled_closure_tolerance(CLOSURE_TOLERANCE, 40.0), CLOSURE_TOLERANCE * 40.0);
/// ```
#[inline]
pub fn scaled_closure_tolerance(tolerance: f64, extent: f64) -> f64 {
    tolerance * extent.max(1.0)
}
