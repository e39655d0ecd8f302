//! # Twisted Column
//!
//! A base shape rising, twisting and tapering along Z, optionally swaying.

use crate::error::{check_range, Result};
use config::constants::{
    COLUMN_CIRCLE_RADIUS, COLUMN_CIRCLE_SEGMENTS, COLUMN_HEIGHT, COLUMN_HEIGHT_RANGE,
    COLUMN_SLICES, COLUMN_SLICES_RANGE, COLUMN_SQUARE_SIZE, COLUMN_STAR_INNER_RADIUS,
    COLUMN_STAR_OUTER_RADIUS, COLUMN_STAR_POINTS, COLUMN_TOP_SCALE, COLUMN_TOP_SCALE_RANGE,
    COLUMN_TWIST_DEGREES, COLUMN_TWIST_RANGE, COLUMN_WAVE_AMPLITUDE, COLUMN_WAVE_AMPLITUDE_RANGE,
    COLUMN_WAVE_FREQUENCY, COLUMN_WAVE_FREQUENCY_RANGE,
};
use serde::{Deserialize, Serialize};
use slice_loft::{loft_mesh, Mesh, Profile};
use sweep_transforms::TwistColumn;
use tracing::debug;

/// Cross-section of the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaseShape {
    /// 32-sided circle
    Circle,
    /// Square
    Square,
    /// Five-pointed star
    #[default]
    Star,
    /// Hexagon
    Hexagon,
}

impl BaseShape {
    /// The base profile, counter-clockwise and centered.
    pub fn profile(self) -> Result<Profile> {
        let profile = match self {
            Self::Circle => Profile::circle(COLUMN_CIRCLE_RADIUS, COLUMN_CIRCLE_SEGMENTS)?,
            Self::Square => Profile::rectangle(COLUMN_SQUARE_SIZE, COLUMN_SQUARE_SIZE)?,
            Self::Star => Profile::star(
                COLUMN_STAR_OUTER_RADIUS,
                COLUMN_STAR_INNER_RADIUS,
                COLUMN_STAR_POINTS,
            )?,
            Self::Hexagon => Profile::circle(COLUMN_CIRCLE_RADIUS, 6)?,
        };
        Ok(profile)
    }
}

/// Twisted column parameters.
///
/// # Example
///
/// ```rust
/// use sculpture_presets::{BaseShape, TwistedColumnParams};
///
/// let params: TwistedColumnParams =
///     serde_json::from_str(r#"{"baseShape": "hexagon", "twistDegrees": 360}"#).unwrap();
/// assert_eq!(params.base_shape, BaseShape::Hexagon);
/// assert_eq!(params.slices, 80);
/// let mesh = params.build().unwrap();
/// assert!(mesh.is_closed_manifold());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TwistedColumnParams {
    /// Column height
    pub height: f64,
    /// Slices along the column, both ends included
    pub slices: usize,
    /// Total twist in degrees
    pub twist_degrees: f64,
    /// Cross-section
    pub base_shape: BaseShape,
    /// Top size relative to the base
    pub top_scale: f64,
    /// Lateral sway amplitude
    pub wave_amplitude: f64,
    /// Sway cycles over the height
    pub wave_frequency: f64,
}

impl Default for TwistedColumnParams {
    fn default() -> Self {
        Self {
            height: COLUMN_HEIGHT,
            slices: COLUMN_SLICES,
            twist_degrees: COLUMN_TWIST_DEGREES,
            base_shape: BaseShape::default(),
            top_scale: COLUMN_TOP_SCALE,
            wave_amplitude: COLUMN_WAVE_AMPLITUDE,
            wave_frequency: COLUMN_WAVE_FREQUENCY,
        }
    }
}

impl TwistedColumnParams {
    /// Checks every parameter against its accepted range.
    pub fn validate(&self) -> Result<()> {
        check_range("height", self.height, &COLUMN_HEIGHT_RANGE)?;
        check_range("slices", self.slices, &COLUMN_SLICES_RANGE)?;
        check_range("twistDegrees", self.twist_degrees, &COLUMN_TWIST_RANGE)?;
        check_range("topScale", self.top_scale, &COLUMN_TOP_SCALE_RANGE)?;
        check_range("waveAmplitude", self.wave_amplitude, &COLUMN_WAVE_AMPLITUDE_RANGE)?;
        check_range("waveFrequency", self.wave_frequency, &COLUMN_WAVE_FREQUENCY_RANGE)
    }

    /// The sweep family described by these parameters.
    pub fn family(&self) -> TwistColumn {
        TwistColumn {
            height: self.height,
            twist_degrees: self.twist_degrees,
            top_scale: self.top_scale,
            wave_amplitude: self.wave_amplitude,
            wave_frequency: self.wave_frequency,
        }
    }

    /// Validates and builds the capped column.
    pub fn build(&self) -> Result<Mesh> {
        self.validate()?;
        debug!(shape = ?self.base_shape, slices = self.slices, "building twisted column");
        let profile = self.base_shape.profile()?;
        Ok(loft_mesh(&profile, self.slices, &self.family())?)
    }
}
