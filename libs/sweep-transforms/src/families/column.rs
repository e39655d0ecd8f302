//! # Twisted Column
//!
//! Rises along Z while twisting, tapering and optionally swaying on X.
//!
//! ```text
//! angle = p · twist
//! scale = 1 − p · (1 − top_scale)
//! z     = p · height
//! wave  = amplitude · sin(p · frequency · 2π)
//!
//! placement = translate(wave, 0, z) ∘ rotate_z(angle) ∘ scale(scale, scale, 1)
//! ```

use crate::error::Result;
use crate::family::{SliceSample, SweepFamily};
use crate::placement::{compose, Placement};
use crate::topology::Topology;
use crate::validate::{require_extent, require_finite, require_non_negative};
use config::constants::{
    COLUMN_HEIGHT, COLUMN_TOP_SCALE, COLUMN_TWIST_DEGREES, COLUMN_WAVE_AMPLITUDE,
    COLUMN_WAVE_FREQUENCY,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Twist, taper and sway along the Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwistColumn {
    /// Column height
    pub height: f64,
    /// Total twist in degrees between base and top
    pub twist_degrees: f64,
    /// Size of the top cross-section relative to the base
    pub top_scale: f64,
    /// Lateral X sway amplitude
    pub wave_amplitude: f64,
    /// Sway cycles over the full height
    pub wave_frequency: f64,
}

impl Default for TwistColumn {
    fn default() -> Self {
        Self {
            height: COLUMN_HEIGHT,
            twist_degrees: COLUMN_TWIST_DEGREES,
            top_scale: COLUMN_TOP_SCALE,
            wave_amplitude: COLUMN_WAVE_AMPLITUDE,
            wave_frequency: COLUMN_WAVE_FREQUENCY,
        }
    }
}

impl TwistColumn {
    /// Straight twisted extrusion: no taper, no sway.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sweep_transforms::{SliceSample, SweepFamily, TwistColumn};
    ///
    /// let block = TwistColumn::linear(20.0, 45.0);
    /// let top = block.evaluate(SliceSample::at(1.0));
    /// assert!((top.origin().z - 20.0).abs() < 1e-12);
    /// ```
    pub fn linear(height: f64, twist_degrees: f64) -> Self {
        Self {
            height,
            twist_degrees,
            top_scale: 1.0,
            wave_amplitude: 0.0,
            wave_frequency: 0.0,
        }
    }
}

impl SweepFamily for TwistColumn {
    fn name(&self) -> &str {
        "twisted-column"
    }

    fn topology(&self) -> Topology {
        Topology::Open
    }

    fn validate(&self) -> Result<()> {
        require_extent("height", self.height)?;
        require_finite("twist_degrees", self.twist_degrees)?;
        require_extent("top_scale", self.top_scale)?;
        require_non_negative("wave_amplitude", self.wave_amplitude)?;
        require_non_negative("wave_frequency", self.wave_frequency)
    }

    fn evaluate(&self, sample: SliceSample) -> Placement {
        let p = sample.progress;
        let angle = p * self.twist_degrees.to_radians();
        let scale = 1.0 - p * (1.0 - self.top_scale);
        let wave = self.wave_amplitude * (p * self.wave_frequency * TAU).sin();

        compose(
            Placement::translation(DVec3::new(wave, 0.0, p * self.height)),
            compose(
                Placement::rotation_z(angle),
                Placement::scale(DVec3::new(scale, scale, 1.0)),
            ),
        )
    }
}
