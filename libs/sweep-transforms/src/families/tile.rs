//! # Tile Sweeps
//!
//! Straight rises along Z used for modular tiles. The cross-section stays
//! parallel to the XY plane; only offset and scale change.

use crate::error::{Result, TransformError};
use crate::family::{SliceSample, SweepFamily};
use crate::placement::{compose, Placement};
use crate::topology::Topology;
use crate::validate::{require_extent, require_finite, require_non_negative};
use config::constants::{
    TILE_HEIGHT, TILE_SADDLE_SKEW, TILE_SIZE, TILE_WAVE_AMPLITUDE_RATIO, TILE_WAVE_CYCLES,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Sinusoidal X sway, period tied to the tile size so neighbours line up.
///
/// ```text
/// z = p · height
/// x = amplitude_ratio · height · sin(2π / size · z · cycles)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveTile {
    /// Tile edge length
    pub size: f64,
    /// Tile height
    pub height: f64,
    /// Sway amplitude as a fraction of the height
    pub amplitude_ratio: f64,
    /// Wave cycles per tile period
    pub cycles: f64,
}

impl Default for WaveTile {
    fn default() -> Self {
        Self::new(TILE_SIZE, TILE_HEIGHT)
    }
}

impl WaveTile {
    /// Wave tile with the default amplitude and cycle count.
    pub fn new(size: f64, height: f64) -> Self {
        Self {
            size,
            height,
            amplitude_ratio: TILE_WAVE_AMPLITUDE_RATIO,
            cycles: TILE_WAVE_CYCLES,
        }
    }
}

impl SweepFamily for WaveTile {
    fn name(&self) -> &str {
        "wave"
    }

    fn topology(&self) -> Topology {
        Topology::Open
    }

    fn validate(&self) -> Result<()> {
        require_extent("size", self.size)?;
        require_extent("height", self.height)?;
        require_non_negative("amplitude_ratio", self.amplitude_ratio)?;
        require_finite("cycles", self.cycles)
    }

    fn evaluate(&self, sample: SliceSample) -> Placement {
        let z = sample.progress * self.height;
        let amplitude = self.amplitude_ratio * self.height;
        let x = amplitude * (TAU / self.size * z * self.cycles).sin();
        Placement::translation(DVec3::new(x, 0.0, z))
    }
}

/// Anisotropic stretch swapping from X to Y over the height.
///
/// ```text
/// s = 2p − 1
/// placement = translate(0, 0, p · height) ∘ scale(1 + skew · s, 1 − skew · s, 1)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaddleTile {
    /// Tile height
    pub height: f64,
    /// Scale deviation at either end
    pub skew: f64,
}

impl Default for SaddleTile {
    fn default() -> Self {
        Self::new(TILE_HEIGHT)
    }
}

impl SaddleTile {
    /// Saddle tile with the default skew.
    pub fn new(height: f64) -> Self {
        Self {
            height,
            skew: TILE_SADDLE_SKEW,
        }
    }
}

impl SweepFamily for SaddleTile {
    fn name(&self) -> &str {
        "saddle"
    }

    fn topology(&self) -> Topology {
        Topology::Open
    }

    fn validate(&self) -> Result<()> {
        require_extent("height", self.height)?;
        require_finite("skew", self.skew)?;
        if self.skew.abs() >= 1.0 {
            return Err(TransformError::degenerate(
                "skew",
                format!("{} collapses the cross-section at one end", self.skew),
            ));
        }
        Ok(())
    }

    fn evaluate(&self, sample: SliceSample) -> Placement {
        let p = sample.progress;
        let s = 2.0 * p - 1.0;
        compose(
            Placement::translation(DVec3::new(0.0, 0.0, p * self.height)),
            Placement::scale(DVec3::new(1.0 + self.skew * s, 1.0 - self.skew * s, 1.0)),
        )
    }
}
