//! # Knot Curves
//!
//! Closed torus-knot paths scaled by `radius / 3`, with `t = p · 2π`.
//!
//! ```text
//! trefoil  centre = R/3 · (sin t + 2 sin 2t, cos t − 2 cos 2t, −sin 3t)
//!          placement = translate(centre) ∘ rotate_z(3t)
//!
//! figure-8 centre = R/3 · ((2 + cos 2t) cos 3t, (2 + cos 2t) sin 3t, sin 4t)
//!          placement = translate(centre) ∘ rotate_z(2t) ∘ rotate_x(t)
//! ```

use crate::error::Result;
use crate::family::{SliceSample, SweepFamily};
use crate::placement::{compose, Placement};
use crate::topology::Topology;
use crate::validate::require_extent;
use config::constants::FORM_RADIUS;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// (2,3) torus knot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trefoil {
    /// Overall knot radius
    pub radius: f64,
}

impl Default for Trefoil {
    fn default() -> Self {
        Self::new(FORM_RADIUS)
    }
}

impl Trefoil {
    /// Creates a trefoil family.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl SweepFamily for Trefoil {
    fn name(&self) -> &str {
        "trefoil"
    }

    fn topology(&self) -> Topology {
        Topology::ClosedSingle
    }

    fn validate(&self) -> Result<()> {
        require_extent("radius", self.radius)
    }

    fn evaluate(&self, sample: SliceSample) -> Placement {
        let t = sample.progress * TAU;
        let centre = DVec3::new(
            t.sin() + 2.0 * (2.0 * t).sin(),
            t.cos() - 2.0 * (2.0 * t).cos(),
            -(3.0 * t).sin(),
        ) * (self.radius / 3.0);
        compose(
            Placement::translation(centre),
            Placement::rotation_z(3.0 * t),
        )
    }
}

/// Figure-8 (4₁) knot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureEight {
    /// Overall knot radius
    pub radius: f64,
}

impl Default for FigureEight {
    fn default() -> Self {
        Self::new(FORM_RADIUS)
    }
}

impl FigureEight {
    /// Creates a figure-8 family.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl SweepFamily for FigureEight {
    fn name(&self) -> &str {
        "figure8"
    }

    fn topology(&self) -> Topology {
        Topology::ClosedSingle
    }

    fn validate(&self) -> Result<()> {
        require_extent("radius", self.radius)
    }

    fn evaluate(&self, sample: SliceSample) -> Placement {
        let t = sample.progress * TAU;
        let ring = 2.0 + (2.0 * t).cos();
        let centre = DVec3::new(
            ring * (3.0 * t).cos(),
            ring * (3.0 * t).sin(),
            (4.0 * t).sin(),
        ) * (self.radius / 3.0);
        compose(
            Placement::translation(centre),
            compose(Placement::rotation_z(2.0 * t), Placement::rotation_x(t)),
        )
    }
}
