//! # Möbius Loops
//!
//! Circular loops whose cross-section rolls about the path while the
//! centre line bobs on a `width / 4` offset circle.
//!
//! With `t = p · 2π` and `φ = k · t / 2`:
//!
//! ```text
//! centre    = ((R + w/4 · cos φ) cos t, (R + w/4 · cos φ) sin t, w/4 · sin φ)
//! placement = translate(centre) ∘ rotate_z(t) ∘ rotate_x(φ)
//! ```
//!
//! An odd half-twist count `k` leaves the cross-section mirrored after one
//! lap, so the loop only closes after two.

use crate::error::{Result, TransformError};
use crate::family::{SliceSample, SweepFamily};
use crate::placement::{compose, Placement};
use crate::topology::Topology;
use crate::validate::{require_at_least, require_extent};
use config::constants::{FORM_RADIUS, FORM_TWISTS, FORM_WIDTH};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// The centre line must stay clear of the loop axis.
fn require_clear_of_axis(radius: f64, width: f64) -> Result<()> {
    require_extent("radius", radius)?;
    require_extent("width", width)?;
    if radius <= width / 4.0 {
        return Err(TransformError::degenerate(
            "radius",
            format!(
                "{radius} does not exceed the width / 4 offset ({}), the loop crosses its axis",
                width / 4.0
            ),
        ));
    }
    Ok(())
}

fn loop_placement(centre: DVec3, heading: f64, tilt: f64) -> Placement {
    compose(
        Placement::translation(centre),
        compose(Placement::rotation_z(heading), Placement::rotation_x(tilt)),
    )
}

/// Möbius band with a configurable number of half-twists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mobius {
    /// Main loop radius
    pub radius: f64,
    /// Strip width; sets the centre line offset
    pub width: f64,
    /// Half-twists per lap
    pub twists: u32,
}

impl Default for Mobius {
    fn default() -> Self {
        Self::new(FORM_RADIUS, FORM_WIDTH, FORM_TWISTS)
    }
}

impl Mobius {
    /// Creates a Möbius family.
    pub fn new(radius: f64, width: f64, twists: u32) -> Self {
        Self {
            radius,
            width,
            twists,
        }
    }
}

impl SweepFamily for Mobius {
    fn name(&self) -> &str {
        "mobius"
    }

    fn topology(&self) -> Topology {
        Topology::from_half_twists(self.twists)
    }

    fn validate(&self) -> Result<()> {
        require_at_least("twists", self.twists, 1)?;
        require_clear_of_axis(self.radius, self.width)
    }

    fn evaluate(&self, sample: SliceSample) -> Placement {
        let t = sample.progress * TAU;
        let phi = f64::from(self.twists) * t / 2.0;
        let offset = self.width / 4.0;
        let reach = self.radius + offset * phi.cos();
        let centre = DVec3::new(reach * t.cos(), reach * t.sin(), offset * phi.sin());
        loop_placement(centre, t, phi)
    }
}

/// Loop with a full roll per lap and a doubled vertical bob.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoubleMobius {
    /// Main loop radius
    pub radius: f64,
    /// Strip width; sets the centre line offset
    pub width: f64,
}

impl Default for DoubleMobius {
    fn default() -> Self {
        Self::new(FORM_RADIUS, FORM_WIDTH)
    }
}

impl DoubleMobius {
    /// Creates a double Möbius family.
    pub fn new(radius: f64, width: f64) -> Self {
        Self { radius, width }
    }
}

impl SweepFamily for DoubleMobius {
    fn name(&self) -> &str {
        "double-mobius"
    }

    fn topology(&self) -> Topology {
        Topology::ClosedSingle
    }

    fn validate(&self) -> Result<()> {
        require_clear_of_axis(self.radius, self.width)
    }

    fn evaluate(&self, sample: SliceSample) -> Placement {
        let t = sample.progress * TAU;
        let offset = self.width / 4.0;
        let reach = self.radius + offset * t.cos();
        let centre = DVec3::new(
            reach * t.cos(),
            reach * t.sin(),
            offset * (2.0 * t).sin(),
        );
        loop_placement(centre, t, t)
    }
}
