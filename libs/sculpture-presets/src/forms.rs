//! # Topological Forms
//!
//! A `width × thickness` strip swept around a Möbius loop or a knot.

use crate::error::{check_range, Result};
use config::constants::{
    FORM_RADIUS, FORM_RADIUS_RANGE, FORM_SEGMENTS, FORM_SEGMENTS_RANGE, FORM_THICKNESS,
    FORM_THICKNESS_RANGE, FORM_TWISTS, FORM_TWISTS_RANGE, FORM_WIDTH, FORM_WIDTH_RANGE,
};
use serde::{Deserialize, Serialize};
use slice_loft::{build_loft, Loft, Mesh, Profile};
use sweep_transforms::{DoubleMobius, Family, FigureEight, Mobius, Trefoil};
use tracing::debug;

/// Loop traced by the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceType {
    /// Möbius strip with `twists` half-twists
    #[default]
    Mobius,
    /// Double Möbius loop
    DoubleMobius,
    /// Trefoil knot
    Trefoil,
    /// Figure-8 knot
    #[serde(rename = "figure8")]
    FigureEight,
}

/// Topological form parameters.
///
/// # Example
///
/// ```rust
/// use sculpture_presets::{SurfaceType, TopologicalFormParams};
/// use sweep_transforms::Topology;
///
/// let params = TopologicalFormParams {
///     surface_type: SurfaceType::Trefoil,
///     radius: 30.0,
///     ..TopologicalFormParams::default()
/// };
/// let loft = params.loft().unwrap();
/// assert_eq!(loft.topology(), Topology::ClosedSingle);
/// assert_eq!(loft.slices().len(), 121);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TopologicalFormParams {
    /// Loop traced by the strip
    pub surface_type: SurfaceType,
    /// Main radius
    pub radius: f64,
    /// Strip width
    pub width: f64,
    /// Strip thickness
    pub thickness: f64,
    /// Segments per lap
    pub segments: usize,
    /// Half-twists; Möbius only
    pub twists: u32,
}

impl Default for TopologicalFormParams {
    fn default() -> Self {
        Self {
            surface_type: SurfaceType::default(),
            radius: FORM_RADIUS,
            width: FORM_WIDTH,
            thickness: FORM_THICKNESS,
            segments: FORM_SEGMENTS,
            twists: FORM_TWISTS,
        }
    }
}

impl TopologicalFormParams {
    /// Checks every parameter against its accepted range.
    pub fn validate(&self) -> Result<()> {
        check_range("radius", self.radius, &FORM_RADIUS_RANGE)?;
        check_range("width", self.width, &FORM_WIDTH_RANGE)?;
        check_range("thickness", self.thickness, &FORM_THICKNESS_RANGE)?;
        check_range("segments", self.segments, &FORM_SEGMENTS_RANGE)?;
        check_range("twists", self.twists, &FORM_TWISTS_RANGE)
    }

    /// The sweep family for the selected surface.
    pub fn family(&self) -> Family {
        match self.surface_type {
            SurfaceType::Mobius => Mobius::new(self.radius, self.width, self.twists).into(),
            SurfaceType::DoubleMobius => DoubleMobius::new(self.radius, self.width).into(),
            SurfaceType::Trefoil => Trefoil::new(self.radius).into(),
            SurfaceType::FigureEight => FigureEight::new(self.radius).into(),
        }
    }

    /// The strip cross-section.
    pub fn profile(&self) -> Result<Profile> {
        Ok(Profile::rectangle(self.width, self.thickness)?)
    }

    /// Validates and generates the slices; `segments + 1` per lap.
    pub fn loft(&self) -> Result<Loft> {
        self.validate()?;
        debug!(surface = ?self.surface_type, segments = self.segments, "building topological form");
        Ok(build_loft(&self.profile()?, self.segments + 1, &self.family())?)
    }

    /// Validates and builds the mesh.
    pub fn build(&self) -> Result<Mesh> {
        Ok(self.loft()?.to_mesh()?)
    }
}
