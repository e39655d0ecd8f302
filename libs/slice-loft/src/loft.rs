//! # Loft Construction
//!
//! Evaluates a sweep family at evenly spaced progress values and keeps the
//! resulting slices together with the declared topology.
//!
//! ## Pipeline
//!
//! ```text
//! Profile + slices + SweepFamily
//!     │ validate (slices, family, triangle budget)
//!     ▼
//! slices ── evaluated in parallel, assigned by index
//!     │ closed topologies: closure check
//!     ▼
//! Loft ── winding sign chosen once for the whole loft
//!     │ to_mesh
//!     ▼
//! Mesh
//! ```

use crate::error::{LoftError, Result};
use crate::mesh::Mesh;
use crate::profile::Profile;
use crate::stitch;
use config::constants::{
    scaled_closure_tolerance, GlobalConfig, CLOSURE_TOLERANCE, MAX_SLICES, MAX_TRIANGLES,
    MIN_SLICES, WINDING_COSINE_EPSILON,
};
use glam::{DVec2, DVec3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sweep_transforms::{Placement, SliceSample, SweepFamily, Topology};
use tracing::{debug, trace, warn};

// =============================================================================
// OPTIONS
// =============================================================================

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoftOptions {
    /// Allowed gap between the first and last slice of a closed loft, per
    /// unit of coordinate magnitude
    pub closure_tolerance: f64,
    /// Cap both ends of an open loft of a closed profile
    pub cap_ends: bool,
}

impl Default for LoftOptions {
    fn default() -> Self {
        Self {
            closure_tolerance: CLOSURE_TOLERANCE,
            cap_ends: true,
        }
    }
}

impl LoftOptions {
    /// Options taking their tolerance from a global configuration.
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            closure_tolerance: config.closure_tolerance,
            ..Self::default()
        }
    }
}

/// Orientation of every side-wall triangle in a loft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Triangles run along the profile, then up the sweep.
    Forward,
    /// Mirror of [`Winding::Forward`].
    Reversed,
}

// =============================================================================
// SLICE
// =============================================================================

/// One placed copy of the profile.
///
/// The boundary is derived from the shared profile on demand.
#[derive(Debug, Clone)]
pub struct Slice {
    index: usize,
    progress: f64,
    placement: Placement,
    profile: Profile,
}

impl Slice {
    /// Position in generation order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Sweep progress, `[0, traversals]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Placement of the profile.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// World position of profile point `index`.
    #[inline]
    pub fn point(&self, index: usize) -> DVec3 {
        self.placement.place(self.profile.point(index))
    }

    /// World positions of every profile point, in profile order.
    pub fn boundary(&self) -> Vec<DVec3> {
        (0..self.profile.len()).map(|j| self.point(j)).collect()
    }

    /// Average of the boundary points.
    pub fn centroid(&self) -> DVec3 {
        let sum: DVec2 = self.profile.points().iter().sum();
        self.placement.place(sum / self.profile.len() as f64)
    }

    fn magnitude(&self) -> f64 {
        (0..self.profile.len())
            .map(|j| self.point(j).abs().max_element())
            .fold(0.0, f64::max)
    }
}

/// Largest distance between matching boundary points of two slices.
fn boundary_deviation(a: &Slice, b: &Slice) -> f64 {
    (0..a.profile.len())
        .map(|j| a.point(j).distance(b.point(j)))
        .fold(0.0, f64::max)
}

// =============================================================================
// LOFT
// =============================================================================

/// Ordered slices of one sweep plus its topology.
///
/// Always holds at least two slices. A closed loft keeps its final slice,
/// which coincides with the first; meshing reuses the first slice's
/// vertices in its place.
#[derive(Debug, Clone)]
pub struct Loft {
    family: String,
    topology: Topology,
    profile: Profile,
    slices: Vec<Slice>,
    winding: Winding,
    cap_ends: bool,
}

impl Loft {
    /// Name of the family that produced the loft.
    pub fn family_name(&self) -> &str {
        &self.family
    }

    /// Declared topology.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// The swept profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// All generated slices.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Winding applied to the side wall.
    pub fn winding(&self) -> Winding {
        self.winding
    }

    /// True when meshing adds end caps.
    pub fn has_caps(&self) -> bool {
        self.cap_ends && self.topology == Topology::Open && self.profile.is_closed()
    }

    /// Slices that receive their own vertices.
    pub fn ring_count(&self) -> usize {
        ring_count(self.topology, self.slices.len())
    }

    /// Largest distance between the first and last slice boundaries.
    pub fn closure_deviation(&self) -> f64 {
        match (self.slices.first(), self.slices.last()) {
            (Some(first), Some(last)) => boundary_deviation(first, last),
            _ => 0.0,
        }
    }

    /// Triangles the mesh will hold.
    pub fn triangle_count(&self) -> usize {
        stitch::triangle_count(&self.profile, self.slices.len(), self.has_caps())
    }

    /// Stitches the slices into a triangle mesh.
    pub fn to_mesh(&self) -> Result<Mesh> {
        stitch::stitch(self)
    }
}

fn ring_count(topology: Topology, slice_count: usize) -> usize {
    if topology.is_closed() {
        slice_count - 1
    } else {
        slice_count
    }
}

// =============================================================================
// BUILD
// =============================================================================

/// Builds a loft with default options.
///
/// `slices` counts the slices of one traversal, both ends included. A
/// closed-double family generates `2 · (slices − 1) + 1` slices.
///
/// # Example
///
/// ```rust
/// use slice_loft::{build_loft, Profile};
/// use sweep_transforms::{Topology, Trefoil};
///
/// let profile = Profile::rectangle(15.0, 2.0).unwrap();
/// let loft = build_loft(&profile, 121, &Trefoil::new(30.0)).unwrap();
/// assert_eq!(loft.topology(), Topology::ClosedSingle);
/// assert_eq!(loft.slices().len(), 121);
/// ```
pub fn build_loft<F>(profile: &Profile, slices: usize, family: &F) -> Result<Loft>
where
    F: SweepFamily + ?Sized,
{
    build_loft_with(profile, slices, family, &LoftOptions::default())
}

/// Builds a loft and stitches it in one call.
pub fn loft_mesh<F>(profile: &Profile, slices: usize, family: &F) -> Result<Mesh>
where
    F: SweepFamily + ?Sized,
{
    build_loft(profile, slices, family)?.to_mesh()
}

/// Builds a loft with explicit options.
pub fn build_loft_with<F>(
    profile: &Profile,
    slices: usize,
    family: &F,
    options: &LoftOptions,
) -> Result<Loft>
where
    F: SweepFamily + ?Sized,
{
    if !(options.closure_tolerance.is_finite() && options.closure_tolerance > 0.0) {
        return Err(LoftError::configuration(
            "closure_tolerance",
            format!("must be positive, got {}", options.closure_tolerance),
        ));
    }
    if !(MIN_SLICES..=MAX_SLICES).contains(&slices) {
        return Err(LoftError::configuration(
            "slices",
            format!("must be between {MIN_SLICES} and {MAX_SLICES}, got {slices}"),
        ));
    }
    family.validate()?;

    let name = family.name().to_string();
    let topology = family.topology();
    let segments = slices - 1;
    let count = topology.total_slices(slices);

    if topology.is_closed() && ring_count(topology, count) < 3 {
        return Err(LoftError::configuration(
            "slices",
            format!("a closed loop needs at least 3 distinct slices, got {slices} for `{name}`"),
        ));
    }

    let caps = options.cap_ends && topology == Topology::Open && profile.is_closed();
    let triangles = stitch::triangle_count(profile, count, caps);
    if triangles > MAX_TRIANGLES {
        return Err(LoftError::TooManyTriangles {
            count: triangles,
            max: MAX_TRIANGLES,
        });
    }

    debug!(family = %name, ?topology, slices = count, "building loft");

    let generated: Vec<Slice> = (0..count)
        .into_par_iter()
        .map(|index| {
            let progress = index as f64 / segments as f64;
            Slice {
                index,
                progress,
                placement: family.evaluate(SliceSample::new(index, count, progress)),
                profile: profile.clone(),
            }
        })
        .collect();

    if let Some(bad) = generated.iter().find(|s| !s.placement.is_finite()) {
        return Err(LoftError::degenerate(
            "placement",
            format!(
                "family `{name}` produced a non-finite placement at slice {}",
                bad.index
            ),
        ));
    }

    if topology.is_closed() {
        check_closure(&name, &generated, options.closure_tolerance)?;
    }

    let winding = choose_winding(&generated);
    trace!(family = %name, ?winding, "side wall winding");

    debug!(family = %name, slices = count, triangles, "loft built");

    Ok(Loft {
        family: name,
        topology,
        profile: profile.clone(),
        slices: generated,
        winding,
        cap_ends: options.cap_ends,
    })
}

fn check_closure(family: &str, slices: &[Slice], closure_tolerance: f64) -> Result<()> {
    let (Some(first), Some(last)) = (slices.first(), slices.last()) else {
        return Ok(());
    };
    let deviation = boundary_deviation(first, last);
    let tolerance = scaled_closure_tolerance(closure_tolerance, first.magnitude());
    if deviation > tolerance {
        warn!(family, deviation, tolerance, "closed family does not return to its start");
        return Err(LoftError::ClosureMismatch {
            family: family.to_string(),
            deviation,
            tolerance,
        });
    }
    Ok(())
}

/// Sign of the sweep direction against the profile plane normal at the
/// first pair where the two are not (nearly) perpendicular.
fn choose_winding(slices: &[Slice]) -> Winding {
    slices
        .windows(2)
        .find_map(|pair| {
            let travel = pair[1].centroid() - pair[0].centroid();
            let normal = pair[0].placement.plane_normal();
            let scale = travel.length() * normal.length();
            if scale <= 0.0 {
                return None;
            }
            let cosine = travel.dot(normal) / scale;
            (cosine.abs() > WINDING_COSINE_EPSILON).then_some(if cosine > 0.0 {
                Winding::Forward
            } else {
                Winding::Reversed
            })
        })
        .unwrap_or(Winding::Forward)
}
