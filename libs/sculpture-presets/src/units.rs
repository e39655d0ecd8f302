//! # Modular Units
//!
//! Square tiles swept up a short height, alone or laid out as a 3×3 array.
//! The array is assembled by translating copies and merging them; the
//! copies are not fused.

use crate::error::{check_range, Result};
use config::constants::{
    TILE_ARRAY_GAP, TILE_BLOCK_STEPS, TILE_BLOCK_TWIST_DEGREES, TILE_HEIGHT, TILE_HEIGHT_RANGE,
    TILE_SIZE, TILE_SIZE_RANGE, TILE_SLICES,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use slice_loft::{loft_mesh, Mesh, Profile};
use sweep_transforms::{SaddleTile, TwistColumn, WaveTile};
use tracing::debug;

/// Tile kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitType {
    /// Sinusoidal sway
    #[default]
    Wave,
    /// Anisotropic saddle stretch
    Saddle,
    /// Block twisted by 45°
    Twist,
}

/// Modular unit parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModularUnitParams {
    /// Tile kind
    pub unit_type: UnitType,
    /// Tile edge length
    pub size: f64,
    /// Tile height
    pub height: f64,
    /// Lay out nine copies instead of one
    pub make_multiple: bool,
}

impl Default for ModularUnitParams {
    fn default() -> Self {
        Self {
            unit_type: UnitType::default(),
            size: TILE_SIZE,
            height: TILE_HEIGHT,
            make_multiple: false,
        }
    }
}

impl ModularUnitParams {
    /// Checks every parameter against its accepted range.
    pub fn validate(&self) -> Result<()> {
        check_range("size", self.size, &TILE_SIZE_RANGE)?;
        check_range("height", self.height, &TILE_HEIGHT_RANGE)
    }

    /// Builds a single unit.
    pub fn unit(&self) -> Result<Mesh> {
        self.validate()?;
        let square = Profile::rectangle(self.size, self.size)?;
        let mesh = match self.unit_type {
            UnitType::Wave => loft_mesh(&square, TILE_SLICES, &WaveTile::new(self.size, self.height))?,
            UnitType::Saddle => loft_mesh(&square, TILE_SLICES, &SaddleTile::new(self.height))?,
            UnitType::Twist => loft_mesh(
                &square,
                TILE_BLOCK_STEPS + 1,
                &TwistColumn::linear(self.height, TILE_BLOCK_TWIST_DEGREES),
            )?,
        };
        Ok(mesh)
    }

    /// Builds one unit, or the 3×3 array when `make_multiple` is set.
    pub fn build(&self) -> Result<Mesh> {
        debug!(unit = ?self.unit_type, array = self.make_multiple, "building modular unit");
        let unit = self.unit()?;
        if self.make_multiple {
            Ok(tile_array(&unit, self.size + TILE_ARRAY_GAP))
        } else {
            Ok(unit)
        }
    }
}

/// Nine copies of `unit` on a square grid, the middle one left in place.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use sculpture_presets::tile_array;
/// use slice_loft::Mesh;
///
/// let mut unit = Mesh::new();
/// unit.add_vertex(DVec3::ZERO);
/// let grid = tile_array(&unit, 42.0);
/// assert_eq!(grid.vertex_count(), 9);
/// assert_eq!(grid.bounding_box().1, DVec3::new(42.0, 42.0, 0.0));
/// ```
pub fn tile_array(unit: &Mesh, spacing: f64) -> Mesh {
    let mut grid = Mesh::with_capacity(unit.vertex_count() * 9, unit.triangle_count() * 9);
    for x in -1..=1 {
        for y in -1..=1 {
            let mut copy = unit.clone();
            copy.translate(DVec3::new(f64::from(x) * spacing, f64::from(y) * spacing, 0.0));
            grid.merge(&copy);
        }
    }
    grid
}
