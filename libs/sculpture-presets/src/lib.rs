//! # Sculpture Presets
//!
//! Parameterised sculpture generators built on the slice-loft engine.
//!
//! Each generator takes a flat parameter record with the ranges a designer
//! would expose, validates it, then lofts a profile through one of the sweep
//! families in [`sweep_transforms`].
//!
//! | Generator | Profile | Family |
//! |-----------|---------|--------|
//! | [`TwistedColumnParams`] | circle, square, star or hexagon | [`sweep_transforms::TwistColumn`] |
//! | [`TopologicalFormParams`] | `width × thickness` strip | Möbius, double Möbius, trefoil, figure-8 |
//! | [`ModularUnitParams`] | square tile | wave, saddle, twisted block |
//!
//! ## Example
//!
//! ```rust
//! use sculpture_presets::Preset;
//!
//! let preset: Preset = serde_json::from_str(
//!     r#"{"generator": "topological-form", "surfaceType": "double-mobius"}"#,
//! ).unwrap();
//! let mesh = preset.build().unwrap();
//! assert!(mesh.is_closed_manifold());
//! ```

mod column;
mod error;
mod forms;
mod units;


pub use column::{BaseShape, TwistedColumnParams};
pub use error::{PresetError, Result};
pub use forms::{SurfaceType, TopologicalFormParams};
pub use units::{tile_array, ModularUnitParams, UnitType};

use serde::{Deserialize, Serialize};
use slice_loft::Mesh;

/// Any generator together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "generator", rename_all = "kebab-case")]
pub enum Preset {
    /// Twisted column
    TwistedColumn(TwistedColumnParams),
    /// Topological form
    TopologicalForm(TopologicalFormParams),
    /// Modular unit
    ModularUnit(ModularUnitParams),
}

impl Preset {
    /// Validates the parameters without building.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::TwistedColumn(params) => params.validate(),
            Self::TopologicalForm(params) => params.validate(),
            Self::ModularUnit(params) => params.validate(),
        }
    }

    /// Builds the mesh.
    pub fn build(&self) -> Result<Mesh> {
        match self {
            Self::TwistedColumn(params) => params.build(),
            Self::TopologicalForm(params) => params.build(),
            Self::ModularUnit(params) => params.build(),
        }
    }
}

impl From<TwistedColumnParams> for Preset {
    fn from(params: TwistedColumnParams) -> Self {
        Self::TwistedColumn(params)
    }
}

impl From<TopologicalFormParams> for Preset {
    fn from(params: TopologicalFormParams) -> Self {
        Self::TopologicalForm(params)
    }
}

impl From<ModularUnitParams> for Preset {
    fn from(params: ModularUnitParams) -> Self {
        Self::ModularUnit(params)
    }
}
