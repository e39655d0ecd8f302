//! # Sweep Transforms
//!
//! Parametric placement generators for the slice-loft engine.
//! A family maps sweep progress onto a [`Placement`] for one copy of the
//! cross-section and declares the [`Topology`] of the path it traces.
//!
//! ## Architecture
//!
//! ```text
//! progress ∈ [0, traversals] → SweepFamily::evaluate → Placement
//!                              SweepFamily::topology → Open | ClosedSingle | ClosedDouble
//! ```
//!
//! ## Families
//!
//! - **Twisted column**: twist, taper and lateral wave along Z
//! - **Möbius / double Möbius**: circular loop with half-twists
//! - **Trefoil / figure-8**: closed knot curves
//! - **Wave / saddle tiles**: planar cross-section with Z offset only
//!
//! ## Usage
//!
//! ```rust
//! use sweep_transforms::{Mobius, SliceSample, SweepFamily, Topology};
//!
//! let mobius = Mobius::new(40.0, 15.0, 1);
//! assert_eq!(mobius.topology(), Topology::ClosedDouble);
//!
//! let start = mobius.evaluate(SliceSample::new(0, 241, 0.0));
//! assert!((start.origin().x - 43.75).abs() < 1e-9);
//! ```

pub mod error;
pub mod families;
pub mod family;
pub mod placement;
pub mod topology;
pub mod validate;

pub use error::{Result, TransformError};
pub use families::{
    DoubleMobius, Family, FamilyKind, FigureEight, Mobius, SaddleTile, Trefoil, TwistColumn,
    WaveTile,
};
pub use family::{CustomFamily, SliceSample, SweepFamily};
pub use placement::{compose, Placement};
pub use topology::Topology;
