//! # Slice Loft
//!
//! Sweeps a 2D [`Profile`] through the placements of a
//! [`SweepFamily`](sweep_transforms::SweepFamily) and stitches the resulting
//! slices into a triangle [`Mesh`].
//!
//! ## Guarantees
//!
//! - Every slice has the profile's point count and order
//! - Closed families are checked to actually return to their first slice
//! - One winding sign for the whole side wall
//! - Open lofts of closed profiles are capped; closed lofts share the seam
//!   vertices so every wall edge is used by exactly two triangles
//!
//! ## Usage
//!
//! ```rust
//! use slice_loft::{loft_mesh, Profile};
//! use sweep_transforms::TwistColumn;
//!
//! let star = Profile::star(22.0, 12.0, 5).unwrap();
//! let mesh = loft_mesh(&star, 80, &TwistColumn::default()).unwrap();
//! assert!(mesh.is_closed_manifold());
//! ```

pub mod error;
pub mod loft;
pub mod mesh;
pub mod profile;
mod stitch;
pub mod triangulate;

pub use error::{LoftError, Result};
pub use loft::{build_loft, build_loft_with, loft_mesh, Loft, LoftOptions, Slice, Winding};
pub use mesh::{EdgeCensus, Mesh};
pub use profile::Profile;
