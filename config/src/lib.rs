//! # Config Crate
//!
//! Centralized configuration constants for the slice-loft sweep kernel.
//! Tolerances, safety limits and the default values of the sculpture
//! presets are defined here so every crate in the workspace agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CLOSURE_TOLERANCE, MIN_SLICES};
//!
//! // A closed sweep must return to its first slice within tolerance
//! let deviation: f64 = 1e-9;
//! assert!(deviation < CLOSURE_TOLERANCE);
//!
//! // A loft needs at least a start and an end slice
//! assert_eq!(MIN_SLICES, 2);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Clamping**: Limits are checked and reported, never silently applied
//! - **Preset Defaults**: Defaults and accepted ranges of every generator parameter

pub mod constants;

#[cfg(test)]
mod tests;
