//! # Transform Errors
//!
//! Error types for family parameter validation.
//!
//! ## Error Policy
//!
//! - Parameters are never clamped into range
//! - Every error names the offending parameter

use thiserror::Error;

/// Errors raised while validating a sweep family.
///
/// ## Example
///
/// ```rust
/// use sweep_transforms::{Mobius, SweepFamily, TransformError};
///
/// match Mobius::new(0.0, 15.0, 1).validate() {
///     Err(TransformError::DegenerateGeometry { parameter, .. }) => assert_eq!(parameter, "radius"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// A structural parameter lies outside its mathematical domain
    /// (negative radius, non-finite value, twist count below one).
    #[error("Configuration error: `{parameter}` {message}")]
    Configuration {
        /// Name of the parameter
        parameter: String,
        /// What is wrong with it
        message: String,
    },

    /// Parameters are individually valid but produce a degenerate sweep
    /// (zero-area cross-section, path collapsing onto the axis).
    #[error("Degenerate geometry: `{parameter}` {message}")]
    DegenerateGeometry {
        /// Name of the parameter
        parameter: String,
        /// What is wrong with it
        message: String,
    },
}

impl TransformError {
    /// Creates a configuration error.
    pub fn configuration(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Returns the name of the offending parameter.
    pub fn parameter(&self) -> &str {
        match self {
            Self::Configuration { parameter, .. } | Self::DegenerateGeometry { parameter, .. } => {
                parameter
            }
        }
    }
}

/// Result type alias for family validation.
pub type Result<T> = std::result::Result<T, TransformError>;
