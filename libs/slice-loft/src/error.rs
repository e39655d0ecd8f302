//! # Loft Errors
//!
//! Error types for slice generation and meshing.
//!
//! Every error is returned at the point of detection. No partial mesh is
//! produced alongside an error.

use sweep_transforms::TransformError;
use thiserror::Error;

/// Errors that can occur while building or meshing a loft.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoftError {
    /// A parameter lies outside its domain
    #[error("Configuration error: `{parameter}` {message}")]
    Configuration {
        /// Name of the parameter
        parameter: String,
        /// What is wrong with it
        message: String,
    },

    /// Valid parameters that collapse the sweep
    #[error("Degenerate geometry: `{parameter}` {message}")]
    DegenerateGeometry {
        /// Name of the parameter
        parameter: String,
        /// What is wrong with it
        message: String,
    },

    /// The cross-section cannot be swept
    #[error("Invalid profile: {message}")]
    InvalidProfile {
        /// What is wrong with the profile
        message: String,
    },

    /// A looping family does not return to its first slice
    #[error(
        "Closure mismatch: family `{family}` ends {deviation:e} away from its start (tolerance {tolerance:e})"
    )]
    ClosureMismatch {
        /// Name of the family
        family: String,
        /// Largest distance between matching boundary points
        deviation: f64,
        /// Allowed distance
        tolerance: f64,
    },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles {
        /// Requested triangle count
        count: usize,
        /// Limit
        max: usize,
    },
}

impl LoftError {
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

    /// Creates an invalid profile error.
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            message: message.into(),
        }
    }
}

impl From<TransformError> for LoftError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::Configuration { parameter, message } => {
                Self::Configuration { parameter, message }
            }
            TransformError::DegenerateGeometry { parameter, message } => {
                Self::DegenerateGeometry { parameter, message }
            }
        }
    }
}

/// Result type alias for loft operations.
pub type Result<T> = std::result::Result<T, LoftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_error_keeps_kind_and_parameter() {
        let err: LoftError = TransformError::degenerate("radius", "is zero").into();
        assert_eq!(err, LoftError::degenerate("radius", "is zero"));

        let err: LoftError = TransformError::configuration("twists", "must be at least 1").into();
        assert!(matches!(err, LoftError::Configuration { ref parameter, .. } if parameter == "twists"));
    }

    #[test]
    fn test_closure_mismatch_display() {
        let err = LoftError::ClosureMismatch {
            family: "spiral".to_string(),
            deviation: 5.0,
            tolerance: 1e-6,
        };
        let text = err.to_string();
        assert!(text.contains("spiral"));
        assert!(text.contains("5e0"));
    }

    #[test]
    fn test_invalid_profile_display() {
        let err = LoftError::invalid_profile("fewer than 3 points");
        assert_eq!(err.to_string(), "Invalid profile: fewer than 3 points");
    }
}
