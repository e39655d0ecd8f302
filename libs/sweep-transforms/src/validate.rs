//! Parameter checks shared by the built-in families.
//!
//! Each helper names the offending parameter in the error it returns and
//! never adjusts the value.

use crate::error::{Result, TransformError};

/// Rejects NaN and infinities.
pub fn require_finite(parameter: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TransformError::configuration(
            parameter,
            format!("must be finite, got {value}"),
        ))
    }
}

/// Finite and not negative. Zero passes.
pub fn require_non_negative(parameter: &str, value: f64) -> Result<()> {
    require_finite(parameter, value)?;
    if value < 0.0 {
        return Err(TransformError::configuration(
            parameter,
            format!("must not be negative, got {value}"),
        ));
    }
    Ok(())
}

/// A length that spans the sweep: negative is a configuration error, zero
/// collapses the geometry.
///
/// # Example
///
/// ```rust
/// use sweep_transforms::validate::require_extent;
/// use sweep_transforms::TransformError;
///
/// assert!(require_extent("radius", 40.0).is_ok());
/// assert!(matches!(
///     require_extent("radius", 0.0),
///     Err(TransformError::DegenerateGeometry { .. })
/// ));
/// assert!(matches!(
///     require_extent("radius", -1.0),
///     Err(TransformError::Configuration { .. })
/// ));
/// ```
pub fn require_extent(parameter: &str, value: f64) -> Result<()> {
    require_non_negative(parameter, value)?;
    if value == 0.0 {
        return Err(TransformError::degenerate(
            parameter,
            "is zero, the sweep collapses",
        ));
    }
    Ok(())
}

/// Integer lower bound, reported as a configuration error.
pub fn require_at_least(parameter: &str, value: u32, minimum: u32) -> Result<()> {
    if value < minimum {
        return Err(TransformError::configuration(
            parameter,
            format!("must be at least {minimum}, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_finite() {
        assert!(require_finite("twist", -3.0).is_ok());
        let err = require_finite("twist", f64::NAN).unwrap_err();
        assert_eq!(err.parameter(), "twist");
        assert!(matches!(err, TransformError::Configuration { .. }));
        assert!(require_finite("twist", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_non_negative_accepts_zero() {
        assert!(require_non_negative("amplitude", 0.0).is_ok());
        assert!(require_non_negative("amplitude", -0.5).is_err());
    }

    #[test]
    fn test_require_extent_zero_is_degenerate() {
        let err = require_extent("height", 0.0).unwrap_err();
        assert!(matches!(err, TransformError::DegenerateGeometry { .. }));
        assert_eq!(err.parameter(), "height");
    }

    #[test]
    fn test_require_at_least() {
        assert!(require_at_least("twists", 1, 1).is_ok());
        let err = require_at_least("twists", 0, 1).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }
}
