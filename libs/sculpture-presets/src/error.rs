//! # Preset Errors

use slice_loft::LoftError;
use std::fmt::Display;
use std::ops::RangeInclusive;
use sweep_transforms::TransformError;
use thiserror::Error;

/// Errors raised while resolving or building a preset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PresetError {
    /// A parameter lies outside the range the generator accepts
    #[error("Parameter `{parameter}` = {value} outside [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter
        parameter: String,
        /// Supplied value
        value: String,
        /// Lower bound
        min: String,
        /// Upper bound
        max: String,
    },

    /// The sweep itself failed
    #[error(transparent)]
    Loft(#[from] LoftError),
}

impl From<TransformError> for PresetError {
    fn from(err: TransformError) -> Self {
        Self::Loft(err.into())
    }
}

/// Result type alias for presets.
pub type Result<T> = std::result::Result<T, PresetError>;

/// Rejects `value` outside `range`. NaN is always outside.
pub(crate) fn check_range<T>(parameter: &str, value: T, range: &RangeInclusive<T>) -> Result<()>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        return Ok(());
    }
    Err(PresetError::OutOfRange {
        parameter: parameter.to_string(),
        value: value.to_string(),
        min: range.start().to_string(),
        max: range.end().to_string(),
    })
}
