//! Input validation errors.
//!
//! The engine functions never fail: division hazards resolve to zero
//! sentinels. Range checks live on the input records so the front end can
//! reject values before calling into the engine.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} = {value} is outside the allowed range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown {question} '{value}'. Valid: {expected}")]
    UnknownChoice {
        question: &'static str,
        value: String,
        expected: String,
    },
}

/// Check that `value` is finite and within `min..=max`.
pub(crate) fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    if value < min || value > max {
        return Err(InputError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
