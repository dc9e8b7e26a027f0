//! Structurally invalid parameters.

use super::error_code::{self, FabulaErrorCode};

/// Errors for parameters that are out of range or missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("{field} = {value} is out of range ({min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("{field} = {value} must be at least {min}")]
    TooSmall {
        field: &'static str,
        value: usize,
        min: usize,
    },

    #[error("{field} must not be empty")]
    EmptyInput { field: &'static str },
}

impl FabulaErrorCode for ArgumentError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_ARGUMENT
    }
}
