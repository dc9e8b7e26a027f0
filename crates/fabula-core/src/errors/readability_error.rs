//! Readability scoring errors.

use super::error_code::{self, FabulaErrorCode};

/// Errors raised by the readability scorer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadabilityError {
    #[error("Cannot score a text unit with zero {counted}")]
    DivisionGuard { counted: &'static str },
}

impl FabulaErrorCode for ReadabilityError {
    fn error_code(&self) -> &'static str {
        error_code::DIVISION_GUARD
    }
}
