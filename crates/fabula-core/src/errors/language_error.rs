//! Language tag errors.

use super::error_code::{self, FabulaErrorCode};

/// Errors raised while parsing a language tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageError {
    #[error("Unsupported language: {tag} (expected \"italian\" or \"english\")")]
    Unsupported { tag: String },
}

impl FabulaErrorCode for LanguageError {
    fn error_code(&self) -> &'static str {
        error_code::UNSUPPORTED_LANGUAGE
    }
}
