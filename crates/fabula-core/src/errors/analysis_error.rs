//! Aggregate error for operations that span several subsystems.

use super::error_code::FabulaErrorCode;
use super::{ArgumentError, CatalogError, ConfigError, LanguageError, ReadabilityError};

/// Errors surfaced by workbench operations.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid argument: {0}")]
    Argument(#[from] ArgumentError),

    #[error("Readability error: {0}")]
    Readability(#[from] ReadabilityError),

    #[error("Language error: {0}")]
    Language(#[from] LanguageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl FabulaErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(e) => e.error_code(),
            Self::Argument(e) => e.error_code(),
            Self::Readability(e) => e.error_code(),
            Self::Language(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
