//! Symbol catalog errors.

use super::error_code::{self, FabulaErrorCode};

/// Errors raised while building a catalog or resolving codes against it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Every offending code, in the order it was referenced.
    #[error("Unknown codes in the active catalog: {}", codes.join(", "))]
    InvalidCodes { codes: Vec<String> },

    #[error("Catalog entry has an empty code")]
    EmptyCode,

    #[error("Duplicate catalog code: {code}")]
    DuplicateCode { code: String },

    #[error("Catalog parse error: {message}")]
    Parse { message: String },
}

impl FabulaErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCodes { .. } => error_code::INVALID_CODE,
            _ => error_code::CATALOG_ERROR,
        }
    }
}
