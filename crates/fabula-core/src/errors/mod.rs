//! Error handling for Fabula.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod argument_error;
pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod language_error;
pub mod readability_error;

pub use analysis_error::AnalysisError;
pub use argument_error::ArgumentError;
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::FabulaErrorCode;
pub use language_error::LanguageError;
pub use readability_error::ReadabilityError;
