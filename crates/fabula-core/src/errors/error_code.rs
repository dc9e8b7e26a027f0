//! FabulaErrorCode trait for the presentation boundary.

/// Stable error code strings for whatever layer surfaces errors to the user.
pub trait FabulaErrorCode {
    /// Returns the error code string (e.g., "INVALID_CODE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_CODE: &str = "INVALID_CODE";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const DIVISION_GUARD: &str = "DIVISION_GUARD";
pub const UNSUPPORTED_LANGUAGE: &str = "UNSUPPORTED_LANGUAGE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
