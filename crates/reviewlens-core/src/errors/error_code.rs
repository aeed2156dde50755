//! Structured error codes shared by every error enum.

/// Stable, machine-readable code for an error, used in logs and HTTP bodies.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "MODEL_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MODEL_LOAD_FAILED: &str = "MODEL_LOAD_FAILED";
pub const MODEL_INVALID: &str = "MODEL_INVALID";
pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
pub const FETCH_FAILED: &str = "FETCH_FAILED";
pub const INVALID_FORMAT: &str = "INVALID_FORMAT";
pub const SELECTOR_ERROR: &str = "SELECTOR_ERROR";
pub const TEXT_ERROR: &str = "TEXT_ERROR";
pub const TRAINING_ERROR: &str = "TRAINING_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const MISSING_URL: &str = "MISSING_URL";
pub const NO_REVIEWS: &str = "NO_REVIEWS";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
