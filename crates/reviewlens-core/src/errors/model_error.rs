use super::error_code::{self, ErrorCode};

/// Embedding table and classifier errors. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model load failed: {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("invalid model {path} at line {line}: {reason}")]
    InvalidFormat {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("model save failed: {path}: {reason}")]
    SaveFailed { path: String, reason: String },
}

impl ErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::LoadFailed { .. } => error_code::MODEL_LOAD_FAILED,
            Self::InvalidFormat { .. } => error_code::MODEL_INVALID,
            Self::DimensionMismatch { .. } => error_code::DIMENSION_MISMATCH,
            Self::SaveFailed { .. } => error_code::IO_ERROR,
        }
    }
}
