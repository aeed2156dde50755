use super::error_code::{self, ErrorCode};
use super::ModelError;

/// Offline training errors.
#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("training corpus is empty")]
    EmptyCorpus,

    #[error("corpus read failed: {path}: {reason}")]
    CorpusReadFailed { path: String, reason: String },

    #[error("corpus is missing required column {column:?}")]
    MissingColumn { column: String },

    #[error("{features} feature vectors but {labels} labels")]
    LabelCountMismatch { features: usize, labels: usize },

    #[error("training needs both labels, found only {label}")]
    SingleClass { label: u8 },

    #[error("model artifact error: {0}")]
    Model(#[from] ModelError),
}

impl ErrorCode for TrainingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Model(e) => e.error_code(),
            _ => error_code::TRAINING_ERROR,
        }
    }
}
