use super::error_code::{self, ErrorCode};
use super::{ConfigError, ModelError, ScrapeError, TextError, TrainingError};

/// Top-level error aggregating all subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ReviewLensError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("scrape error: {0}")]
    Scrape(#[from] ScrapeError),

    #[error("text error: {0}")]
    Text(#[from] TextError),

    #[error("training error: {0}")]
    Training(#[from] TrainingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ReviewLensResult<T> = Result<T, ReviewLensError>;

impl ErrorCode for ReviewLensError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Model(e) => e.error_code(),
            Self::Scrape(e) => e.error_code(),
            Self::Text(e) => e.error_code(),
            Self::Training(e) => e.error_code(),
            Self::Io(_) | Self::Serialization(_) => error_code::IO_ERROR,
        }
    }
}
