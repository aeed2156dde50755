use super::error_code::{self, ErrorCode};

/// Scraper collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("fetch failed for {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("invalid reviews format: {reason}")]
    InvalidFormat { reason: String },

    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

impl ErrorCode for ScrapeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FetchFailed { .. } => error_code::FETCH_FAILED,
            Self::InvalidFormat { .. } => error_code::INVALID_FORMAT,
            Self::InvalidSelector { .. } => error_code::SELECTOR_ERROR,
        }
    }
}
