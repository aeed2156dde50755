use super::error_code::{self, ErrorCode};

/// Text normalizer errors. Only provider construction surfaces these;
/// per-review failures are recovered locally by the normalizer.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("dictionary load failed: {path}: {reason}")]
    DictionaryLoadFailed { path: String, reason: String },

    #[error("spelling correction failed: {reason}")]
    SpellingFailed { reason: String },
}

impl ErrorCode for TextError {
    fn error_code(&self) -> &'static str {
        error_code::TEXT_ERROR
    }
}
