use crate::errors::TextError;

/// Spelling correction provider used by the normalizer.
pub trait ISpellCorrector: Send + Sync {
    /// Correct `text`. On error the normalizer keeps the input unchanged.
    fn correct(&self, text: &str) -> Result<String, TextError>;

    fn name(&self) -> &str;
}
