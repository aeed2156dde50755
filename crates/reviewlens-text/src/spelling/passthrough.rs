use reviewlens_core::errors::TextError;
use reviewlens_core::traits::ISpellCorrector;

/// Leaves text unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughCorrector;

impl ISpellCorrector for PassthroughCorrector {
    fn correct(&self, text: &str) -> Result<String, TextError> {
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "none"
    }
}
