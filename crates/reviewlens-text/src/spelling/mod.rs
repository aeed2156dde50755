//! Spelling correction providers.

mod norvig;
mod passthrough;

use reviewlens_core::config::{SpellingProvider, TextConfig};
use reviewlens_core::errors::TextError;
use reviewlens_core::traits::ISpellCorrector;

pub use norvig::NorvigCorrector;
pub use passthrough::PassthroughCorrector;

/// Build the provider selected by `config`.
///
/// `dictionary_path` replaces the built-in frequency list; an unreadable or
/// empty file is an error.
pub fn build_corrector(config: &TextConfig) -> Result<Box<dyn ISpellCorrector>, TextError> {
    match config.spelling_provider {
        SpellingProvider::None => Ok(Box::new(PassthroughCorrector)),
        SpellingProvider::Norvig => match &config.dictionary_path {
            Some(path) => Ok(Box::new(NorvigCorrector::from_path(path)?)),
            None => Ok(Box::new(NorvigCorrector::builtin())),
        },
    }
}
