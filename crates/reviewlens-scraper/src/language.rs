//! English language filter.

use whatlang::Lang;

/// `Some(true)` if `text` is detected as English, `None` if detection fails.
pub fn is_english(text: &str) -> Option<bool> {
    whatlang::detect(text).map(|info| info.lang() == Lang::Eng)
}
