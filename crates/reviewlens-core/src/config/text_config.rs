use serde::{Deserialize, Serialize};

use super::defaults;

/// Which spelling-correction provider the normalizer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpellingProvider {
    /// Frequency-ranked edit-distance corrector.
    #[default]
    Norvig,
    /// Leave text unchanged.
    None,
}

/// Final lexical reduction applied after stopword removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LexicalReduction {
    /// Snowball stem. Matches the input distribution of trained models.
    #[default]
    Stem,
    /// Dictionary lemma. Models must be retrained after switching.
    Lemma,
}

/// Text normalizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Raw text is truncated to this many chars before normalization.
    pub max_review_chars: usize,
    /// Normalization cache max entries. 0 disables the cache.
    pub cache_size: u64,
    /// Spelling-correction provider.
    pub spelling_provider: SpellingProvider,
    /// Optional `word count` frequency file replacing the built-in dictionary.
    pub dictionary_path: Option<String>,
    /// Stem (default) or lemma.
    pub lexical_reduction: LexicalReduction,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            max_review_chars: defaults::DEFAULT_MAX_REVIEW_CHARS,
            cache_size: defaults::DEFAULT_NORMALIZATION_CACHE_SIZE,
            spelling_provider: SpellingProvider::default(),
            dictionary_path: None,
            lexical_reduction: LexicalReduction::default(),
        }
    }
}
