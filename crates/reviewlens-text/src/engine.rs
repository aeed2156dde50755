use reviewlens_core::config::TextConfig;
use reviewlens_core::errors::TextError;
use reviewlens_core::models::DegradationEvent;
use reviewlens_core::traits::ISpellCorrector;
use tracing::{debug, warn};

use crate::cache::NormalizationCache;
use crate::contractions::expand_contractions;
use crate::degradation::DegradationTracker;
use crate::emoji::demojize;
use crate::lexical::LexicalReducer;
use crate::magnitudes::contract_magnitudes;
use crate::markup::strip_tags;
use crate::spelling::build_corrector;
use crate::symbols::spell_out_symbols;

/// Deterministic review text normalizer.
///
/// Shared read-only between training and inference so both see the same
/// token distribution. `normalize` never fails: a spelling provider error
/// keeps the uncorrected text and is recorded as a degradation.
pub struct TextNormalizer {
    max_chars: usize,
    speller: Box<dyn ISpellCorrector>,
    reducer: LexicalReducer,
    cache: Option<NormalizationCache>,
}

impl TextNormalizer {
    /// Build from config. Fails only when a configured dictionary cannot be loaded.
    pub fn new(config: &TextConfig) -> Result<Self, TextError> {
        let speller = build_corrector(config)?;
        Ok(Self::with_spell_corrector(config, speller))
    }

    /// Build with an explicit spelling provider.
    pub fn with_spell_corrector(config: &TextConfig, speller: Box<dyn ISpellCorrector>) -> Self {
        let cache = (config.cache_size > 0).then(|| NormalizationCache::new(config.cache_size));
        debug!(
            provider = speller.name(),
            reduction = ?config.lexical_reduction,
            cache_size = config.cache_size,
            "text normalizer ready"
        );
        Self {
            max_chars: config.max_review_chars,
            speller,
            reducer: LexicalReducer::new(config.lexical_reduction),
            cache,
        }
    }

    pub fn spelling_provider(&self) -> &str {
        self.speller.name()
    }

    /// Normalize raw review text.
    pub fn normalize(&self, raw: &str) -> String {
        self.normalize_with_tracking(raw).0
    }

    /// Normalize and return any local recoveries performed on the way.
    ///
    /// Degraded results are not cached, so a transient provider failure
    /// does not stick.
    pub fn normalize_with_tracking(&self, raw: &str) -> (String, Vec<DegradationEvent>) {
        let raw = self.truncate(raw);
        let key = self.cache.as_ref().map(|_| NormalizationCache::key(raw));
        if let (Some(cache), Some(key)) = (&self.cache, &key) {
            if let Some(hit) = cache.get(key) {
                return (hit, Vec::new());
            }
        }

        let mut tracker = DegradationTracker::new();
        let normalized = self.run_steps(raw, &mut tracker);

        if let (Some(cache), Some(key)) = (&self.cache, key) {
            if !tracker.has_degradations() {
                cache.insert(key, normalized.clone());
            }
        }
        (normalized, tracker.into_events())
    }

    fn run_steps(&self, raw: &str, tracker: &mut DegradationTracker) -> String {
        let text = raw.to_lowercase();
        let text = spell_out_symbols(text.trim());
        let text = contract_magnitudes(&text);
        let text = expand_contractions(&text);
        let text = strip_tags(&text);
        let text = match self.speller.correct(&text) {
            Ok(corrected) => corrected,
            Err(e) => {
                tracker.record("spelling", &e.to_string(), "uncorrected text");
                text
            }
        };
        let text = demojize(&text);
        self.reducer.reduce(&text)
    }

    fn truncate<'a>(&self, raw: &'a str) -> &'a str {
        match raw.char_indices().nth(self.max_chars) {
            Some((idx, _)) => {
                warn!(
                    max_chars = self.max_chars,
                    bytes = raw.len(),
                    "review text truncated before normalization"
                );
                &raw[..idx]
            }
            None => raw,
        }
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        let config = TextConfig::default();
        let speller = Box::new(crate::spelling::NorvigCorrector::builtin());
        Self::with_spell_corrector(&config, speller)
    }
}
