//! # reviewlens-text
//!
//! Review text normalizer. Applies the same eight ordered steps at training
//! and inference time:
//! lowercase/trim, symbol words, numeric magnitudes, contractions, markup,
//! spelling, emoji names, stopword removal with stemming.
//!
//! Normalization is total. A failing spelling provider degrades to the
//! uncorrected text and the recovery is recorded.

pub mod cache;
pub mod contractions;
pub mod degradation;
pub mod emoji;
pub mod engine;
pub mod lexical;
pub mod magnitudes;
pub mod markup;
pub mod spelling;
pub mod symbols;

pub use engine::TextNormalizer;
pub use spelling::{NorvigCorrector, PassthroughCorrector};
