#![allow(dead_code)]

use reviewlens_classifier::LinearClassifier;
use reviewlens_core::config::TextConfig;
use reviewlens_embeddings::EmbeddingTable;
use reviewlens_pipeline::ModelBundle;
use reviewlens_text::{PassthroughCorrector, TextNormalizer};

/// Normalizer without spelling correction so test tokens stay predictable.
pub fn normalizer() -> TextNormalizer {
    TextNormalizer::with_spell_corrector(&TextConfig::default(), Box::new(PassthroughCorrector))
}

/// Two-dimensional table where "robot" points one way and "human" the other.
pub fn table() -> EmbeddingTable {
    EmbeddingTable::from_entries(
        2,
        vec![
            ("robot".to_string(), vec![1.0, 0.0]),
            ("human".to_string(), vec![-1.0, 0.0]),
        ],
    )
    .unwrap()
}

/// Decides on the first embedding component only.
pub fn bundle() -> ModelBundle {
    let classifier = LinearClassifier::new(vec![0.0, 0.0, 1.0, 0.0], 0.0).unwrap();
    ModelBundle::new(table(), classifier).unwrap()
}
