use serde::{Deserialize, Serialize};

use super::defaults;

/// Model artifact locations and offline training parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Embedding table in word2vec text format.
    pub embeddings_path: String,
    /// Linear classifier JSON file.
    pub classifier_path: String,
    /// Embedding dimensions produced by the trainer.
    pub dimensions: usize,
    /// Skip-gram context window.
    pub window: usize,
    /// Minimum token frequency kept in the vocabulary.
    pub min_count: usize,
    /// Word2vec training epochs.
    pub epochs: usize,
    /// Negative samples per context pair.
    pub negative_samples: usize,
    /// SVM L2 regularization strength.
    pub svm_lambda: f64,
    /// SVM training epochs.
    pub svm_epochs: usize,
    /// RNG seed shared by both trainers.
    pub seed: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            embeddings_path: defaults::DEFAULT_EMBEDDINGS_PATH.to_string(),
            classifier_path: defaults::DEFAULT_CLASSIFIER_PATH.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            window: defaults::DEFAULT_WORD2VEC_WINDOW,
            min_count: defaults::DEFAULT_WORD2VEC_MIN_COUNT,
            epochs: defaults::DEFAULT_WORD2VEC_EPOCHS,
            negative_samples: defaults::DEFAULT_WORD2VEC_NEGATIVE_SAMPLES,
            svm_lambda: defaults::DEFAULT_SVM_LAMBDA,
            svm_epochs: defaults::DEFAULT_SVM_EPOCHS,
            seed: defaults::DEFAULT_TRAINING_SEED,
        }
    }
}
