use std::path::Path;

use reviewlens_classifier::LinearClassifier;
use reviewlens_core::config::ModelConfig;
use reviewlens_core::constants::LEADING_FEATURES;
use reviewlens_core::errors::ModelError;
use reviewlens_core::traits::{IClassifier, IEmbeddingLookup};
use reviewlens_embeddings::EmbeddingTable;
use tracing::info;

/// Embedding table and classifier, loaded once and shared read-only.
#[derive(Debug)]
pub struct ModelBundle {
    embeddings: EmbeddingTable,
    classifier: LinearClassifier,
}

impl ModelBundle {
    /// Pair a table and a classifier. The classifier must expect exactly
    /// `2 + k` features.
    pub fn new(embeddings: EmbeddingTable, classifier: LinearClassifier) -> Result<Self, ModelError> {
        let expected = LEADING_FEATURES + embeddings.dimensions();
        if classifier.input_width() != expected {
            return Err(ModelError::DimensionMismatch {
                expected,
                actual: classifier.input_width(),
            });
        }
        Ok(Self {
            embeddings,
            classifier,
        })
    }

    /// Load both artifacts from the configured paths.
    pub fn load(config: &ModelConfig) -> Result<Self, ModelError> {
        let embeddings = EmbeddingTable::load(&config.embeddings_path)?;
        let classifier = LinearClassifier::load(&config.classifier_path)?;
        let bundle = Self::new(embeddings, classifier)?;
        info!(
            vocab_size = bundle.embeddings.vocab_size(),
            dimensions = bundle.embeddings.dimensions(),
            "model bundle ready"
        );
        Ok(bundle)
    }

    /// Write both artifacts, creating parent directories as needed.
    pub fn save(&self, config: &ModelConfig) -> Result<(), ModelError> {
        for path in [&config.embeddings_path, &config.classifier_path] {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| ModelError::SaveFailed {
                        path: parent.display().to_string(),
                        reason: e.to_string(),
                    })?;
                }
            }
        }
        self.embeddings.save(&config.embeddings_path)?;
        self.classifier.save(&config.classifier_path)?;
        Ok(())
    }

    pub fn embeddings(&self) -> &EmbeddingTable {
        &self.embeddings
    }

    pub fn classifier(&self) -> &LinearClassifier {
        &self.classifier
    }

    pub fn vocab_size(&self) -> usize {
        self.embeddings.vocab_size()
    }

    pub fn dimensions(&self) -> usize {
        self.embeddings.dimensions()
    }
}
