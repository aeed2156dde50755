use reviewlens_core::errors::ModelError;
use reviewlens_core::models::{ClassificationResult, FeatureVector, Review};
use reviewlens_core::traits::IClassifier;
use reviewlens_text::TextNormalizer;
use tracing::debug;

use crate::features::FeatureExtractor;
use crate::models::ModelBundle;

/// Per-review classification over borrowed, immutable models.
#[derive(Clone, Copy)]
pub struct ReviewPipeline<'a> {
    normalizer: &'a TextNormalizer,
    models: &'a ModelBundle,
    extractor: FeatureExtractor,
}

impl<'a> ReviewPipeline<'a> {
    pub fn new(normalizer: &'a TextNormalizer, models: &'a ModelBundle) -> Self {
        Self {
            normalizer,
            models,
            extractor: FeatureExtractor::new(),
        }
    }

    pub fn features(&self, review: &Review) -> FeatureVector {
        let normalized = self.normalizer.normalize(&review.raw_text);
        self.extractor
            .extract(&normalized, review.rating, self.models.embeddings())
    }

    /// Classify one review. Fails only on a feature width mismatch.
    pub fn classify_review(&self, review: &Review) -> Result<ClassificationResult, ModelError> {
        let features = self.features(review);
        let prediction = self.models.classifier().classify(&features)?;
        Ok(ClassificationResult {
            original_text: review.original_text.clone(),
            rating: review.rating,
            prediction,
        })
    }

    /// One result per review, same order. Empty input gives an empty vector.
    /// The first error aborts the batch.
    pub fn classify_batch(&self, reviews: &[Review]) -> Result<Vec<ClassificationResult>, ModelError> {
        let results = reviews
            .iter()
            .map(|r| self.classify_review(r))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = results.len(), "batch classified");
        Ok(results)
    }
}
