use reviewlens_core::constants::DEFAULT_RATING;
use reviewlens_core::models::FeatureVector;
use reviewlens_core::traits::IEmbeddingLookup;

/// Maps normalized text and a rating to `[rating, token_count, mean embedding]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Output width is always `2 + embeddings.dimensions()`. Tokens missing
    /// from the table are counted but not averaged; with no match the
    /// embedding part is all zeros.
    pub fn extract<E>(&self, normalized: &str, rating: f64, embeddings: &E) -> FeatureVector
    where
        E: IEmbeddingLookup + ?Sized,
    {
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        let (mean, _) = embeddings.average(&tokens);
        let rating = if rating.is_finite() {
            rating
        } else {
            DEFAULT_RATING
        };
        FeatureVector::new(rating, tokens.len(), &mean)
    }
}
