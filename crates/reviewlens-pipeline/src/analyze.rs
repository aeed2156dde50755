//! Request boundary: URL in, classified reviews or a status-mapped error out.

use std::sync::Arc;

use reviewlens_core::errors::{error_code, ErrorCode, ModelError, ScrapeError};
use reviewlens_core::models::{ClassificationResult, Review};
use reviewlens_core::traits::IReviewScraper;
use reviewlens_text::TextNormalizer;
use serde::Deserialize;
use tracing::{info, warn};

use crate::models::ModelBundle;
use crate::pipeline::ReviewPipeline;

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// Request-boundary failures, each with a fixed HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("No URL provided")]
    MissingUrl,

    #[error("Failed to fetch reviews")]
    Fetch(#[source] ScrapeError),

    #[error("No reviews found")]
    NoReviews,

    #[error("Invalid reviews format")]
    InvalidFormat(#[source] ScrapeError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnalyzeError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingUrl | Self::InvalidFormat(_) => 400,
            Self::NoReviews => 404,
            Self::Fetch(_) => 502,
            Self::Internal(_) => 500,
        }
    }
}

impl ErrorCode for AnalyzeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingUrl => error_code::MISSING_URL,
            Self::Fetch(_) => error_code::FETCH_FAILED,
            Self::NoReviews => error_code::NO_REVIEWS,
            Self::InvalidFormat(_) => error_code::INVALID_FORMAT,
            Self::Internal(_) => error_code::INTERNAL_ERROR,
        }
    }
}

impl From<ScrapeError> for AnalyzeError {
    fn from(err: ScrapeError) -> Self {
        match err {
            ScrapeError::FetchFailed { .. } => Self::Fetch(err),
            ScrapeError::InvalidFormat { .. } => Self::InvalidFormat(err),
            ScrapeError::InvalidSelector { .. } => Self::Internal(err.to_string()),
        }
    }
}

impl From<ModelError> for AnalyzeError {
    fn from(err: ModelError) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Scrape, validate, classify. Holds only shared read-only state.
#[derive(Clone)]
pub struct AnalyzeService {
    scraper: Arc<dyn IReviewScraper>,
    normalizer: Arc<TextNormalizer>,
    models: Arc<ModelBundle>,
    max_reviews: usize,
}

impl AnalyzeService {
    pub fn new(
        scraper: Arc<dyn IReviewScraper>,
        normalizer: Arc<TextNormalizer>,
        models: Arc<ModelBundle>,
        max_reviews: usize,
    ) -> Self {
        Self {
            scraper,
            normalizer,
            models,
            max_reviews,
        }
    }

    pub fn models(&self) -> &ModelBundle {
        &self.models
    }

    /// Results are in scrape order. All rows are validated, then rows past
    /// `max_reviews` are dropped.
    pub fn analyze(&self, request: &AnalyzeRequest) -> Result<Vec<ClassificationResult>, AnalyzeError> {
        let url = match request.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url,
            _ => return Err(AnalyzeError::MissingUrl),
        };

        let rows = self.scraper.scrape(url).map_err(|e| {
            warn!(url, scraper = self.scraper.name(), error = %e.coded_string(), "scrape failed");
            AnalyzeError::from(e)
        })?;
        if rows.is_empty() {
            return Err(AnalyzeError::NoReviews);
        }

        // Every scraped row must be well formed, including the ones the cap drops.
        let mut reviews = rows
            .iter()
            .map(|row| row.to_review())
            .collect::<Result<Vec<Review>, _>>()
            .map_err(AnalyzeError::InvalidFormat)?;
        if reviews.len() > self.max_reviews {
            warn!(
                url,
                scraped = reviews.len(),
                max_reviews = self.max_reviews,
                "dropping reviews past the per-request cap"
            );
            reviews.truncate(self.max_reviews);
        }

        let results = ReviewPipeline::new(&self.normalizer, &self.models).classify_batch(&reviews)?;
        info!(url, reviews = results.len(), "analysis complete");
        Ok(results)
    }
}
