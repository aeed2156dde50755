use std::sync::Arc;

use reviewlens_core::errors::ReviewLensResult;
use reviewlens_core::traits::IReviewScraper;
use reviewlens_core::ReviewLensConfig;
use reviewlens_pipeline::{AnalyzeService, ModelBundle};
use reviewlens_text::TextNormalizer;
use tracing::info;

/// Load the models and the normalizer described by `config` and wire them to
/// `scraper`. Any failure here is fatal for the server.
pub fn build_service(
    config: &ReviewLensConfig,
    scraper: Arc<dyn IReviewScraper>,
) -> ReviewLensResult<AnalyzeService> {
    let models = ModelBundle::load(&config.model)?;
    let normalizer = TextNormalizer::new(&config.text)?;
    info!(
        scraper = scraper.name(),
        spelling = normalizer.spelling_provider(),
        max_reviews = config.server.max_reviews,
        "analyze service ready"
    );
    Ok(AnalyzeService::new(
        scraper,
        Arc::new(normalizer),
        Arc::new(models),
        config.server.max_reviews,
    ))
}
