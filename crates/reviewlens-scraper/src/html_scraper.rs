use reviewlens_core::config::ScraperConfig;
use reviewlens_core::errors::ScrapeError;
use reviewlens_core::models::ScrapedRow;
use reviewlens_core::traits::IReviewScraper;
use tracing::info;

use crate::extract::ReviewExtractor;
use crate::fetch::PageFetcher;

/// Fetches a product page and extracts its review rows.
pub struct HtmlReviewScraper {
    fetcher: PageFetcher,
    extractor: ReviewExtractor,
}

impl HtmlReviewScraper {
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            fetcher: PageFetcher::new(config)?,
            extractor: ReviewExtractor::new(config)?,
        })
    }
}

impl IReviewScraper for HtmlReviewScraper {
    fn scrape(&self, url: &str) -> Result<Vec<ScrapedRow>, ScrapeError> {
        let body = self.fetcher.fetch(url)?;
        info!(url, bytes = body.len(), "page fetched");
        Ok(self.extractor.extract(&body))
    }

    fn name(&self) -> &str {
        "html"
    }
}
