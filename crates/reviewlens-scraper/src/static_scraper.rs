use reviewlens_core::errors::ScrapeError;
use reviewlens_core::models::ScrapedRow;
use reviewlens_core::traits::IReviewScraper;

/// Returns the same rows for every URL. For tests and offline demos.
#[derive(Debug, Clone, Default)]
pub struct StaticReviewScraper {
    rows: Vec<ScrapedRow>,
}

impl StaticReviewScraper {
    pub fn new(rows: Vec<ScrapedRow>) -> Self {
        Self { rows }
    }
}

impl IReviewScraper for StaticReviewScraper {
    fn scrape(&self, _url: &str) -> Result<Vec<ScrapedRow>, ScrapeError> {
        Ok(self.rows.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
