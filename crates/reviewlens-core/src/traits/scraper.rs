use crate::errors::ScrapeError;
use crate::models::ScrapedRow;

/// Fetches review rows for a product page URL.
pub trait IReviewScraper: Send + Sync {
    /// Rows in page order. An empty vector means the page had no reviews.
    fn scrape(&self, url: &str) -> Result<Vec<ScrapedRow>, ScrapeError>;

    /// Human-readable scraper name.
    fn name(&self) -> &str;
}
