//! # reviewlens-scraper
//!
//! Turns a product page URL into review rows. Tied to one page structure
//! (configurable CSS selectors); replaceable behind `IReviewScraper`.

pub mod extract;
pub mod fetch;
pub mod html_scraper;
pub mod language;
pub mod static_scraper;

pub use extract::ReviewExtractor;
pub use fetch::PageFetcher;
pub use html_scraper::HtmlReviewScraper;
pub use static_scraper::StaticReviewScraper;
