use serde::{Deserialize, Serialize};

use super::defaults;

/// Review scraper configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub user_agent: String,
    pub accept_language: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries after the first failed attempt.
    pub max_retries: u32,
    /// Initial backoff (doubles each retry).
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    /// CSS selector for one review block.
    pub review_selector: String,
    /// CSS selector for the review text inside a block.
    pub text_selector: String,
    /// CSS selector for the expanded text shown behind "Read more".
    pub full_text_selector: String,
    /// CSS selector for the rating inside a block.
    pub rating_selector: String,
    /// Drop reviews not detected as English.
    pub english_only: bool,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
            accept_language: defaults::DEFAULT_ACCEPT_LANGUAGE.to_string(),
            timeout_secs: defaults::DEFAULT_SCRAPE_TIMEOUT_SECS,
            max_retries: defaults::DEFAULT_SCRAPE_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_SCRAPE_INITIAL_BACKOFF_MS,
            max_backoff_ms: defaults::DEFAULT_SCRAPE_MAX_BACKOFF_MS,
            review_selector: defaults::DEFAULT_REVIEW_SELECTOR.to_string(),
            text_selector: defaults::DEFAULT_TEXT_SELECTOR.to_string(),
            full_text_selector: defaults::DEFAULT_FULL_TEXT_SELECTOR.to_string(),
            rating_selector: defaults::DEFAULT_RATING_SELECTOR.to_string(),
            english_only: defaults::DEFAULT_ENGLISH_ONLY,
        }
    }
}
