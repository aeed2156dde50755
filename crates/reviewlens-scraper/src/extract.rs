//! Review row extraction from a product page.

use std::sync::LazyLock;

use regex::Regex;
use reviewlens_core::config::ScraperConfig;
use reviewlens_core::constants::NOT_AVAILABLE;
use reviewlens_core::errors::ScrapeError;
use reviewlens_core::models::ScrapedRow;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::language::is_english;

static RE_RATING: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d+\.?\d*").ok());

/// Marker the page shows when the visible review text is cut short.
const READ_MORE: &str = "Read more";

/// Compiled selectors for one page structure.
pub struct ReviewExtractor {
    review: Selector,
    text: Selector,
    full_text: Option<Selector>,
    rating: Selector,
    english_only: bool,
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Text nodes of `el`, each trimmed, joined by single spaces.
fn element_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// First number in the rating text, else `"N/A"`.
pub fn extract_rating(text: &str) -> String {
    RE_RATING
        .as_ref()
        .and_then(|re| re.find(text))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

impl ReviewExtractor {
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let full_text = if config.full_text_selector.trim().is_empty() {
            None
        } else {
            Some(parse_selector(&config.full_text_selector)?)
        };
        Ok(Self {
            review: parse_selector(&config.review_selector)?,
            text: parse_selector(&config.text_selector)?,
            full_text,
            rating: parse_selector(&config.rating_selector)?,
            english_only: config.english_only,
        })
    }

    /// Rows in page order. Blocks without text, and non-English blocks when
    /// filtering is on, are skipped.
    pub fn extract(&self, html: &str) -> Vec<ScrapedRow> {
        let document = Html::parse_document(html);
        let mut rows = Vec::new();
        let mut blocks = 0usize;

        for block in document.select(&self.review) {
            blocks += 1;
            let mut text = block
                .select(&self.text)
                .next()
                .map(element_text)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());

            if text.contains(READ_MORE) {
                if let Some(full) = self
                    .full_text
                    .as_ref()
                    .and_then(|sel| block.select(sel).next())
                {
                    text = element_text(full);
                }
            }

            let rating = block
                .select(&self.rating)
                .next()
                .map(|el| extract_rating(&element_text(el)))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());

            if text == NOT_AVAILABLE || text.is_empty() {
                continue;
            }
            if self.english_only {
                match is_english(&text) {
                    Some(true) => {}
                    Some(false) => continue,
                    None => {
                        debug!(block = blocks, "language detection failed, skipping review");
                        continue;
                    }
                }
            }
            rows.push(ScrapedRow::new(rating, text));
        }

        info!(blocks, kept = rows.len(), "reviews extracted");
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_regex() {
        assert_eq!(extract_rating("4.5 out of 5 stars"), "4.5");
        assert_eq!(extract_rating("Rated 3 stars"), "3");
        assert_eq!(extract_rating("5."), "5.");
        assert_eq!(extract_rating("no stars"), "N/A");
    }

    #[test]
    fn invalid_selector_is_reported() {
        let config = ScraperConfig {
            review_selector: "[[[".to_string(),
            ..ScraperConfig::default()
        };
        assert!(matches!(
            ReviewExtractor::new(&config),
            Err(ScrapeError::InvalidSelector { .. })
        ));
    }
}
