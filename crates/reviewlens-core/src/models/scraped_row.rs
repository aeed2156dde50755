use serde::{Deserialize, Serialize};

use super::Review;
use crate::errors::ScrapeError;

/// One row as handed over by a scraper. Both fields are required;
/// a `None` is a schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrapedRow {
    #[serde(rename = "Rating")]
    pub rating: Option<String>,
    #[serde(rename = "Review Text")]
    pub review_text: Option<String>,
}

impl ScrapedRow {
    pub fn new(rating: impl Into<String>, review_text: impl Into<String>) -> Self {
        Self {
            rating: Some(rating.into()),
            review_text: Some(review_text.into()),
        }
    }

    /// Convert to a [`Review`], parsing the rating field.
    pub fn to_review(&self) -> Result<Review, ScrapeError> {
        match (&self.rating, &self.review_text) {
            (Some(rating), Some(text)) => Ok(Review::new(text.as_str(), rating)),
            (None, _) => Err(ScrapeError::InvalidFormat {
                reason: "row is missing the Rating field".to_string(),
            }),
            (_, None) => Err(ScrapeError::InvalidFormat {
                reason: "row is missing the Review Text field".to_string(),
            }),
        }
    }
}
