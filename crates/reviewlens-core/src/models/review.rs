use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RATING;

/// Parse a rating field into a finite float.
///
/// Empty, non-numeric, `"N/A"` and non-finite (`NaN`, `inf`) values all
/// yield [`DEFAULT_RATING`]. Finite values pass through unclamped.
pub fn parse_rating(field: &str) -> f64 {
    match field.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => DEFAULT_RATING,
    }
}

/// One review as it enters the pipeline. Request-scoped and immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Text fed to the normalizer.
    pub raw_text: String,
    /// Always finite.
    pub rating: f64,
    /// Text echoed back in the result, untouched.
    pub original_text: String,
}

impl Review {
    /// Build a review from a text and an unparsed rating field.
    pub fn new(text: impl Into<String>, rating_field: &str) -> Self {
        Self::with_rating(text, parse_rating(rating_field))
    }

    /// Build a review from an already numeric rating.
    /// A non-finite rating is replaced by [`DEFAULT_RATING`].
    pub fn with_rating(text: impl Into<String>, rating: f64) -> Self {
        let text = text.into();
        Self {
            raw_text: text.clone(),
            rating: if rating.is_finite() {
                rating
            } else {
                DEFAULT_RATING
            },
            original_text: text,
        }
    }
}
