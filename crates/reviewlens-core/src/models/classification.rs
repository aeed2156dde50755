use serde::{Deserialize, Serialize};

use super::Prediction;

/// One output row, in the wire shape returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "Review")]
    pub original_text: String,
    #[serde(rename = "Rating")]
    pub rating: f64,
    #[serde(rename = "Prediction")]
    pub prediction: Prediction,
}
