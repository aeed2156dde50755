mod classification;
mod degradation_event;
mod feature_vector;
mod prediction;
mod review;
mod scraped_row;

pub use classification::ClassificationResult;
pub use degradation_event::DegradationEvent;
pub use feature_vector::FeatureVector;
pub use prediction::Prediction;
pub use review::{parse_rating, Review};
pub use scraped_row::ScrapedRow;
