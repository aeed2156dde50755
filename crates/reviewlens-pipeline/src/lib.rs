//! # reviewlens-pipeline
//!
//! raw text → normalizer → feature extractor → classifier → label.
//!
//! Models live in an immutable [`ModelBundle`] passed by reference; every
//! request-scoped value is owned by its request.

pub mod analyze;
pub mod features;
pub mod models;
pub mod pipeline;
pub mod training;

pub use analyze::{AnalyzeError, AnalyzeRequest, AnalyzeService};
pub use features::FeatureExtractor;
pub use models::ModelBundle;
pub use pipeline::ReviewPipeline;
pub use training::{read_corpus, train_from_csv, train_models, LabelledReview, TrainingOutcome};
