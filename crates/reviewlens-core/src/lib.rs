//! # reviewlens-core
//!
//! Foundation crate for reviewlens.
//! Defines the review data model, the collaborator traits, errors, config,
//! constants and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ReviewLensConfig;
pub use errors::{ReviewLensError, ReviewLensResult};
pub use models::{ClassificationResult, FeatureVector, Prediction, Review, ScrapedRow};
