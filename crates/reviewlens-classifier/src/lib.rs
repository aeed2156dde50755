//! # reviewlens-classifier
//!
//! Linear decision boundary over feature vectors: `w·x + b > 0` is
//! computer-generated. Persisted as JSON, trained offline with Pegasos.

pub mod linear;
pub mod metrics;
pub mod pegasos;

pub use linear::LinearClassifier;
pub use metrics::{ClassificationMetrics, ConfusionMatrix};
pub use pegasos::{PegasosParams, PegasosTrainer};
