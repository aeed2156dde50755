use crate::errors::ModelError;
use crate::models::{FeatureVector, Prediction};

/// Binary decision over a feature vector.
pub trait IClassifier: Send + Sync {
    /// Number of features the decision boundary expects.
    fn input_width(&self) -> usize;

    /// Signed distance from the boundary. Positive means computer-generated.
    fn decision(&self, features: &FeatureVector) -> Result<f64, ModelError>;

    /// Class for `features`. Fails only on a width mismatch.
    fn classify(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
        let score = self.decision(features)?;
        Ok(if score > 0.0 {
            Prediction::Fake
        } else {
            Prediction::Real
        })
    }
}
