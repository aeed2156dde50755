//! Linear classifier and its JSON model file.
//!
//! ```json
//! { "algorithm": "linear_svm", "input_width": 102, "weights": [...], "intercept": -0.4 }
//! ```

use std::path::Path;

use reviewlens_core::errors::ModelError;
use reviewlens_core::models::FeatureVector;
use reviewlens_core::traits::IClassifier;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const ALGORITHM: &str = "linear_svm";

#[derive(Debug, Serialize, Deserialize)]
struct ModelFile {
    algorithm: String,
    input_width: usize,
    weights: Vec<f64>,
    intercept: f64,
}

/// Immutable linear decision boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearClassifier {
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearClassifier {
    /// Weights must be non-empty and every parameter finite.
    pub fn new(weights: Vec<f64>, intercept: f64) -> Result<Self, ModelError> {
        if weights.is_empty() {
            return Err(invalid("<memory>", "weights must not be empty"));
        }
        if !intercept.is_finite() || weights.iter().any(|w| !w.is_finite()) {
            return Err(invalid("<memory>", "parameters must be finite"));
        }
        Ok(Self { weights, intercept })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let label = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|e| ModelError::LoadFailed {
            path: label.clone(),
            reason: e.to_string(),
        })?;
        let model = Self::from_json(&json, &label)?;
        info!(path = %label, input_width = model.input_width(), "classifier loaded");
        Ok(model)
    }

    /// Parse a model file body. `label` names the source in errors.
    pub fn from_json(json: &str, label: &str) -> Result<Self, ModelError> {
        let file: ModelFile =
            serde_json::from_str(json).map_err(|e| invalid(label, &e.to_string()))?;
        if file.algorithm != ALGORITHM {
            return Err(invalid(
                label,
                &format!("unsupported algorithm {:?}", file.algorithm),
            ));
        }
        if file.weights.len() != file.input_width {
            return Err(invalid(
                label,
                &format!(
                    "input_width is {} but {} weights given",
                    file.input_width,
                    file.weights.len()
                ),
            ));
        }
        Self::new(file.weights, file.intercept).map_err(|e| match e {
            ModelError::InvalidFormat { reason, .. } => invalid(label, &reason),
            other => other,
        })
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        let file = ModelFile {
            algorithm: ALGORITHM.to_string(),
            input_width: self.weights.len(),
            weights: self.weights.clone(),
            intercept: self.intercept,
        };
        serde_json::to_string_pretty(&file).map_err(|e| ModelError::SaveFailed {
            path: "<memory>".to_string(),
            reason: e.to_string(),
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| ModelError::SaveFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

fn invalid(path: &str, reason: &str) -> ModelError {
    ModelError::InvalidFormat {
        path: path.to_string(),
        line: 0,
        reason: reason.to_string(),
    }
}

impl IClassifier for LinearClassifier {
    fn input_width(&self) -> usize {
        self.weights.len()
    }

    fn decision(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        if features.len() != self.weights.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }
        let dot: f64 = self
            .weights
            .iter()
            .zip(features.as_slice())
            .map(|(w, x)| w * x)
            .sum();
        Ok(dot + self.intercept)
    }
}
