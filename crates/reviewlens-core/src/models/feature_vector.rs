use serde::{Deserialize, Serialize};

use crate::constants::LEADING_FEATURES;

/// `[rating, token_count, emb_0 .. emb_{k-1}]`, always `2 + k` wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    /// Assemble a vector from its three parts.
    pub fn new(rating: f64, token_count: usize, embedding: &[f32]) -> Self {
        let mut values = Vec::with_capacity(LEADING_FEATURES + embedding.len());
        values.push(rating);
        values.push(token_count as f64);
        values.extend(embedding.iter().map(|&v| f64::from(v)));
        Self(values)
    }

    pub fn rating(&self) -> f64 {
        self.0[0]
    }

    pub fn token_count(&self) -> f64 {
        self.0[1]
    }

    pub fn embedding(&self) -> &[f64] {
        &self.0[LEADING_FEATURES..]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a vector built with [`FeatureVector::new`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}
