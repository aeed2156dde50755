//! Pegasos-style stochastic sub-gradient trainer for a hinge-loss linear SVM.
//!
//! Features are standardized internally and the scaling is folded back into
//! the returned weights, so the model consumes raw feature vectors. The step
//! size is `1 / (lambda * (t + t0))` with `t0 = 1 / lambda`, which starts at 1
//! and keeps the unregularized intercept stable.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use reviewlens_core::config::ModelConfig;
use reviewlens_core::errors::{ModelError, TrainingError};
use reviewlens_core::models::{FeatureVector, Prediction};
use tracing::{debug, info};

use crate::linear::LinearClassifier;

#[derive(Debug, Clone, PartialEq)]
pub struct PegasosParams {
    /// L2 regularization strength. Must be positive.
    pub lambda: f64,
    pub epochs: usize,
    pub seed: u64,
}

impl Default for PegasosParams {
    fn default() -> Self {
        Self::from(&ModelConfig::default())
    }
}

impl From<&ModelConfig> for PegasosParams {
    fn from(config: &ModelConfig) -> Self {
        Self {
            lambda: config.svm_lambda,
            epochs: config.svm_epochs,
            seed: config.seed,
        }
    }
}

pub struct PegasosTrainer {
    params: PegasosParams,
}

/// Per-feature mean and standard deviation. Constant features get scale 1.
struct Standardizer {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl Standardizer {
    fn fit(rows: &[&[f64]], width: usize) -> Self {
        let n = rows.len() as f64;
        let mut mean = vec![0.0; width];
        for row in rows {
            for (m, x) in mean.iter_mut().zip(row.iter()) {
                *m += x / n;
            }
        }
        let mut var = vec![0.0; width];
        for row in rows {
            for ((v, x), m) in var.iter_mut().zip(row.iter()).zip(&mean) {
                *v += (x - m) * (x - m) / n;
            }
        }
        let scale = var
            .into_iter()
            .map(|v| {
                let sd = v.sqrt();
                if sd > 1e-12 {
                    sd
                } else {
                    1.0
                }
            })
            .collect();
        Self { mean, scale }
    }

    fn transform(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .zip(&self.mean)
            .zip(&self.scale)
            .map(|((x, m), s)| (x - m) / s)
            .collect()
    }
}

impl PegasosTrainer {
    pub fn new(params: PegasosParams) -> Self {
        Self { params }
    }

    pub fn train(
        &self,
        features: &[FeatureVector],
        labels: &[Prediction],
    ) -> Result<LinearClassifier, TrainingError> {
        if features.is_empty() {
            return Err(TrainingError::EmptyCorpus);
        }
        if features.len() != labels.len() {
            return Err(TrainingError::LabelCountMismatch {
                features: features.len(),
                labels: labels.len(),
            });
        }
        let width = features[0].len();
        if let Some(bad) = features.iter().find(|f| f.len() != width) {
            return Err(ModelError::DimensionMismatch {
                expected: width,
                actual: bad.len(),
            }
            .into());
        }
        let first = labels[0];
        if labels.iter().all(|&l| l == first) {
            return Err(TrainingError::SingleClass {
                label: first.class(),
            });
        }

        let lambda = self.params.lambda;
        let rows: Vec<&[f64]> = features.iter().map(FeatureVector::as_slice).collect();
        let standardizer = Standardizer::fit(&rows, width);
        let xs: Vec<Vec<f64>> = rows.iter().map(|r| standardizer.transform(r)).collect();
        let ys: Vec<f64> = labels
            .iter()
            .map(|l| match l {
                Prediction::Fake => 1.0,
                Prediction::Real => -1.0,
            })
            .collect();

        info!(
            samples = xs.len(),
            width,
            lambda,
            epochs = self.params.epochs,
            "training linear svm"
        );

        let mut rng = StdRng::seed_from_u64(self.params.seed);
        let mut order: Vec<usize> = (0..xs.len()).collect();
        let mut w = vec![0.0f64; width];
        let mut b = 0.0f64;
        let t0 = 1.0 / lambda;
        let mut t = 0.0f64;

        for epoch in 0..self.params.epochs.max(1) {
            order.shuffle(&mut rng);
            let mut violations = 0usize;
            for &i in &order {
                let eta = 1.0 / (lambda * (t + t0));
                t += 1.0;
                let x = &xs[i];
                let y = ys[i];
                let margin = y * (dot(&w, x) + b);
                let shrink = 1.0 - eta * lambda;
                w.iter_mut().for_each(|wj| *wj *= shrink);
                if margin < 1.0 {
                    violations += 1;
                    for (wj, xj) in w.iter_mut().zip(x) {
                        *wj += eta * y * xj;
                    }
                    b += eta * y;
                }
            }
            debug!(epoch, violations, "svm epoch complete");
        }

        // Fold standardization: w·((x - m) / s) + b = (w / s)·x + (b - Σ w m / s)
        let mut weights = Vec::with_capacity(width);
        let mut intercept = b;
        for ((wj, m), s) in w.iter().zip(&standardizer.mean).zip(&standardizer.scale) {
            weights.push(wj / s);
            intercept -= wj * m / s;
        }
        Ok(LinearClassifier::new(weights, intercept)?)
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standardizer_handles_constant_columns() {
        let a = [1.0, 5.0];
        let b = [3.0, 5.0];
        let rows: [&[f64]; 2] = [&a, &b];
        let s = Standardizer::fit(&rows, 2);
        assert_eq!(s.mean, vec![2.0, 5.0]);
        assert_eq!(s.scale, vec![1.0, 1.0]);
        assert_eq!(s.transform(&a), vec![-1.0, 0.0]);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        let trainer = PegasosTrainer::new(PegasosParams::default());
        assert!(matches!(trainer.train(&[], &[]), Err(TrainingError::EmptyCorpus)));

        let f = vec![FeatureVector::new(1.0, 1, &[0.0]); 2];
        assert!(matches!(
            trainer.train(&f, &[Prediction::Fake]),
            Err(TrainingError::LabelCountMismatch { .. })
        ));
        assert!(matches!(
            trainer.train(&f, &[Prediction::Fake, Prediction::Fake]),
            Err(TrainingError::SingleClass { label: 1 })
        ));
    }
}
