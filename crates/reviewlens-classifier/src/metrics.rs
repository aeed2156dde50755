//! Binary classification metrics. The positive class is computer-generated.

use std::fmt;

use reviewlens_core::models::Prediction;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ConfusionMatrix {
    pub tp: usize,
    pub tn: usize,
    pub fp: usize,
    pub fn_: usize,
}

impl ConfusionMatrix {
    /// Pairs beyond the shorter slice are ignored.
    pub fn from_predictions(actual: &[Prediction], predicted: &[Prediction]) -> Self {
        let mut m = Self::default();
        for (&a, &p) in actual.iter().zip(predicted) {
            match (a, p) {
                (Prediction::Fake, Prediction::Fake) => m.tp += 1,
                (Prediction::Real, Prediction::Real) => m.tn += 1,
                (Prediction::Real, Prediction::Fake) => m.fp += 1,
                (Prediction::Fake, Prediction::Real) => m.fn_ += 1,
            }
        }
        m
    }

    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "              predicted real  predicted fake")?;
        writeln!(f, "actual real   {:>14}  {:>14}", self.tn, self.fp)?;
        write!(f, "actual fake   {:>14}  {:>14}", self.fn_, self.tp)
    }
}

/// Summary metrics. Undefined ratios (zero denominators) are reported as 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationMetrics {
    pub confusion_matrix: ConfusionMatrix,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

impl ClassificationMetrics {
    pub fn from_confusion_matrix(cm: ConfusionMatrix) -> Self {
        let accuracy = ratio(cm.tp + cm.tn, cm.total());
        let precision = ratio(cm.tp, cm.tp + cm.fp);
        let recall = ratio(cm.tp, cm.tp + cm.fn_);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self {
            confusion_matrix: cm,
            accuracy,
            precision,
            recall,
            f1,
        }
    }

    pub fn calculate(actual: &[Prediction], predicted: &[Prediction]) -> Self {
        Self::from_confusion_matrix(ConfusionMatrix::from_predictions(actual, predicted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Prediction::{Fake, Real};

    #[test]
    fn counts_each_cell() {
        let actual = [Fake, Fake, Real, Real, Fake];
        let predicted = [Fake, Real, Real, Fake, Fake];
        let cm = ConfusionMatrix::from_predictions(&actual, &predicted);
        assert_eq!(cm, ConfusionMatrix { tp: 2, tn: 1, fp: 1, fn_: 1 });
    }

    #[test]
    fn metrics_values() {
        let m = ClassificationMetrics::from_confusion_matrix(ConfusionMatrix {
            tp: 2,
            tn: 1,
            fp: 1,
            fn_: 1,
        });
        assert!((m.accuracy - 0.6).abs() < 1e-12);
        assert!((m.precision - 2.0 / 3.0).abs() < 1e-12);
        assert!((m.recall - 2.0 / 3.0).abs() < 1e-12);
        assert!((m.f1 - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_is_all_zero() {
        let m = ClassificationMetrics::calculate(&[], &[]);
        assert_eq!(m.accuracy, 0.0);
        assert_eq!(m.f1, 0.0);
    }
}
