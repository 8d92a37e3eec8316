//! Precision, recall and F1 derived from a confusion matrix

use super::matrix::{ConfusionMatrix, Counts};
use serde::Serialize;

/// Label used for the micro-averaged row
pub const OVERALL: &str = "OVERALL";

/// Accuracy metrics for one class, as fractions in `[0, 1]`
///
/// A class with no false positives has precision 1.0 even if it was never
/// predicted; recall follows the same rule for false negatives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccuracyMetrics {
    /// Raw counts
    #[serde(flatten)]
    pub counts: Counts,
    /// TP / (TP + FP), or 1.0 without false positives
    pub precision: f64,
    /// TP / (TP + FN), or 1.0 without false negatives
    pub recall: f64,
    /// Harmonic mean of precision and recall, 0.0 when both are zero
    pub f1_score: f64,
}

impl AccuracyMetrics {
    /// Create metrics from raw counts
    pub fn from_counts(counts: Counts) -> Self {
        let Counts {
            true_positives: tp,
            false_positives: fp,
            false_negatives: fn_,
        } = counts;

        let precision = if fp > 0 {
            tp as f64 / (tp + fp) as f64
        } else {
            1.0
        };

        let recall = if fn_ > 0 {
            tp as f64 / (tp + fn_) as f64
        } else {
            1.0
        };

        let f1_score = if precision + recall > 0.0 {
            2.0 * (precision * recall) / (precision + recall)
        } else {
            0.0
        };

        Self {
            counts,
            precision,
            recall,
            f1_score,
        }
    }

    /// The same metrics scaled to percentages, rounded to 3 decimals
    pub fn as_percent(&self) -> Self {
        Self {
            counts: self.counts,
            precision: round_percent(self.precision),
            recall: round_percent(self.recall),
            f1_score: round_percent(self.f1_score),
        }
    }
}

/// Scale a fraction to a percentage rounded to 3 decimal places
///
/// Exact ties round to the even neighbour: 1/64 becomes `1.562`.
pub fn round_percent(value: f64) -> f64 {
    (value * 100.0 * 1000.0).round_ties_even() / 1000.0
}

/// Metrics for one label row of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassScore {
    /// Class label, or [`OVERALL`] for the micro average
    pub label: String,
    /// Percentages
    #[serde(flatten)]
    pub metrics: AccuracyMetrics,
}

/// Full scoring result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Predicted-vs-reference counts
    pub matrix: ConfusionMatrix,
    /// One row per label, in matrix order
    pub classes: Vec<ClassScore>,
    /// Micro average over every class
    pub overall: ClassScore,
}

impl ScoreReport {
    /// Derive every metric from a matrix
    pub fn from_matrix(matrix: ConfusionMatrix) -> Self {
        let mut total = Counts::default();
        let mut classes = Vec::with_capacity(matrix.size());

        for label in matrix.labels() {
            let counts = matrix.counts_for(label).unwrap_or_default();
            total = total + counts;
            classes.push(ClassScore {
                label: label.clone(),
                metrics: AccuracyMetrics::from_counts(counts).as_percent(),
            });
        }

        let overall = ClassScore {
            label: OVERALL.to_string(),
            metrics: AccuracyMetrics::from_counts(total).as_percent(),
        };

        Self {
            matrix,
            classes,
            overall,
        }
    }

    /// Metrics row for a label
    pub fn class(&self, label: &str) -> Option<&ClassScore> {
        self.classes.iter().find(|c| c.label == label)
    }

    /// Number of scored tokens
    pub fn tokens(&self) -> usize {
        self.matrix.total()
    }
}
