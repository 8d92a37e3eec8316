//! Confusion matrix over predicted and reference labels

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Per-class true/false positive and false negative counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    /// Diagonal cell
    pub true_positives: usize,
    /// Row total minus the diagonal
    pub false_positives: usize,
    /// Column total minus the diagonal
    pub false_negatives: usize,
}

impl std::ops::Add for Counts {
    type Output = Counts;

    fn add(self, other: Counts) -> Counts {
        Counts {
            true_positives: self.true_positives + other.true_positives,
            false_positives: self.false_positives + other.false_positives,
            false_negatives: self.false_negatives + other.false_negatives,
        }
    }
}

/// Square table of (predicted, actual) counts
///
/// Rows are predicted labels, columns are reference labels, both in the
/// sorted order of every label observed on either side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    labels: Vec<String>,
    counts: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    /// Build from (predicted, actual) pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let pairs: Vec<(S, S)> = pairs.into_iter().collect();

        let labels: Vec<String> = pairs
            .iter()
            .flat_map(|(p, a)| [p.as_ref(), a.as_ref()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();
        let index: HashMap<&str, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();

        let mut counts = vec![vec![0; labels.len()]; labels.len()];
        for (predicted, actual) in &pairs {
            counts[index[predicted.as_ref()]][index[actual.as_ref()]] += 1;
        }

        Self { labels, counts }
    }

    /// Sorted label headings
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of distinct labels
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Raw rows, indexed like [`ConfusionMatrix::labels`]
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.counts
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Cell for a (predicted, actual) pair; zero for unseen labels
    pub fn count(&self, predicted: &str, actual: &str) -> usize {
        match (self.position(predicted), self.position(actual)) {
            (Some(p), Some(a)) => self.counts[p][a],
            _ => 0,
        }
    }

    /// Total number of pairs
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Sum of the diagonal
    pub fn correct(&self) -> usize {
        (0..self.size()).map(|i| self.counts[i][i]).sum()
    }

    /// True when no pair disagrees
    pub fn is_diagonal(&self) -> bool {
        self.correct() == self.total()
    }

    /// Counts for one class; `None` for an unseen label
    pub fn counts_for(&self, label: &str) -> Option<Counts> {
        let i = self.position(label)?;
        let diagonal = self.counts[i][i];
        let row: usize = self.counts[i].iter().sum();
        let column: usize = self.counts.iter().map(|row| row[i]).sum();

        Some(Counts {
            true_positives: diagonal,
            false_positives: row - diagonal,
            false_negatives: column - diagonal,
        })
    }
}
