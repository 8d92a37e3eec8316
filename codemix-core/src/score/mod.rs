//! Scoring predicted labels against a reference annotation
//!
//! Both inputs use the labeled output format (`token<TAB>label`, blank lines
//! between segments) and are read in lockstep. Segment boundaries must line
//! up exactly; a stream that runs out of records early is an error.

pub mod matrix;
pub mod metrics;

pub use matrix::{ConfusionMatrix, Counts};
pub use metrics::{round_percent, AccuracyMetrics, ClassScore, ScoreReport, OVERALL};

use crate::error::{AlignmentError, Result, Stream};
use std::io::BufRead;

/// One token with its predicted and reference labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedRecord {
    /// 1-based line number in both files
    pub line: usize,
    /// Token text from the hypothesis
    pub token: String,
    /// Predicted label
    pub hypothesis: String,
    /// Reference label
    pub reference: String,
}

impl AlignedRecord {
    /// Whether prediction and reference agree
    pub fn is_match(&self) -> bool {
        self.hypothesis == self.reference
    }
}

/// Split a labeled record into (token, label)
fn parse_record(content: &str, stream: Stream, line: usize) -> Result<(String, String)> {
    let mut fields = content.split('\t');
    match (fields.next(), fields.next()) {
        (Some(token), Some(label)) => Ok((token.to_string(), label.trim().to_string())),
        _ => Err(AlignmentError::MalformedRecord {
            stream,
            line,
            content: content.to_string(),
        }
        .into()),
    }
}

/// Read hypothesis and reference streams in lockstep
pub fn read_aligned<H: BufRead, R: BufRead>(
    hypothesis: H,
    reference: R,
) -> Result<Vec<AlignedRecord>> {
    let mut hyp_lines = hypothesis.lines().fuse();
    let mut ref_lines = reference.lines().fuse();
    let mut records = Vec::new();
    let mut line = 0;

    loop {
        line += 1;
        let (hyp, reference) = match (hyp_lines.next().transpose()?, ref_lines.next().transpose()?) {
            (None, None) => break,
            (Some(hyp), Some(reference)) => (hyp, reference),
            // Trailing blank lines on the longer side are tolerated
            (Some(extra), None) | (None, Some(extra)) if extra.trim().is_empty() => continue,
            (Some(_), None) => {
                return Err(AlignmentError::LengthMismatch {
                    stream: Stream::Hypothesis,
                    line,
                }
                .into())
            }
            (None, Some(_)) => {
                return Err(AlignmentError::LengthMismatch {
                    stream: Stream::Reference,
                    line,
                }
                .into())
            }
        };

        let (hyp, reference) = (hyp.trim(), reference.trim());
        match (hyp.is_empty(), reference.is_empty()) {
            (true, true) => continue,
            (true, false) => {
                return Err(AlignmentError::BlankMismatch {
                    line,
                    blank: Stream::Hypothesis,
                }
                .into())
            }
            (false, true) => {
                return Err(AlignmentError::BlankMismatch {
                    line,
                    blank: Stream::Reference,
                }
                .into())
            }
            (false, false) => {}
        }

        let (token, hyp_label) = parse_record(hyp, Stream::Hypothesis, line)?;
        let (_, ref_label) = parse_record(reference, Stream::Reference, line)?;
        records.push(AlignedRecord {
            line,
            token,
            hypothesis: hyp_label,
            reference: ref_label,
        });
    }

    Ok(records)
}

/// Build the confusion matrix and metrics for aligned records
pub fn score(records: &[AlignedRecord]) -> ScoreReport {
    let matrix = ConfusionMatrix::from_pairs(
        records
            .iter()
            .map(|r| (r.hypothesis.as_str(), r.reference.as_str())),
    );
    ScoreReport::from_matrix(matrix)
}

/// Read both streams and score them
pub fn score_streams<H: BufRead, R: BufRead>(hypothesis: H, reference: R) -> Result<ScoreReport> {
    let records = read_aligned(hypothesis, reference)?;
    Ok(score(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Cursor;

    fn align(hyp: &str, reference: &str) -> Result<Vec<AlignedRecord>> {
        read_aligned(Cursor::new(hyp), Cursor::new(reference))
    }

    #[test]
    fn test_lockstep_reading() {
        let records = align(
            "the\ten\nmovie\ten\n\nhai\thi\n",
            "the\ten\nmovie\thi\n\nhai\thi\n",
        )
        .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].token, "movie");
        assert_eq!(records[1].hypothesis, "en");
        assert_eq!(records[1].reference, "hi");
        assert!(!records[1].is_match());
        assert_eq!(records[2].line, 4);
    }

    #[test]
    fn test_blank_mismatch() {
        let err = align("the\ten\n\nhai\thi\n", "the\ten\nis\ten\nhai\thi\n").unwrap_err();
        match err {
            Error::Alignment(AlignmentError::BlankMismatch { line, blank }) => {
                assert_eq!(line, 2);
                assert_eq!(blank, Stream::Hypothesis);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_length_mismatch() {
        let err = align("a\ten\nb\ten\n", "a\ten\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Alignment(AlignmentError::LengthMismatch {
                stream: Stream::Hypothesis,
                line: 2
            })
        ));

        let err = align("a\ten\n", "a\ten\n\nb\thi\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Alignment(AlignmentError::LengthMismatch {
                stream: Stream::Reference,
                line: 3
            })
        ));
    }

    #[test]
    fn test_trailing_blank_lines_tolerated() {
        let records = align("a\ten\n\n\n", "a\ten\n").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_malformed_record() {
        let err = align("a\ten\n", "a\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Alignment(AlignmentError::MalformedRecord {
                stream: Stream::Reference,
                line: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_self_score_is_perfect() {
        let labeled = "Kal\thi\nmovie\ten\ndekhi\thi\n!\tuniv\n\n:)\tuniv\nawesome\ten\n";
        let report = score_streams(Cursor::new(labeled), Cursor::new(labeled)).unwrap();

        assert!(report.matrix.is_diagonal());
        assert_eq!(report.matrix.size(), 3);
        for class in &report.classes {
            assert_eq!(class.metrics.precision, 100.0);
            assert_eq!(class.metrics.recall, 100.0);
            assert_eq!(class.metrics.f1_score, 100.0);
        }
        assert_eq!(report.overall.metrics.f1_score, 100.0);
    }

    #[test]
    fn test_unsimplified_reference_tags_are_scored_as_is() {
        let report = score_streams(
            Cursor::new("Modi\tuniv\nji\thi\n"),
            Cursor::new("Modi\tne\nji\thi\n"),
        )
        .unwrap();
        assert_eq!(report.matrix.labels(), &["hi", "ne", "univ"]);
        assert_eq!(report.matrix.count("univ", "ne"), 1);
    }
}
