//! JSON report formatter

use super::ReportFormatter;
use anyhow::{Context, Result};
use codemix_core::{AlignedRecord, ScoreReport};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one document once scoring is complete
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<RecordData>,
    report: Option<ScoreReport>,
}

/// Data structure for one verbose token in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordData {
    /// Line number in both inputs
    pub line: usize,
    /// The token text
    pub token: String,
    /// Predicted label
    pub hypothesis: String,
    /// Reference label
    pub reference: String,
    /// Whether the two labels agree
    pub correct: bool,
}

#[derive(Serialize)]
struct Document<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<&'a [RecordData]>,
    #[serde(flatten)]
    report: &'a ScoreReport,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
            report: None,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> ReportFormatter for JsonFormatter<W> {
    fn format_record(&mut self, record: &AlignedRecord) -> Result<()> {
        self.records.push(RecordData {
            line: record.line,
            token: record.token.clone(),
            hypothesis: record.hypothesis.clone(),
            reference: record.reference.clone(),
            correct: record.is_match(),
        });
        Ok(())
    }

    fn format_report(&mut self, report: &ScoreReport) -> Result<()> {
        self.report = Some(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let report = self
            .report
            .as_ref()
            .context("No score report to write")?;
        let document = Document {
            records: (!self.records.is_empty()).then_some(self.records.as_slice()),
            report,
        };
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codemix_core::ConfusionMatrix;
    use serde_json::Value;

    fn report() -> ScoreReport {
        ScoreReport::from_matrix(ConfusionMatrix::from_pairs([
            ("en", "en"),
            ("hi", "en"),
            ("hi", "hi"),
        ]))
    }

    #[test]
    fn test_report_document() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.format_report(&report()).unwrap();
        formatter.finish().unwrap();

        let value: Value = serde_json::from_slice(&formatter.into_inner()).unwrap();
        assert!(value.get("records").is_none());
        assert_eq!(value["matrix"]["labels"], serde_json::json!(["en", "hi"]));
        assert_eq!(value["matrix"]["counts"], serde_json::json!([[1, 0], [1, 1]]));
        assert_eq!(value["classes"][0]["label"], "en");
        assert_eq!(value["classes"][0]["precision"], 100.0);
        assert_eq!(value["classes"][0]["recall"], 50.0);
        assert_eq!(value["classes"][1]["false_positives"], 1);
        assert_eq!(value["overall"]["label"], "OVERALL");
    }

    #[test]
    fn test_records_are_included_when_present() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter
            .format_record(&AlignedRecord {
                line: 3,
                token: "yaar".to_string(),
                hypothesis: "en".to_string(),
                reference: "hi".to_string(),
            })
            .unwrap();
        formatter.format_report(&report()).unwrap();
        formatter.finish().unwrap();

        let value: Value = serde_json::from_slice(&formatter.into_inner()).unwrap();
        let records = value["records"].as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["token"], "yaar");
        assert_eq!(records[0]["correct"], false);
    }

    #[test]
    fn test_finish_without_report_fails() {
        let mut formatter = JsonFormatter::new(Vec::new());
        assert!(formatter.finish().is_err());
    }
}
