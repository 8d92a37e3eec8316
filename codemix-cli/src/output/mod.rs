//! Report formatting module

use anyhow::Result;
use codemix_core::{AlignedRecord, ScoreReport};

/// Trait for score report formatters
pub trait ReportFormatter: Send {
    /// Output one aligned token (verbose mode only)
    fn format_record(&mut self, record: &AlignedRecord) -> Result<()>;

    /// Output the confusion matrix and per-class metrics
    fn format_report(&mut self, report: &ScoreReport) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
