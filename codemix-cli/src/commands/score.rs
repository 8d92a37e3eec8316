//! Score command implementation

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{JsonFormatter, ReportFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use codemix_core::score::{read_aligned, score};
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Arguments for the score command
#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Tagged file to evaluate (token<TAB>label)
    #[arg(long = "hyp", value_name = "FILE", required = true)]
    pub hypothesis: PathBuf,

    /// Reference annotation in the same format
    #[arg(long = "ref", value_name = "FILE", required = true)]
    pub reference: PathBuf,

    /// Print every token with its predicted and reference labels
    #[arg(short, long)]
    pub verbose: bool,

    /// Report format (default: text, or the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Tab-separated confusion matrix and metric tables
    Text,
    /// One JSON document with the matrix and metrics
    Json,
}

impl FromStr for ReportFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(CliError::ConfigError(format!(
                "unknown report format '{other}'"
            ))),
        }
    }
}

impl ScoreArgs {
    /// Execute the score command
    pub fn execute(&self) -> Result<()> {
        init_logging(0, false);
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let format = match self.format {
            Some(format) => format,
            None => config.scoring.default_format.parse()?,
        };
        let verbose = self.verbose || config.scoring.verbose;

        let records = read_aligned(
            FileReader::open(&self.hypothesis)?,
            FileReader::open(&self.reference)?,
        )
        .with_context(|| {
            format!(
                "Failed to align {} with {}",
                self.hypothesis.display(),
                self.reference.display()
            )
        })?;
        log::info!("aligned {} tokens", records.len());

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(FileReader::create(path)?),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn ReportFormatter> = match format {
            ReportFormat::Text => Box::new(TextFormatter::new(writer)),
            ReportFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        if verbose {
            for record in &records {
                formatter.format_record(record)?;
            }
        }
        formatter.format_report(&score(&records))?;
        formatter.finish()?;

        Ok(())
    }
}
