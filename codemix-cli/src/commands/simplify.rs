//! Simplify command implementation

use crate::input::FileReader;
use anyhow::{Context, Result};
use clap::Args;
use codemix_core::simplify::simplify;
use std::ffi::OsString;
use std::path::PathBuf;

/// Arguments for the simplify command
#[derive(Debug, Args)]
pub struct SimplifyArgs {
    /// Annotated file (token and label separated by whitespace)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: <FILE>.new)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl SimplifyArgs {
    /// Path the simplified annotation is written to
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let mut name = OsString::from(self.input.as_os_str());
            name.push(".new");
            PathBuf::from(name)
        })
    }

    /// Execute the simplify command
    pub fn execute(&self) -> Result<()> {
        let output = self.output_path();

        let counts = simplify(FileReader::open(&self.input)?, FileReader::create(&output)?)
            .with_context(|| format!("Failed to simplify {}", self.input.display()))?;

        println!("{counts}");
        println!("Wrote {} tokens to {}", counts.total(), output.display());
        Ok(())
    }
}
