//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// File access with path-aware error messages
pub struct FileReader;

impl FileReader {
    /// Fail early with a readable error when an input does not exist
    pub fn ensure_exists(path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        Ok(())
    }

    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        Self::ensure_exists(path)?;
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Open a file for buffered line reading
    pub fn open(path: &Path) -> Result<BufReader<File>> {
        Self::ensure_exists(path)?;
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

        Ok(BufReader::new(file))
    }

    /// Create (or truncate) a file for buffered writing
    pub fn create(path: &Path) -> Result<BufWriter<File>> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;

        Ok(BufWriter::new(file))
    }
}
