//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("tokens.txt".to_string());
        assert_eq!(error.to_string(), "File not found: tokens.txt");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown report format 'xml'".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown report format 'xml'"
        );
    }

    #[test]
    fn test_processing_error_display() {
        let error = CliError::ProcessingError("thread pool unavailable".to_string());
        assert_eq!(
            error.to_string(),
            "Processing error: thread pool unavailable"
        );
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::FileNotFound("hyp.txt".to_string()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(err.to_string(), "File not found: hyp.txt");
    }

    #[test]
    fn test_error_with_non_ascii_path() {
        let error = CliError::FileNotFound("डेटा/tokens 😂.txt".to_string());
        assert_eq!(error.to_string(), "File not found: डेटा/tokens 😂.txt");
    }
}
