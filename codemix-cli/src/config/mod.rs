//! Configuration module

use anyhow::{Context, Result};
use codemix_core::{AmbiguityPolicy, ResourcePaths};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Resource file locations
    #[serde(default)]
    pub resources: ResourcePaths,

    /// Tagging configuration
    #[serde(default)]
    pub tagging: TaggingConfig,

    /// Scoring configuration
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl CliConfig {
    /// Read a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Read a configuration file if one was given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Tagging-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TaggingConfig {
    /// How to handle tokens no rule decides
    pub policy: AmbiguityPolicy,

    /// Keep only the first N word map entries (absent = all)
    pub top_n: Option<usize>,

    /// Tag segments in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for TaggingConfig {
    fn default() -> Self {
        Self {
            policy: AmbiguityPolicy::Fallback,
            top_n: None,
            parallel: false,
            worker_threads: 0,
        }
    }
}

/// Scoring-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Print every token with predicted and reference labels
    pub verbose: bool,

    /// Default report format
    pub default_format: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            default_format: "text".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.tagging.policy, AmbiguityPolicy::Fallback);
        assert_eq!(config.tagging.top_n, None);
        assert!(!config.scoring.verbose);
        assert_eq!(config.scoring.default_format, "text");
    }

    #[test]
    fn test_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[resources]
word_map = "custom/map.txt"

[tagging]
policy = "strict"
top_n = 250
"#
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.tagging.policy, AmbiguityPolicy::Strict);
        assert_eq!(config.tagging.top_n, Some(250));
        assert_eq!(config.resources, ResourcePaths {
            word_map: "custom/map.txt".into(),
            ..ResourcePaths::default()
        });
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn test_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[tagging]\npolicy = 3\n").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/codemix.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_or_default() {
        assert_eq!(CliConfig::load_or_default(None).unwrap(), CliConfig::default());
    }
}
