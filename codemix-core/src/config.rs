//! Tagger configuration

use crate::classifier::{AmbiguityPolicy, Classifier};
use crate::error::{ConfigError, Result};
use crate::resources::{ResourcePaths, Resources};
use crate::stream::Tagger;
use std::path::PathBuf;
use std::sync::Arc;

/// Settings needed to build a [`Tagger`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggerConfig {
    /// Resource file locations
    pub resources: ResourcePaths,
    /// Handling of tokens no rule decides
    pub policy: AmbiguityPolicy,
    /// Keep only the first N word map entries (`Some(0)` disables the map)
    pub top_n: Option<usize>,
}

impl TaggerConfig {
    /// Create a configuration builder
    pub fn builder() -> TaggerConfigBuilder {
        TaggerConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let paths = [
            ("english", &self.resources.english),
            ("hindi", &self.resources.hindi),
            ("word_map", &self.resources.word_map),
        ];
        for (name, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "{name} resource path must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Load resources and assemble a tagger
    pub fn build_tagger(&self) -> Result<Tagger> {
        self.validate()?;
        let resources = Resources::load(&self.resources, self.top_n)?;
        log::info!(
            "resources ready: {} English, {} Hindi, {} manual entries",
            resources.english.len(),
            resources.hindi.len(),
            resources.word_map.len()
        );
        Ok(Tagger::new(Classifier::new(Arc::new(resources), self.policy)))
    }
}

/// Fluent builder for [`TaggerConfig`]
#[derive(Debug, Default)]
pub struct TaggerConfigBuilder {
    english: Option<PathBuf>,
    hindi: Option<PathBuf>,
    word_map: Option<PathBuf>,
    policy: Option<AmbiguityPolicy>,
    top_n: Option<usize>,
}

impl TaggerConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use all three resource paths at once
    pub fn resources(mut self, paths: ResourcePaths) -> Self {
        self.english = Some(paths.english);
        self.hindi = Some(paths.hindi);
        self.word_map = Some(paths.word_map);
        self
    }

    /// English word list
    pub fn english(mut self, path: impl Into<PathBuf>) -> Self {
        self.english = Some(path.into());
        self
    }

    /// Hindi word list
    pub fn hindi(mut self, path: impl Into<PathBuf>) -> Self {
        self.hindi = Some(path.into());
        self
    }

    /// Manual word map
    pub fn word_map(mut self, path: impl Into<PathBuf>) -> Self {
        self.word_map = Some(path.into());
        self
    }

    /// Ambiguity policy
    pub fn policy(mut self, policy: AmbiguityPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Word map cap (None = load everything)
    pub fn top_n(mut self, top_n: Option<usize>) -> Self {
        self.top_n = top_n;
        self
    }

    /// Build the configuration
    pub fn build(self) -> std::result::Result<TaggerConfig, ConfigError> {
        let mut config = TaggerConfig::default();

        if let Some(path) = self.english {
            config.resources.english = path;
        }
        if let Some(path) = self.hindi {
            config.resources.hindi = path;
        }
        if let Some(path) = self.word_map {
            config.resources.word_map = path;
        }
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        config.top_n = self.top_n;

        config.validate()?;
        Ok(config)
    }
}
