//! Token language classification
//!
//! The classifier is a pure function of the token, the previous
//! non-universal label and the immutable [`Resources`]. Tokens that no rule
//! decides (present in both vocabularies, or in neither) are handled by an
//! explicit [`AmbiguityPolicy`].

pub mod rules;
pub mod text;

pub use rules::{evaluate, Candidate, Rule};

use crate::error::ConfigError;
use crate::label::Label;
use crate::resources::Resources;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// What to do with a token the cascade cannot decide
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbiguityPolicy {
    /// Carry the previous context label forward without comment
    Strict,
    /// Retry on the ASCII-only form, then fall back to the context label and
    /// report the token as unclassifiable
    #[default]
    Fallback,
}

impl AmbiguityPolicy {
    /// Name used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            AmbiguityPolicy::Strict => "strict",
            AmbiguityPolicy::Fallback => "fallback",
        }
    }
}

impl fmt::Display for AmbiguityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmbiguityPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(AmbiguityPolicy::Strict),
            "fallback" => Ok(AmbiguityPolicy::Fallback),
            other => Err(ConfigError::Invalid(format!(
                "unknown ambiguity policy '{other}' (expected 'strict' or 'fallback')"
            ))),
        }
    }
}

/// How a label was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Via {
    /// A cascade rule matched the token
    Rule(Rule),
    /// A cascade rule matched the token once non-ASCII characters were removed
    AsciiRetry(Rule),
    /// Strict policy: the context label was carried forward
    CarriedContext,
    /// Fallback policy exhausted: the context label was substituted
    Unclassified,
}

/// A resolved label and its provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Label written to the output
    pub label: Label,
    /// How the label was chosen
    pub via: Via,
}

impl Resolution {
    /// Whether the token could not be classified on its own
    pub fn is_unclassified(&self) -> bool {
        matches!(self.via, Via::Unclassified)
    }
}

/// Rule-cascade classifier over shared, immutable resources
#[derive(Debug, Clone)]
pub struct Classifier {
    resources: Arc<Resources>,
    policy: AmbiguityPolicy,
}

impl Classifier {
    /// Create a classifier
    pub fn new(resources: Arc<Resources>, policy: AmbiguityPolicy) -> Self {
        Self { resources, policy }
    }

    /// Resources consulted by the rules
    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Active ambiguity policy
    pub fn policy(&self) -> AmbiguityPolicy {
        self.policy
    }

    /// Run only the rule cascade
    pub fn decide(&self, token: &str) -> Option<(Rule, Label)> {
        evaluate(token, &self.resources)
    }

    /// Classify a token given the previous non-universal label
    ///
    /// Under [`AmbiguityPolicy::Strict`] this always returns a label; under
    /// [`AmbiguityPolicy::Fallback`] an undecided token yields `None`.
    pub fn classify(&self, token: &str, prev: Label) -> Option<Label> {
        match (self.decide(token), self.policy) {
            (Some((_, label)), _) => Some(label),
            (None, AmbiguityPolicy::Strict) => Some(prev),
            (None, AmbiguityPolicy::Fallback) => None,
        }
    }

    /// Classify a token, applying the ambiguity policy to the end
    ///
    /// The ASCII retry only runs when stripping changes the token and leaves
    /// something to classify.
    pub fn resolve(&self, token: &str, prev: Label) -> Resolution {
        if let Some((rule, label)) = self.decide(token) {
            return Resolution {
                label,
                via: Via::Rule(rule),
            };
        }

        match self.policy {
            AmbiguityPolicy::Strict => Resolution {
                label: prev,
                via: Via::CarriedContext,
            },
            AmbiguityPolicy::Fallback => {
                let ascii = text::strip_non_ascii(token);
                if !ascii.is_empty() && ascii != token {
                    if let Some((rule, label)) = self.decide(&ascii) {
                        return Resolution {
                            label,
                            via: Via::AsciiRetry(rule),
                        };
                    }
                }
                Resolution {
                    label: prev,
                    via: Via::Unclassified,
                }
            }
        }
    }
}
