//! Language labels

use crate::error::LabelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reference tags that collapse to [`Label::Universal`] when parsed
pub const EXTENDED_TAGS: [&str; 4] = ["acro", "ne", "mixed", "undef"];

/// Language label assigned to a single token
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Label {
    /// English, also the context at the start of every segment
    #[default]
    #[serde(rename = "en")]
    English,
    /// Hindi (romanized or Devanagari)
    #[serde(rename = "hi")]
    Hindi,
    /// Language-independent: punctuation, numbers, URLs, emoticons
    #[serde(rename = "univ")]
    Universal,
}

impl Label {
    /// All labels in tag order
    pub const ALL: [Label; 3] = [Label::English, Label::Hindi, Label::Universal];

    /// Tag as written in labeled files
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::English => "en",
            Label::Hindi => "hi",
            Label::Universal => "univ",
        }
    }

    /// Whether this label updates the classification context
    #[inline]
    pub fn is_language(&self) -> bool {
        !matches!(self, Label::Universal)
    }

    /// Returns true for tags of the extended reference set
    pub fn is_extended_tag(tag: &str) -> bool {
        EXTENDED_TAGS.contains(&tag)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Label::English),
            "hi" => Ok(Label::Hindi),
            "univ" => Ok(Label::Universal),
            tag if Label::is_extended_tag(tag) => Ok(Label::Universal),
            other => Err(LabelError(other.to_string())),
        }
    }
}
