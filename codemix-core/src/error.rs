//! Layered error types
//!
//! Resource loading and stream alignment failures are fatal; an
//! unclassifiable token is not an error at all (see [`crate::stream`]).

use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading a word list or the manual word map
#[derive(Error, Debug)]
pub enum ResourceError {
    /// File missing or unreadable
    #[error("failed to read resource {}: {source}", .path.display())]
    Io {
        /// Resource path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line with fewer tab-separated fields than required
    #[error("malformed line {line} in {}: expected {expected} tab-separated fields, found {found}", .path.display())]
    MalformedLine {
        /// Resource path
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Fields required
        expected: usize,
        /// Fields present
        found: usize,
    },

    /// A word map entry whose label is outside the tag set
    #[error("unknown label '{label}' on line {line} of {}", .path.display())]
    UnknownLabel {
        /// Resource path
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// The offending tag
        label: String,
    },
}

/// Hypothesis and reference streams that cannot be compared record by record
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlignmentError {
    /// One stream still has records after the other ended
    #[error("streams differ in length: {stream} has extra records starting at line {line}")]
    LengthMismatch {
        /// Which stream is longer
        stream: Stream,
        /// 1-based line number of the first unmatched record
        line: usize,
    },

    /// A segment boundary in one stream lines up with a record in the other
    #[error("segment boundary mismatch at line {line}: {blank} is blank but the other stream is not")]
    BlankMismatch {
        /// 1-based line number
        line: usize,
        /// Which stream has the blank line
        blank: Stream,
    },

    /// A record without a tab-separated label column
    #[error("malformed record at line {line} of {stream}: '{content}'")]
    MalformedRecord {
        /// Which stream holds the record
        stream: Stream,
        /// 1-based line number
        line: usize,
        /// Raw line content
        content: String,
    },
}

/// Identifies one side of a scoring run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// Predicted labels
    Hypothesis,
    /// Gold labels
    Reference,
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stream::Hypothesis => write!(f, "hypothesis"),
            Stream::Reference => write!(f, "reference"),
        }
    }
}

/// A tag string outside the known label set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language label: '{0}'")]
pub struct LabelError(pub String);

/// Invalid tagger configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A value failed validation
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level error for library operations
#[derive(Error, Debug)]
pub enum Error {
    /// Resource loading failed
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Scoring streams do not line up
    #[error(transparent)]
    Alignment(#[from] AlignmentError),

    /// Unknown label
    #[error(transparent)]
    Label(#[from] LabelError),

    /// Unknown label on a specific line of an annotated file
    #[error("line {line}: {source}")]
    LabelAt {
        /// 1-based line number
        line: usize,
        /// The parse failure
        #[source]
        source: LabelError,
    },

    /// Annotated line without a label column
    #[error("malformed record at line {line}: '{content}'")]
    MalformedRecord {
        /// 1-based line number
        line: usize,
        /// Raw line content
        content: String,
    },

    /// Configuration problem
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failure reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, Error>;
