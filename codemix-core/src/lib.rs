//! Rule-based language identification for Hindi-English codeswitched text
//!
//! Every token of a pre-tokenized corpus gets one of three labels: `en`,
//! `hi` or `univ` (punctuation, numbers, URLs, emoticons and other
//! language-independent tokens). The decision is an ordered cascade of
//! heuristic rules over two vocabularies and a manual override map, with the
//! previous non-universal label as the fallback for ambiguous tokens.
//!
//! # Architecture
//!
//! - **resources**: word lists and the manual word map, immutable after load
//! - **classifier**: the rule cascade and the ambiguity policy
//! - **stream**: line-by-line tagging with per-segment context
//! - **score**: confusion matrix and precision/recall/F1 against a reference
//! - **simplify**: collapse extended reference tags to the three-way set
//!
//! # Example
//!
//! ```rust
//! use codemix_core::{AmbiguityPolicy, Classifier, Label, Resources, Tagger, WordMap, WordSet};
//! use std::sync::Arc;
//!
//! let resources = Resources::new(
//!     WordSet::from_iter(["movie", "the"]),
//!     WordSet::from_iter(["kal", "dekhi"]),
//!     WordMap::new(),
//! );
//! let tagger = Tagger::new(Classifier::new(Arc::new(resources), AmbiguityPolicy::Strict));
//!
//! let lines = tagger.tag_lines(["kal", "movie", "dekhi", "!"]);
//! let labels: Vec<_> = lines.iter().filter_map(|l| l.label()).collect();
//! assert_eq!(labels, vec![Label::Hindi, Label::English, Label::Hindi, Label::Universal]);
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod label;
pub mod resources;
pub mod score;
pub mod simplify;
pub mod stream;

pub use classifier::{AmbiguityPolicy, Classifier, Resolution, Rule, Via};
pub use config::{TaggerConfig, TaggerConfigBuilder};
pub use error::{AlignmentError, ConfigError, Error, LabelError, ResourceError, Result, Stream};
pub use label::Label;
pub use resources::{ResourcePaths, Resources, WordMap, WordSet};
pub use score::{AlignedRecord, ConfusionMatrix, ScoreReport};
pub use simplify::LabelCounts;
pub use stream::{Context, TagSummary, TaggedLine, Tagger};
