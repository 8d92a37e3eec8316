//! Line-by-line tagging of a token stream
//!
//! Input has one token per line; a blank line ends a segment (a tweet or a
//! sentence) and resets the classification context to English. Output
//! mirrors input exactly: one `token<TAB>label` record or one blank line per
//! input line.

#[cfg(feature = "parallel")]
mod parallel;

use crate::classifier::{Classifier, Resolution, Rule, Via};
use crate::error::Result;
use crate::label::Label;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{BufRead, Write};

/// Previous non-universal label, carried across tokens of one segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    prev: Label,
}

impl Context {
    /// Context at the start of a stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Label in effect for the next token
    pub fn current(&self) -> Label {
        self.prev
    }

    /// Segment boundary: back to the default label
    pub fn reset(&mut self) {
        self.prev = Label::default();
    }

    /// Record a resolved label; universal labels leave the context untouched
    pub fn observe(&mut self, label: Label) {
        if label.is_language() {
            self.prev = label;
        }
    }
}

/// One output line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaggedLine {
    /// Segment boundary, written as an empty line
    Boundary,
    /// A labeled token
    Token {
        /// Trimmed token text
        token: String,
        /// Chosen label and how it was reached
        resolution: Resolution,
    },
}

impl TaggedLine {
    /// Label of a token line
    pub fn label(&self) -> Option<Label> {
        match self {
            TaggedLine::Boundary => None,
            TaggedLine::Token { resolution, .. } => Some(resolution.label),
        }
    }
}

impl fmt::Display for TaggedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaggedLine::Boundary => Ok(()),
            TaggedLine::Token { token, resolution } => {
                write!(f, "{}\t{}", token, resolution.label)
            }
        }
    }
}

/// Counters collected while tagging
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagSummary {
    /// Token lines
    pub tokens: usize,
    /// Non-empty segments
    pub segments: usize,
    /// Tokens per output label
    pub labels: BTreeMap<Label, usize>,
    /// Tokens per deciding rule (including ASCII retries)
    pub rules: BTreeMap<Rule, usize>,
    /// Tokens decided only after removing non-ASCII characters
    pub ascii_retries: usize,
    /// Tokens that took the context label under the strict policy
    pub carried: usize,
    /// Tokens no rule could decide under the fallback policy
    pub unclassified: usize,
    #[serde(skip)]
    in_segment: bool,
}

impl TagSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one output line
    pub fn record(&mut self, line: &TaggedLine) {
        match line {
            TaggedLine::Boundary => self.in_segment = false,
            TaggedLine::Token { resolution, .. } => {
                if !self.in_segment {
                    self.segments += 1;
                    self.in_segment = true;
                }
                self.tokens += 1;
                *self.labels.entry(resolution.label).or_insert(0) += 1;
                match resolution.via {
                    Via::Rule(rule) => *self.rules.entry(rule).or_insert(0) += 1,
                    Via::AsciiRetry(rule) => {
                        *self.rules.entry(rule).or_insert(0) += 1;
                        self.ascii_retries += 1;
                    }
                    Via::CarriedContext => self.carried += 1,
                    Via::Unclassified => self.unclassified += 1,
                }
            }
        }
    }

    /// Summarize already tagged lines
    pub fn from_lines(lines: &[TaggedLine]) -> Self {
        let mut summary = Self::new();
        for line in lines {
            summary.record(line);
        }
        summary
    }

    /// Count of tokens with the given label
    pub fn count(&self, label: Label) -> usize {
        self.labels.get(&label).copied().unwrap_or(0)
    }
}

/// Tags token streams with a shared classifier
#[derive(Debug, Clone)]
pub struct Tagger {
    classifier: Classifier,
}

impl Tagger {
    /// Create a tagger
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Underlying classifier
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Tag one raw input line, updating the context
    pub fn tag_line(&self, line: &str, context: &mut Context) -> TaggedLine {
        let token = line.trim();
        if token.is_empty() {
            context.reset();
            return TaggedLine::Boundary;
        }

        let resolution = self.classifier.resolve(token, context.current());
        log::trace!("{token}\t{}\t{:?}", resolution.label, resolution.via);
        if resolution.is_unclassified() {
            log::warn!(
                "could not classify token '{token}', using context label '{}'",
                resolution.label
            );
        }

        context.observe(resolution.label);
        TaggedLine::Token {
            token: token.to_string(),
            resolution,
        }
    }

    /// Tag a sequence of lines starting from a fresh context
    pub fn tag_lines<I, S>(&self, lines: I) -> Vec<TaggedLine>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut context = Context::new();
        lines
            .into_iter()
            .map(|line| self.tag_line(line.as_ref(), &mut context))
            .collect()
    }

    /// Stream lines from `reader` to `writer`, one output line per input line
    pub fn tag_reader<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<TagSummary> {
        let mut context = Context::new();
        let mut summary = TagSummary::new();

        for line in reader.lines() {
            let tagged = self.tag_line(&line?, &mut context);
            writeln!(writer, "{tagged}")?;
            summary.record(&tagged);
        }

        writer.flush()?;
        Ok(summary)
    }
}

/// Write tagged lines in the labeled output format
pub fn write_lines<W: Write>(lines: &[TaggedLine], mut writer: W) -> Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}
