//! Collapse the extended reference tag set to `en`, `hi` and `univ`
//!
//! Reference annotations may carry `acro`, `ne`, `mixed` and `undef` tags.
//! Scoring compares against the three-way tag set, so those are rewritten to
//! `univ` before use.

use crate::error::{Error, Result};
use crate::label::Label;
use serde::Serialize;
use std::fmt;
use std::io::{BufRead, Write};

/// Tokens per simplified label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    /// `en` tokens
    pub en: usize,
    /// `hi` tokens
    pub hi: usize,
    /// `univ` tokens, including collapsed extended tags
    pub univ: usize,
}

impl LabelCounts {
    /// Increment the counter for a label
    pub fn add(&mut self, label: Label) {
        match label {
            Label::English => self.en += 1,
            Label::Hindi => self.hi += 1,
            Label::Universal => self.univ += 1,
        }
    }

    /// Total tokens counted
    pub fn total(&self) -> usize {
        self.en + self.hi + self.univ
    }
}

impl fmt::Display for LabelCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "en: {}, hi: {}, univ: {}", self.en, self.hi, self.univ)
    }
}

/// Rewrite one annotated line; blank lines come back empty
pub fn simplify_line(line: &str, number: usize) -> Result<Option<(String, Label)>> {
    let mut fields: Vec<&str> = line.split_whitespace().collect();
    if fields.is_empty() {
        return Ok(None);
    }
    if fields.len() < 2 {
        return Err(Error::MalformedRecord {
            line: number,
            content: line.to_string(),
        });
    }

    let label: Label = fields[1]
        .parse()
        .map_err(|source| Error::LabelAt { line: number, source })?;
    if Label::is_extended_tag(fields[1]) {
        fields[1] = Label::Universal.as_str();
    }

    Ok(Some((fields.join("\t"), label)))
}

/// Simplify a whole annotated stream
pub fn simplify<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<LabelCounts> {
    let mut counts = LabelCounts::default();

    for (index, line) in reader.lines().enumerate() {
        match simplify_line(&line?, index + 1)? {
            Some((record, label)) => {
                writeln!(writer, "{record}")?;
                counts.add(label);
            }
            None => writeln!(writer)?,
        }
    }

    writer.flush()?;
    Ok(counts)
}
