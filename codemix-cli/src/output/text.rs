//! Plain text report formatter

use super::ReportFormatter;
use anyhow::Result;
use codemix_core::score::ClassScore;
use codemix_core::{AlignedRecord, ScoreReport};
use std::io::Write;

/// Plain text formatter - tab-separated tables
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_class(&mut self, class: &ClassScore) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}",
            class.label,
            format_score(class.metrics.precision),
            format_score(class.metrics.recall),
            format_score(class.metrics.f1_score)
        )?;
        Ok(())
    }
}

/// Render a percentage the shortest way that keeps one decimal place
///
/// `100.0` stays `100.0` and `66.667` stays `66.667`.
pub fn format_score(value: f64) -> String {
    let plain = value.to_string();
    if plain.contains('.') || !value.is_finite() {
        plain
    } else {
        format!("{value:.1}")
    }
}

/// Quote a token the way Python's `repr` quotes a string
///
/// Single quotes unless the token holds a `'` and no `"`. Backslashes, the
/// chosen quote and unprintable characters are escaped; other non-ASCII text
/// is kept as is.
pub fn quote_token(token: &str) -> String {
    let quote = if token.contains('\'') && !token.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(token.len() + 2);
    quoted.push(quote);
    for c in token.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            c if c == quote => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if is_unprintable(c) => {
                let code = c as u32;
                if code <= 0xff {
                    quoted.push_str(&format!("\\x{code:02x}"));
                } else if code <= 0xffff {
                    quoted.push_str(&format!("\\u{code:04x}"));
                } else {
                    quoted.push_str(&format!("\\U{code:08x}"));
                }
            }
            c => quoted.push(c),
        }
    }
    quoted.push(quote);
    quoted
}

// Controls, separators other than the plain space, and invisible format marks
fn is_unprintable(c: char) -> bool {
    c.is_control()
        || (c.is_whitespace() && c != ' ')
        || matches!(
            c,
            '\u{ad}' | '\u{200b}'..='\u{200f}' | '\u{2060}'..='\u{2064}' | '\u{feff}'
        )
}

impl<W: Write + Send> ReportFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &AlignedRecord) -> Result<()> {
        write!(
            self.writer,
            "{}\t{}\t{}",
            quote_token(&record.token),
            record.hypothesis,
            record.reference
        )?;
        if !record.is_match() {
            write!(self.writer, "\tERROR")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_report(&mut self, report: &ScoreReport) -> Result<()> {
        let matrix = &report.matrix;

        writeln!(self.writer)?;
        writeln!(self.writer, "CONFUSION MATRIX")?;
        writeln!(self.writer, "\t{}", matrix.labels().join("\t"))?;
        for (label, row) in matrix.labels().iter().zip(matrix.rows()) {
            let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(self.writer, "{label}\t{}", cells.join("\t"))?;
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "CLASS\tP\tR\tF1")?;
        for class in &report.classes {
            self.write_class(class)?;
        }
        writeln!(self.writer, "{}", "-".repeat(30))?;
        self.write_class(&report.overall)?;

        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Tokens: {}, correct: {}",
            report.tokens(),
            matrix.correct()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
