//! Manual word-to-label overrides

use crate::error::ResourceError;
use crate::label::Label;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Ordered, frequency-ranked map from surface form to label
///
/// Entries keep file order. A capped load keeps the first `top_n` distinct
/// keys and never reads past the line that fills the cap.
#[derive(Debug, Clone, Default)]
pub struct WordMap {
    labels: HashMap<String, Label>,
    order: Vec<String>,
}

impl WordMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a two-column word map from disk
    pub fn load(path: &Path, top_n: Option<usize>) -> Result<Self, ResourceError> {
        let file = File::open(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path, top_n)
    }

    /// Load from any buffered reader; `path` is only used in errors
    pub fn from_reader<R: BufRead>(
        reader: R,
        path: &Path,
        top_n: Option<usize>,
    ) -> Result<Self, ResourceError> {
        let cap = top_n.unwrap_or(usize::MAX);
        let mut map = Self::new();

        for (index, line) in reader.lines().enumerate() {
            if map.len() >= cap {
                break;
            }

            let line = line.map_err(|source| ResourceError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let fields: Vec<&str> = line.trim().split('\t').collect();
            if fields.len() < 2 {
                return Err(ResourceError::MalformedLine {
                    path: path.to_path_buf(),
                    line: index + 1,
                    expected: 2,
                    found: fields.len(),
                });
            }

            let tag = fields[1].trim();
            let label = tag.parse().map_err(|_| ResourceError::UnknownLabel {
                path: path.to_path_buf(),
                line: index + 1,
                label: tag.to_string(),
            })?;
            map.insert(fields[0], label);
        }

        Ok(map)
    }

    /// Insert or replace an entry; a replaced key keeps its position
    pub fn insert(&mut self, word: impl Into<String>, label: Label) {
        let word = word.into();
        if self.labels.insert(word.clone(), label).is_none() {
            self.order.push(word);
        }
    }

    /// Exact lookup
    #[inline]
    pub fn get(&self, word: &str) -> Option<Label> {
        self.labels.get(word).copied()
    }

    /// Entries in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Label)> + '_ {
        self.order
            .iter()
            .map(move |word| (word.as_str(), self.labels[word]))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Label)> for WordMap {
    fn from_iter<I: IntoIterator<Item = (S, Label)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (word, label) in iter {
            map.insert(word, label);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const FIVE: &str = "hai\thi\nthe\ten\nlol\tuniv\nmain\thi\nto\thi\n";

    fn parse(content: &str, top_n: Option<usize>) -> Result<WordMap, ResourceError> {
        WordMap::from_reader(Cursor::new(content), Path::new("map.txt"), top_n)
    }

    #[test]
    fn test_uncapped_load_keeps_file_order() {
        let map = parse(FIVE, None).unwrap();
        let words: Vec<&str> = map.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["hai", "the", "lol", "main", "to"]);
        assert_eq!(map.get("lol"), Some(Label::Universal));
    }

    #[test]
    fn test_cap_keeps_first_entries() {
        let map = parse(FIVE, Some(2)).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("hai"), Some(Label::Hindi));
        assert_eq!(map.get("the"), Some(Label::English));
        assert_eq!(map.get("lol"), None);
    }

    #[test]
    fn test_cap_stops_reading() {
        // The malformed third line is past the cap and never parsed
        let map = parse("a\ten\nb\thi\nbroken\n", Some(2)).unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_zero_cap_reads_nothing() {
        let map = parse(FIVE, Some(0)).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_duplicate_key_replaces_value_in_place() {
        let map = parse("yaar\thi\nok\ten\nyaar\ten\n", Some(3)).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("yaar"), Some(Label::English));
        assert_eq!(map.iter().next(), Some(("yaar", Label::English)));
    }

    #[test]
    fn test_extended_tags_accepted() {
        let map = parse("Modi\tne\n", None).unwrap();
        assert_eq!(map.get("Modi"), Some(Label::Universal));
    }

    #[test]
    fn test_missing_label_column() {
        let err = parse("hai\thi\nlonely\n", None).unwrap_err();
        match err {
            ResourceError::MalformedLine {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_label() {
        let err = parse("hai\thindi\n", None).unwrap_err();
        assert!(matches!(err, ResourceError::UnknownLabel { line: 1, .. }));
    }
}
