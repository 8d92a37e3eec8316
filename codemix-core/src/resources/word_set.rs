//! Vocabulary word lists

use crate::error::ResourceError;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Case-sensitive vocabulary loaded from the first column of a word list
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Create an empty word set
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a word list from disk
    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        let file = File::open(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Load a word list from any buffered reader; `path` is only used in errors
    pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> Result<Self, ResourceError> {
        let mut words = HashSet::new();

        for line in reader.lines() {
            let line = line.map_err(|source| ResourceError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let word = line.split('\t').next().unwrap_or(line).trim_end();
            words.insert(word.to_string());
        }

        Ok(Self { words })
    }

    /// Exact membership test
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(content: &str) -> WordSet {
        WordSet::from_reader(Cursor::new(content), Path::new("test.txt")).unwrap()
    }

    #[test]
    fn test_first_column_only() {
        let set = parse("hello\t120\nworld\t7\tnoun\n");
        assert!(set.contains("hello"));
        assert!(set.contains("world"));
        assert!(!set.contains("120"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = parse("yaar\nyaar\nyaar\t3\n");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_case_sensitive() {
        let set = parse("London\n");
        assert!(set.contains("London"));
        assert!(!set.contains("london"));
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let set = parse("one\r\n\r\n\ntwo\r\n");
        assert!(set.contains("one"));
        assert!(set.contains("two"));
        assert!(!set.contains(""));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = WordSet::load(Path::new("/nonexistent/words.txt")).unwrap_err();
        assert!(matches!(err, ResourceError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }
}
