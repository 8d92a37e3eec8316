//! Lexical resources consulted by the classifier
//!
//! Three flat files are loaded once at startup and stay immutable for the
//! rest of the run:
//! - an English word list (first column = word)
//! - a Hindi word list (first column = word)
//! - a manual word map (word, label), optionally capped to its first N lines

pub mod word_map;
pub mod word_set;

pub use word_map::WordMap;
pub use word_set::WordSet;

use crate::error::ResourceError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default resource locations, relative to the working directory
pub mod defaults {
    /// English vocabulary
    pub const ENGLISH_WORDS: &str = "resources/EN.words.txt";
    /// Romanized Hindi vocabulary
    pub const HINDI_WORDS: &str = "resources/HI.trans.fire2013.txt";
    /// Manual overrides
    pub const WORD_MAP: &str = "resources/word_map.txt";
}

/// Where to find the three resource files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcePaths {
    /// English word list
    pub english: PathBuf,
    /// Hindi word list
    pub hindi: PathBuf,
    /// Manual word map
    pub word_map: PathBuf,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            english: PathBuf::from(defaults::ENGLISH_WORDS),
            hindi: PathBuf::from(defaults::HINDI_WORDS),
            word_map: PathBuf::from(defaults::WORD_MAP),
        }
    }
}

impl ResourcePaths {
    /// Resolve all three files inside one directory using the default file names
    pub fn in_dir(dir: &Path) -> Self {
        let file_name = |p: &str| {
            Path::new(p)
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(p))
        };
        Self {
            english: dir.join(file_name(defaults::ENGLISH_WORDS)),
            hindi: dir.join(file_name(defaults::HINDI_WORDS)),
            word_map: dir.join(file_name(defaults::WORD_MAP)),
        }
    }
}

/// All lookup structures used by the rule cascade
#[derive(Debug, Clone, Default)]
pub struct Resources {
    /// English vocabulary
    pub english: WordSet,
    /// Hindi vocabulary
    pub hindi: WordSet,
    /// Manual overrides, checked before every other rule
    pub word_map: WordMap,
}

impl Resources {
    /// Assemble resources from already-built parts
    pub fn new(english: WordSet, hindi: WordSet, word_map: WordMap) -> Self {
        Self {
            english,
            hindi,
            word_map,
        }
    }

    /// Load every resource file, keeping at most `top_n` word map entries
    pub fn load(paths: &ResourcePaths, top_n: Option<usize>) -> Result<Self, ResourceError> {
        let english = WordSet::load(&paths.english)?;
        log::debug!(
            "loaded {} English words from {}",
            english.len(),
            paths.english.display()
        );

        let hindi = WordSet::load(&paths.hindi)?;
        log::debug!(
            "loaded {} Hindi words from {}",
            hindi.len(),
            paths.hindi.display()
        );

        let word_map = WordMap::load(&paths.word_map, top_n)?;
        log::debug!(
            "loaded {} word map entries from {} (cap: {:?})",
            word_map.len(),
            paths.word_map.display(),
            top_n
        );

        Ok(Self::new(english, hindi, word_map))
    }
}
