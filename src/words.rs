//! Word list supplying the shared secret word.

use derive_more::{Display, Error};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Words used when no word file is configured.
pub const DEFAULT_WORDS: &[&str] = &[
    "Pizza",
    "Playa",
    "Guitarra",
    "Hospital",
    "Aeropuerto",
    "Biblioteca",
    "Elefante",
    "Cine",
    "Volcán",
    "Astronauta",
    "Chocolate",
    "Fútbol",
    "Museo",
    "Submarino",
    "Castillo",
    "Dinosaurio",
    "Circo",
    "Restaurante",
    "Pirata",
    "Montaña",
    "Semáforo",
    "Helado",
    "Tren",
    "Bombero",
];

/// A non-empty list of candidate shared words.
///
/// Duplicates are allowed and case is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Creates a word list, failing if no words are given.
    #[instrument(skip(words))]
    pub fn new(words: Vec<String>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::new("Word list is empty"));
        }
        debug!(count = words.len(), "Word list created");
        Ok(Self { words })
    }

    /// Returns the built-in word list.
    pub fn builtin() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Parses one word per line. Lines are trimmed; blank lines and lines
    /// starting with `#` are skipped.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, WordListError> {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect::<Vec<_>>();
        Self::new(words)
    }

    /// Loads a word list from a text file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            WordListError::new(format!(
                "Failed to read word file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let list = Self::parse(&content)?;
        info!(count = list.len(), "Word list loaded");
        Ok(list)
    }

    /// Number of words (always at least one).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// All words in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Word list error.
#[derive(Debug, Clone, Display, Error)]
#[display("Word list error: {} at {}:{}", message, file, line)]
pub struct WordListError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordListError {
    /// Creates a new word list error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_not_empty() {
        assert!(WordList::builtin().len() > 1);
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(WordList::new(Vec::new()).is_err());
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        let list = WordList::parse("# fruit\nPizza\n\n  Mango  \n#Banana\n").unwrap();
        assert_eq!(list.words(), &["Pizza".to_string(), "Mango".to_string()]);
    }

    #[test]
    fn test_parse_keeps_duplicates_and_case() {
        let list = WordList::parse("pizza\nPizza\npizza").unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(1), Some("Pizza"));
    }

    #[test]
    fn test_parse_only_comments_fails() {
        let err = WordList::parse("# nothing here\n\n").unwrap_err();
        assert!(err.message.contains("empty"));
    }
}
