//! Dictionary-based spell checking.
//!
//! # Overview
//!
//! [`Dictionary`] is an immutable set of known lowercase words, loaded once from a
//! newline-delimited word list. [`check`] tokenizes a content snapshot into maximal
//! runs of ASCII letters, lowercases each token, and reports the ones absent from the
//! dictionary, alphabetically ordered and de-duplicated.
//!
//! Digits, punctuation, whitespace, and non-ASCII characters never form part of a
//! token; they act as separators only. `"Hello, wrold! 123"` against a dictionary of
//! `{"hello", "world"}` yields exactly `{"wrold"}`.
//!
//! # Degraded mode
//!
//! An empty or absent dictionary means "spell check unavailable", not "every word is
//! misspelled". [`check`] reports this as [`SpellError::DictionaryUnavailable`], a
//! distinct outcome from `Ok` with an empty set. Failing to load a word list at
//! startup degrades the checker this way; it never aborts the editor.

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

/// A maximal run of ASCII letters.
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("[A-Za-z]+").expect("valid pattern"))
}

/// An immutable set of known words, lowercase-normalized at construction.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary (spell check unavailable).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from an iterator of words.
    ///
    /// Words are trimmed and lowercased; blanks are skipped; duplicates collapse.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim();
                if word.is_empty() {
                    None
                } else {
                    Some(word.to_lowercase())
                }
            })
            .collect();
        Self { words }
    }

    /// Read a dictionary from a newline-delimited word list.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let lines: Vec<String> = reader.lines().collect::<io::Result<_>>()?;
        Ok(Self::from_words(lines))
    }

    /// Load a dictionary from a word list file.
    ///
    /// A missing file is an `Err` the caller is expected to treat as "spell check
    /// unavailable" rather than a startup failure.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Returns `true` if `word` is known. Lookup is case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the dictionary holds no words (spell check unavailable).
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Spell check errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellError {
    /// No dictionary is loaded; the checker is in degraded mode. Distinguishable from
    /// "ran and found zero misspellings".
    DictionaryUnavailable,
}

impl std::fmt::Display for SpellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DictionaryUnavailable => {
                write!(f, "Dictionary not loaded; spell check unavailable")
            }
        }
    }
}

impl std::error::Error for SpellError {}

/// Report the words in `content` not present in `dictionary`.
///
/// The result is alphabetically ordered with duplicates collapsed. Fails with
/// [`SpellError::DictionaryUnavailable`] when the dictionary is empty.
pub fn check(content: &str, dictionary: &Dictionary) -> Result<BTreeSet<String>, SpellError> {
    if dictionary.is_empty() {
        return Err(SpellError::DictionaryUnavailable);
    }

    let mut misspelled = BTreeSet::new();
    for token in token_pattern().find_iter(content) {
        let word = token.as_str().to_lowercase();
        if !dictionary.contains(&word) {
            misspelled.insert(word);
        }
    }

    Ok(misspelled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().copied())
    }

    #[test]
    fn test_check_reports_unknown_words() {
        let dictionary = dict(&["hello", "world"]);
        let result = check("Hello, wrold! 123", &dictionary).unwrap();
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec!["wrold"]);
    }

    #[test]
    fn test_check_is_case_insensitive() {
        let dictionary = dict(&["hello"]);
        assert!(check("HELLO Hello hello", &dictionary).unwrap().is_empty());
    }

    #[test]
    fn test_check_orders_and_deduplicates() {
        let dictionary = dict(&["a"]);
        let result = check("zz yy zz YY xx", &dictionary).unwrap();
        assert_eq!(
            result.into_iter().collect::<Vec<_>>(),
            vec!["xx", "yy", "zz"]
        );
    }

    #[test]
    fn test_non_letters_act_as_separators() {
        let dictionary = dict(&["abc", "def"]);
        // Digits split letter runs into separate tokens and are never candidates.
        assert!(check("abc123def", &dictionary).unwrap().is_empty());

        let result = check("abc4xyz", &dictionary).unwrap();
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec!["xyz"]);
    }

    #[test]
    fn test_empty_dictionary_is_unavailable() {
        let err = check("anything", &Dictionary::new()).unwrap_err();
        assert_eq!(err, SpellError::DictionaryUnavailable);
    }

    #[test]
    fn test_empty_content_with_dictionary_is_clean() {
        let dictionary = dict(&["hello"]);
        assert!(check("", &dictionary).unwrap().is_empty());
        assert!(check("... 42 ...", &dictionary).unwrap().is_empty());
    }

    #[test]
    fn test_from_reader_trims_and_lowercases() {
        let list = "Apple\n  banana  \n\nCHERRY\napple\n";
        let dictionary = Dictionary::from_reader(list.as_bytes()).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("apple"));
        assert!(dictionary.contains("Banana"));
        assert!(dictionary.contains("cherry"));
        assert!(!dictionary.contains("durian"));
    }

    #[test]
    fn test_load_missing_file_is_err() {
        assert!(Dictionary::load("definitely/not/a/real/dict.txt").is_err());
    }
}
