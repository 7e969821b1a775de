//! Literal substring search and replace.
//!
//! This module provides stateless search APIs over a UTF-8 `&str` snapshot, using
//! **character offsets** (not byte offsets) for all public inputs/outputs:
//!
//! - [`find_all`] — locate every occurrence of a literal term
//! - [`replace_all`] — replace every non-overlapping occurrence of a literal term
//!
//! Search is a plain left-to-right scan. After reporting a match, [`find_all`] resumes
//! **one character past the match start** rather than past its end, so adjacent
//! overlapping occurrences are each counted: searching for `"aa"` in `"aaa"` yields
//! offsets `[0, 1]`. This overlap-counting behavior is part of the contract and is
//! covered by tests; do not "fix" it to non-overlapping scanning.
//!
//! [`replace_all`] uses the ordinary non-overlapping semantics instead (each scan
//! resumes past the end of the replaced occurrence, and replacement output is never
//! re-scanned): replacing `"aa"` with `"b"` in `"aaaa"` yields `"bb"`.
//!
//! Neither function touches history; committing a replacement is the caller's job
//! (see [`crate::session::EditorSession::replace_all`]).

/// A match returned by [`find_all`], expressed as a half-open character range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl SearchMatch {
    /// Returns the length of the match in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the match is empty.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Search errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The search or replace pattern was empty. Recovered locally by the caller
    /// (re-prompt); never fatal.
    InvalidQuery,
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery => write!(f, "Search pattern must not be empty"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Byte offset <-> character offset maps for one text snapshot.
#[derive(Debug)]
pub(crate) struct CharIndex {
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl CharIndex {
    pub(crate) fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    pub(crate) fn char_count(&self) -> usize {
        self.char_to_byte.len().saturating_sub(1)
    }

    pub(crate) fn char_to_byte(&self, char_offset: usize) -> usize {
        let clamped = char_offset.min(self.char_count());
        self.char_to_byte
            .get(clamped)
            .cloned()
            .unwrap_or(self.text_len)
    }

    pub(crate) fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }
}

/// Find all occurrences of `term` in `content`, in ascending offset order.
///
/// - Fails with [`SearchError::InvalidQuery`] if `term` is empty.
/// - The scan resumes one character past each match start, so overlapping occurrences
///   are each counted (see the module docs).
/// - Returns an empty list if nothing matches.
pub fn find_all(content: &str, term: &str) -> Result<Vec<SearchMatch>, SearchError> {
    if term.is_empty() {
        return Err(SearchError::InvalidQuery);
    }

    let index = CharIndex::new(content);
    let mut matches: Vec<SearchMatch> = Vec::new();
    let mut from_byte = 0;

    while let Some(found) = content[from_byte..].find(term) {
        let start_byte = from_byte + found;
        let start = index.byte_to_char(start_byte);
        let end = index.byte_to_char(start_byte + term.len());
        matches.push(SearchMatch { start, end });

        // Resume one character past the match start, not past its end.
        from_byte = index.char_to_byte(start + 1);
    }

    Ok(matches)
}

/// Replace every non-overlapping occurrence of `find` in `content` with `replace`.
///
/// - Fails with [`SearchError::InvalidQuery`] if `find` is empty.
/// - Pure: returns the new content without committing it anywhere.
pub fn replace_all(content: &str, find: &str, replace: &str) -> Result<String, SearchError> {
    if find.is_empty() {
        return Err(SearchError::InvalidQuery);
    }

    Ok(content.replace(find, replace))
}
