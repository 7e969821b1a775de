//! Editor session: the mutation choke point.
//!
//! # Overview
//!
//! [`EditorSession`] ties the engine together for a single document. Every
//! content-changing operation flows through it so that history recording stays
//! synchronous and atomic with respect to the mutation itself: install content, record
//! the snapshot, notify subscribers, in that order, on one thread. A UI layer that
//! dispatches edits from its own event queue must still deliver them here serialized
//! in the order the content actually changed.
//!
//! Read-only queries ([`find_all`](EditorSession::find_all),
//! [`spell_check`](EditorSession::spell_check)) operate on the current buffer content
//! and never touch history.
//!
//! # State tracking
//!
//! The session maintains a version counter and a change-notification mechanism:
//!
//! - every effective change bumps the version exactly once; no-ops (an edit with
//!   unchanged content, undo at the floor, redo with an empty future) do not
//! - subscribers receive a [`StateChange`] record per bump
//! - the modified flag is clean-point based: undoing back to the last saved state
//!   reports the document as unmodified again
//!
//! # Example
//!
//! ```rust
//! use textedit_core::EditorSession;
//!
//! let mut session = EditorSession::empty();
//! session.edit("hello wrold");
//! assert!(session.is_modified());
//!
//! session.replace_all("wrold", "world").unwrap();
//! assert_eq!(session.text(), "hello world");
//!
//! session.undo();
//! assert_eq!(session.text(), "hello wrold");
//! ```

use std::collections::BTreeSet;

use crate::buffer::TextBuffer;
use crate::history::HistoryManager;
use crate::line_ending::LineEnding;
use crate::search::{self, SearchError, SearchMatch};
use crate::spell::{self, Dictionary, SpellError};

/// State change type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChangeType {
    /// Document content changed (edit, undo, redo, or committed replacement).
    DocumentModified,
    /// Document was replaced wholesale (file load or new document); history was reset.
    DocumentLoaded,
}

/// State change record delivered to subscribers.
#[derive(Debug, Clone)]
pub struct StateChange {
    /// Change type.
    pub change_type: StateChangeType,
    /// Version before the change.
    pub old_version: u64,
    /// Version after the change.
    pub new_version: u64,
}

impl StateChange {
    /// Create a new state change record.
    pub fn new(change_type: StateChangeType, old_version: u64, new_version: u64) -> Self {
        Self {
            change_type,
            old_version,
            new_version,
        }
    }
}

/// State change callback function type.
pub type StateChangeCallback = Box<dyn FnMut(&StateChange) + Send>;

/// A single-document editing session: buffer, history, dictionary, and state tracking.
///
/// The session exclusively owns its [`TextBuffer`] and [`HistoryManager`]; no locking
/// discipline is required because nothing here is shared across threads.
pub struct EditorSession {
    buffer: TextBuffer,
    history: HistoryManager,
    dictionary: Dictionary,
    line_ending: LineEnding,
    state_version: u64,
    callbacks: Vec<StateChangeCallback>,
}

impl EditorSession {
    /// Create a session over `text`.
    ///
    /// CRLF input is normalized to LF for internal storage; the detected line ending is
    /// kept for [`text_for_saving`](Self::text_for_saving).
    pub fn new(text: &str) -> Self {
        let line_ending = LineEnding::detect_in_text(text);
        let normalized = LineEnding::normalize(text);
        Self {
            buffer: TextBuffer::new(&normalized),
            history: HistoryManager::new(normalized),
            dictionary: Dictionary::new(),
            line_ending,
            state_version: 0,
            callbacks: Vec::new(),
        }
    }

    /// Create an empty session.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Get the current document content.
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Get the current document text converted to the preferred line ending for saving.
    pub fn text_for_saving(&self) -> String {
        self.line_ending.apply_to_text(self.buffer.text())
    }

    /// Get the preferred line ending for saving this document.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Override the preferred line ending for saving this document.
    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.line_ending = line_ending;
    }

    /// Get the dictionary used for spell checking.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Install the dictionary used for spell checking.
    ///
    /// An empty dictionary leaves the checker in degraded "unavailable" mode.
    pub fn set_dictionary(&mut self, dictionary: Dictionary) {
        self.dictionary = dictionary;
    }

    /// Install `new_content` as the document content, recording it in history.
    ///
    /// Duplicate-state suppression applies: when `new_content` equals the current
    /// content nothing is recorded and the version does not move. Returns whether the
    /// content actually changed.
    pub fn edit(&mut self, new_content: impl Into<String>) -> bool {
        let new_content = new_content.into();
        if !self.history.record_if_changed(&new_content) {
            return false;
        }

        self.buffer.set_text(new_content);
        self.bump_version(StateChangeType::DocumentModified);
        true
    }

    /// Step the document back one history entry.
    ///
    /// A defined no-op at the history floor. Returns whether the content changed.
    pub fn undo(&mut self) -> bool {
        let restored = self.history.undo().to_string();
        self.install_restored(restored)
    }

    /// Step the document forward one previously undone history entry.
    ///
    /// A defined no-op when there is nothing to redo. Returns whether the content
    /// changed.
    pub fn redo(&mut self) -> bool {
        let restored = self.history.redo().to_string();
        self.install_restored(restored)
    }

    /// Returns `true` if undo would change the content.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns `true` if redo would change the content.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Access the undo/redo history state.
    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Replace the document wholesale with freshly loaded content.
    ///
    /// Normalizes line endings, resets history (the loaded content becomes the new
    /// floor and clean point), and clears the modified flag.
    pub fn open(&mut self, raw: &str) {
        self.line_ending = LineEnding::detect_in_text(raw);
        let normalized = LineEnding::normalize(raw);
        self.buffer.set_text(normalized.clone());
        self.history.reset(normalized);
        self.bump_version(StateChangeType::DocumentLoaded);
    }

    /// Start a new empty document.
    pub fn new_document(&mut self) {
        self.line_ending = LineEnding::Lf;
        self.buffer.set_text("");
        self.history.reset("");
        self.bump_version(StateChangeType::DocumentLoaded);
    }

    /// Whether the document differs from the last saved (or loaded) state.
    pub fn is_modified(&self) -> bool {
        !self.history.is_clean()
    }

    /// Mark the current state as saved.
    pub fn mark_saved(&mut self) {
        self.history.mark_clean();
    }

    /// Find all occurrences of `term` in the current content.
    ///
    /// See [`search::find_all`] for the overlap-counting scan semantics.
    pub fn find_all(&self, term: &str) -> Result<Vec<SearchMatch>, SearchError> {
        search::find_all(self.buffer.text(), term)
    }

    /// Replace every occurrence of `find` with `replace` and commit the result to
    /// history.
    ///
    /// On [`SearchError::InvalidQuery`] the buffer is left untouched. Returns whether
    /// the content changed (a pattern with zero occurrences commits nothing, via
    /// duplicate-state suppression).
    pub fn replace_all(&mut self, find: &str, replace: &str) -> Result<bool, SearchError> {
        let replaced = search::replace_all(self.buffer.text(), find, replace)?;
        Ok(self.edit(replaced))
    }

    /// Spell-check the current content against the session dictionary.
    pub fn spell_check(&self) -> Result<BTreeSet<String>, SpellError> {
        spell::check(self.buffer.text(), &self.dictionary)
    }

    /// Get the current state version.
    pub fn version(&self) -> u64 {
        self.state_version
    }

    /// Check if state has changed since `version`.
    pub fn has_changed_since(&self, version: u64) -> bool {
        self.state_version > version
    }

    /// Subscribe to state change notifications.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&StateChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    fn install_restored(&mut self, restored: String) -> bool {
        if restored == self.buffer.text() {
            return false;
        }

        self.buffer.set_text(restored);
        self.bump_version(StateChangeType::DocumentModified);
        true
    }

    fn bump_version(&mut self, change_type: StateChangeType) {
        let old_version = self.state_version;
        self.state_version += 1;

        let change = StateChange::new(change_type, old_version, self.state_version);
        for callback in &mut self.callbacks {
            callback(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_undo_redo_scenario() {
        let mut session = EditorSession::empty();
        assert!(!session.can_undo());
        assert!(!session.can_redo());

        assert!(session.edit("a"));
        assert!(session.undo());
        assert_eq!(session.text(), "");
        assert!(session.redo());
        assert_eq!(session.text(), "a");
    }

    #[test]
    fn test_noop_edit_does_not_bump_version() {
        let mut session = EditorSession::new("same");
        assert_eq!(session.version(), 0);

        assert!(!session.edit("same"));
        assert_eq!(session.version(), 0);

        assert!(session.edit("different"));
        assert_eq!(session.version(), 1);
    }

    #[test]
    fn test_boundary_undo_redo_do_not_bump_version() {
        let mut session = EditorSession::new("x");
        assert!(!session.undo());
        assert!(!session.redo());
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn test_replace_all_commits_and_is_undoable() {
        let mut session = EditorSession::new("aaaa");
        assert_eq!(session.replace_all("aa", "b"), Ok(true));
        assert_eq!(session.text(), "bb");

        session.undo();
        assert_eq!(session.text(), "aaaa");
    }

    #[test]
    fn test_replace_all_invalid_query_leaves_buffer_unchanged() {
        let mut session = EditorSession::new("content");
        let version = session.version();

        assert_eq!(
            session.replace_all("", "x"),
            Err(SearchError::InvalidQuery)
        );
        assert_eq!(session.text(), "content");
        assert_eq!(session.version(), version);
    }

    #[test]
    fn test_replace_all_with_no_occurrences_records_nothing() {
        let mut session = EditorSession::new("content");
        assert_eq!(session.replace_all("zzz", "x"), Ok(false));
        assert!(!session.can_undo());
    }

    #[test]
    fn test_find_all_reads_current_content() {
        let mut session = EditorSession::new("one one");
        session.edit("one one one");

        let matches = session.find_all("one").unwrap();
        let starts: Vec<usize> = matches.iter().map(|m| m.start).collect();
        assert_eq!(starts, vec![0, 4, 8]);
    }

    #[test]
    fn test_spell_check_through_session() {
        let mut session = EditorSession::new("Hello wrold");
        assert_eq!(
            session.spell_check(),
            Err(SpellError::DictionaryUnavailable)
        );

        session.set_dictionary(Dictionary::from_words(["hello", "world"]));
        let result = session.spell_check().unwrap();
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec!["wrold"]);
    }

    #[test]
    fn test_open_resets_history_and_modified_flag() {
        let mut session = EditorSession::empty();
        session.edit("draft");
        assert!(session.is_modified());

        session.open("loaded content");
        assert_eq!(session.text(), "loaded content");
        assert!(!session.is_modified());
        assert!(!session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn test_new_document_resets_everything() {
        let mut session = EditorSession::new("old\r\ntext");
        session.edit("changed");

        session.new_document();
        assert_eq!(session.text(), "");
        assert_eq!(session.line_ending(), LineEnding::Lf);
        assert!(!session.is_modified());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_crlf_normalized_on_open_and_restored_on_save() {
        let mut session = EditorSession::empty();
        session.open("one\r\ntwo");

        assert_eq!(session.text(), "one\ntwo");
        assert_eq!(session.line_ending(), LineEnding::Crlf);
        assert_eq!(session.text_for_saving(), "one\r\ntwo");
    }

    #[test]
    fn test_undo_back_to_saved_state_clears_modified() {
        let mut session = EditorSession::new("saved");
        assert!(!session.is_modified());

        session.edit("saved more");
        assert!(session.is_modified());

        session.undo();
        assert!(!session.is_modified());

        session.redo();
        session.mark_saved();
        assert!(!session.is_modified());
    }

    #[test]
    fn test_state_change_callback() {
        use std::sync::{Arc, Mutex};

        let mut session = EditorSession::empty();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();

        session.subscribe(move |change| {
            seen_clone.lock().unwrap().push(change.change_type);
        });

        session.edit("a");
        session.edit("a"); // suppressed, no notification
        session.undo();
        session.open("file");

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                StateChangeType::DocumentModified,
                StateChangeType::DocumentModified,
                StateChangeType::DocumentLoaded,
            ]
        );
        assert_eq!(session.version(), 3);
    }
}
