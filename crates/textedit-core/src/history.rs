//! Snapshot-based undo/redo history.
//!
//! # Overview
//!
//! [`HistoryManager`] owns two ordered stacks of content snapshots:
//!
//! - `past` — every recorded state, most recent last. Never empty: the oldest entry is
//!   the *floor*, the state seeded at construction / document load, below which undo
//!   cannot regress.
//! - `future` — states walked back over by undo, available to redo. Discarded in full
//!   whenever a new state is recorded.
//!
//! Each entry is a complete, independently valid copy of the document content. A
//! history entry can therefore never diverge from true content, at the cost of memory
//! proportional to document size per entry; duplicate-state suppression (below) keeps
//! the stacks from growing under no-op churn.
//!
//! # Duplicate-state suppression
//!
//! [`record_if_changed`](HistoryManager::record_if_changed) compares the incoming
//! content against the current `past` top and records nothing when they are equal.
//! Mutation notifications tend to arrive per keystroke; a character typed and
//! immediately deleted nets out to unchanged content and must not produce a redundant
//! entry.
//!
//! # Boundary behavior
//!
//! Undo at the floor and redo with an empty `future` are defined no-ops that return
//! the current content unchanged. They are never errors.
//!
//! # Example
//!
//! ```rust
//! use textedit_core::HistoryManager;
//!
//! let mut history = HistoryManager::new("");
//! history.record_if_changed("a");
//! history.record_if_changed("ab");
//!
//! assert_eq!(history.undo(), "a");
//! assert_eq!(history.redo(), "ab");
//! ```

/// Undo/redo history over complete content snapshots.
#[derive(Debug)]
pub struct HistoryManager {
    past: Vec<String>,
    future: Vec<String>,
    /// Clean point tracking. Stores `past.len()` at the last saved state. While `future`
    /// is non-empty, `clean_index` may be greater than `past.len()`.
    clean_index: Option<usize>,
}

impl HistoryManager {
    /// Create a history seeded with `initial` as the floor entry.
    ///
    /// The seeded state is the clean (saved) point.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            past: vec![initial.into()],
            future: Vec::new(),
            clean_index: Some(1),
        }
    }

    /// Clear both stacks and seed `past` with `initial`.
    ///
    /// Used on new-document and on successful file load; the new state is clean.
    pub fn reset(&mut self, initial: impl Into<String>) {
        self.past.clear();
        self.past.push(initial.into());
        self.future.clear();
        self.clean_index = Some(1);
    }

    /// The currently active snapshot (top of `past`).
    pub fn current(&self) -> &str {
        self.past.last().map(String::as_str).unwrap_or("")
    }

    /// Record `new_content` as a new history entry, unless it equals the current one.
    ///
    /// Recording discards the entire redo branch. Returns `true` if an entry was
    /// recorded, `false` if it was suppressed as a duplicate state.
    pub fn record_if_changed(&mut self, new_content: &str) -> bool {
        if self.current() == new_content {
            return false;
        }

        self.clear_future_and_adjust_clean();
        self.past.push(new_content.to_string());
        true
    }

    /// Step back one entry and return the content to install.
    ///
    /// At the floor this is a no-op returning the current content.
    pub fn undo(&mut self) -> &str {
        if self.can_undo() {
            let top = self.past.pop().expect("checked");
            self.future.push(top);
        }
        self.current()
    }

    /// Step forward one previously undone entry and return the content to install.
    ///
    /// With an empty `future` this is a no-op returning the current content.
    pub fn redo(&mut self) -> &str {
        if let Some(next) = self.future.pop() {
            self.past.push(next);
        }
        self.current()
    }

    /// Returns `true` if there is at least one entry above the floor to undo to.
    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    /// Returns `true` if there are undone entries available to redo.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of states undo can step back through.
    pub fn undo_depth(&self) -> usize {
        self.past.len().saturating_sub(1)
    }

    /// Number of states redo can step forward through.
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Returns `true` if the current state is the last marked-clean (saved) state.
    pub fn is_clean(&self) -> bool {
        self.clean_index == Some(self.past.len())
    }

    /// Mark the current state as clean (saved).
    pub fn mark_clean(&mut self) {
        self.clean_index = Some(self.past.len());
    }

    fn clear_future_and_adjust_clean(&mut self) {
        if self.future.is_empty() {
            return;
        }

        // If the clean point sits in the redo area, it becomes unreachable once redo
        // is discarded.
        if let Some(clean_index) = self.clean_index
            && clean_index > self.past.len()
        {
            self.clean_index = None;
        }

        self.future.clear();
    }
}
