//! Document content storage.
//!
//! [`TextBuffer`] owns the current document content as a single `String`. All other
//! components operate on snapshots taken from it; the buffer itself holds no history,
//! no cursors, and no derived state.
//!
//! At any observation point the buffer reflects exactly the most recently applied
//! mutation or history navigation. Keeping content changes serialized through a single
//! owner is what makes that guarantee hold (see [`crate::session::EditorSession`]).

/// The single mutable document content owned by an editor session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    content: String,
}

impl TextBuffer {
    /// Create a buffer holding `text`.
    pub fn new(text: &str) -> Self {
        Self {
            content: text.to_string(),
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Get the current content.
    pub fn text(&self) -> &str {
        &self.content
    }

    /// Replace the entire content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = text.into();
    }

    /// Take an independent full copy of the current content.
    ///
    /// Snapshots are plain values; later buffer mutation never affects them.
    pub fn snapshot(&self) -> String {
        self.content.clone()
    }

    /// Get total character count.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Returns `true` if the buffer holds no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let buffer = TextBuffer::new("Hello\nWorld");
        assert_eq!(buffer.text(), "Hello\nWorld");
        assert_eq!(buffer.char_count(), 11);
        assert!(!buffer.is_empty());

        let empty = TextBuffer::empty();
        assert_eq!(empty.text(), "");
        assert!(empty.is_empty());
    }

    #[test]
    fn test_char_count_is_chars_not_bytes() {
        let buffer = TextBuffer::new("héllo");
        assert_eq!(buffer.char_count(), 5);
        assert_eq!(buffer.text().len(), 6);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut buffer = TextBuffer::new("before");
        let snapshot = buffer.snapshot();
        buffer.set_text("after");

        assert_eq!(snapshot, "before");
        assert_eq!(buffer.text(), "after");
    }
}
