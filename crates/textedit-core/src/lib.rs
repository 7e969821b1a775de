#![warn(missing_docs)]
//! textedit-core - Headless Plain-Text Editing Engine
//!
//! # Overview
//!
//! `textedit-core` maintains an in-memory text buffer and provides undo/redo history,
//! literal substring search, find-and-replace, and dictionary-based spell checking over
//! that buffer. It is headless: window and menu presentation, file dialogs, and
//! persistence belong to the caller, which invokes engine operations and presents the
//! display-ready results (match offsets, misspelled word sets) itself.
//!
//! # Core Features
//!
//! - **Snapshot History**: every recorded state is a complete content copy; undo/redo
//!   can never diverge from true content
//! - **Duplicate-State Suppression**: recording an unchanged content value creates no
//!   history entry, so keystroke-level notifications do not bloat the stacks
//! - **Overlap-Counting Search**: character-offset matches from a left-to-right scan
//!   that counts overlapping occurrences
//! - **Degradable Spell Checking**: a missing word list disables the checker with a
//!   distinct "unavailable" outcome instead of flagging every word
//! - **State Tracking**: version counter and change-notification callbacks for
//!   frontend synchronization
//!
//! # Quick Start
//!
//! ## Using the session
//!
//! ```rust
//! use textedit_core::{Dictionary, EditorSession};
//!
//! let mut session = EditorSession::empty();
//! session.set_dictionary(Dictionary::from_words(["hello", "world"]));
//!
//! session.edit("hello wrold");
//! session.replace_all("wrold", "world").unwrap();
//! assert_eq!(session.text(), "hello world");
//! assert!(session.spell_check().unwrap().is_empty());
//!
//! session.undo();
//! assert_eq!(session.text(), "hello wrold");
//! ```
//!
//! ## Using the components directly
//!
//! ```rust
//! use textedit_core::{HistoryManager, search};
//!
//! let mut history = HistoryManager::new("");
//! history.record_if_changed("aaa");
//!
//! let matches = search::find_all(history.current(), "aa").unwrap();
//! let starts: Vec<usize> = matches.iter().map(|m| m.start).collect();
//! assert_eq!(starts, vec![0, 1]);
//! ```
//!
//! # Module Description
//!
//! - [`buffer`] - owned document content
//! - [`history`] - snapshot-based undo/redo stacks
//! - [`search`] - literal find-all / replace-all over character offsets
//! - [`spell`] - dictionary loading and spell checking
//! - [`session`] - the mutation choke point tying the components together
//! - [`line_ending`] - CRLF/LF normalization for load and save
//!
//! # Concurrency Model
//!
//! Single-threaded and synchronous: every operation is a pure, non-blocking
//! computation over values already in memory, reactive to discrete caller events. A
//! session exclusively owns its buffer and history; callers dispatching edits from an
//! asynchronous event source must serialize them into the session in the order the
//! content actually changed.

pub mod buffer;
pub mod history;
pub mod line_ending;
pub mod search;
pub mod session;
pub mod spell;

pub use buffer::TextBuffer;
pub use history::HistoryManager;
pub use line_ending::LineEnding;
pub use search::{SearchError, SearchMatch, find_all, replace_all};
pub use session::{EditorSession, StateChange, StateChangeCallback, StateChangeType};
pub use spell::{Dictionary, SpellError, check};
