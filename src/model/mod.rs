//! Snippet model - the data being edited and the session that edits it
//!
//! `Snippet` is plain data. `SnippetSession` wraps one snippet for an editing
//! session and is only mutated through `crate::update`.

pub mod language;
pub mod session;
pub mod snippet;

pub use language::Language;
pub use session::{SnippetSession, SubscriptionId};
pub use snippet::{
    is_reserved_placeholder, Placeholder, Snippet, SnippetKind, SnippetType, DEFAULT_DELIMITER,
    DEFAULT_FORMAT, RESERVED_PLACEHOLDERS,
};
