//! Message types for the Elm-style architecture
//!
//! All snippet changes flow through these message types. One message is one
//! atomic edit: observers see the snippet before or after it, never between.

use std::path::PathBuf;

use crate::model::{Language, Snippet, SnippetKind, SnippetType};

/// Scalar snippet fields, code and delimiter
#[derive(Debug, Clone, PartialEq)]
pub enum SnippetMsg {
    SetFormat(String),
    SetTitle(String),
    SetShortcut(String),
    SetDescription(String),
    SetAuthor(String),
    SetHelpUrl(String),
    /// Clears namespaces if the new language has no imports
    SetLanguage(Option<Language>),
    SetKind(SnippetKind),
    /// Replace the code and reconcile placeholders
    SetCode(String),
    /// Change the delimiter (`None` = default `$`) and reconcile placeholders
    SetDelimiter(Option<char>),
}

/// Edits to one placeholder, addressed by its index in the sorted list
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceholderMsg {
    SetDefaultValue { index: usize, value: String },
    SetFunction { index: usize, value: String },
    SetTooltip { index: usize, value: String },
    SetEditable { index: usize, is_editable: bool },
}

/// Import list edits
#[derive(Debug, Clone, PartialEq)]
pub enum NamespaceMsg {
    /// Append an empty entry for the user to fill in
    Add,
    Update { index: usize, value: String },
    Remove(usize),
}

/// Snippet type set edits
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeMsg {
    Add(SnippetType),
    Remove(SnippetType),
}

/// Whole-snippet operations
#[derive(Debug, Clone, PartialEq)]
pub enum SessionMsg {
    /// Start over with a default snippet
    New,
    /// Load a snippet (e.g. one just parsed from a file)
    Replace(Box<Snippet>),
    /// Serialize the snippet; `None` saves to the current file
    Save { path: Option<PathBuf> },
    /// The snippet was written to disk
    MarkClean,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Snippet(SnippetMsg),
    Placeholder(PlaceholderMsg),
    Namespace(NamespaceMsg),
    Type(TypeMsg),
    Session(SessionMsg),
}

impl From<SnippetMsg> for Msg {
    fn from(msg: SnippetMsg) -> Self {
        Msg::Snippet(msg)
    }
}

impl From<PlaceholderMsg> for Msg {
    fn from(msg: PlaceholderMsg) -> Self {
        Msg::Placeholder(msg)
    }
}

impl From<NamespaceMsg> for Msg {
    fn from(msg: NamespaceMsg) -> Self {
        Msg::Namespace(msg)
    }
}

impl From<TypeMsg> for Msg {
    fn from(msg: TypeMsg) -> Self {
        Msg::Type(msg)
    }
}

impl From<SessionMsg> for Msg {
    fn from(msg: SessionMsg) -> Self {
        Msg::Session(msg)
    }
}
