//! Snippet Editor - Elm-style editor for Visual Studio code snippets
//!
//! This crate provides the core types and logic for editing `.snippet` files:
//! the template lexer and preview evaluator, the editing session with
//! placeholder reconciliation, and the XML codec.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod io;
pub mod messages;
pub mod model;
pub mod recent_files;
pub mod template;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use io::{parse_snippet, write_snippet};
pub use messages::Msg;
pub use model::{Snippet, SnippetSession};
pub use update::update;
