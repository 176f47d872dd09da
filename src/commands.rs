//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

/// Side effect requested by `update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// The snippet changed; views should re-render
    Redraw,
    /// Write serialized snippet XML. `None` means the current file (or a default name).
    SaveFile {
        path: Option<PathBuf>,
        content: String,
    },
}

