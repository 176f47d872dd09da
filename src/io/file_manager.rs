//! Opening and saving snippet files
//!
//! Tracks the file the current snippet came from so "Save" can write back to
//! it, while "Save As" always takes an explicit path.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::parser::{parse_snippet, ParseError};
use super::writer::write_snippet;
use super::xml::WriteError;
use crate::model::Snippet;
use crate::util::{filename_for_display, validate_file_for_opening, FileOpenError};

/// Error opening or saving a snippet file
#[derive(Debug)]
pub enum FileError {
    /// The path failed validation before reading
    Open { path: PathBuf, source: FileOpenError },
    /// Reading or writing failed
    Io { path: PathBuf, source: std::io::Error },
    /// The file was read but is not a usable snippet
    Parse { path: PathBuf, source: ParseError },
    /// The snippet could not be serialized
    Write { path: PathBuf, source: WriteError },
}

impl FileError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. }
            | Self::Io { path, .. }
            | Self::Parse { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "{}", source.user_message(&filename_for_display(path)))
            }
            Self::Io { path, source } => write!(f, "failed to access {}: {}", path.display(), source),
            Self::Parse { path, source } => write!(f, "{}: {}", path.display(), source),
            Self::Write { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}

/// Current file state for one editing session
#[derive(Debug, Default)]
pub struct FileManager {
    current: Option<PathBuf>,
    /// Directory for snippets that have never been saved
    default_dir: PathBuf,
}

impl FileManager {
    pub fn new(default_dir: impl Into<PathBuf>) -> Self {
        Self {
            current: None,
            default_dir: default_dir.into(),
        }
    }

    /// Path of the open file, if the snippet came from or was saved to disk
    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    /// Read and parse `path`. The current file only changes if parsing succeeds.
    pub fn open(&mut self, path: &Path) -> Result<Snippet, FileError> {
        validate_file_for_opening(path).map_err(|source| FileError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let text = fs::read_to_string(path).map_err(|source| FileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let snippet = parse_snippet(&text).map_err(|source| FileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Opened snippet {}", path.display());
        self.current = Some(path.to_path_buf());
        Ok(snippet)
    }

    /// Save to the current file, or to a file named after the snippet in the default directory
    pub fn save(&mut self, snippet: &Snippet) -> Result<PathBuf, FileError> {
        let path = self.save_path(snippet);
        self.save_as(snippet, &path)
    }

    /// Where `save` would write `snippet`
    pub fn save_path(&self, snippet: &Snippet) -> PathBuf {
        match &self.current {
            Some(path) => path.clone(),
            None => self.default_dir.join(snippet.default_file_name()),
        }
    }

    /// Save to `path` and make it the current file
    pub fn save_as(&mut self, snippet: &Snippet, path: &Path) -> Result<PathBuf, FileError> {
        let xml = write_snippet(snippet).map_err(|source| FileError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_text(path, &xml)
    }

    /// Write already serialized snippet XML to `path` and make it the current file
    pub fn write_text(&mut self, path: &Path, xml: &str) -> Result<PathBuf, FileError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| FileError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, xml).map_err(|source| FileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved snippet to {}", path.display());
        self.current = Some(path.to_path_buf());
        Ok(path.to_path_buf())
    }

    /// Forget the current file ("New")
    pub fn close(&mut self) {
        self.current = None;
    }
}
