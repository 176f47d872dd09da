//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! placeholder reconciliation and session state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=placeholders=debug,message=debug` - scoped filtering
//! - `RUST_LOG=snippet_editor::io=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/snippet-editor/logs/snippet.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::model::SnippetSession;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so it never mixes with command output, and
/// respects RUST_LOG (default `warn`).
///
/// File logging writes to `~/.config/snippet-editor/logs/snippet.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of placeholder state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSnapshot {
    pub names: Vec<String>,
    /// Recycle bin contents, sorted
    pub recycled: Vec<String>,
    pub valid: bool,
}

impl PlaceholderSnapshot {
    pub fn from_session(session: &SnippetSession) -> Self {
        let mut recycled: Vec<String> = session.recycle_bin.keys().cloned().collect();
        recycled.sort();

        Self {
            names: session
                .snippet()
                .placeholders
                .iter()
                .map(|p| p.name.clone())
                .collect(),
            recycled,
            valid: session.is_valid_code(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PlaceholderSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        let added = missing_from(&other.names, &self.names);
        let removed = missing_from(&self.names, &other.names);
        if !added.is_empty() {
            changes.push(format!("added [{}]", added.join(", ")));
        }
        if !removed.is_empty() {
            changes.push(format!("removed [{}]", removed.join(", ")));
        }

        if self.recycled != other.recycled {
            changes.push(format!(
                "recycle bin: [{}] → [{}]",
                self.recycled.join(", "),
                other.recycled.join(", ")
            ));
        }

        if self.valid != other.valid {
            let status = if other.valid { "valid" } else { "invalid" };
            changes.push(format!("code {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

/// Entries of `names` not present in `other`
fn missing_from<'a>(names: &'a [String], other: &[String]) -> Vec<&'a str> {
    names
        .iter()
        .filter(|name| !other.contains(name))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(names: &[&str], recycled: &[&str], valid: bool) -> PlaceholderSnapshot {
        PlaceholderSnapshot {
            names: names.iter().map(|s| s.to_string()).collect(),
            recycled: recycled.iter().map(|s| s.to_string()).collect(),
            valid,
        }
    }

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        let a = snapshot(&["x"], &[], true);
        assert_eq!(a.diff(&a.clone()), None);
    }

    #[test]
    fn test_diff_reports_moves_to_recycle_bin() {
        let before = snapshot(&["a", "b"], &[], true);
        let after = snapshot(&["a"], &["b"], false);
        assert_eq!(
            before.diff(&after).as_deref(),
            Some("removed [b]; recycle bin: [] → [b]; code invalid")
        );
    }
}
