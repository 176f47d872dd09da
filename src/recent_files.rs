//! Persistent recent snippet files list
//!
//! Tracks snippet files opened or saved by the editor and persists them to disk.
//! Files are stored in MRU (most recently used) order with a capacity limit.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Maximum number of entries to keep
const MAX_ENTRIES: usize = 50;

/// A single entry in the recent files list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentEntry {
    /// Absolute path to the snippet file
    pub path: PathBuf,
    /// Timestamp when last used (Unix epoch seconds)
    pub opened_at: u64,
    /// Snippet title at the time it was last used
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Number of times the file has been used (for ranking)
    #[serde(default)]
    pub open_count: u32,
}

impl RecentEntry {
    /// Create a new entry for the current time
    pub fn new(path: PathBuf, title: String) -> Self {
        Self {
            path,
            opened_at: now_epoch_secs(),
            title,
            open_count: 1,
        }
    }

    /// Update entry for re-use
    pub fn touch(&mut self) {
        self.opened_at = now_epoch_secs();
        self.open_count += 1;
    }

    /// Title if known, otherwise the file name
    pub fn display_name(&self) -> String {
        if !self.title.trim().is_empty() {
            return self.title.clone();
        }
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }

    /// Get human-readable time since last use
    pub fn time_ago(&self) -> String {
        let now = now_epoch_secs();
        let diff = now.saturating_sub(self.opened_at);

        if diff < 60 {
            "just now".to_string()
        } else if diff < 3600 {
            plural(diff / 60, "min")
        } else if diff < 86400 {
            plural(diff / 3600, "hour")
        } else if diff < 604800 {
            plural(diff / 86400, "day")
        } else {
            plural(diff / 604800, "week")
        }
    }

    /// Check if file still exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

fn plural(count: u64, unit: &str) -> String {
    format!("{} {}{} ago", count, unit, if count == 1 { "" } else { "s" })
}

fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Persistent recent files list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentFiles {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    /// Recent file entries, most recent first
    pub entries: Vec<RecentEntry>,
}

impl RecentFiles {
    pub const CURRENT_VERSION: u32 = 1;

    /// Load recent files from the config directory
    pub fn load() -> Self {
        match crate::config_paths::recent_files_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`, dropping entries whose files are gone
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let mut recent: Self = serde_json::from_str(&contents).unwrap_or_else(|e| {
                    tracing::warn!("Ignoring corrupt recent files list {}: {}", path.display(), e);
                    Self::default()
                });
                recent.prune_missing();
                recent
            }
            Err(_) => Self::default(),
        }
    }

    /// Save recent files to the config directory
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = crate::config_paths::recent_files_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory available",
            ));
        };
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let snapshot = Self {
            version: Self::CURRENT_VERSION,
            entries: self.entries.clone(),
        };
        let contents = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(path, contents)
    }

    /// Add a file to the recent list (or update if already present)
    pub fn add(&mut self, path: PathBuf, title: &str) {
        // Canonicalize path for consistent matching
        let canonical = path.canonicalize().unwrap_or(path);

        if let Some(idx) = self.find_index(&canonical) {
            let mut entry = self.entries.remove(idx);
            entry.touch();
            if !title.trim().is_empty() {
                entry.title = title.to_string();
            }
            self.entries.insert(0, entry);
        } else {
            self.entries
                .insert(0, RecentEntry::new(canonical, title.to_string()));
        }

        self.entries.truncate(MAX_ENTRIES);
    }

    /// Remove a file from the recent list
    pub fn remove(&mut self, path: &Path) {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        self.entries.retain(|e| e.path != canonical);
    }

    /// Clear all recent files
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Prune entries for files that no longer exist
    pub fn prune_missing(&mut self) {
        let original_len = self.entries.len();
        self.entries.retain(|e| e.exists());
        if self.entries.len() != original_len {
            tracing::debug!(
                "Pruned {} missing files from recent list",
                original_len - self.entries.len()
            );
        }
    }

    fn find_index(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }
}
