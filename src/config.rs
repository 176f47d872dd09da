//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/snippet-editor/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::Language;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Author written into new snippets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_author: Option<String>,

    /// Language id for new snippets (e.g. "CSharp", "VB")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,

    /// Directory for snippets saved without an explicit path.
    /// Defaults to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet_dir: Option<PathBuf>,
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`. Missing or invalid files give defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// The configured default language, if it names a known language
    pub fn language(&self) -> Option<Language> {
        let id = self.default_language.as_deref()?;
        let language = Language::from_id(id);
        if language.is_none() {
            tracing::warn!(id, "Unknown default_language in config, ignoring");
        }
        language
    }

    /// Directory used for saves without an explicit path
    pub fn snippet_dir(&self) -> PathBuf {
        self.snippet_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
