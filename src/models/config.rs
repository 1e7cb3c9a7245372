use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::utils::constants::{BUILTIN_SOURCES, DEFAULT_COLORS, DEFAULT_STORAGE_ROOT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub storage: Option<StorageConfig>,
    pub color_sets: Option<Vec<ColorSetEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory the color files live in
    pub root: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorSetEntry {
    pub name: String,
    pub file: String,
    /// Written to `file` when it does not exist yet
    pub default: Option<String>,
}

/// Where a color set comes from: display name, file name and the text
/// written out when the file is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSetSource {
    pub name: String,
    pub file: String,
    pub default_content: String,
}

impl ColorSetSource {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        file: impl Into<String>,
        default_content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            default_content: default_content.into(),
        }
    }
}

impl From<&ColorSetEntry> for ColorSetSource {
    fn from(entry: &ColorSetEntry) -> Self {
        Self::new(
            entry.name.clone(),
            entry.file.clone(),
            entry.default.as_deref().unwrap_or(DEFAULT_COLORS),
        )
    }
}

impl Config {
    /// Load configuration from `$LINECOLOR_CONFIG`, or `config.toml`.
    ///
    /// # Errors
    /// Returns `ConfigError` if file not found, IO fails, parsing fails or a
    /// color set entry is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("LINECOLOR_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from_toml(&path)
    }

    /// # Errors
    /// Returns `ConfigError` if the file is missing, unreadable or invalid.
    pub fn load_from_toml(path: &str) -> Result<Self, ConfigError> {
        if !Path::new(path).exists() {
            return Err(ConfigError::FileNotFound(path.to_string()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// # Errors
    /// Returns `ConfigError::ParseError` for malformed TOML and
    /// `ConfigError::Invalid` for unusable color set entries.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        if let Some(entries) = &mut config.color_sets {
            let mut files = HashSet::new();
            for entry in entries.iter_mut() {
                entry.name = entry.name.trim().to_string();
                entry.file = entry.file.trim().to_string();

                if entry.name.is_empty() {
                    return Err(ConfigError::Invalid(
                        "color set name must not be empty".to_string(),
                    ));
                }
                if entry.file.is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "color set {} has no file",
                        entry.name
                    )));
                }
                // two sets sharing a file would overwrite each other's defaults
                if !files.insert(entry.file.clone()) {
                    return Err(ConfigError::Invalid(format!(
                        "file {} is used by more than one color set",
                        entry.file
                    )));
                }
            }
        }

        Ok(config)
    }

    #[must_use]
    pub fn storage_root(&self) -> &str {
        self.storage
            .as_ref()
            .and_then(|s| s.root.as_deref())
            .unwrap_or(DEFAULT_STORAGE_ROOT)
    }

    /// Configured color sets, or the built-in ones when none are configured.
    #[must_use]
    pub fn sources(&self) -> Vec<ColorSetSource> {
        match &self.color_sets {
            Some(entries) if !entries.is_empty() => {
                entries.iter().map(ColorSetSource::from).collect()
            }
            _ => BUILTIN_SOURCES.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
