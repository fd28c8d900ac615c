//! Configuration for the group site
//!
//! Centralized settings for where data lives, how search behaves, and how
//! the page variant names its CSS classes.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Site-wide configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Data file locations
    pub data: DataConfig,
    /// Search behavior settings
    pub search: SearchConfig,
    /// Page variant settings
    pub presentation: PresentationConfig,
}

/// Where the group, team, and bibliography files are read from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DataConfig {
    /// Directory the file names below are relative to
    pub dir: PathBuf,
    pub group_file: String,
    pub team_file: String,
    pub bibliography_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            group_file: "group.json".to_string(),
            team_file: "team.json".to_string(),
            bibliography_file: "publications.bib".to_string(),
        }
    }
}

impl DataConfig {
    /// Use a different data directory, keeping the file names
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn group_path(&self) -> PathBuf {
        self.dir.join(&self.group_file)
    }

    pub fn team_path(&self) -> PathBuf {
        self.dir.join(&self.team_file)
    }

    pub fn bibliography_path(&self) -> PathBuf {
        self.dir.join(&self.bibliography_file)
    }
}

/// Search box configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet time after the last keystroke before searching, in milliseconds
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Settings that distinguish the page variants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PresentationConfig {
    /// Prefix for every CSS class, e.g. `multi-`
    pub class_prefix: String,
    /// Photo shown for members without one
    pub placeholder_photo: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            class_prefix: String::new(),
            placeholder_photo: "images/team/placeholder.jpg".to_string(),
        }
    }
}

impl SiteConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, choosing the format by extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents),
            _ => Self::from_toml(&contents),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.debounce_ms == 0 {
            return Err(ConfigError::OutOfRange(
                "search.debounce_ms must be positive".to_string(),
            ));
        }

        for (name, value) in [
            ("data.group_file", &self.data.group_file),
            ("data.team_file", &self.data.team_file),
            ("data.bibliography_file", &self.data.bibliography_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField(name.to_string()));
            }
        }

        Ok(())
    }
}
