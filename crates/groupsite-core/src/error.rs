//! Error types for groupsite-core
//!
//! Parsing and filtering never fail; errors only come from reading files
//! and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Main error type for site operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Site data could not be loaded
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Configuration is unreadable or invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Failure to fetch or decode one of the site's data files.
///
/// The page cannot be shown without its data, so callers surface this once
/// and stop.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The file that failed to load
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Json { path, .. } => path,
        }
    }
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Required field is missing
    #[error("Missing field: {0}")]
    MissingField(String),
}
