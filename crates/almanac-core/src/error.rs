//! Core error types for almanac-core.
//!
//! Every computation either returns a complete result or one of these errors.
//! Nothing is retried internally; callers decide whether to surface the error
//! or substitute a default of their own.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for almanac-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed date or number, out-of-range hour, inverted range, etc.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    /// A required structured input field was absent
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// An external almanac provider failed. Never masked by the local algorithm.
    #[error("Almanac provider '{provider}' unavailable: {message}")]
    OracleUnavailable { provider: String, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidInput`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        CoreError::MissingField(field.into())
    }

    pub fn oracle(provider: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::OracleUnavailable {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CoreError::InvalidInput { .. })
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Config directory could not be resolved
    #[error("Cannot resolve configuration directory")]
    NoConfigDir,
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::InvalidValue {
            key: "<file>".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
