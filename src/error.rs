//! Error types for platform clients
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Remote rejections, transport faults and partial batch failures each have
//! their own variant so callers can match instead of inspecting strings.

use thiserror::Error;

/// The main error type for platform clients
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Base URL '{url}' cannot carry a path")]
    InvalidPath { url: String },

    /// A path segment URL normalization would drop or climb out of
    #[error("Invalid path segment '{segment}'")]
    InvalidSegment { segment: String },

    // ============================================================================
    // Remote API Errors
    // ============================================================================
    /// The remote service rejected the request; `message` is its own text
    #[error("{message}")]
    Api { status: u16, message: String },

    /// One or more requests of a batch failed
    #[error("{description}")]
    BatchFailed {
        description: String,
        failed: Vec<String>,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a remote API error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by a remote rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when a path segment was refused before any request was sent
    pub fn is_invalid_segment(&self) -> bool {
        matches!(self, Error::InvalidSegment { .. })
    }

    /// True when the request never produced a response
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }
}

/// Result type alias for platform clients
pub type Result<T> = std::result::Result<T, Error>;
