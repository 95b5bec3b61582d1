//! Client configuration
//!
//! The credential and service location are read once at startup, either from
//! the process environment (with `.env` support) or from a YAML file, and are
//! treated as immutable afterwards.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use url::Url;

/// Environment variable holding the API token
pub const ENV_TOKEN: &str = "GITHUB_ACCESS_TOKEN";
/// Environment variable holding the organization login
pub const ENV_ORG: &str = "GITHUB_ORG";
/// Environment variable overriding the API base URL
pub const ENV_API_URL: &str = "GITHUB_API_URL";
/// Environment variable overriding the user agent
pub const ENV_USER_AGENT: &str = "GITHUB_USER_AGENT";

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// ============================================================================
// GitHub Config
// ============================================================================

/// Settings for a [`GitHubClient`](crate::github::GitHubClient)
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitHubConfig {
    /// API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Organization owning the teams and repositories
    pub org: String,

    /// Personal access or app token
    pub token: String,

    /// User agent sent with every request (GitHub rejects requests without one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    format!("platform-clients/{}", env!("CARGO_PKG_VERSION"))
}

impl GitHubConfig {
    /// Create a config for the public API
    pub fn new(org: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_url: default_api_url(),
            org: org.into(),
            token: token.into(),
            user_agent: default_user_agent(),
        }
    }

    /// Point the config at a different API host
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Override the user agent
    #[must_use]
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(Error::config(format!("Failed to read .env: {e}"))),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::missing_field(key))
        };

        let mut config = Self::new(required(ENV_ORG)?, required(ENV_TOKEN)?);
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
            config.api_url = url;
        }
        if let Some(agent) = lookup(ENV_USER_AGENT).filter(|v| !v.is_empty()) {
            config.user_agent = agent;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Check required values and the base URL
    pub fn validate(&self) -> Result<()> {
        if self.org.trim().is_empty() {
            return Err(Error::invalid_value("org", "must not be empty"));
        }
        if self.token.trim().is_empty() {
            return Err(Error::invalid_value("token", "must not be empty"));
        }

        let url = Url::parse(&self.api_url)
            .map_err(|e| Error::invalid_value("api_url", e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(Error::invalid_value("api_url", "cannot be used as a base URL"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("api_url", &self.api_url)
            .field("org", &self.org)
            .field("token", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
