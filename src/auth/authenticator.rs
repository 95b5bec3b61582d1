//! Authenticator implementation
//!
//! Applies the configured credential to request builders.

use super::types::{AuthConfig, TOKEN_SCHEME};
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(
            AUTHORIZATION,
            format!("{TOKEN_SCHEME} {}", self.config.token),
        )
    }
}
