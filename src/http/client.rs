//! HTTP client
//!
//! One request per call: no retries, no rate limiting and no timeout beyond
//! the reqwest default.

use crate::auth::{AuthConfig, Authenticator};
use crate::error::{Error, Result};
use crate::types::{JsonValue, StringMap};
use reqwest::{Client, Method, Response};
use tracing::debug;
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: Option<String>,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            default_headers: StringMap::new(),
            user_agent: format!("platform-clients/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: StringMap,
    /// Request body (JSON)
    pub body: Option<JsonValue>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// HTTP client carrying one immutable credential
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create a client with authentication
    pub fn new(config: HttpClientConfig, auth_config: AuthConfig) -> Result<Self> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        debug!(
            "HTTP client ready (base_url={:?}, auth={})",
            config.base_url,
            auth_config.scheme()
        );

        Ok(Self {
            client,
            config,
            authenticator: Authenticator::new(auth_config),
        })
    }

    /// Send one request to a URL built by [`endpoint`](Self::endpoint).
    ///
    /// Any response, whatever its status, is returned as `Ok`. Only transport
    /// faults (DNS, connect, TLS, reset) become `Error::Http`.
    pub async fn request(
        &self,
        method: Method,
        url: Url,
        config: RequestConfig,
    ) -> Result<Response> {
        debug!("{} {}", method, url);
        let mut req = self.client.request(method.clone(), url.clone());

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        req = self.authenticator.apply(req);

        let response = req.send().await?;
        debug!("{} {} -> {}", method, url, response.status().as_u16());
        Ok(response)
    }

    /// Build an absolute URL from raw path segments.
    ///
    /// Each segment is percent-encoded on its own, so `/`, `?` and `#` stay
    /// inside it. Empty, `.` and `..` segments would be collapsed by URL
    /// normalization into a different resource and are rejected with
    /// `Error::InvalidSegment`.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(Error::InvalidSegment {
                segment: (*bad).to_string(),
            });
        }

        let base = self
            .config
            .base_url
            .as_deref()
            .ok_or_else(|| Error::config("No base URL configured"))?;

        let mut url = Url::parse(base)?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidPath {
                url: base.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Read a response into its status and JSON body.
///
/// An empty body (as on `204 No Content`) reads as `null`.
pub async fn read_json(response: Response) -> Result<(u16, JsonValue)> {
    let status = response.status().as_u16();
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok((status, JsonValue::Null));
    }
    let body = serde_json::from_slice(&bytes)?;
    Ok((status, body))
}
