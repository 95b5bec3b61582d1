//! GitHub client
//!
//! Each method is one request against the organization configured in
//! [`GitHubConfig`]. Binary checks map the response status to `bool`;
//! listings return simplified records or the remote error message.

use super::endpoints::{self, NOT_FOUND};
use super::membership::{MembershipBackend, MembershipBatch};
use super::types::{BatchOutcome, NewTeam, PullRequest, PullRequestState, TeamRole};
use crate::auth::AuthConfig;
use crate::config::GitHubConfig;
use crate::error::{Error, Result};
use crate::http::{read_json, HttpClient, HttpClientConfig, RequestConfig};
use crate::types::{error_message, JsonValue};
use async_trait::async_trait;
use reqwest::{Method, Response};
use tracing::debug;

/// Client for the GitHub REST API, scoped to one organization
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: HttpClient,
    org: String,
}

impl GitHubClient {
    /// Create a client from explicit settings
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        config.validate()?;

        let http_config = HttpClientConfig::builder()
            .base_url(&config.api_url)
            .header("Accept", endpoints::ACCEPT)
            .user_agent(&config.user_agent)
            .build();
        let http = HttpClient::new(http_config, AuthConfig::token(&config.token))?;

        Ok(Self {
            http,
            org: config.org.clone(),
        })
    }

    /// Create a client from `GITHUB_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(&GitHubConfig::from_env()?)
    }

    /// Organization every team and repository path is scoped to
    pub fn org(&self) -> &str {
        &self.org
    }

    // ========================================================================
    // Users and memberships
    // ========================================================================

    /// Does the account exist?
    pub async fn validate_user(&self, identity: &str) -> Result<bool> {
        let observed = self
            .status_of(Method::GET, &endpoints::user(identity), RequestConfig::new())
            .await;
        status_is(observed, endpoints::VALIDATE_USER_OK)
    }

    /// Is the account a member of `team`?
    pub async fn is_member(&self, identity: &str, team: &str) -> Result<bool> {
        let path = endpoints::membership(&self.org, team, identity);
        let observed = self.status_of(Method::GET, &path, RequestConfig::new()).await;
        status_is(observed, endpoints::CHECK_MEMBERSHIP_OK)
    }

    /// Add one account to `team`
    pub async fn add_membership(&self, identity: &str, team: &str) -> Result<bool> {
        let observed = self.put_membership(identity, team, None).await;
        status_is(observed, endpoints::ADD_MEMBERSHIP_OK)
    }

    /// Remove one account from `team`
    pub async fn remove_membership(&self, identity: &str, team: &str) -> Result<bool> {
        let observed = self.delete_membership(identity, team).await;
        status_is(observed, endpoints::REMOVE_MEMBERSHIP_OK)
    }

    /// Add many accounts to `team` concurrently
    pub async fn add_members<S: AsRef<str>>(
        &self,
        identities: &[S],
        team: &str,
        role: Option<TeamRole>,
    ) -> BatchOutcome {
        MembershipBatch::new(self).add_members(identities, team, role).await
    }

    /// Remove many accounts from `team` concurrently
    pub async fn remove_members<S: AsRef<str>>(
        &self,
        identities: &[S],
        team: &str,
    ) -> BatchOutcome {
        MembershipBatch::new(self).remove_members(identities, team).await
    }

    // ========================================================================
    // Teams
    // ========================================================================

    /// Create a secret team named `name`
    pub async fn create_team(&self, name: &str) -> Result<bool> {
        self.create_team_with(&NewTeam::secret(name)).await
    }

    /// Create a team.
    ///
    /// A rejection (for instance a duplicate name) is returned as
    /// `Error::Api` carrying the remote message verbatim.
    pub async fn create_team_with(&self, team: &NewTeam) -> Result<bool> {
        let url = self.http.endpoint(&endpoints::teams(&self.org))?;
        let body = serde_json::to_value(team)?;
        let response = self
            .http
            .request(Method::POST, url, RequestConfig::new().json(body))
            .await?;

        let status = response.status().as_u16();
        if endpoints::CREATE_TEAM_OK.contains(&status) {
            debug!("Created team '{}' in '{}'", team.name, self.org);
            return Ok(true);
        }
        Err(rejection(response).await)
    }

    // ========================================================================
    // Pull requests
    // ========================================================================

    /// Every pull request of `repo`, any state.
    ///
    /// An empty listing is reported as `"Not Found"`, the same as a missing
    /// repository.
    pub async fn pull_requests_by_repo(&self, repo: &str) -> Result<Vec<PullRequest>> {
        let query = RequestConfig::new().query("state", PullRequestState::All.as_str());
        let (status, body) = self.list_pulls(repo, query).await?;

        match body {
            JsonValue::Array(items) if !items.is_empty() => parse_pull_requests(items),
            other => Err(not_found(status, &other)),
        }
    }

    /// Pull requests of `repo` opened from `user:branch`, any state.
    ///
    /// A valid repository with no matching pull requests yields an empty list.
    pub async fn pull_requests_by_user(
        &self,
        repo: &str,
        user: &str,
        branch: &str,
    ) -> Result<Vec<PullRequest>> {
        let query = RequestConfig::new()
            .query("state", PullRequestState::All.as_str())
            .query("head", endpoints::head_filter(user, branch));
        let (status, body) = self.list_pulls(repo, query).await?;

        match body {
            JsonValue::Array(items) => parse_pull_requests(items),
            other => Err(not_found(status, &other)),
        }
    }

    async fn list_pulls(&self, repo: &str, query: RequestConfig) -> Result<(u16, JsonValue)> {
        let url = self.http.endpoint(&endpoints::pulls(&self.org, repo))?;
        let response = self.http.request(Method::GET, url, query).await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        read_json(response).await
    }

    async fn status_of(&self, method: Method, path: &[&str], config: RequestConfig) -> Result<u16> {
        let url = self.http.endpoint(path)?;
        let response = self.http.request(method, url, config).await?;
        Ok(response.status().as_u16())
    }
}

#[async_trait]
impl MembershipBackend for GitHubClient {
    async fn put_membership(
        &self,
        identity: &str,
        team: &str,
        role: Option<TeamRole>,
    ) -> Result<u16> {
        let mut config = RequestConfig::new();
        if let Some(role) = role {
            config = config.query("role", role.as_str());
        }
        let path = endpoints::membership(&self.org, team, identity);
        self.status_of(Method::PUT, &path, config).await
    }

    async fn delete_membership(&self, identity: &str, team: &str) -> Result<u16> {
        let path = endpoints::membership(&self.org, team, identity);
        self.status_of(Method::DELETE, &path, RequestConfig::new()).await
    }
}

/// Compare an observed status with the expected one.
///
/// A path segment refused before sending means the remote service never saw
/// this identity, which answers the check with `false`.
fn status_is(observed: Result<u16>, expected: u16) -> Result<bool> {
    match observed {
        Ok(status) => Ok(status == expected),
        Err(e) if e.is_invalid_segment() => {
            debug!("{e}; nothing sent");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

fn parse_pull_requests(items: Vec<JsonValue>) -> Result<Vec<PullRequest>> {
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(Error::from))
        .collect()
}

fn not_found(status: u16, body: &JsonValue) -> Error {
    Error::api(
        status,
        error_message(body).unwrap_or_else(|| NOT_FOUND.to_string()),
    )
}

/// Turn a non-success response into `Error::Api`, keeping the remote text
async fn rejection(response: Response) -> Error {
    let status = response.status();
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => return Error::Http(e),
    };

    let message = serde_json::from_str::<JsonValue>(&text)
        .ok()
        .and_then(|body| error_message(&body))
        .or_else(|| (!text.trim().is_empty()).then(|| text.trim().to_string()))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or(NOT_FOUND)
                .to_string()
        });

    debug!("Request rejected with {}: {}", status.as_u16(), message);
    Error::api(status.as_u16(), message)
}
