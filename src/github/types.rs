//! GitHub request and response types

use super::endpoints;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Teams
// ============================================================================

/// Role granted by a team membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    #[default]
    Member,
    Maintainer,
}

impl TeamRole {
    /// Value sent in the `role` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            TeamRole::Member => "member",
            TeamRole::Maintainer => "maintainer",
        }
    }
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Team visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamPrivacy {
    /// Only visible to owners and members
    #[default]
    Secret,
    /// Visible to every organization member
    Closed,
}

/// Body of a create-team request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTeam {
    pub name: String,
    pub privacy: TeamPrivacy,
}

impl NewTeam {
    /// A secret team with the given name
    pub fn secret(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            privacy: TeamPrivacy::Secret,
        }
    }
}

// ============================================================================
// Pull Requests
// ============================================================================

/// `state` filter for pull request listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullRequestState {
    Open,
    Closed,
    #[default]
    All,
}

impl PullRequestState {
    pub fn as_str(self) -> &'static str {
        match self {
            PullRequestState::Open => "open",
            PullRequestState::Closed => "closed",
            PullRequestState::All => "all",
        }
    }
}

/// Simplified pull request record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PullRequestPayload")]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub html_url: String,
    /// Login of the author; `None` for deleted accounts
    pub author: Option<String>,
    pub head_ref: String,
    pub base_ref: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
    pub draft: bool,
}

impl PullRequest {
    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }
}

/// Shape of the pull request object as the API returns it
#[derive(Deserialize)]
struct PullRequestPayload {
    number: u64,
    title: String,
    state: String,
    html_url: String,
    user: Option<AccountPayload>,
    head: BranchPayload,
    base: BranchPayload,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    merged_at: Option<DateTime<Utc>>,
    #[serde(default)]
    draft: bool,
}

#[derive(Deserialize)]
struct AccountPayload {
    login: String,
}

#[derive(Deserialize)]
struct BranchPayload {
    #[serde(rename = "ref")]
    name: String,
}

impl From<PullRequestPayload> for PullRequest {
    fn from(p: PullRequestPayload) -> Self {
        Self {
            number: p.number,
            title: p.title,
            state: p.state,
            html_url: p.html_url,
            author: p.user.map(|u| u.login),
            head_ref: p.head.name,
            base_ref: p.base.name,
            created_at: p.created_at,
            updated_at: p.updated_at,
            merged_at: p.merged_at,
            draft: p.draft,
        }
    }
}

// ============================================================================
// Batch Membership
// ============================================================================

/// Mutation applied by a membership batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipAction {
    Add,
    Remove,
}

impl MembershipAction {
    /// Status a single request must return to count as a success
    pub fn expected_status(self) -> u16 {
        match self {
            MembershipAction::Add => endpoints::ADD_MEMBERSHIP_OK,
            MembershipAction::Remove => endpoints::REMOVE_MEMBERSHIP_OK,
        }
    }

    fn verb(self) -> &'static str {
        match self {
            MembershipAction::Add => "adding",
            MembershipAction::Remove => "removing",
        }
    }

    /// `"Error adding <identity>"` / `"Error removing <identity>"`
    pub fn failure_message(self, identity: &str) -> String {
        format!("Error {} {identity}", self.verb())
    }
}

impl fmt::Display for MembershipAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MembershipAction::Add => f.write_str("add"),
            MembershipAction::Remove => f.write_str("remove"),
        }
    }
}

/// Outcome of one identity's request inside a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipRequestResult {
    pub identity: String,
    pub success: bool,
    /// Status observed; `None` when the request never got a response
    pub status: Option<u16>,
    /// Transport fault text, if any
    pub error: Option<String>,
}

impl MembershipRequestResult {
    /// Classify a status code (or the fault that prevented one)
    pub fn from_observed(
        action: MembershipAction,
        identity: &str,
        observed: crate::error::Result<u16>,
    ) -> Self {
        match observed {
            Ok(status) => Self {
                identity: identity.to_string(),
                success: status == action.expected_status(),
                status: Some(status),
                error: None,
            },
            Err(e) => Self {
                identity: identity.to_string(),
                success: false,
                status: e.status(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Aggregate of a membership batch.
///
/// Results keep the order of the input identities. Every failure is kept;
/// the first one in input order is the one named by
/// [`error_description`](Self::error_description).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub action: MembershipAction,
    pub results: Vec<MembershipRequestResult>,
}

impl BatchOutcome {
    pub fn new(action: MembershipAction, results: Vec<MembershipRequestResult>) -> Self {
        Self { action, results }
    }

    /// True iff every request succeeded; vacuously true for an empty batch
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.success)
    }

    /// Every failed request, in input order
    pub fn failures(&self) -> impl Iterator<Item = &MembershipRequestResult> {
        self.results.iter().filter(|r| !r.success)
    }

    pub fn first_failure(&self) -> Option<&MembershipRequestResult> {
        self.failures().next()
    }

    /// Same count as `failures().count()`
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Names the first failed identity, or `None` on success
    pub fn error_description(&self) -> Option<String> {
        self.first_failure()
            .map(|r| self.action.failure_message(&r.identity))
    }

    /// `Ok(true)` when everything succeeded, otherwise `Error::BatchFailed`
    pub fn into_result(self) -> crate::error::Result<bool> {
        match self.error_description() {
            None => Ok(true),
            Some(description) => Err(Error::BatchFailed {
                description,
                failed: self.failures().map(|r| r.identity.clone()).collect(),
            }),
        }
    }
}
