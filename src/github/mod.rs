//! GitHub module
//!
//! Single-call wrappers over the GitHub REST API plus the batch membership
//! operator.
//!
//! # Example
//!
//! ```rust,ignore
//! use platform_clients::github::{GitHubClient, TeamRole};
//!
//! let client = GitHubClient::from_env()?;
//!
//! if client.validate_user("octocat").await? {
//!     let outcome = client
//!         .add_members(&["octocat", "hubot"], "core", Some(TeamRole::Member))
//!         .await;
//!     if let Some(description) = outcome.error_description() {
//!         eprintln!("{description}");
//!     }
//! }
//! ```

mod client;
pub mod endpoints;
mod membership;
mod types;

pub use client::GitHubClient;
pub use membership::{MembershipBackend, MembershipBatch};
pub use types::{
    BatchOutcome, MembershipAction, MembershipRequestResult, NewTeam, PullRequest,
    PullRequestState, TeamPrivacy, TeamRole,
};
