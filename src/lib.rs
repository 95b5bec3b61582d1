// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Platform Clients
//!
//! Thin wrappers over hosted platform APIs that reshape their JSON into small
//! internal records and their status codes into plain answers.
//!
//! ## Features
//!
//! - **GitHub users and teams**: validate accounts, check, add and remove
//!   team memberships, create teams
//! - **Batch membership**: add or remove many accounts concurrently and get
//!   every per-account outcome back
//! - **Pull requests**: list by repository or by `user:branch`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use platform_clients::github::GitHubClient;
//! use platform_clients::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // GITHUB_ACCESS_TOKEN and GITHUB_ORG, optionally from .env
//!     let client = GitHubClient::from_env()?;
//!
//!     let added = client
//!         .add_members(&["octocat", "hubot"], "core", None)
//!         .await
//!         .into_result()?;
//!     assert!(added);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                 GitHubClient                  │
//! │ validate_user  is_member  create_team  pulls  │
//! │        MembershipBatch (join_all fan-out)     │
//! └───────────────────────┬───────────────────────┘
//!                         │
//! ┌───────────┬───────────┴───────────┬───────────┐
//! │  Config   │      HttpClient       │   Auth    │
//! ├───────────┼───────────────────────┼───────────┤
//! │ env/.env  │ base URL + segments   │ token     │
//! │ YAML      │ default headers       │ bearer    │
//! │           │ raw status passthrough│ basic     │
//! └───────────┴───────────────────────┴───────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Authentication implementations
pub mod auth;

/// HTTP client
pub mod http;

/// GitHub REST API client
pub mod github;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::GitHubConfig;
pub use error::{Error, Result};
pub use github::{BatchOutcome, GitHubClient, MembershipRequestResult, TeamRole};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
