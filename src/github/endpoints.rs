//! GitHub REST paths and the status each operation treats as success
//!
//! Every path is returned as raw segments; [`HttpClient::endpoint`] encodes
//! them individually.
//!
//! [`HttpClient::endpoint`]: crate::http::HttpClient::endpoint

// ============================================================================
// Expected Status Codes
// ============================================================================

/// `GET /users/{login}`
pub const VALIDATE_USER_OK: u16 = 200;

/// `GET /orgs/{org}/teams/{team}/memberships/{login}`
pub const CHECK_MEMBERSHIP_OK: u16 = 200;

/// `PUT /orgs/{org}/teams/{team}/memberships/{login}`
pub const ADD_MEMBERSHIP_OK: u16 = 200;

/// `DELETE /orgs/{org}/teams/{team}/memberships/{login}`
pub const REMOVE_MEMBERSHIP_OK: u16 = 204;

/// `POST /orgs/{org}/teams` (GitHub answers 201, some proxies 200)
pub const CREATE_TEAM_OK: &[u16] = &[200, 201];

/// Error text used when a listing yields nothing usable
pub const NOT_FOUND: &str = "Not Found";

/// Media type requested on every call
pub const ACCEPT: &str = "application/vnd.github+json";

// ============================================================================
// Paths
// ============================================================================

/// `/users/{login}`
pub fn user(login: &str) -> [&str; 2] {
    ["users", login]
}

/// `/orgs/{org}/teams`
pub fn teams(org: &str) -> [&str; 3] {
    ["orgs", org, "teams"]
}

/// `/orgs/{org}/teams/{team}/memberships/{login}`
pub fn membership<'a>(org: &'a str, team: &'a str, login: &'a str) -> [&'a str; 6] {
    ["orgs", org, "teams", team, "memberships", login]
}

/// `/repos/{owner}/{repo}/pulls`
pub fn pulls<'a>(owner: &'a str, repo: &'a str) -> [&'a str; 4] {
    ["repos", owner, repo, "pulls"]
}

/// Value of the `head` filter on pull request listings
pub fn head_filter(user: &str, branch: &str) -> String {
    format!("{user}:{branch}")
}
