//! Auth configuration types

/// Header value prefix for GitHub's classic token scheme
pub(crate) const TOKEN_SCHEME: &str = "token";

/// Authentication configuration: `Authorization: token <value>`
#[derive(Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub(crate) token: String,
}

impl AuthConfig {
    /// GitHub token auth
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Short name of the scheme, safe to log
    pub fn scheme(&self) -> &'static str {
        TOKEN_SCHEME
    }
}

// Secrets never reach logs through Debug
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthConfig({})", self.scheme())
    }
}
