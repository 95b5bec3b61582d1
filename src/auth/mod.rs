//! Authentication module
//!
//! GitHub token scheme only. The credential is static for the lifetime of a
//! client; the `Authenticator` just stamps it onto outgoing requests.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
