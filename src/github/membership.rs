//! Batch team membership
//!
//! Applies the same add or remove to a team for many identities. Requests are
//! independent and issued concurrently; the batch waits for every one of them
//! (a failure never cancels its siblings) and then folds the outcomes.
//!
//! Nothing is transactional: identities processed before a failure stay
//! mutated on the remote side.

use super::types::{BatchOutcome, MembershipAction, MembershipRequestResult, TeamRole};
use crate::error::Result;
use async_trait::async_trait;
use futures::future::join_all;
use tracing::{info, warn};

/// Single membership calls a batch is built from.
///
/// Implementations report the status code they observed; deciding whether
/// that status is a success belongs to the batch.
#[async_trait]
pub trait MembershipBackend: Send + Sync {
    /// Add or update one membership, returning the response status
    async fn put_membership(
        &self,
        identity: &str,
        team: &str,
        role: Option<TeamRole>,
    ) -> Result<u16>;

    /// Remove one membership, returning the response status
    async fn delete_membership(&self, identity: &str, team: &str) -> Result<u16>;
}

/// Fan-out/fan-in membership operator
pub struct MembershipBatch<'a, B: ?Sized> {
    backend: &'a B,
}

impl<'a, B: MembershipBackend + ?Sized> MembershipBatch<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Add every identity to `team`, with `role` when given
    pub async fn add_members<S: AsRef<str>>(
        &self,
        identities: &[S],
        team: &str,
        role: Option<TeamRole>,
    ) -> BatchOutcome {
        self.run(MembershipAction::Add, identities, team, role).await
    }

    /// Remove every identity from `team`
    pub async fn remove_members<S: AsRef<str>>(
        &self,
        identities: &[S],
        team: &str,
    ) -> BatchOutcome {
        self.run(MembershipAction::Remove, identities, team, None).await
    }

    async fn run<S: AsRef<str>>(
        &self,
        action: MembershipAction,
        identities: &[S],
        team: &str,
        role: Option<TeamRole>,
    ) -> BatchOutcome {
        let backend = self.backend;

        // Duplicates are requested once per occurrence
        let requests = identities.iter().map(|identity| {
            let identity = identity.as_ref();
            async move {
                let observed = match action {
                    MembershipAction::Add => backend.put_membership(identity, team, role).await,
                    MembershipAction::Remove => backend.delete_membership(identity, team).await,
                };
                let result = MembershipRequestResult::from_observed(action, identity, observed);
                if !result.success {
                    warn!(
                        "Membership {} failed for '{}' on team '{}' (status={:?}, error={:?})",
                        action, result.identity, team, result.status, result.error
                    );
                }
                result
            }
        });

        let outcome = BatchOutcome::new(action, join_all(requests).await);

        info!(
            "Membership {} on team '{}': {} requested, {} failed",
            action,
            team,
            outcome.results.len(),
            outcome.failure_count()
        );
        outcome
    }
}
