//! Static credential provider
//!
//! Compares against a fixed candidate list held in memory. Placeholder
//! for a real authorization backend.

use crate::domain::entity::{credential::CredentialCandidate, identity::Identity};
use crate::domain::repository::CredentialProvider;
use crate::domain::value_object::{
    email::Email, identity_id::IdentityId, password::CandidatePassword, role::Role,
};
use crate::error::AuthResult;

#[derive(Debug, Clone, Default)]
pub struct StaticCredentialProvider {
    candidates: Vec<CredentialCandidate>,
}

impl StaticCredentialProvider {
    pub fn new(candidates: Vec<CredentialCandidate>) -> Self {
        Self { candidates }
    }

    /// Built-in dashboard accounts
    pub fn builtin() -> Self {
        Self::new(vec![
            CredentialCandidate::new(
                Identity::new(
                    IdentityId::from("1"),
                    "Admin User",
                    Email::from_trusted("admin@malanyusdi.com"),
                    Role::Administrator,
                )
                .with_avatar("https://i.pravatar.cc/150?img=1"),
                CandidatePassword::new("admin123"),
            ),
            CredentialCandidate::new(
                Identity::new(
                    IdentityId::from("2"),
                    "Field Manager",
                    Email::from_trusted("manager@malanyusdi.com"),
                    Role::Manager,
                )
                .with_avatar("https://i.pravatar.cc/150?img=2"),
                CandidatePassword::new("manager123"),
            ),
        ])
    }
}

impl CredentialProvider for StaticCredentialProvider {
    async fn authenticate(&self, email: &str, password: &str) -> AuthResult<Option<Identity>> {
        Ok(self
            .candidates
            .iter()
            .find(|candidate| candidate.matches(email, password))
            .map(|candidate| candidate.clone().into_identity()))
    }
}
