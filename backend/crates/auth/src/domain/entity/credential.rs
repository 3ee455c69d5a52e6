//! Credential Candidate Entity
//!
//! A known identity paired with its placeholder password. Used only for
//! comparison; the password never leaves this type.

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::password::CandidatePassword;

#[derive(Debug, Clone)]
pub struct CredentialCandidate {
    identity: Identity,
    password: CandidatePassword,
}

impl CredentialCandidate {
    pub fn new(identity: Identity, password: CandidatePassword) -> Self {
        Self { identity, password }
    }

    /// Exact match on both email and password
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.identity.email.as_str() == email && self.password.matches(password)
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Strip the password
    pub fn into_identity(self) -> Identity {
        self.identity
    }
}
