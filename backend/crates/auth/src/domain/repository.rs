//! Repository Traits
//!
//! Seams between the session logic and where identities come from and
//! are kept. Implementations live in the infrastructure layer.

use crate::domain::entity::identity::Identity;
use crate::error::AuthResult;

/// Authorization provider
///
/// Decides whether an email/password pair belongs to a known identity.
/// The built-in provider compares against a static list; a real backend
/// can replace it without touching the session store.
#[trait_variant::make(CredentialProvider: Send)]
pub trait LocalCredentialProvider {
    /// Identity whose credentials match exactly, `None` otherwise
    async fn authenticate(&self, email: &str, password: &str) -> AuthResult<Option<Identity>>;
}

/// Persistence of the single current identity
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Load the persisted identity, if any
    async fn load(&self) -> AuthResult<Option<Identity>>;

    /// Persist the identity, replacing any previous one
    async fn save(&self, identity: &Identity) -> AuthResult<()>;

    /// Remove the persisted identity
    async fn clear(&self) -> AuthResult<()>;
}
