//! Auth (Authentication) Module
//!
//! Session handling for the plantation dashboard.
//!
//! Clean Architecture structure:
//! - `domain/` - Identity, credential candidates, repository traits
//! - `application/` - Session store and route guard
//! - `infra/` - Static credential provider, storage-backed session
//! - `presentation/` - HTTP handlers, DTOs, router, guard middleware
//!
//! ## Session Model
//! - At most one identity is current at a time
//! - The current identity is persisted verbatim (no password) in durable
//!   storage and restored on start without re-validation
//! - Every protected view is re-checked on each navigation; without an
//!   identity the visitor is redirected to the login view
//! - Credentials are a plain placeholder list behind [`CredentialProvider`];
//!   no hashing, tokens or expiry

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{AuthConfig, GuardDecision, RouteGuard, SessionStore};
pub use domain::repository::{CredentialProvider, SessionRepository};
pub use error::{AuthError, AuthResult};
pub use infra::{StaticCredentialProvider, StoredSessionRepository};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Session store on the built-in candidates and file-backed storage
pub type FileSessionStore =
    SessionStore<StaticCredentialProvider, StoredSessionRepository<platform::FileStore>>;

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::domain::{CredentialCandidate, Identity, SessionState};
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
