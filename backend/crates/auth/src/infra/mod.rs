//! Infrastructure Layer
//!
//! Credential provider and session persistence implementations.

pub mod static_credentials;
pub mod stored_session;

pub use static_credentials::StaticCredentialProvider;
pub use stored_session::StoredSessionRepository;
