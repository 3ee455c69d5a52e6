//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::domain::repository::{CredentialProvider, SessionRepository};
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth API router, to be nested under `/api/auth`
pub fn auth_router<P, R>(state: AuthAppState<P, R>) -> Router
where
    P: CredentialProvider + Send + Sync + 'static,
    R: SessionRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/login", post(handlers::login::<P, R>))
        .route("/logout", post(handlers::logout::<P, R>))
        .route("/session", get(handlers::session_status::<P, R>))
        .with_state(state)
}
