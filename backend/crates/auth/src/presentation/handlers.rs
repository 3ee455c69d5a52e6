//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{AuthConfig, RouteGuard, SessionStore};
use crate::domain::repository::{CredentialProvider, SessionRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{IdentityResponse, LoginRequest, SessionStatusResponse};

/// Shared state for auth handlers and middleware
pub struct AuthAppState<P, R>
where
    P: CredentialProvider + Send + Sync + 'static,
    R: SessionRepository + Send + Sync + 'static,
{
    pub store: Arc<SessionStore<P, R>>,
    pub guard: Arc<RouteGuard>,
    pub config: Arc<AuthConfig>,
}

impl<P, R> AuthAppState<P, R>
where
    P: CredentialProvider + Send + Sync + 'static,
    R: SessionRepository + Send + Sync + 'static,
{
    pub fn new(store: Arc<SessionStore<P, R>>, config: AuthConfig) -> Self {
        Self {
            store,
            guard: Arc::new(RouteGuard::from_config(&config)),
            config: Arc::new(config),
        }
    }
}

impl<P, R> Clone for AuthAppState<P, R>
where
    P: CredentialProvider + Send + Sync + 'static,
    R: SessionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            guard: self.guard.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<P, R>(
    State(state): State<AuthAppState<P, R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<IdentityResponse>>
where
    P: CredentialProvider + Send + Sync + 'static,
    R: SessionRepository + Send + Sync + 'static,
{
    let identity = state.store.login(&req.email, &req.password).await?;

    Ok(Json(IdentityResponse::from(&identity)))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
pub async fn logout<P, R>(State(state): State<AuthAppState<P, R>>) -> AuthResult<StatusCode>
where
    P: CredentialProvider + Send + Sync + 'static,
    R: SessionRepository + Send + Sync + 'static,
{
    state.store.logout().await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/session
pub async fn session_status<P, R>(
    State(state): State<AuthAppState<P, R>>,
) -> Json<SessionStatusResponse>
where
    P: CredentialProvider + Send + Sync + 'static,
    R: SessionRepository + Send + Sync + 'static,
{
    let identity = state.store.current_identity().await;

    Json(SessionStatusResponse::from(identity.as_ref()))
}
