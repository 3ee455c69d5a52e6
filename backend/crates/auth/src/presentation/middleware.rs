//! Auth Middleware
//!
//! Route guard for protected views, plus an extractor for the identity
//! the guard admitted.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use kernel::error::app_error::{AppError, OptionExt};

use crate::application::GuardDecision;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::{CredentialProvider, SessionRepository};
use crate::presentation::handlers::AuthAppState;

/// Middleware that requires a current identity.
///
/// Evaluated on every request. Without an identity the visitor gets a
/// `303 See Other` to the login view; with one, the identity is placed in
/// the request extensions for [`CurrentIdentity`].
pub async fn require_identity<P, R>(
    State(state): State<AuthAppState<P, R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    P: CredentialProvider + Send + Sync + 'static,
    R: SessionRepository + Send + Sync + 'static,
{
    let identity = state.store.current_identity().await;

    match state.guard.evaluate(identity) {
        GuardDecision::Render(identity) => {
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        GuardDecision::Redirect { location } => {
            tracing::debug!(path = %req.uri().path(), "No session, redirecting to login");
            Redirect::to(&location).into_response()
        }
    }
}

/// Middleware that records the session status but never redirects
pub async fn check_identity<P, R>(
    State(state): State<AuthAppState<P, R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    P: CredentialProvider + Send + Sync + 'static,
    R: SessionRepository + Send + Sync + 'static,
{
    let identity = state.store.current_identity().await;

    req.extensions_mut().insert(AuthStatus {
        is_authenticated: identity.is_some(),
    });
    if let Some(identity) = identity {
        req.extensions_mut().insert(identity);
    }

    next.run(req).await
}

/// Authentication status stored in request extensions
#[derive(Debug, Clone, Copy)]
pub struct AuthStatus {
    pub is_authenticated: bool,
}

/// Identity admitted by [`require_identity`] or found by [`check_identity`]
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentIdentity)
            .ok_or_unauthorized("Authentication required")
    }
}
