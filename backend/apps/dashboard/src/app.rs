//! Router assembly
//!
//! Mirrors the dashboard's route table: the login view is public, every
//! other screen sits behind the route guard, and the session API lives
//! under `/api/auth`.

use auth::handlers::AuthAppState;
use auth::middleware::{CurrentIdentity, require_identity};
use auth::models::Identity;
use auth::{CredentialProvider, SessionRepository, SessionStore, auth_router};
use axum::Router;
use axum::middleware;
use axum::response::Redirect;
use axum::routing::get;

use crate::views::{self, View};

pub fn build_router<P, R>(state: AuthAppState<P, R>) -> Router
where
    P: CredentialProvider + Send + Sync + 'static,
    R: SessionRepository + Send + Sync + 'static,
{
    let home = state.config.home_path.clone();
    let mut protected = Router::new().route(
        "/",
        get(move || {
            let home = home.clone();
            async move { Redirect::to(&home) }
        }),
    );

    for view in View::ALL {
        protected = protected.route(
            view.path(),
            get(move |identity: CurrentIdentity| views::protected_view(view, identity)),
        );
    }

    protected
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_identity::<P, R>,
        ))
        .route(&state.config.login_path, get(views::login_view))
        .nest("/api/auth", auth_router(state))
}

/// Resume the persisted session at startup.
///
/// A storage failure must not keep the dashboard from starting; it is
/// logged and the server comes up signed out.
pub async fn restore_or_sign_out<P, R>(store: &SessionStore<P, R>) -> Option<Identity>
where
    P: CredentialProvider + Sync,
    R: SessionRepository + Sync,
{
    match store.restore().await {
        Ok(Some(identity)) => {
            tracing::info!(identity_id = %identity.id, "Resuming persisted session");
            Some(identity)
        }
        Ok(None) => {
            tracing::info!("No persisted session, starting signed out");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session restore failed, starting signed out");
            None
        }
    }
}
