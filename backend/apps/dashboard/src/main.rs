//! Dashboard Server Entry Point
//!
//! Loads configuration, restores the persisted session and serves the
//! dashboard routes. Uses `anyhow` for startup errors; request-level
//! errors go through `kernel::error::AppError`.

mod app;
mod config;
mod views;

use auth::handlers::AuthAppState;
use auth::{
    AuthConfig, FileSessionStore, SessionStore, StaticCredentialProvider, StoredSessionRepository,
};
use axum::http::{Method, header};
use platform::FileStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DashboardConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "dashboard=info,auth=info,platform=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DashboardConfig::from_env()?;

    let files = FileStore::open(&config.storage_dir).await?;
    tracing::info!(dir = %config.storage_dir.display(), "Opened session storage");

    let auth_config = AuthConfig::default().with_storage_key(config.storage_key.clone());
    let store: FileSessionStore = SessionStore::new(
        Arc::new(StaticCredentialProvider::builtin()),
        Arc::new(StoredSessionRepository::new(
            files,
            auth_config.storage_key.clone(),
        )),
    );

    app::restore_or_sign_out(&store).await;

    let state = AuthAppState::new(Arc::new(store), auth_config);

    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origins.clone())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true);

    let app = app::build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    tracing::info!("Listening on {}", config.addr);

    let listener = TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
