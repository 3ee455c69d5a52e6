//! Dashboard Configuration
//!
//! Read from the environment (after `.env` is loaded).

use anyhow::Context;
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_STORAGE_DIR: &str = ".dashboard-storage";
const DEFAULT_STORAGE_KEY: &str = "user";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Listen address (`DASHBOARD_ADDR`)
    pub addr: SocketAddr,
    /// Durable storage directory (`DASHBOARD_STORAGE_DIR`)
    pub storage_dir: PathBuf,
    /// Storage key of the persisted identity (`DASHBOARD_STORAGE_KEY`)
    pub storage_key: String,
    /// CORS allow list (`FRONTEND_ORIGINS`, comma-separated)
    pub frontend_origins: Vec<HeaderValue>,
}

impl DashboardConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = lookup("DASHBOARD_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .with_context(|| format!("DASHBOARD_ADDR is not a socket address: {addr}"))?;

        let storage_dir = lookup("DASHBOARD_STORAGE_DIR")
            .unwrap_or_else(|| DEFAULT_STORAGE_DIR.to_string())
            .into();

        let storage_key =
            lookup("DASHBOARD_STORAGE_KEY").unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        platform::storage::validate_key(&storage_key).context("DASHBOARD_STORAGE_KEY")?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin, "Ignoring unparsable FRONTEND_ORIGINS entry");
                    None
                }
            })
            .collect();

        Ok(Self {
            addr,
            storage_dir,
            storage_key,
            frontend_origins,
        })
    }
}
