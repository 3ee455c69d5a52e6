//! Application Layer
//!
//! Session store and route guard.

pub mod config;
pub mod route_guard;
pub mod session_store;

// Re-exports
pub use config::AuthConfig;
pub use route_guard::{GuardDecision, RouteGuard};
pub use session_store::SessionStore;
