//! Application Configuration
//!
//! Configuration for the Auth application layer.

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Durable storage key of the persisted identity
    pub storage_key: String,
    /// Public login view; unauthenticated navigations are sent here
    pub login_path: String,
    /// Landing view after login and for `/`
    pub home_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            storage_key: "user".to_string(),
            login_path: "/login".to_string(),
            home_path: "/dashboard".to_string(),
        }
    }
}

impl AuthConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    pub fn with_home_path(mut self, path: impl Into<String>) -> Self {
        self.home_path = path.into();
        self
    }
}
