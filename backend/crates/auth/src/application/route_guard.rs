//! Route Guard
//!
//! Decides, per navigation, whether a protected view renders or the
//! visitor is sent to the login view. Holds no session state itself.

use crate::application::config::AuthConfig;
use crate::domain::entity::identity::Identity;

/// Outcome of a guarded navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view for this identity
    Render(Identity),
    /// Navigate to the login view instead
    Redirect { location: String },
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    login_path: String,
}

impl RouteGuard {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.login_path.clone())
    }

    pub fn evaluate(&self, identity: Option<Identity>) -> GuardDecision {
        match identity {
            Some(identity) => GuardDecision::Render(identity),
            None => GuardDecision::Redirect {
                location: self.login_path.clone(),
            },
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}
