//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::entity::identity::Identity;

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

// ============================================================================
// Identity
// ============================================================================

/// Identity as shown by the header, sidebar and settings screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Role code (`admin`, `manager`, ...)
    pub role: String,
    /// Capitalized role for display
    pub role_label: String,
    pub avatar: Option<String>,
    /// Avatar fallback letter
    pub initial: Option<String>,
}

impl From<&Identity> for IdentityResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            name: identity.name.clone(),
            email: identity.email.to_string(),
            role: identity.role.code().to_string(),
            role_label: identity.role.label().to_string(),
            avatar: identity.avatar.clone(),
            initial: identity.initial().map(String::from),
        }
    }
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub identity: Option<IdentityResponse>,
}

impl From<Option<&Identity>> for SessionStatusResponse {
    fn from(identity: Option<&Identity>) -> Self {
        Self {
            authenticated: identity.is_some(),
            identity: identity.map(IdentityResponse::from),
        }
    }
}
