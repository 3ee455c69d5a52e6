//! Identity Entity
//!
//! The authenticated person, as held by the session and persisted in
//! durable storage. Never carries a password.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{email::Email, identity_id::IdentityId, role::Role};

/// Identity entity
///
/// Serialized form (storage entry and API):
/// `{ "id", "name", "email", "role", "avatar"? }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    /// Display name
    pub name: String,
    pub email: Email,
    pub role: Role,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Identity {
    pub fn new(id: IdentityId, name: impl Into<String>, email: Email, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            email,
            role,
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// First letter of the name, shown when there is no avatar
    pub fn initial(&self) -> Option<char> {
        self.name.trim_start().chars().next()
    }

    /// Name used in the dashboard greeting
    pub fn greeting_name(&self) -> &str {
        match self.name.trim() {
            "" => "User",
            name => name,
        }
    }
}
