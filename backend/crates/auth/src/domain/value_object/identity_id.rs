use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identifier of a dashboard identity.
///
/// Opaque string; the built-in candidates use `"1"`, `"2"`, ...
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityId(String);

impl IdentityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IdentityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_id_display() {
        let id = IdentityId::new("1");
        assert_eq!(id.to_string(), "1");
        assert_eq!(id.as_str(), "1");
    }

    #[test]
    fn test_identity_id_serde_transparent() {
        let id: IdentityId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(id, IdentityId::from("42"));
    }
}
