use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard role.
///
/// Serialized with the short codes the dashboard has always stored
/// (`admin`, `manager`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(rename = "admin")]
    Administrator,
    Manager,
    Assistant,
    Supervisor,
    Worker,
    Staff,
}

impl Role {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use Role::*;
        match self {
            Administrator => "admin",
            Manager => "manager",
            Assistant => "assistant",
            Supervisor => "supervisor",
            Worker => "worker",
            Staff => "staff",
        }
    }

    /// Capitalized code, as shown under the name in the sidebar
    #[inline]
    pub const fn label(&self) -> &'static str {
        use Role::*;
        match self {
            Administrator => "Admin",
            Manager => "Manager",
            Assistant => "Assistant",
            Supervisor => "Supervisor",
            Worker => "Worker",
            Staff => "Staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [Role; 6] = [
        Role::Administrator,
        Role::Manager,
        Role::Assistant,
        Role::Supervisor,
        Role::Worker,
        Role::Staff,
    ];

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Administrator.to_string(), "admin");
        assert_eq!(Role::Staff.to_string(), "staff");
    }

    #[test]
    fn test_role_serde_matches_code() {
        for role in ROLES {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.code()));
            assert_eq!(serde_json::from_str::<Role>(&json).unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_stored_role_rejected() {
        assert!(serde_json::from_str::<Role>("\"administrator\"").is_err());
        assert!(serde_json::from_str::<Role>("\"Admin\"").is_err());
    }

    #[test]
    fn test_role_label() {
        assert_eq!(Role::Administrator.label(), "Admin");
        assert_eq!(Role::Manager.label(), "Manager");
    }
}
