//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the system.
///
/// Legacy data wrote guests with the literal value `"user"`, so that
/// value is still accepted on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Back-office administrator. Admins manage reservations but may not
    /// place them.
    Admin,
    /// Registered guest.
    #[serde(alias = "user")]
    Guest,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Guest => "guest",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = rincon_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "guest" | "user" => Ok(Self::Guest),
            _ => Err(rincon_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, guest"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("guest".parse::<UserRole>().unwrap(), UserRole::Guest);
        assert_eq!("user".parse::<UserRole>().unwrap(), UserRole::Guest);
        assert!("manager".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_legacy_user_value_deserializes_as_guest() {
        let role: UserRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, UserRole::Guest);
        // But we always write the canonical value.
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"guest\"");
    }
}
