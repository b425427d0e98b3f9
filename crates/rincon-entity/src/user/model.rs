//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rincon_core::traits::HasId;
use rincon_core::types::UserId;

use super::role::UserRole;

/// A registered account, guest or administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Identification document number (unique).
    pub identification: String,
    /// Full name.
    pub name: String,
    /// Nationality.
    pub nationality: String,
    /// Email address (unique, used as the login key).
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Password, stored and compared verbatim. Redesigning credential
    /// storage is explicitly out of scope for this system.
    pub password: String,
    /// Account role.
    pub role: UserRole,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl HasId for User {
    fn raw_id(&self) -> i64 {
        self.id.value()
    }
}
