//! Session context carrying the acting user and their role.
//!
//! The legacy front-end read a global `current_user` from storage
//! wherever it needed one. Here the session is an explicit value passed
//! into every booking and back-office operation; the identity provider
//! that produces it is outside the core.

use serde::{Deserialize, Serialize};

use rincon_core::result::AppResult;
use rincon_core::types::UserId;
use rincon_core::AppError;
use rincon_entity::user::{User, UserRole};

/// Context for the currently signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// The acting user's ID.
    pub user_id: UserId,
    /// The acting user's role.
    pub role: UserRole,
}

impl SessionContext {
    /// Creates a new session context.
    pub fn new(user_id: UserId, role: UserRole) -> Self {
        Self { user_id, role }
    }

    /// Creates a session context for a signed-in user.
    pub fn for_user(user: &User) -> Self {
        Self::new(user.id, user.role)
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Fails with an authorization error unless the user is an admin.
    pub fn require_admin(&self) -> AppResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::authorization(
                "This operation requires administrator privileges",
            ))
        }
    }
}
