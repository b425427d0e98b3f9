//! Account registration, login, and password changes.
//!
//! Credentials are stored and compared verbatim; hardening the credential
//! store is explicitly out of scope (see DESIGN.md). The caller holds the
//! session produced by a successful login; there is no session state in
//! here.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use rincon_core::result::AppResult;
use rincon_core::traits::{generate_id, KeyValueStore, StoreExt};
use rincon_core::types::UserId;
use rincon_core::AppError;
use rincon_entity::user::{User, UserRole};
use rincon_storage::collections;

use crate::context::SessionContext;
use crate::validate::check;

/// Registration form data.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Identification document number.
    #[validate(length(min = 6, message = "Identification must be at least 6 characters"))]
    pub identification: String,
    /// Full name.
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    /// Nationality.
    #[validate(length(min = 2, message = "Nationality is required"))]
    pub nationality: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Contact phone.
    #[validate(length(min = 10, message = "Phone must be at least 10 characters"))]
    pub phone: String,
    /// Password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Account management over the user collection.
#[derive(Debug, Clone)]
pub struct AccountService {
    store: Arc<dyn KeyValueStore>,
}

impl AccountService {
    /// Creates an account service over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Vec<User> {
        self.store.get(collections::USERS).unwrap_or_default()
    }

    fn save(&self, users: &[User]) -> AppResult<()> {
        if self.store.set(collections::USERS, users) {
            Ok(())
        } else {
            Err(AppError::storage("Failed to persist the user collection"))
        }
    }

    /// Look up a user by email, the login key.
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.load().into_iter().find(|user| user.email == email)
    }

    /// Register a new guest account.
    pub fn register(&self, req: &RegisterRequest) -> AppResult<User> {
        check(req)?;

        let mut users = self.load();
        if users.iter().any(|user| user.email == req.email) {
            return Err(AppError::conflict("This email is already registered"));
        }
        if users
            .iter()
            .any(|user| user.identification == req.identification)
        {
            return Err(AppError::conflict(
                "This identification number is already registered",
            ));
        }

        let user = User {
            id: UserId::new(generate_id(&users)),
            identification: req.identification.clone(),
            name: req.name.clone(),
            nationality: req.nationality.clone(),
            email: req.email.clone(),
            phone: req.phone.clone(),
            password: req.password.clone(),
            role: UserRole::Guest,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        self.save(&users)?;

        info!(user_id = %user.id, "Account registered");
        Ok(user)
    }

    /// Verify credentials and return the account.
    ///
    /// Unknown email and wrong password produce the same message.
    pub fn login(&self, email: &str, password: &str) -> AppResult<User> {
        match self.find_by_email(email) {
            Some(user) if user.password == password => {
                info!(user_id = %user.id, "User signed in");
                Ok(user)
            }
            _ => Err(AppError::validation("Invalid email or password")),
        }
    }

    /// Verify credentials and hand back a session context for the caller
    /// to hold.
    pub fn login_session(&self, email: &str, password: &str) -> AppResult<SessionContext> {
        let user = self.login(email, password)?;
        Ok(SessionContext::for_user(&user))
    }

    /// Change a password after verifying the current one.
    pub fn change_password(&self, email: &str, current: &str, new: &str) -> AppResult<User> {
        if new.len() < 6 {
            return Err(AppError::validation(
                "Password must be at least 6 characters",
            ));
        }
        if new == current {
            return Err(AppError::validation(
                "The new password must be different from the current one",
            ));
        }

        let mut users = self.load();
        let Some(user) = users.iter_mut().find(|user| user.email == email) else {
            return Err(AppError::not_found("No account exists with that email"));
        };
        if user.password != current {
            return Err(AppError::validation("Current password is incorrect"));
        }

        user.password = new.to_string();
        let updated = user.clone();
        self.save(&users)?;

        info!(user_id = %updated.id, "Password changed");
        Ok(updated)
    }
}
