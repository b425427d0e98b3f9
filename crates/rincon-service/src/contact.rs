//! Contact-form messages and the admin read flag.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use rincon_core::result::AppResult;
use rincon_core::traits::{generate_id, KeyValueStore, StoreExt};
use rincon_core::types::ContactMessageId;
use rincon_core::AppError;
use rincon_entity::contact::ContactMessage;
use rincon_storage::collections;

use crate::context::SessionContext;
use crate::validate::check;

/// Contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    /// Sender name.
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    /// Sender email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Sender phone (optional on the form).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Selected subject.
    #[validate(length(min = 1, message = "A subject is required"))]
    pub subject: String,
    /// Message body.
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

/// Contact message intake and admin handling.
#[derive(Debug, Clone)]
pub struct ContactService {
    store: Arc<dyn KeyValueStore>,
}

impl ContactService {
    /// Creates a contact service over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Vec<ContactMessage> {
        self.store
            .get(collections::CONTACT_MESSAGES)
            .unwrap_or_default()
    }

    fn save(&self, messages: &[ContactMessage]) -> AppResult<()> {
        if self.store.set(collections::CONTACT_MESSAGES, messages) {
            Ok(())
        } else {
            Err(AppError::storage(
                "Failed to persist the contact message collection",
            ))
        }
    }

    /// Accept a contact-form submission. No session required; the form is
    /// public.
    pub fn submit(&self, req: &NewContactMessage) -> AppResult<ContactMessage> {
        check(req)?;

        let mut messages = self.load();
        let message = ContactMessage {
            id: ContactMessageId::new(generate_id(&messages)),
            name: req.name.clone(),
            email: req.email.clone(),
            phone: req.phone.clone(),
            subject: req.subject.clone(),
            message: req.message.clone(),
            read: false,
            created_at: Utc::now(),
            read_at: None,
        };
        messages.push(message.clone());
        self.save(&messages)?;

        info!(message_id = %message.id, "Contact message received");
        Ok(message)
    }

    /// Every message (admin only).
    pub fn all(&self, ctx: &SessionContext) -> AppResult<Vec<ContactMessage>> {
        ctx.require_admin()?;
        Ok(self.load())
    }

    /// Mark a message as read (admin only). Returns `Ok(None)` for an
    /// unknown id.
    pub fn mark_read(
        &self,
        ctx: &SessionContext,
        id: ContactMessageId,
    ) -> AppResult<Option<ContactMessage>> {
        ctx.require_admin()?;

        let mut messages = self.load();
        let Some(message) = messages.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        message.read = true;
        message.read_at = Some(Utc::now());
        let updated = message.clone();
        self.save(&messages)?;
        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rincon_core::types::UserId;
    use rincon_entity::user::UserRole;
    use rincon_storage::MemoryStore;

    fn service() -> ContactService {
        ContactService::new(Arc::new(MemoryStore::new()))
    }

    fn admin() -> SessionContext {
        SessionContext::new(UserId::new(1), UserRole::Admin)
    }

    fn inquiry() -> NewContactMessage {
        NewContactMessage {
            name: "Carlos Pérez".to_string(),
            email: "carlos@example.com".to_string(),
            phone: None,
            subject: "Eventos".to_string(),
            message: "¿Organizan bodas en la terraza del hotel?".to_string(),
        }
    }

    #[test]
    fn test_submit_and_mark_read() {
        let service = service();
        let message = service.submit(&inquiry()).unwrap();
        assert!(!message.read);

        let updated = service.mark_read(&admin(), message.id).unwrap().unwrap();
        assert!(updated.read);
        assert!(updated.read_at.is_some());
    }

    #[test]
    fn test_short_message_is_rejected() {
        let service = service();
        let mut req = inquiry();
        req.message = "Hola".to_string();
        assert!(service.submit(&req).is_err());
    }

    #[test]
    fn test_mark_read_unknown_id_is_none() {
        let service = service();
        let result = service
            .mark_read(&admin(), ContactMessageId::new(4))
            .unwrap();
        assert!(result.is_none());
    }
}
