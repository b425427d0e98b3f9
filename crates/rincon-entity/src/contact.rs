//! Contact message entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rincon_core::traits::HasId;
use rincon_core::types::ContactMessageId;

/// A message sent through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Unique message identifier.
    pub id: ContactMessageId,
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Sender phone (optional on the form).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Selected subject.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// Whether an admin has read the message.
    pub read: bool,
    /// When the message was sent.
    pub created_at: DateTime<Utc>,
    /// When the message was marked as read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_at: Option<DateTime<Utc>>,
}

impl HasId for ContactMessage {
    fn raw_id(&self) -> i64 {
        self.id.value()
    }
}
