//! Complaint entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rincon_core::traits::HasId;
use rincon_core::types::{ComplaintId, ReservationId, UserId};

use super::status::ComplaintStatus;

/// A guest complaint or claim filed against a reservation.
///
/// A complaint receives at most one response, ever. Once `response` is
/// non-empty, further response attempts are rejected without mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Unique complaint identifier.
    pub id: ComplaintId,
    /// The guest who filed it.
    pub user_id: UserId,
    /// The reservation it concerns.
    pub reservation_id: ReservationId,
    /// Short subject line.
    pub subject: String,
    /// Free-form category, e.g. "Queja" or "Reclamo".
    #[serde(rename = "type")]
    pub kind: String,
    /// Full description of the issue.
    pub description: String,
    /// Handling status.
    pub status: ComplaintStatus,
    /// Admin response; empty until answered.
    #[serde(default)]
    pub response: String,
    /// When the complaint was filed.
    pub created_at: DateTime<Utc>,
    /// When the single response was recorded. Stored documents carry an
    /// explicit `null` here until then, so this field always serializes.
    pub responded_at: Option<DateTime<Utc>>,
    /// When the complaint was last mutated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Complaint {
    /// Check whether a response has already been recorded.
    pub fn has_response(&self) -> bool {
        !self.response.is_empty()
    }
}

impl HasId for Complaint {
    fn raw_id(&self) -> i64 {
        self.id.value()
    }
}
