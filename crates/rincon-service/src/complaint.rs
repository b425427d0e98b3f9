//! Guest complaints: filing, listing, the single admin response, and
//! owner deletion.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::Validate;

use rincon_core::result::AppResult;
use rincon_core::traits::{generate_id, KeyValueStore, StoreExt};
use rincon_core::types::{ComplaintId, ReservationId};
use rincon_core::AppError;
use rincon_entity::complaint::{Complaint, ComplaintStatus};
use rincon_storage::collections;

use crate::context::SessionContext;
use crate::validate::check;

/// Form data for filing a complaint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaint {
    /// The reservation the complaint concerns.
    pub reservation_id: ReservationId,
    /// Short subject line.
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    /// Free-form category, e.g. "Queja" or "Reclamo".
    #[validate(length(min = 1, message = "Complaint type is required"))]
    #[serde(rename = "type")]
    pub kind: String,
    /// Full description of the issue.
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,
}

/// Complaint collection workflow.
#[derive(Debug, Clone)]
pub struct ComplaintService {
    store: Arc<dyn KeyValueStore>,
}

impl ComplaintService {
    /// Creates a complaint service over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Vec<Complaint> {
        self.store.get(collections::COMPLAINTS).unwrap_or_default()
    }

    fn save(&self, complaints: &[Complaint]) -> AppResult<()> {
        if self.store.set(collections::COMPLAINTS, complaints) {
            Ok(())
        } else {
            Err(AppError::storage(
                "Failed to persist the complaint collection",
            ))
        }
    }

    /// File a new complaint in pending status on behalf of the current
    /// user.
    pub fn file(&self, ctx: &SessionContext, req: &NewComplaint) -> AppResult<Complaint> {
        check(req)?;

        let mut complaints = self.load();
        let complaint = Complaint {
            id: ComplaintId::new(generate_id(&complaints)),
            user_id: ctx.user_id,
            reservation_id: req.reservation_id,
            subject: req.subject.clone(),
            kind: req.kind.clone(),
            description: req.description.clone(),
            status: ComplaintStatus::Pending,
            response: String::new(),
            created_at: Utc::now(),
            responded_at: None,
            updated_at: None,
        };
        complaints.push(complaint.clone());
        self.save(&complaints)?;

        info!(
            complaint_id = %complaint.id,
            user_id = %ctx.user_id,
            kind = %complaint.kind,
            "Complaint filed"
        );
        Ok(complaint)
    }

    /// The current user's complaints.
    pub fn for_user(&self, ctx: &SessionContext) -> Vec<Complaint> {
        self.load()
            .into_iter()
            .filter(|complaint| complaint.user_id == ctx.user_id)
            .collect()
    }

    /// Every complaint (admin only).
    pub fn all(&self, ctx: &SessionContext) -> AppResult<Vec<Complaint>> {
        ctx.require_admin()?;
        Ok(self.load())
    }

    /// Record the one and only response to a complaint (admin only).
    ///
    /// Returns `Ok(None)` without mutating anything when the id is unknown
    /// **or** when the complaint already carries a response; the at-most-
    /// one-response invariant is enforced here, atomically with the write.
    pub fn respond(
        &self,
        ctx: &SessionContext,
        id: ComplaintId,
        response: &str,
        status: ComplaintStatus,
    ) -> AppResult<Option<Complaint>> {
        ctx.require_admin()?;

        let mut complaints = self.load();
        let Some(complaint) = complaints.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if complaint.has_response() {
            warn!(complaint_id = %id, "Complaint already answered, response refused");
            return Ok(None);
        }

        let now = Utc::now();
        complaint.response = response.to_string();
        complaint.status = status;
        complaint.responded_at = Some(now);
        complaint.updated_at = Some(now);
        let answered = complaint.clone();
        self.save(&complaints)?;

        info!(complaint_id = %id, status = %answered.status, "Complaint answered");
        Ok(Some(answered))
    }

    /// Change a complaint's status without recording a response (admin
    /// only). Returns `Ok(None)` for an unknown id.
    pub fn set_status(
        &self,
        ctx: &SessionContext,
        id: ComplaintId,
        status: ComplaintStatus,
    ) -> AppResult<Option<Complaint>> {
        ctx.require_admin()?;

        let mut complaints = self.load();
        let Some(complaint) = complaints.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        complaint.status = status;
        complaint.updated_at = Some(Utc::now());
        let updated = complaint.clone();
        self.save(&complaints)?;
        Ok(Some(updated))
    }

    /// A guest deletes their own complaint, allowed only while it is
    /// still pending. The storage-level removal itself is unconditional;
    /// the ownership and status rules are enforced here.
    pub fn delete_own(&self, ctx: &SessionContext, id: ComplaintId) -> AppResult<bool> {
        let mut complaints = self.load();
        let Some(complaint) = complaints.iter().find(|c| c.id == id) else {
            return Ok(false);
        };
        if complaint.user_id != ctx.user_id {
            return Err(AppError::authorization(
                "Only the owner of a complaint can delete it",
            ));
        }
        if complaint.status != ComplaintStatus::Pending {
            return Err(AppError::validation(
                "Only pending complaints can be deleted",
            ));
        }

        complaints.retain(|c| c.id != id);
        self.save(&complaints)?;

        info!(complaint_id = %id, "Complaint deleted by owner");
        Ok(true)
    }
}
