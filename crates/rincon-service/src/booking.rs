//! Guest booking and back-office reservation management.
//!
//! Storage is shared state that may have changed since the caller last
//! searched, so every path that creates or repositions a reservation
//! re-validates availability immediately before writing. The read the
//! guest made while browsing is already stale.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use rincon_core::result::AppResult;
use rincon_core::traits::KeyValueStore;
use rincon_core::types::{ReservationId, RoomId};
use rincon_core::AppError;
use rincon_entity::reservation::{Reservation, ReservationStatus};

use crate::availability::AvailabilityEngine;
use crate::catalog::RoomCatalog;
use crate::context::SessionContext;
use crate::ledger::{nights_between, NewReservation, ReservationLedger, UpdateReservation};
use crate::pricing::PricingEngine;
use crate::validate::check;

/// A guest's booking request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// The room to book.
    pub room_id: RoomId,
    /// Arrival date.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
    /// Party size.
    #[validate(range(min = 1, message = "At least one guest is required"))]
    pub guests: u32,
}

/// Admin changes to an existing reservation. Unset fields keep their
/// current values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationChanges {
    /// Move the stay to another room.
    pub room_id: Option<RoomId>,
    /// New arrival date.
    pub check_in: Option<NaiveDate>,
    /// New departure date.
    pub check_out: Option<NaiveDate>,
    /// New party size.
    pub guests: Option<u32>,
    /// New status.
    pub status: Option<ReservationStatus>,
    /// New notes.
    pub notes: Option<String>,
}

/// Orchestrates search, pricing, and the ledger for reservations.
#[derive(Debug, Clone)]
pub struct BookingService {
    engine: AvailabilityEngine,
    ledger: ReservationLedger,
}

impl BookingService {
    /// Creates a booking service over the given engine and ledger.
    pub fn new(engine: AvailabilityEngine, ledger: ReservationLedger) -> Self {
        Self { engine, ledger }
    }

    /// Convenience constructor wiring catalog, engine, and ledger over one
    /// store.
    pub fn over_store(store: Arc<dyn KeyValueStore>) -> Self {
        let catalog = RoomCatalog::new(Arc::clone(&store));
        let ledger = ReservationLedger::new(store);
        let engine = AvailabilityEngine::new(catalog, ledger.clone());
        Self::new(engine, ledger)
    }

    /// Place a guest reservation.
    ///
    /// Admins are refused: the back-office manages reservations through
    /// [`BookingService::modify`] instead of placing its own. Availability
    /// is re-checked against current storage right before the write, which
    /// closes the search-then-book race window.
    pub fn book(&self, ctx: &SessionContext, req: &BookingRequest) -> AppResult<Reservation> {
        if ctx.is_admin() {
            return Err(AppError::authorization(
                "Administrators cannot place reservations; use the admin panel to manage them",
            ));
        }
        check(req)?;

        let today = Utc::now().date_naive();
        let room = self.engine.check_room(
            req.room_id,
            req.check_in,
            req.check_out,
            req.guests,
            None,
            today,
        )?;

        let quote = PricingEngine::quote(&room, req.check_in, req.check_out, req.guests);
        let reservation = self.ledger.create(NewReservation {
            room_id: room.id,
            user_id: ctx.user_id,
            check_in: req.check_in,
            check_out: req.check_out,
            guests: req.guests.max(1),
            nights: quote.nights,
            total_price: quote.total_price,
            status: None,
            notes: String::new(),
            base_price: Some(quote.base_price),
            additional_guests: Some(quote.additional_guests),
            surcharge_per_guest: Some(quote.surcharge_per_guest),
            price_breakdown: Some(quote.breakdown),
        })?;

        info!(
            reservation_id = %reservation.id,
            room = %room.name,
            user_id = %ctx.user_id,
            "Guest booking placed"
        );
        Ok(reservation)
    }

    /// The current user's reservations.
    pub fn my_reservations(&self, ctx: &SessionContext) -> Vec<Reservation> {
        self.ledger.by_user(ctx.user_id)
    }

    /// Every reservation (admin only).
    pub fn all_reservations(&self, ctx: &SessionContext) -> AppResult<Vec<Reservation>> {
        ctx.require_admin()?;
        Ok(self.ledger.all())
    }

    /// A guest cancels their own reservation. Guests can cancel but never
    /// delete; the record stays in the ledger.
    pub fn cancel_own(
        &self,
        ctx: &SessionContext,
        id: ReservationId,
    ) -> AppResult<Option<Reservation>> {
        let Some(reservation) = self.ledger.find(id) else {
            return Ok(None);
        };
        if reservation.user_id != ctx.user_id {
            return Err(AppError::authorization(
                "Only the owner of a reservation can cancel it",
            ));
        }
        self.ledger
            .update_status(id, ReservationStatus::Cancelled)
    }

    /// Admin modification of an existing reservation.
    ///
    /// Re-validates date order, past check-in, capacity, and overlap
    /// (excluding the reservation being edited) against current storage,
    /// then reprices as plain nights × nightly rate — back-office edits
    /// do not apply the guest surcharge tiers — and applies the patch.
    /// Returns `Ok(None)` for an unknown id.
    pub fn modify(
        &self,
        ctx: &SessionContext,
        id: ReservationId,
        changes: &ReservationChanges,
    ) -> AppResult<Option<Reservation>> {
        ctx.require_admin()?;

        let Some(current) = self.ledger.find(id) else {
            return Ok(None);
        };

        let room_id = changes.room_id.unwrap_or(current.room_id);
        let check_in = changes.check_in.unwrap_or(current.check_in);
        let check_out = changes.check_out.unwrap_or(current.check_out);
        let guests = changes.guests.unwrap_or(current.guests);

        let today = Utc::now().date_naive();
        let room = self
            .engine
            .check_room(room_id, check_in, check_out, guests, Some(id), today)?;

        let nights = nights_between(check_in, check_out);
        let total_price = room.price_per_night.saturating_mul(nights);

        let updated = self.ledger.update(
            id,
            UpdateReservation {
                room_id: Some(room_id),
                check_in: Some(check_in),
                check_out: Some(check_out),
                guests: Some(guests),
                nights: Some(nights),
                total_price: Some(total_price),
                status: changes.status,
                notes: changes.notes.clone(),
            },
        )?;

        if let Some(reservation) = &updated {
            info!(
                reservation_id = %reservation.id,
                room_id = %reservation.room_id,
                status = %reservation.status,
                "Reservation modified by admin"
            );
        }
        Ok(updated)
    }

    /// Admin status transition (confirm, cancel, complete).
    pub fn set_status(
        &self,
        ctx: &SessionContext,
        id: ReservationId,
        status: ReservationStatus,
    ) -> AppResult<Option<Reservation>> {
        ctx.require_admin()?;
        self.ledger.update_status(id, status)
    }

    /// Permanently remove a reservation record (admin only; guests may
    /// cancel but never delete).
    pub fn delete(&self, ctx: &SessionContext, id: ReservationId) -> AppResult<bool> {
        ctx.require_admin()?;
        self.ledger.delete(id)
    }
}
