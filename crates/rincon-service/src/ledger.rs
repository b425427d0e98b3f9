//! Reservation collection CRUD and status transitions.
//!
//! The ledger is the only writer of the `reservations` collection. It
//! performs no semantic validation of dates, capacity, or overlap; the
//! booking flows validate before calling in (see `booking`), because a
//! patch's meaning depends on the reservation it lands on.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use rincon_core::result::AppResult;
use rincon_core::traits::{generate_id, KeyValueStore, StoreExt};
use rincon_core::types::{ReservationId, RoomId, UserId};
use rincon_core::AppError;
use rincon_entity::reservation::{Reservation, ReservationStatus};
use rincon_storage::collections;

/// Input for creating a reservation record.
#[derive(Debug, Clone)]
pub struct NewReservation {
    /// The room to reserve.
    pub room_id: RoomId,
    /// The owning guest.
    pub user_id: UserId,
    /// Arrival date.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
    /// Party size.
    pub guests: u32,
    /// Night count (computed by the caller's pricing pass).
    pub nights: i64,
    /// Total price (computed by the caller's pricing pass).
    pub total_price: i64,
    /// Initial status; defaults to pending.
    pub status: Option<ReservationStatus>,
    /// Free-text notes.
    pub notes: String,
    /// Pricing snapshot: nightly base rate.
    pub base_price: Option<i64>,
    /// Pricing snapshot: extra guests beyond two.
    pub additional_guests: Option<u32>,
    /// Pricing snapshot: per-extra-guest nightly surcharge.
    pub surcharge_per_guest: Option<f64>,
    /// Pricing snapshot: display breakdown lines.
    pub price_breakdown: Option<Vec<String>>,
}

/// Shallow-merge patch for an existing reservation. Only supplied fields
/// change; `updated_at` is stamped on every application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservation {
    /// New room.
    pub room_id: Option<RoomId>,
    /// New arrival date.
    pub check_in: Option<NaiveDate>,
    /// New departure date.
    pub check_out: Option<NaiveDate>,
    /// New party size.
    pub guests: Option<u32>,
    /// New night count.
    pub nights: Option<i64>,
    /// New total price.
    pub total_price: Option<i64>,
    /// New status (applied as-is; the transition table only guards
    /// [`ReservationLedger::update_status`]).
    pub status: Option<ReservationStatus>,
    /// New notes.
    pub notes: Option<String>,
}

/// CRUD over the reservation collection.
#[derive(Debug, Clone)]
pub struct ReservationLedger {
    store: Arc<dyn KeyValueStore>,
}

impl ReservationLedger {
    /// Creates a ledger over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Vec<Reservation> {
        self.store
            .get(collections::RESERVATIONS)
            .unwrap_or_default()
    }

    fn save(&self, reservations: &[Reservation]) -> AppResult<()> {
        if self.store.set(collections::RESERVATIONS, reservations) {
            Ok(())
        } else {
            Err(AppError::storage(
                "Failed to persist the reservation collection",
            ))
        }
    }

    /// All reservations, in insertion order.
    pub fn all(&self) -> Vec<Reservation> {
        self.load()
    }

    /// Look up one reservation by id.
    pub fn find(&self, id: ReservationId) -> Option<Reservation> {
        self.load()
            .into_iter()
            .find(|reservation| reservation.id == id)
    }

    /// All reservations owned by the given user.
    pub fn by_user(&self, user_id: UserId) -> Vec<Reservation> {
        self.load()
            .into_iter()
            .filter(|reservation| reservation.user_id == user_id)
            .collect()
    }

    /// Persist a new reservation, assigning the next free id and stamping
    /// `created_at`. Status defaults to pending.
    pub fn create(&self, data: NewReservation) -> AppResult<Reservation> {
        let mut reservations = self.load();
        let reservation = Reservation {
            id: ReservationId::new(generate_id(&reservations)),
            room_id: data.room_id,
            user_id: data.user_id,
            check_in: data.check_in,
            check_out: data.check_out,
            guests: data.guests,
            nights: data.nights,
            total_price: data.total_price,
            status: data.status.unwrap_or(ReservationStatus::Pending),
            notes: data.notes,
            base_price: data.base_price,
            additional_guests: data.additional_guests,
            surcharge_per_guest: data.surcharge_per_guest,
            price_breakdown: data.price_breakdown,
            created_at: Utc::now(),
            updated_at: None,
        };
        reservations.push(reservation.clone());
        self.save(&reservations)?;

        info!(
            reservation_id = %reservation.id,
            room_id = %reservation.room_id,
            user_id = %reservation.user_id,
            status = %reservation.status,
            "Reservation created"
        );
        Ok(reservation)
    }

    /// Apply a shallow-merge patch. Returns `Ok(None)` for an unknown id.
    pub fn update(
        &self,
        id: ReservationId,
        patch: UpdateReservation,
    ) -> AppResult<Option<Reservation>> {
        let mut reservations = self.load();
        let Some(reservation) = reservations.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        if let Some(room_id) = patch.room_id {
            reservation.room_id = room_id;
        }
        if let Some(check_in) = patch.check_in {
            reservation.check_in = check_in;
        }
        if let Some(check_out) = patch.check_out {
            reservation.check_out = check_out;
        }
        if let Some(guests) = patch.guests {
            reservation.guests = guests;
        }
        if let Some(nights) = patch.nights {
            reservation.nights = nights;
        }
        if let Some(total_price) = patch.total_price {
            reservation.total_price = total_price;
        }
        if let Some(status) = patch.status {
            reservation.status = status;
        }
        if let Some(notes) = patch.notes {
            reservation.notes = notes;
        }
        reservation.updated_at = Some(Utc::now());

        let updated = reservation.clone();
        self.save(&reservations)?;

        info!(reservation_id = %id, "Reservation updated");
        Ok(Some(updated))
    }

    /// Flip the status through the transition table. Returns `Ok(None)`
    /// for an unknown id, a validation error for an undefined transition.
    ///
    /// A transition into `cancelled` needs no compensating write: the
    /// room's dates free up because availability is always computed live
    /// from active reservations.
    pub fn update_status(
        &self,
        id: ReservationId,
        status: ReservationStatus,
    ) -> AppResult<Option<Reservation>> {
        let mut reservations = self.load();
        let Some(reservation) = reservations.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        let previous = reservation.status;
        if !previous.can_transition_to(status) {
            return Err(AppError::validation(format!(
                "Cannot move a {previous} reservation to {status}"
            )));
        }

        reservation.status = status;
        reservation.updated_at = Some(Utc::now());
        let updated = reservation.clone();
        self.save(&reservations)?;

        if status == ReservationStatus::Cancelled {
            info!(
                reservation_id = %id,
                room_id = %updated.room_id,
                "Reservation cancelled, room dates are free again"
            );
        } else {
            info!(reservation_id = %id, from = %previous, to = %status, "Reservation status changed");
        }
        Ok(Some(updated))
    }

    /// Permanently remove a reservation. Returns whether one was removed.
    /// Role enforcement (admins only) lives in the booking service.
    pub fn delete(&self, id: ReservationId) -> AppResult<bool> {
        let mut reservations = self.load();
        let before = reservations.len();
        reservations.retain(|reservation| reservation.id != id);
        if reservations.len() == before {
            return Ok(false);
        }
        self.save(&reservations)?;

        info!(reservation_id = %id, "Reservation deleted");
        Ok(true)
    }

    /// Drop every reservation (maintenance helper).
    pub fn clear(&self) -> AppResult<()> {
        self.save(&[])
    }
}

/// Compute the night count for a stay: the day difference of the
/// half-open range.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}
