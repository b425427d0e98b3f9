//! Availability search and the shared bookability check.

use chrono::NaiveDate;
use tracing::debug;

use rincon_core::result::AppResult;
use rincon_core::types::{ReservationId, RoomId};
use rincon_core::AppError;
use rincon_entity::room::Room;

use crate::catalog::RoomCatalog;
use crate::ledger::ReservationLedger;

use super::overlap::dates_overlap;

/// Filters the catalog against active reservations for a date range.
///
/// The engine never writes; availability is always computed live from the
/// reservation set, which is why a cancellation needs no compensating
/// write anywhere.
#[derive(Debug, Clone)]
pub struct AvailabilityEngine {
    catalog: RoomCatalog,
    ledger: ReservationLedger,
}

impl AvailabilityEngine {
    /// Creates an engine over the given catalog and ledger.
    pub fn new(catalog: RoomCatalog, ledger: ReservationLedger) -> Self {
        Self { catalog, ledger }
    }

    /// Find rooms bookable for the given date range and party size,
    /// in catalog order.
    ///
    /// Besides the capacity floor there is a capacity *ceiling*: parties
    /// of up to 4 only see rooms of capacity 4 or less. Larger rooms are
    /// deliberately hidden from small-party searches; this is a product
    /// display rule, not a booking restriction (see DESIGN.md).
    pub fn find_available(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: u32,
    ) -> AppResult<Vec<Room>> {
        if check_out <= check_in {
            return Err(AppError::validation("Check-out must be after check-in"));
        }
        let guests = guests.max(1);
        let ceiling = if guests <= 4 { 4 } else { guests };

        let active: Vec<_> = self
            .ledger
            .all()
            .into_iter()
            .filter(|reservation| reservation.is_active())
            .collect();

        let available: Vec<Room> = self
            .catalog
            .rooms()
            .into_iter()
            .filter(|room| room.fits(guests))
            .filter(|room| room.capacity <= ceiling)
            .filter(|room| {
                !active.iter().any(|reservation| {
                    reservation.room_id == room.id
                        && dates_overlap(
                            check_in,
                            check_out,
                            reservation.check_in,
                            reservation.check_out,
                        )
                })
            })
            .collect();

        debug!(
            %check_in,
            %check_out,
            guests,
            found = available.len(),
            "Availability search"
        );
        Ok(available)
    }

    /// Validate that one specific room can be booked for the given stay.
    ///
    /// This is the single check used by guest booking and by admin
    /// modification; for modifications, `exclude` names the reservation
    /// being edited so it does not conflict with itself. `today` comes
    /// from the caller so the past-date rule is testable.
    ///
    /// Returns the room on success so callers can price it without a
    /// second lookup.
    pub fn check_room(
        &self,
        room_id: RoomId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: u32,
        exclude: Option<ReservationId>,
        today: NaiveDate,
    ) -> AppResult<Room> {
        if check_out <= check_in {
            return Err(AppError::validation("Check-out must be after check-in"));
        }
        if check_in < today {
            return Err(AppError::validation("Check-in cannot be in the past"));
        }

        let guests = guests.max(1);
        let room = self
            .catalog
            .room(room_id)
            .ok_or_else(|| AppError::not_found(format!("Room {room_id} not found")))?;

        if !room.fits(guests) {
            return Err(AppError::validation(format!(
                "This room hosts at most {} guests",
                room.capacity
            )));
        }

        let conflict = self
            .ledger
            .all()
            .into_iter()
            .filter(|reservation| {
                reservation.room_id == room_id
                    && reservation.is_active()
                    && Some(reservation.id) != exclude
            })
            .find(|reservation| {
                dates_overlap(
                    check_in,
                    check_out,
                    reservation.check_in,
                    reservation.check_out,
                )
            });

        if let Some(blocking) = conflict {
            return Err(AppError::conflict(format!(
                "Room already reserved from {} to {}",
                blocking.check_in, blocking.check_out
            )));
        }

        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use rincon_core::types::UserId;
    use rincon_entity::reservation::ReservationStatus;
    use rincon_storage::MemoryStore;

    use crate::ledger::NewReservation;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine() -> (AvailabilityEngine, ReservationLedger) {
        let store: Arc<dyn rincon_core::traits::KeyValueStore> = Arc::new(MemoryStore::new());
        let catalog = RoomCatalog::new(Arc::clone(&store));
        let ledger = ReservationLedger::new(store);
        (AvailabilityEngine::new(catalog, ledger.clone()), ledger)
    }

    fn reserve(
        ledger: &ReservationLedger,
        room: i64,
        from: NaiveDate,
        to: NaiveDate,
        status: ReservationStatus,
    ) {
        ledger
            .create(NewReservation {
                room_id: RoomId::new(room),
                user_id: UserId::new(2),
                check_in: from,
                check_out: to,
                guests: 2,
                nights: (to - from).num_days(),
                total_price: 1_000_000,
                status: Some(status),
                notes: String::new(),
                base_price: None,
                additional_guests: None,
                surcharge_per_guest: None,
                price_breakdown: None,
            })
            .unwrap();
    }

    #[test]
    fn test_overlapping_active_reservation_excludes_room() {
        let (engine, ledger) = engine();
        reserve(
            &ledger,
            1,
            date(2024, 1, 10),
            date(2024, 1, 15),
            ReservationStatus::Confirmed,
        );

        let rooms = engine
            .find_available(date(2024, 1, 12), date(2024, 1, 14), 2)
            .unwrap();
        assert!(!rooms.iter().any(|room| room.id == RoomId::new(1)));
    }

    #[test]
    fn test_boundary_adjacent_stay_is_available() {
        let (engine, ledger) = engine();
        reserve(
            &ledger,
            1,
            date(2024, 1, 10),
            date(2024, 1, 15),
            ReservationStatus::Confirmed,
        );

        let rooms = engine
            .find_available(date(2024, 1, 15), date(2024, 1, 17), 2)
            .unwrap();
        assert!(rooms.iter().any(|room| room.id == RoomId::new(1)));
    }

    #[test]
    fn test_cancelled_reservation_never_blocks() {
        let (engine, ledger) = engine();
        reserve(
            &ledger,
            1,
            date(2024, 1, 1),
            date(2024, 12, 31),
            ReservationStatus::Cancelled,
        );

        let rooms = engine
            .find_available(date(2024, 6, 1), date(2024, 6, 5), 2)
            .unwrap();
        assert!(rooms.iter().any(|room| room.id == RoomId::new(1)));
    }

    #[test]
    fn test_capacity_floor_and_ceiling() {
        let (engine, _ledger) = engine();

        // 3 guests: capacity-2 suites drop out, capacity-4 suites remain.
        let rooms = engine
            .find_available(date(2024, 3, 1), date(2024, 3, 3), 3)
            .unwrap();
        assert_eq!(rooms.len(), 2);
        assert!(rooms.iter().all(|room| room.capacity == 4));

        // 2 guests: every seed room has capacity <= 4, all pass the ceiling.
        let rooms = engine
            .find_available(date(2024, 3, 1), date(2024, 3, 3), 2)
            .unwrap();
        assert_eq!(rooms.len(), 7);
    }

    #[test]
    fn test_zero_guests_defaults_to_one() {
        let (engine, _ledger) = engine();
        let rooms = engine
            .find_available(date(2024, 3, 1), date(2024, 3, 3), 0)
            .unwrap();
        assert_eq!(rooms.len(), 7);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let (engine, _ledger) = engine();
        assert!(engine
            .find_available(date(2024, 3, 3), date(2024, 3, 1), 2)
            .is_err());
    }

    #[test]
    fn test_check_room_conflict_names_interval() {
        let (engine, ledger) = engine();
        reserve(
            &ledger,
            1,
            date(2024, 1, 10),
            date(2024, 1, 15),
            ReservationStatus::Pending,
        );

        let err = engine
            .check_room(
                RoomId::new(1),
                date(2024, 1, 12),
                date(2024, 1, 14),
                2,
                None,
                date(2024, 1, 1),
            )
            .unwrap_err();
        assert_eq!(err.kind, rincon_core::error::ErrorKind::Conflict);
        assert!(err.message.contains("2024-01-10"));
        assert!(err.message.contains("2024-01-15"));
    }

    #[test]
    fn test_check_room_excludes_reservation_under_edit() {
        let (engine, ledger) = engine();
        reserve(
            &ledger,
            1,
            date(2024, 1, 10),
            date(2024, 1, 15),
            ReservationStatus::Confirmed,
        );
        let id = ledger.all()[0].id;

        // Moving the reservation within its own dates must not conflict
        // with itself.
        assert!(engine
            .check_room(
                RoomId::new(1),
                date(2024, 1, 11),
                date(2024, 1, 14),
                2,
                Some(id),
                date(2024, 1, 1),
            )
            .is_ok());
    }

    #[test]
    fn test_check_room_rejects_past_checkin_and_over_capacity() {
        let (engine, _ledger) = engine();
        let today = date(2024, 5, 10);

        assert!(engine
            .check_room(
                RoomId::new(1),
                date(2024, 5, 9),
                date(2024, 5, 12),
                2,
                None,
                today,
            )
            .is_err());

        let err = engine
            .check_room(
                RoomId::new(1),
                date(2024, 5, 11),
                date(2024, 5, 12),
                5,
                None,
                today,
            )
            .unwrap_err();
        assert!(err.message.contains("at most 2"));
    }

    #[test]
    fn test_check_room_unknown_room() {
        let (engine, _ledger) = engine();
        let err = engine
            .check_room(
                RoomId::new(99),
                date(2024, 5, 11),
                date(2024, 5, 12),
                2,
                None,
                date(2024, 5, 1),
            )
            .unwrap_err();
        assert_eq!(err.kind, rincon_core::error::ErrorKind::NotFound);
    }
}
