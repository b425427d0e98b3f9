//! Reservation entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use rincon_core::traits::HasId;
use rincon_core::types::{ReservationId, RoomId, UserId};

use super::status::ReservationStatus;

/// A room reservation.
///
/// Dates are half-open: the stay occupies `[check_in, check_out)`, so a
/// reservation ending on a given day does not collide with one starting
/// that same day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: ReservationId,
    /// The reserved room.
    pub room_id: RoomId,
    /// The guest who owns the reservation.
    pub user_id: UserId,
    /// Arrival date (inclusive).
    pub check_in: NaiveDate,
    /// Departure date (exclusive), strictly after `check_in`.
    pub check_out: NaiveDate,
    /// Party size.
    pub guests: u32,
    /// Number of nights, derived from the date range.
    pub nights: i64,
    /// Total price in whole pesos, rounded to the nearest 1000.
    pub total_price: i64,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// Free-text notes (admin-editable).
    #[serde(default)]
    pub notes: String,
    /// Nightly base rate captured when the guest booked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<i64>,
    /// Guests beyond the two included in the base rate, captured at booking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_guests: Option<u32>,
    /// Per-extra-guest nightly surcharge captured at booking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surcharge_per_guest: Option<f64>,
    /// Display-ready price breakdown captured at booking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_breakdown: Option<Vec<String>>,
    /// When the reservation was created.
    pub created_at: DateTime<Utc>,
    /// When the reservation was last mutated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Reservation {
    /// An active reservation blocks its room's dates.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

impl HasId for Reservation {
    fn raw_id(&self) -> i64 {
        self.id.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_camel_case() {
        let json = r#"{
            "id": 1,
            "roomId": 3,
            "userId": 2,
            "checkIn": "2024-01-10",
            "checkOut": "2024-01-15",
            "guests": 2,
            "nights": 5,
            "totalPrice": 31382000,
            "status": "pending",
            "notes": "",
            "createdAt": "2024-01-02T10:00:00Z"
        }"#;
        let reservation: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(reservation.room_id, RoomId::new(3));
        assert_eq!(
            reservation.check_in,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
        );
        assert!(reservation.is_active());
        assert!(reservation.updated_at.is_none());

        let back = serde_json::to_value(&reservation).unwrap();
        assert_eq!(back["checkOut"], "2024-01-15");
        assert_eq!(back["status"], "pending");
    }
}
