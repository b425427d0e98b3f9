//! Reservation status enumeration and transition rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Placed by a guest, awaiting admin confirmation.
    Pending,
    /// Confirmed by an admin.
    Confirmed,
    /// Cancelled; the room's dates are free again.
    Cancelled,
    /// Stay finished.
    Completed,
}

impl ReservationStatus {
    /// An active reservation counts against room availability.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Cancelled and completed are terminal states.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    /// Check whether the admin-driven transition `self → next` is defined.
    ///
    /// Allowed: pending → confirmed | cancelled | completed and
    /// confirmed → cancelled | completed. There is no way out of a
    /// terminal state.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        match (self, next) {
            (Self::Pending, Self::Confirmed | Self::Cancelled | Self::Completed) => true,
            (Self::Confirmed, Self::Cancelled | Self::Completed) => true,
            _ => false,
        }
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = rincon_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(rincon_core::AppError::validation(format!(
                "Invalid reservation status: '{s}'. Expected one of: pending, confirmed, cancelled, completed"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_states() {
        assert!(ReservationStatus::Pending.is_active());
        assert!(ReservationStatus::Confirmed.is_active());
        assert!(!ReservationStatus::Cancelled.is_active());
        assert!(!ReservationStatus::Completed.is_active());
    }

    #[test]
    fn test_transition_table() {
        use ReservationStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Pending.can_transition_to(Completed));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Completed));

        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Confirmed));
        assert!(!Cancelled.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "confirmed".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Confirmed
        );
        assert!("archived".parse::<ReservationStatus>().is_err());
    }
}
