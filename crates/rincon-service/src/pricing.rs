//! Quote computation: nights, guest-count surcharge tiers, rounding, and
//! the display breakdown.
//!
//! Pricing policy: the nightly rate covers two guests. Guests three and
//! four each add 20% of the base rate per night; from the fifth guest on
//! the per-guest surcharge rises to 30%. The final total is rounded to the
//! nearest 1000 pesos.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use rincon_core::types::money::{format_cop, round_to_thousand};
use rincon_entity::room::Room;

/// A priced stay, ready for display and for snapshotting onto a
/// reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Nightly base rate in whole pesos.
    pub base_price: i64,
    /// Number of nights.
    pub nights: i64,
    /// Party size the quote was computed for.
    pub guests: u32,
    /// Guests beyond the two included in the base rate.
    pub additional_guests: u32,
    /// Nightly surcharge per additional guest (20% or 30% of base).
    pub surcharge_per_guest: f64,
    /// Total in whole pesos, rounded to the nearest 1000.
    pub total_price: i64,
    /// Display-ready line items: base, optional surcharge, total.
    pub breakdown: Vec<String>,
}

/// Stateless quote calculator.
#[derive(Debug, Clone, Copy)]
pub struct PricingEngine;

impl PricingEngine {
    /// Price a stay in the given room.
    ///
    /// When the tiered computation cannot produce a result (non-positive
    /// night count, arithmetic overflow) the engine falls back to a plain
    /// `nights × base` quote with zero surcharge rather than failing the
    /// whole flow.
    pub fn quote(room: &Room, check_in: NaiveDate, check_out: NaiveDate, guests: u32) -> Quote {
        match Self::tiered_quote(room, check_in, check_out, guests) {
            Some(quote) => quote,
            None => {
                warn!(
                    room_id = %room.id,
                    %check_in,
                    %check_out,
                    "Tiered pricing failed, using plain quote"
                );
                Self::plain_quote(room, check_in, check_out, guests)
            }
        }
    }

    /// Surcharge per additional guest and per night, keyed off the raw
    /// party size (not room capacity).
    fn surcharge_per_guest(base_price: i64, guests: u32) -> f64 {
        if guests <= 2 {
            0.0
        } else if guests <= 4 {
            base_price as f64 * 0.20
        } else {
            base_price as f64 * 0.30
        }
    }

    fn tiered_quote(
        room: &Room,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: u32,
    ) -> Option<Quote> {
        let nights = (check_out - check_in).num_days();
        if nights <= 0 {
            return None;
        }

        let base_price = room.price_per_night;
        let base_total = base_price.checked_mul(nights)?;
        let additional_guests = guests.saturating_sub(2);
        let surcharge_per_guest = Self::surcharge_per_guest(base_price, guests);
        let surcharge_total =
            surcharge_per_guest * f64::from(additional_guests) * nights as f64;

        let total_price = round_to_thousand(base_total as f64 + surcharge_total);

        let mut breakdown = vec![format!(
            "Precio base ({nights} noches × {}) = {}",
            format_cop(base_price),
            format_cop(base_total),
        )];
        if additional_guests > 0 {
            let rate = if guests <= 4 { "20%" } else { "30%" };
            let noun = if additional_guests == 1 {
                "persona adicional"
            } else {
                "personas adicionales"
            };
            breakdown.push(format!(
                "Recargo por {additional_guests} {noun} ({rate}) = {}",
                format_cop(surcharge_total.round() as i64),
            ));
        }
        breakdown.push(format!("Total: {}", format_cop(total_price)));

        Some(Quote {
            base_price,
            nights,
            guests,
            additional_guests,
            surcharge_per_guest,
            total_price,
            breakdown,
        })
    }

    /// Fallback quote: plain nights × base, no surcharge, no rounding.
    fn plain_quote(room: &Room, check_in: NaiveDate, check_out: NaiveDate, guests: u32) -> Quote {
        let nights = (check_out - check_in).num_days().max(0);
        let total_price = room.price_per_night.saturating_mul(nights);
        Quote {
            base_price: room.price_per_night,
            nights,
            guests,
            additional_guests: 0,
            surcharge_per_guest: 0.0,
            total_price,
            breakdown: vec![
                format!(
                    "Precio base: {nights} noches × {} = {}",
                    format_cop(room.price_per_night),
                    format_cop(total_price),
                ),
                format!("Total: {}", format_cop(total_price)),
            ],
        }
    }
}
