//! Room entity model.

use serde::{Deserialize, Serialize};

use rincon_core::traits::HasId;
use rincon_core::types::RoomId;

use super::kind::RoomType;

/// A bookable room in the catalog.
///
/// This is the one canonical room shape. Legacy room documents carried
/// duplicate field names (`price` next to `pricePerNight`, `maxGuests`
/// next to `capacity`); those are normalized away at the admin-input
/// boundary and never reach this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room identifier, stable across catalog re-seeds.
    pub id: RoomId,
    /// Display name, e.g. "Suite Icónica".
    pub name: String,
    /// Room category.
    #[serde(rename = "type")]
    pub kind: RoomType,
    /// Door number, e.g. "101". Admin-added rooms may not have one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Nightly rate in whole Colombian pesos.
    pub price_per_night: i64,
    /// Maximum number of guests.
    pub capacity: u32,
    /// Number of beds.
    pub beds: u32,
    /// Admin availability flag, independent of date-based availability.
    pub available: bool,
    /// Marketing description.
    pub description: String,
    /// Amenity tags, e.g. `wifi`, `jacuzzi`.
    #[serde(default)]
    pub services: Vec<String>,
    /// Included-benefit bullet list shown on the room card.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
    /// Fully flexible rate.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub flexible_rate: bool,
    /// Breakfast included.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub free_breakfast: bool,
    /// Free cancellation.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub free_cancellation: bool,
    /// Round-trip luxury transfer included.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub transfer_included: bool,
    /// Ordered gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Room {
    /// Check whether the room can host the given party size.
    pub fn fits(&self, guests: u32) -> bool {
        self.capacity >= guests
    }
}

impl HasId for Room {
    fn raw_id(&self) -> i64 {
        self.id.value()
    }
}
