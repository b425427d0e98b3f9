//! Hotel amenity entity model.

use serde::{Deserialize, Serialize};

use rincon_core::traits::HasId;
use rincon_core::types::AmenityId;

/// A hotel facility (restaurant, bar, spa, gym) listed on the site.
///
/// Persisted under the `services` collection; the name `Amenity` avoids
/// colliding with a room's per-room service tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
    /// Unique amenity identifier.
    pub id: AmenityId,
    /// Display name, e.g. "Trinity Restaurant".
    pub name: String,
    /// Facility category: restaurant, bar, spa, gym.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short description.
    pub description: String,
    /// Access price in whole pesos; 0 for included facilities.
    pub price: i64,
    /// Whether the facility is currently open to guests.
    pub available: bool,
}

impl HasId for Amenity {
    fn raw_id(&self) -> i64 {
        self.id.value()
    }
}
