//! Read and admin-write access to the room collection.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use rincon_core::result::AppResult;
use rincon_core::traits::{generate_id, KeyValueStore, StoreExt};
use rincon_core::types::RoomId;
use rincon_core::AppError;
use rincon_entity::room::{Room, RoomType};
use rincon_storage::collections;

use crate::context::SessionContext;
use crate::validate::check;

use super::seed;

/// Admin form data for a new room.
///
/// The form historically submits the nightly rate under the legacy name
/// `price`; it is normalized into the canonical `price_per_night` here, at
/// the boundary, so the stored documents carry one name only.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoom {
    /// Display name.
    #[validate(length(min = 2, message = "Room name must be at least 2 characters"))]
    pub name: String,
    /// Room category.
    #[serde(rename = "type")]
    pub kind: RoomType,
    /// Nightly rate in whole pesos (legacy form field name).
    #[validate(range(min = 1, message = "Nightly price must be positive"))]
    pub price: i64,
    /// Maximum number of guests.
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: u32,
    /// Number of beds.
    #[validate(range(min = 1, message = "Bed count must be at least 1"))]
    pub beds: u32,
    /// Admin availability flag.
    pub available: bool,
    /// Marketing description.
    pub description: String,
    /// Amenity tags.
    #[serde(default)]
    pub services: Vec<String>,
}

/// Read-only catalog access for everyone; create/update/delete for admins.
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    store: Arc<dyn KeyValueStore>,
}

impl RoomCatalog {
    /// Creates a catalog over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Vec<Room> {
        // An unseeded store still serves the built-in catalog.
        self.store
            .get(collections::ROOMS)
            .unwrap_or_else(seed::built_in_rooms)
    }

    fn save(&self, rooms: &[Room]) -> AppResult<()> {
        if self.store.set(collections::ROOMS, rooms) {
            Ok(())
        } else {
            Err(AppError::storage("Failed to persist the room collection"))
        }
    }

    /// All rooms, in catalog order.
    pub fn rooms(&self) -> Vec<Room> {
        self.load()
    }

    /// Look up one room by id.
    pub fn room(&self, id: RoomId) -> Option<Room> {
        self.load().into_iter().find(|room| room.id == id)
    }

    /// Add a new room (admin only). Assigns the next free id.
    pub fn add(&self, ctx: &SessionContext, req: &CreateRoom) -> AppResult<Room> {
        ctx.require_admin()?;
        check(req)?;

        let mut rooms = self.load();
        let room = Room {
            id: RoomId::new(generate_id(&rooms)),
            name: req.name.clone(),
            kind: req.kind,
            number: None,
            price_per_night: req.price,
            capacity: req.capacity,
            beds: req.beds,
            available: req.available,
            description: req.description.clone(),
            services: req.services.clone(),
            benefits: Vec::new(),
            flexible_rate: false,
            free_breakfast: false,
            free_cancellation: false,
            transfer_included: false,
            images: Vec::new(),
        };
        rooms.push(room.clone());
        self.save(&rooms)?;

        info!(room_id = %room.id, name = %room.name, "Room added to catalog");
        Ok(room)
    }

    /// Replace an existing room wholesale (admin edit form submits every
    /// field). Returns `Ok(None)` when the id is unknown.
    pub fn update(&self, ctx: &SessionContext, room: Room) -> AppResult<Option<Room>> {
        ctx.require_admin()?;

        let mut rooms = self.load();
        let Some(slot) = rooms.iter_mut().find(|existing| existing.id == room.id) else {
            return Ok(None);
        };
        *slot = room.clone();
        self.save(&rooms)?;

        info!(room_id = %room.id, "Room updated");
        Ok(Some(room))
    }

    /// Permanently remove a room (admin only). Returns whether a room was
    /// actually removed.
    pub fn delete(&self, ctx: &SessionContext, id: RoomId) -> AppResult<bool> {
        ctx.require_admin()?;

        let mut rooms = self.load();
        let before = rooms.len();
        rooms.retain(|room| room.id != id);
        if rooms.len() == before {
            return Ok(false);
        }
        self.save(&rooms)?;

        info!(room_id = %id, "Room deleted");
        Ok(true)
    }
}
