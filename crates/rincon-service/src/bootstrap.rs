//! Idempotent data initialization and maintenance helpers.
//!
//! Runs at every startup: seeds or reconciles the room catalog, guarantees
//! the admin account (resetting its password to the configured fixed
//! value on each pass), and makes sure every collection exists. Safe to
//! run any number of times.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use rincon_core::config::AppConfig;
use rincon_core::result::AppResult;
use rincon_core::traits::{generate_id, KeyValueStore, StoreExt};
use rincon_core::types::{AmenityId, UserId};
use rincon_core::AppError;
use rincon_entity::amenity::Amenity;
use rincon_entity::complaint::Complaint;
use rincon_entity::contact::ContactMessage;
use rincon_entity::reservation::Reservation;
use rincon_entity::room::Room;
use rincon_entity::user::{User, UserRole};
use rincon_storage::collections;

use crate::catalog::seed;

/// The built-in hotel amenities, seeded once.
pub fn built_in_amenities() -> Vec<Amenity> {
    vec![
        Amenity {
            id: AmenityId::new(1),
            name: "Trinity Restaurant".to_string(),
            kind: "restaurant".to_string(),
            description: "Restaurante gourmet con cocina mediterránea".to_string(),
            price: 0,
            available: true,
        },
        Amenity {
            id: AmenityId::new(2),
            name: "Sky Bar".to_string(),
            kind: "bar".to_string(),
            description: "Bar en la azotea con vista panorámica".to_string(),
            price: 0,
            available: true,
        },
        Amenity {
            id: AmenityId::new(3),
            name: "The Sacred Spa".to_string(),
            kind: "spa".to_string(),
            description: "Spa de lujo con tratamientos relajantes".to_string(),
            price: 150,
            available: true,
        },
        Amenity {
            id: AmenityId::new(4),
            name: "Saint Gym".to_string(),
            kind: "gym".to_string(),
            description: "Gimnasio equipado con tecnología de vanguardia".to_string(),
            price: 0,
            available: true,
        },
    ]
}

fn persist<T: Serialize>(store: &dyn KeyValueStore, key: &str, items: &[T]) -> AppResult<()> {
    if store.set(key, items) {
        Ok(())
    } else {
        Err(AppError::storage(format!(
            "Failed to persist the '{key}' collection during initialization"
        )))
    }
}

/// Initialize every collection. Idempotent; admin edits to the room
/// catalog survive, and the admin account password is reset to the
/// configured value on every pass.
pub fn initialize(store: &dyn KeyValueStore, config: &AppConfig) -> AppResult<()> {
    // Rooms: first run seeds the catalog, later runs reconcile it so new
    // seed data lands without trampling admin overrides.
    let built_in = seed::built_in_rooms();
    match store.get::<Room>(collections::ROOMS) {
        None => persist(store, collections::ROOMS, &built_in)?,
        Some(existing) if existing.is_empty() => persist(store, collections::ROOMS, &built_in)?,
        Some(existing) => {
            let merged = seed::merge_seed(&built_in, &existing);
            persist(store, collections::ROOMS, &merged)?;
        }
    }

    // Users: guarantee the admin account and re-apply its fixed password.
    let seed_cfg = &config.seed;
    let mut users: Vec<User> = store.get(collections::USERS).unwrap_or_default();
    match users
        .iter()
        .position(|user| user.email == seed_cfg.admin_email)
    {
        Some(index) => {
            users[index].password = seed_cfg.admin_password.clone();
            users[index].role = UserRole::Admin;
        }
        None => {
            users.push(User {
                id: UserId::new(generate_id(&users)),
                identification: seed_cfg.admin_identification.clone(),
                name: seed_cfg.admin_name.clone(),
                nationality: seed_cfg.admin_nationality.clone(),
                email: seed_cfg.admin_email.clone(),
                phone: seed_cfg.admin_phone.clone(),
                password: seed_cfg.admin_password.clone(),
                role: UserRole::Admin,
                created_at: Utc::now(),
            });
        }
    }
    persist(store, collections::USERS, &users)?;

    // Remaining collections: create empty if absent, never overwrite.
    if !store.contains(collections::RESERVATIONS) {
        persist::<Reservation>(store, collections::RESERVATIONS, &[])?;
    }
    if !store.contains(collections::CONTACT_MESSAGES) {
        persist::<ContactMessage>(store, collections::CONTACT_MESSAGES, &[])?;
    }
    if !store.contains(collections::COMPLAINTS) {
        persist::<Complaint>(store, collections::COMPLAINTS, &[])?;
    }
    if !store.contains(collections::AMENITIES) {
        persist(store, collections::AMENITIES, &built_in_amenities())?;
    }

    info!("Data initialization complete");
    Ok(())
}

/// Wipe every collection and re-initialize from seed data.
pub fn clear_all(store: &dyn KeyValueStore, config: &AppConfig) -> AppResult<()> {
    for key in collections::ALL {
        store.remove(key);
    }
    initialize(store, config)
}

/// Drop every reservation, keeping everything else.
pub fn clear_reservations(store: &dyn KeyValueStore) -> AppResult<()> {
    persist::<Reservation>(store, collections::RESERVATIONS, &[])
}

/// Every collection in one serializable document, for backup or export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataExport {
    /// Registered accounts.
    pub users: Vec<User>,
    /// Room catalog.
    pub rooms: Vec<Room>,
    /// Reservations.
    pub reservations: Vec<Reservation>,
    /// Contact-form messages.
    pub contact_messages: Vec<ContactMessage>,
    /// Hotel amenities.
    pub services: Vec<Amenity>,
    /// Complaints.
    pub complaints: Vec<Complaint>,
}

/// Snapshot the entire data set.
pub fn export_data(store: &dyn KeyValueStore) -> DataExport {
    DataExport {
        users: store.get(collections::USERS).unwrap_or_default(),
        rooms: store.get(collections::ROOMS).unwrap_or_default(),
        reservations: store.get(collections::RESERVATIONS).unwrap_or_default(),
        contact_messages: store.get(collections::CONTACT_MESSAGES).unwrap_or_default(),
        services: store.get(collections::AMENITIES).unwrap_or_default(),
        complaints: store.get(collections::COMPLAINTS).unwrap_or_default(),
    }
}
