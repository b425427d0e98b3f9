//! Collection names for all persisted data.
//!
//! Centralising the names prevents typos and makes it easy to find every
//! collection the application reads or writes. The names (and the
//! camelCase casing of `contactMessages`) match the legacy browser-storage
//! keys, so previously exported data loads unchanged.

/// Room catalog.
pub const ROOMS: &str = "rooms";

/// Registered accounts.
pub const USERS: &str = "users";

/// Reservations.
pub const RESERVATIONS: &str = "reservations";

/// Guest complaints and claims.
pub const COMPLAINTS: &str = "complaints";

/// Contact-form messages.
pub const CONTACT_MESSAGES: &str = "contactMessages";

/// Hotel amenities (restaurant, bar, spa, gym).
pub const AMENITIES: &str = "services";

/// Every collection, in seeding order.
pub const ALL: &[&str] = &[
    ROOMS,
    USERS,
    RESERVATIONS,
    CONTACT_MESSAGES,
    COMPLAINTS,
    AMENITIES,
];
