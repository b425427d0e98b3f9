//! # rincon-entity
//!
//! Domain entity models for Rincón Suites. Every struct in this crate
//! represents a record in one of the persisted collections (`rooms`,
//! `users`, `reservations`, `complaints`, `contactMessages`, `services`).
//! All entities derive `Debug`, `Clone`, `Serialize`, `Deserialize` and
//! serialize with camelCase field names so the stored JSON stays
//! interchangeable with the documents the legacy browser front-end kept
//! in local storage.

pub mod amenity;
pub mod complaint;
pub mod contact;
pub mod reservation;
pub mod room;
pub mod user;
