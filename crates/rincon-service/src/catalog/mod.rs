//! Room catalog: built-in seed data, seed reconciliation, admin CRUD.

pub mod seed;
pub mod service;

pub use seed::{built_in_rooms, merge_seed};
pub use service::{CreateRoom, RoomCatalog};
