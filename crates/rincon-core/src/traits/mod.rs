//! Trait seams implemented by other crates.

pub mod store;

pub use store::{generate_id, HasId, KeyValueStore, StoreExt};
