//! Key-value persistence substrate for named JSON collections.
//!
//! Every persisted collection (`rooms`, `users`, `reservations`, ...) is a
//! JSON array stored under its collection name. The raw trait moves JSON
//! strings; [`StoreExt`] layers typed access on top. Implementations live
//! in `rincon-storage`.
//!
//! Failure semantics follow the substrate contract: a write that cannot be
//! completed is reported as `false`, never a panic, and a read that cannot
//! be parsed is logged and treated as absent. Callers must check the write
//! result instead of assuming it succeeded.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};

/// Raw string-level store over named collections.
///
/// Object-safe so services can hold an `Arc<dyn KeyValueStore>` and swap
/// the in-memory and file-backed implementations freely.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Return the serialized JSON document stored under `key`, if any.
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Store a serialized JSON document under `key`.
    ///
    /// Returns `false` when the write could not be completed.
    fn set_raw(&self, key: &str, json: &str) -> bool;

    /// Remove the document stored under `key`, if present.
    fn remove(&self, key: &str);

    /// Check whether a document exists under `key`.
    fn contains(&self, key: &str) -> bool;
}

/// Typed collection access layered over any [`KeyValueStore`].
pub trait StoreExt {
    /// Load and deserialize the collection stored under `key`.
    ///
    /// Returns `None` when the key is absent or the stored document does
    /// not parse; a parse failure is logged, not propagated.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>>;

    /// Serialize and store `items` as the collection under `key`.
    fn set<T: Serialize>(&self, key: &str, items: &[T]) -> bool;
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        let raw = self.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(items) => Some(items),
            Err(err) => {
                warn!(key, %err, "Stored collection failed to parse, treating as absent");
                None
            }
        }
    }

    fn set<T: Serialize>(&self, key: &str, items: &[T]) -> bool {
        match serde_json::to_string(items) {
            Ok(json) => self.set_raw(key, &json),
            Err(err) => {
                error!(key, %err, "Failed to serialize collection");
                false
            }
        }
    }
}

/// Implemented by entities carrying a collection-scoped integer id.
pub trait HasId {
    /// The raw integer identifier of this record.
    fn raw_id(&self) -> i64;
}

/// Generate the next identifier for a collection.
///
/// Max existing id + 1, or 1 for an empty collection. Ids of deleted
/// records are deliberately reusable: deleting the highest-numbered record
/// frees its id for the next insert. Non-positive ids are ignored.
pub fn generate_id<T: HasId>(items: &[T]) -> i64 {
    items
        .iter()
        .map(HasId::raw_id)
        .filter(|id| *id > 0)
        .max()
        .unwrap_or(0)
        + 1
}
