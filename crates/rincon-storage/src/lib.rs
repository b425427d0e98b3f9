//! # rincon-storage
//!
//! Implementations of the [`KeyValueStore`] persistence substrate: a
//! volatile in-memory store and a JSON-file-per-collection store. The
//! core components never touch a lower-level persistence primitive; they
//! see only named JSON collections.

pub mod collections;
pub mod file;
pub mod memory;

use std::sync::Arc;

use tracing::info;

use rincon_core::config::storage::{StorageBackend, StorageConfig};
use rincon_core::result::AppResult;
use rincon_core::traits::KeyValueStore;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Open the store selected by configuration.
pub fn open_store(config: &StorageConfig) -> AppResult<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.backend {
        StorageBackend::Memory => {
            info!("Initializing in-memory store");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::File => {
            info!(data_dir = %config.data_dir, "Initializing JSON file store");
            Arc::new(JsonFileStore::new(&config.data_dir)?)
        }
    };
    Ok(store)
}
