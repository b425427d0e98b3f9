//! JSON-file-backed key-value store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use rincon_core::error::AppError;
use rincon_core::result::AppResult;
use rincon_core::traits::KeyValueStore;

/// Store keeping one `<collection>.json` file per key under a root
/// directory, so data survives restarts the way browser storage did.
///
/// Write failures (permissions, disk full) are reported as `false` per the
/// substrate contract; they never panic or raise.
#[derive(Debug)]
pub struct JsonFileStore {
    /// Root directory for all collection files.
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory, creating it if needed.
    pub fn new(root_path: impl AsRef<Path>) -> AppResult<Self> {
        let root = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| {
            AppError::with_source(
                rincon_core::error::ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a collection name to its backing file path.
    fn resolve(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.resolve(key)) {
            Ok(json) => Some(json),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                error!(key, %err, "Failed to read collection file");
                None
            }
        }
    }

    fn set_raw(&self, key: &str, json: &str) -> bool {
        let path = self.resolve(key);
        match fs::write(&path, json) {
            Ok(()) => {
                debug!(key, bytes = json.len(), "Wrote collection file");
                true
            }
            Err(err) => {
                error!(key, %err, "Failed to write collection file");
                false
            }
        }
    }

    fn remove(&self, key: &str) {
        let path = self.resolve(key);
        if let Err(err) = fs::remove_file(&path) {
            if err.kind() != ErrorKind::NotFound {
                error!(key, %err, "Failed to remove collection file");
            }
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.resolve(key).is_file()
    }
}
