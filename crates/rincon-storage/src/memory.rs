//! Volatile in-memory key-value store.

use dashmap::DashMap;

use rincon_core::traits::KeyValueStore;

/// In-memory store holding each collection as its serialized JSON string,
/// the same shape browser local storage kept it in. Primarily used by
/// tests and ephemeral sessions; the file backend persists across runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set_raw(&self, key: &str, json: &str) -> bool {
        self.entries.insert(key.to_string(), json.to_string());
        true
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rincon_core::traits::StoreExt;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: i64,
        name: String,
    }

    #[test]
    fn test_set_get_roundtrip() {
        let store = MemoryStore::new();
        let items = vec![Item {
            id: 1,
            name: "uno".to_string(),
        }];
        assert!(store.set("items", &items));
        let loaded: Vec<Item> = store.get("items").expect("collection present");
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = MemoryStore::new();
        let loaded: Option<Vec<Item>> = store.get("nothing");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_corrupt_document_treated_as_absent() {
        let store = MemoryStore::new();
        assert!(store.set_raw("items", "not json at all"));
        let loaded: Option<Vec<Item>> = store.get("items");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_remove_and_contains() {
        let store = MemoryStore::new();
        store.set_raw("items", "[]");
        assert!(store.contains("items"));
        store.remove("items");
        assert!(!store.contains("items"));
    }
}
