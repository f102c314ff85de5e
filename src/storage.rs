//! Session scoped key value storage shared between the session
//! context and any other client code using the same keys

use parking_lot::Mutex;
use std::{collections::HashMap, sync::Arc};

/// Storage key the user info mapping is mirrored under
pub const USER_INFO_KEY: &str = "userInfo";

/// Key value storage living for the duration of a single client
/// session. Cheap to clone, every clone shares the same entries.
/// Individual reads and writes are atomic, last writer wins.
#[derive(Default, Clone)]
pub struct SessionStorage {
    /// Entries shared across all clones of this storage
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStorage {
    /// Creates a new empty session storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the value stored under the provided key, absent keys
    /// read as [`None`]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    /// Stores the value under the provided key, replacing any
    /// previously stored value
    pub fn insert(&self, key: &str, value: String) {
        self.entries.lock().insert(key.to_string(), value);
    }

    /// Removes the value stored under the provided key, does nothing
    /// when the key is absent
    pub fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }
}

#[cfg(test)]
mod test {
    use super::SessionStorage;

    /// Ensures stored values read back and absent keys read as None
    /// rather than an empty value
    #[test]
    fn test_insert_get_remove() {
        let storage = SessionStorage::new();
        assert_eq!(storage.get("token"), None);

        storage.insert("token", "abc".to_string());
        assert_eq!(storage.get("token"), Some("abc".to_string()));

        storage.remove("token");
        assert_eq!(storage.get("token"), None);
    }

    /// Ensures clones operate on the same underlying entries
    #[test]
    fn test_clones_share_entries() {
        let storage = SessionStorage::new();
        let other = storage.clone();

        other.insert("theme", "dark".to_string());
        assert_eq!(storage.get("theme"), Some("dark".to_string()));

        storage.remove("theme");
        assert_eq!(other.get("theme"), None);
    }

    /// Removing an absent key must be a no-op
    #[test]
    fn test_remove_absent_key() {
        let storage = SessionStorage::new();
        storage.remove("missing");
        assert_eq!(storage.get("missing"), None);
    }
}
