use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StorageResult;
use crate::traits::KeyValueStore;

/// In-memory, HashMap-based key-value store.
///
/// Intended for tests and embedding. All entries are held in memory behind a
/// `RwLock` for safe concurrent access. Values are cloned on read.
pub struct InMemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKvStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries from the store.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut map = self.entries.write().expect("lock poisoned");
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        let mut map = self.entries.write().expect("lock poisoned");
        Ok(map.remove(key).is_some())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        let map = self.entries.read().expect("lock poisoned");
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    fn contains(&self, key: &str) -> StorageResult<bool> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.contains_key(key))
    }
}

impl std::fmt::Debug for InMemoryKvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryKvStore")
            .field("entry_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Core operations
    // -----------------------------------------------------------------------

    #[test]
    fn set_and_get() {
        let store = InMemoryKvStore::new();
        store.set("feed/posts", "[]").unwrap();

        let value = store.get("feed/posts").unwrap();
        assert_eq!(value.as_deref(), Some("[]"));
    }

    #[test]
    fn get_missing_key_returns_none() {
        let store = InMemoryKvStore::new();
        assert!(store.get("absent").unwrap().is_none());
    }

    #[test]
    fn set_overwrites_previous_value() {
        let store = InMemoryKvStore::new();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Remove
    // -----------------------------------------------------------------------

    #[test]
    fn remove_present_key() {
        let store = InMemoryKvStore::new();
        store.set("k", "v").unwrap();

        assert!(store.remove("k").unwrap()); // was present
        assert!(store.get("k").unwrap().is_none()); // now gone
        assert!(!store.remove("k").unwrap()); // second remove = false
    }

    #[test]
    fn remove_missing_key() {
        let store = InMemoryKvStore::new();
        assert!(!store.remove("never-set").unwrap());
    }

    // -----------------------------------------------------------------------
    // Keys / contains
    // -----------------------------------------------------------------------

    #[test]
    fn keys_are_sorted() {
        let store = InMemoryKvStore::new();
        store.set("users/zed@example.com", "{}").unwrap();
        store.set("feed/posts", "[]").unwrap();
        store.set("session/current", "{}").unwrap();

        assert_eq!(
            store.keys().unwrap(),
            vec!["feed/posts", "session/current", "users/zed@example.com"]
        );
    }

    #[test]
    fn contains_tracks_presence() {
        let store = InMemoryKvStore::new();
        assert!(!store.contains("k").unwrap());
        store.set("k", "v").unwrap();
        assert!(store.contains("k").unwrap());
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_and_is_empty() {
        let store = InMemoryKvStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);

        store.set("a", "1").unwrap();
        assert!(!store.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_removes_all() {
        let store = InMemoryKvStore::new();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.len(), 2);

        store.clear();
        assert!(store.is_empty());
    }

    // -----------------------------------------------------------------------
    // Concurrent read safety
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryKvStore::new());
        store.set("shared", "data").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let value = store.get("shared").unwrap();
                    assert_eq!(value.as_deref(), Some("data"));
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    // -----------------------------------------------------------------------
    // Debug
    // -----------------------------------------------------------------------

    #[test]
    fn debug_format() {
        let store = InMemoryKvStore::new();
        store.set("x", "y").unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryKvStore"));
        assert!(debug.contains("entry_count"));
    }
}
