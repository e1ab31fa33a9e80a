use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::traits::KeyValueStore;

/// Single-file JSON key-value store.
///
/// The whole key space lives in one JSON object on disk, loaded eagerly at
/// open and held in memory. Every mutation rewrites the full image through a
/// sibling temp file followed by a rename, so readers of the file never see
/// a half-written image and a failed write is repaired by the next
/// successful one.
///
/// Sized for Scrawl's key space (a handful of keys, feed payload included),
/// not for large data sets.
pub struct JsonFileStore {
    /// Path to the JSON image file.
    path: PathBuf,
    /// In-memory image, authoritative between flushes.
    entries: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open (or create) a store backed by the JSON file at `path`.
    ///
    /// A missing file starts the store empty; a present file is parsed in
    /// full and a malformed one is rejected with
    /// [`StorageError::CorruptFile`].
    pub fn open(path: &Path) -> StorageResult<Self> {
        // Ensure parent directory exists.
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let entries: HashMap<String, String> = if path.exists() {
            let data = fs::read_to_string(path)?;
            if data.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&data).map_err(|e| StorageError::CorruptFile {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?
            }
        } else {
            HashMap::new()
        };

        debug!(path = %path.display(), entries = entries.len(), "store file loaded");

        Ok(Self {
            path: path.to_path_buf(),
            entries: RwLock::new(entries),
        })
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Write the full image to disk via temp file + rename.
    ///
    /// Callers hold the write lock, so image writes never interleave.
    fn flush(&self, map: &HashMap<String, String>) -> StorageResult<()> {
        let data = serde_json::to_string_pretty(map)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), entries = map.len(), "store file written");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut map = self.entries.write().expect("lock poisoned");
        map.insert(key.to_string(), value.to_string());
        self.flush(&map)
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        let mut map = self.entries.write().expect("lock poisoned");
        let existed = map.remove(key).is_some();
        if existed {
            self.flush(&map)?;
        }
        Ok(existed)
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

impl std::fmt::Debug for JsonFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("path", &self.path)
            .field("entry_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(&dir.path().join("store.json")).unwrap();
        assert!(store.is_empty());
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("store.json");
        let store = JsonFileStore::open(&nested).unwrap();
        store.set("k", "v").unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set("feed/posts", "[]").unwrap();
            store.set("session/current", "{\"name\":\"Sam\"}").unwrap();
        }

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("feed/posts").unwrap().as_deref(), Some("[]"));
        assert_eq!(
            store.get("session/current").unwrap().as_deref(),
            Some("{\"name\":\"Sam\"}")
        );
    }

    #[test]
    fn remove_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set("keep", "1").unwrap();
            store.set("drop", "2").unwrap();
            assert!(store.remove("drop").unwrap());
        }

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.get("drop").unwrap().is_none());
        assert_eq!(store.get("keep").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn remove_missing_key_does_not_touch_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = JsonFileStore::open(&path).unwrap();

        assert!(!store.remove("absent").unwrap());
        // No mutation happened, so no image was ever written.
        assert!(!path.exists());
    }

    #[test]
    fn overwrite_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set("k", "first").unwrap();
            store.set("k", "second").unwrap();
        }

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn corrupt_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, StorageError::CorruptFile { .. }));
    }

    #[test]
    fn empty_file_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = JsonFileStore::open(&path).unwrap();
        store.set("k", "v").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn keys_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(&dir.path().join("store.json")).unwrap();
        store.set("users/b@example.com", "{}").unwrap();
        store.set("feed/posts", "[]").unwrap();

        assert_eq!(
            store.keys().unwrap(),
            vec!["feed/posts", "users/b@example.com"]
        );
    }

    #[test]
    fn image_on_disk_is_a_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = JsonFileStore::open(&path).unwrap();
        store.set("k", "v").unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: HashMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.get("k").map(String::as_str), Some("v"));
    }
}
