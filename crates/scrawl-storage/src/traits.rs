use crate::error::StorageResult;

/// Namespaced string key-value store.
///
/// All implementations must satisfy these invariants:
/// - Values are opaque strings. The store never interprets them; encoding
///   belongs to the callers.
/// - `set` overwrites unconditionally and is durable on return.
/// - `get` of a missing key is `Ok(None)`, never an error.
/// - `remove` of a missing key is a no-op that reports `false`.
/// - All I/O errors are propagated, never silently ignored.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    /// Returns `Err` on I/O failure or data corruption.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete the value under `key`. Returns `true` if the key existed.
    fn remove(&self, key: &str) -> StorageResult<bool>;

    /// Return all keys currently present, sorted.
    fn keys(&self) -> StorageResult<Vec<String>>;

    /// Check whether a key exists.
    ///
    /// Default implementation reads the value and discards it. Backends may
    /// override to avoid copying the value.
    fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
