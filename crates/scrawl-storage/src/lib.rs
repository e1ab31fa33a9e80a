//! Key-value storage backends for Scrawl.
//!
//! Everything Scrawl persists -- the post collection, the active session,
//! account records -- goes through the [`KeyValueStore`] trait as opaque
//! string values under namespaced string keys. The store never interprets
//! values; encoding and decoding belong to the layers above.
//!
//! # Storage Backends
//!
//! - [`InMemoryKvStore`] -- `HashMap`-based store for tests and embedding
//! - [`JsonFileStore`] -- single-file JSON store with atomic rewrites
//!
//! # Design Rules
//!
//! 1. Values are opaque strings; the store never parses them.
//! 2. `set` overwrites unconditionally; `get` of a missing key is `Ok(None)`,
//!    never an error.
//! 3. All I/O errors are propagated, never silently ignored.
//! 4. A mutation is visible to readers only after it is durable in the
//!    backend (write-through, no deferred flush).

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StorageError, StorageResult};
pub use file::JsonFileStore;
pub use memory::InMemoryKvStore;
pub use traits::KeyValueStore;
