//! Post store and feed projection for Scrawl.
//!
//! This crate owns the authoritative in-memory post sequence and keeps
//! persistent storage consistent with it after every mutation. Nothing here
//! talks to a user interface: front ends consume the pure [`FeedView`]
//! projection and drive the store through explicit operations.
//!
//! # Components
//!
//! - [`FeedStore`] -- the mutable post sequence with write-through persistence
//! - [`SortOrder`] -- the three feed orderings, applied with a stable sort
//! - [`FeedObserver`] / [`FeedEvent`] -- synchronous change notifications
//! - [`FeedProjection`] -- builds the [`FeedView`] render model
//!
//! # Design Rules
//!
//! 1. Every mutation persists the full sequence before observers run.
//! 2. Unknown post ids are silent no-ops, never errors.
//! 3. Sorting is a destructive, stable, in-place reorder; equal keys keep
//!    their prior relative order.
//! 4. A malformed image link is replaced at creation time, never stored.
//! 5. The store runs on the caller's thread; nothing suspends or spawns.

pub mod error;
pub mod observer;
pub mod projection;
pub mod record;
pub mod sort;
pub mod store;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{FeedError, FeedResult};
pub use observer::{FeedEvent, FeedObserver};
pub use projection::{FeedProjection, FeedView, PostEntry, EMPTY_FEED_NOTICE, GUEST_NAME};
pub use record::{decode_posts, encode_posts, POSTS_KEY};
pub use sort::{sort_posts, SortOrder};
pub use store::FeedStore;
