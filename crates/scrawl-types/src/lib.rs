//! Foundation types for Scrawl.
//!
//! This crate provides the core entity, identity, and temporal types used
//! throughout the Scrawl feed engine. Every other Scrawl crate depends on
//! `scrawl-types`.
//!
//! # Key Types
//!
//! - [`Post`] — A single user-authored feed entry
//! - [`PostId`] — Millisecond-derived unique post identifier
//! - [`CreatedAt`] — Sortable creation instant, independent of the display timestamp
//! - [`SessionUser`] — Persisted marker for the currently logged-in user

pub mod error;
pub mod post;
pub mod session;
pub mod time;

pub use error::TypeError;
pub use post::{sanitize_image_url, Post, PostId, PLACEHOLDER_IMAGE_URL};
pub use session::SessionUser;
pub use time::CreatedAt;
