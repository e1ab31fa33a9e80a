//! High-level Scrawl API.
//!
//! [`ScrawlApp`] composes one key-value store, the account registry, and the
//! post store behind a single façade: sign-up, log-in, log-out, the
//! auth-gated feed mutations, and the [`FeedView`](scrawl_feed::FeedView)
//! projection for whoever is signed in. Front ends (the CLI included) talk
//! to this crate only.
//!
//! Navigation is data, not side effects: [`resolve_route`] maps a page and
//! the session state to a [`Navigation`] command, and login/signup return
//! the command alongside the session instead of firing a redirect.

pub mod app;
pub mod error;
pub mod routes;

pub use app::ScrawlApp;
pub use error::{AppError, AppResult};
pub use routes::{resolve_route, Navigation, Page};
