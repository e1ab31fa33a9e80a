//! Account records and session handling for Scrawl.
//!
//! Accounts are local records in the injected key-value store, one per
//! email, holding the display name and the password. Passwords are stored
//! and compared in plaintext: this is a local demo engine, cryptographic
//! credential handling is deliberately out of scope.
//!
//! The active session is a separate marker record holding only the public
//! slice of the account (name + email). Signing up logs the user in;
//! logging out removes the marker.

pub mod accounts;
pub mod error;

pub use accounts::{Account, Accounts, SESSION_KEY};
pub use error::{AuthError, AuthResult};
