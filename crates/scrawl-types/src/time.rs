use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sortable creation instant for a post.
///
/// Wraps a UTC instant with millisecond precision. `CreatedAt` is the value
/// the feed sorts on; the human-readable timestamp shown next to a post is a
/// separate text snapshot taken at creation (see [`CreatedAt::display_timestamp`]).
///
/// Serializes as an RFC 3339 string and is reconstructed from that string on
/// load, so persisted feeds keep their creation-time ordering across restarts.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CreatedAt(DateTime<Utc>);

impl CreatedAt {
    /// The current wall-clock instant.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Construct from milliseconds since the UNIX epoch.
    ///
    /// Out-of-range values clamp to the epoch.
    pub fn from_millis(ms: u64) -> Self {
        let dt = DateTime::from_timestamp_millis(ms as i64).unwrap_or_default();
        Self(dt)
    }

    /// Milliseconds since the UNIX epoch.
    pub fn as_millis(&self) -> u64 {
        self.0.timestamp_millis().max(0) as u64
    }

    /// The underlying UTC instant.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Display-formatted snapshot of this instant, e.g. `"Jan 5, 3:04 PM"`.
    ///
    /// This is the text stored on the post at creation; it is human-readable
    /// and deliberately not sortable.
    pub fn display_timestamp(&self) -> String {
        self.0.format("%b %-d, %-I:%M %p").to_string()
    }

    /// Returns `true` if this instant is strictly after `other`.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }
}

impl From<DateTime<Utc>> for CreatedAt {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl fmt::Debug for CreatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CreatedAt({})", self.0.to_rfc3339())
    }
}

impl fmt::Display for CreatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
