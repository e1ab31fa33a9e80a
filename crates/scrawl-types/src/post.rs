use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::time::CreatedAt;

/// Fixed substitute stored in place of a malformed image link.
///
/// A link that does not begin with the recognized scheme prefix is never
/// stored as-is; it is replaced with this URL at creation time.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/600x300.png?text=Invalid+Image";

/// Scheme prefix a stored image link must begin with (`http://` or `https://`).
const URL_SCHEME_PREFIX: &str = "http";

/// Unique identifier for a post.
///
/// Assigned from the creation timestamp in milliseconds, which makes ids
/// monotonically increasing across a session. The feed store bumps the value
/// when two posts land in the same millisecond, so ids remain unique within
/// a collection.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(u64);

impl PostId {
    /// Construct from milliseconds since the UNIX epoch.
    pub fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// The raw millisecond value.
    pub fn as_millis(&self) -> u64 {
        self.0
    }
}

impl FromStr for PostId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| TypeError::InvalidPostId(format!("{s:?}: {e}")))
    }
}

impl fmt::Debug for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostId({})", self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single user-authored feed entry.
///
/// `content` may be empty only when an image is present; the feed store
/// rejects posts that have neither. `timestamp` is the display snapshot taken
/// at creation and `created_at` is the sortable instant — the two are
/// deliberately independent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique, monotonically increasing identifier.
    pub id: PostId,

    /// Post body, stored trimmed. Empty only if an image is present.
    pub content: String,

    /// Absolute image URL, if any. Never stored malformed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Human-readable creation snapshot, e.g. `"Jan 5, 3:04 PM"`.
    pub timestamp: String,

    /// Sortable creation instant.
    pub created_at: CreatedAt,

    /// Like counter. Never goes below zero.
    pub likes: u32,

    /// Whether the current user has liked this post.
    pub is_liked: bool,
}

impl Post {
    /// Build a fresh post: zero likes, unliked, display timestamp snapshotted
    /// from `created_at`.
    pub fn new(
        id: PostId,
        content: impl Into<String>,
        image_url: Option<String>,
        created_at: CreatedAt,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            image_url,
            timestamp: created_at.display_timestamp(),
            created_at,
            likes: 0,
            is_liked: false,
        }
    }

    /// Flip the current user's like state, adjusting the counter in lockstep.
    ///
    /// Liking adds one; unliking removes one, saturating at zero so a record
    /// that arrives inconsistent from storage can never drive the counter
    /// negative.
    pub fn toggle_like(&mut self) {
        self.is_liked = !self.is_liked;
        if self.is_liked {
            self.likes += 1;
        } else {
            self.likes = self.likes.saturating_sub(1);
        }
    }

    /// Returns `true` if the post carries an image.
    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}

/// Normalize a raw image-link input for storage.
///
/// Trims whitespace; an empty result means "no image". A non-empty value
/// that does not begin with the recognized scheme prefix is replaced with
/// [`PLACEHOLDER_IMAGE_URL`] — a malformed link is never stored.
pub fn sanitize_image_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with(URL_SCHEME_PREFIX) {
        Some(trimmed.to_string())
    } else {
        Some(PLACEHOLDER_IMAGE_URL.to_string())
    }
}
