use scrawl_types::Post;

use crate::error::{FeedError, FeedResult};

/// Storage key the post collection persists under.
pub const POSTS_KEY: &str = "feed/posts";

/// Encode the full post sequence as a JSON array, in order.
pub fn encode_posts(posts: &[Post]) -> FeedResult<String> {
    serde_json::to_string(posts).map_err(|e| FeedError::Encode(e.to_string()))
}

/// Decode a persisted post sequence.
///
/// The payload must be a JSON array of post records; anything else is a
/// decode error, surfaced rather than treated as an empty feed.
pub fn decode_posts(raw: &str) -> FeedResult<Vec<Post>> {
    serde_json::from_str(raw).map_err(|e| FeedError::Decode(e.to_string()))
}
