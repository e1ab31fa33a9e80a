use scrawl_types::{Post, PostId};

use crate::sort::SortOrder;

/// A mutation the post store has applied and persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedEvent {
    /// A new post was inserted at the head of the sequence.
    Created(PostId),
    /// A post's like state flipped.
    LikeToggled(PostId),
    /// A post was removed.
    Deleted(PostId),
    /// The sequence was reordered.
    Sorted(SortOrder),
    /// The sequence and its persisted key were discarded.
    Cleared,
}

/// Synchronous subscriber to post store mutations.
///
/// Observers run on the mutating thread, in registration order, after the
/// mutation has been persisted. They receive the event and the sequence as
/// it stands; a renderer can redraw directly from the slice.
pub trait FeedObserver: Send + Sync {
    fn feed_changed(&self, event: &FeedEvent, posts: &[Post]);
}
