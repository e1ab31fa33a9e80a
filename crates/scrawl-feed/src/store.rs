use std::sync::Arc;

use tracing::{debug, info};

use scrawl_storage::KeyValueStore;
use scrawl_types::{sanitize_image_url, CreatedAt, Post, PostId};

use crate::error::{FeedError, FeedResult};
use crate::observer::{FeedEvent, FeedObserver};
use crate::record::{decode_posts, encode_posts, POSTS_KEY};
use crate::sort::{sort_posts, SortOrder};

/// The authoritative post sequence with write-through persistence.
///
/// Owns the in-memory sequence for one session. Every mutation rewrites the
/// full sequence to the injected [`KeyValueStore`] before returning, then
/// notifies registered observers synchronously. The store itself is
/// single-owner and mutated through `&mut self`; only the storage backend
/// behind it is shared.
///
/// Ids are assigned from the creation time in milliseconds and bumped past
/// the last assigned id when two creations land in the same millisecond, so
/// ids stay unique and monotonically increasing within a store.
pub struct FeedStore {
    storage: Arc<dyn KeyValueStore>,
    posts: Vec<Post>,
    last_id: u64,
    observers: Vec<Box<dyn FeedObserver>>,
}

impl FeedStore {
    /// Create a store over the given backend. The sequence starts empty;
    /// call [`initialize`](Self::initialize) to load persisted posts.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            posts: Vec::new(),
            last_id: 0,
            observers: Vec::new(),
        }
    }

    /// Load the persisted sequence, replacing whatever is in memory.
    ///
    /// A missing key is an empty feed, not an error. A malformed payload is
    /// surfaced as [`FeedError::Decode`] and leaves the store untouched.
    pub fn initialize(&mut self) -> FeedResult<()> {
        let posts = match self.storage.get(POSTS_KEY)? {
            Some(raw) => decode_posts(&raw)?,
            None => Vec::new(),
        };

        self.last_id = posts.iter().map(|p| p.id.as_millis()).max().unwrap_or(0);
        self.posts = posts;

        debug!(count = self.posts.len(), "feed loaded");
        Ok(())
    }

    /// Register an observer. Observers are invoked in registration order
    /// after every persisted mutation.
    pub fn add_observer(&mut self, observer: Box<dyn FeedObserver>) {
        self.observers.push(observer);
    }

    /// Create a post at the head of the sequence.
    ///
    /// `content` is stored trimmed. A raw `image_url` that is non-empty but
    /// lacks the recognized scheme prefix is replaced with the placeholder.
    /// Fails with [`FeedError::EmptyPost`] when both inputs are empty after
    /// trimming; nothing is mutated or persisted in that case.
    pub fn create(&mut self, content: &str, image_url: &str) -> FeedResult<Post> {
        let content = content.trim();
        let image = sanitize_image_url(image_url);
        if content.is_empty() && image.is_none() {
            return Err(FeedError::EmptyPost);
        }

        let created_at = CreatedAt::now();
        let id = self.next_id(created_at);
        let post = Post::new(id, content, image, created_at);

        self.posts.insert(0, post.clone());
        self.persist()?;

        info!(id = %post.id, has_image = post.has_image(), "post created");
        self.notify(FeedEvent::Created(post.id));
        Ok(post)
    }

    /// Flip the like state of the post with the given id.
    ///
    /// Unknown ids are a silent no-op reporting `false`.
    pub fn toggle_like(&mut self, id: PostId) -> FeedResult<bool> {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };
        post.toggle_like();
        let liked = post.is_liked;

        self.persist()?;

        debug!(id = %id, liked, "like toggled");
        self.notify(FeedEvent::LikeToggled(id));
        Ok(true)
    }

    /// Remove the post with the given id.
    ///
    /// Unknown ids are a silent no-op reporting `false`. Any confirmation
    /// step belongs to the caller; the store deletes unconditionally.
    pub fn delete(&mut self, id: PostId) -> FeedResult<bool> {
        let Some(index) = self.posts.iter().position(|p| p.id == id) else {
            return Ok(false);
        };
        self.posts.remove(index);

        self.persist()?;

        info!(id = %id, remaining = self.posts.len(), "post deleted");
        self.notify(FeedEvent::Deleted(id));
        Ok(true)
    }

    /// Reorder the sequence in place with a stable sort and persist the new
    /// order. A reorder is a mutation like any other.
    pub fn sort(&mut self, order: SortOrder) -> FeedResult<()> {
        sort_posts(&mut self.posts, order);
        self.persist()?;

        debug!(order = %order, "feed sorted");
        self.notify(FeedEvent::Sorted(order));
        Ok(())
    }

    /// Discard the sequence and its persisted key. Used on logout.
    pub fn teardown(&mut self) -> FeedResult<()> {
        self.posts.clear();
        self.storage.remove(POSTS_KEY)?;

        debug!("feed cleared");
        self.notify(FeedEvent::Cleared);
        Ok(())
    }

    /// The sequence in its current order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Look a post up by id.
    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Number of posts in the sequence.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Returns `true` if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Next unique id: the creation time in milliseconds, bumped past the
    /// last assigned id on collision.
    fn next_id(&mut self, created_at: CreatedAt) -> PostId {
        let id = created_at.as_millis().max(self.last_id + 1);
        self.last_id = id;
        PostId::from_millis(id)
    }

    /// Write the full sequence through to storage.
    fn persist(&self) -> FeedResult<()> {
        let payload = encode_posts(&self.posts)?;
        self.storage.set(POSTS_KEY, &payload)?;
        debug!(count = self.posts.len(), "feed persisted");
        Ok(())
    }

    fn notify(&self, event: FeedEvent) {
        for observer in &self.observers {
            observer.feed_changed(&event, &self.posts);
        }
    }
}

impl std::fmt::Debug for FeedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedStore")
            .field("post_count", &self.posts.len())
            .field("observer_count", &self.observers.len())
            .finish()
    }
}
