use std::sync::Arc;

use tracing::debug;

use scrawl_auth::Accounts;
use scrawl_feed::{FeedObserver, FeedProjection, FeedStore, FeedView, SortOrder};
use scrawl_storage::KeyValueStore;
use scrawl_types::{Post, PostId, SessionUser};

use crate::error::{AppError, AppResult};
use crate::routes::{self, Navigation, Page};

/// The assembled Scrawl application.
///
/// One key-value store backs both the account registry and the post store.
/// Construction loads the persisted feed; every feed mutation requires an
/// active session.
pub struct ScrawlApp {
    accounts: Accounts,
    feed: FeedStore,
}

impl ScrawlApp {
    /// Assemble the app over the given storage backend and load the
    /// persisted feed.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        let accounts = Accounts::new(Arc::clone(&storage));
        let mut feed = FeedStore::new(storage);
        feed.initialize()?;

        debug!(posts = feed.len(), "app assembled");
        Ok(Self { accounts, feed })
    }

    // ---- Session operations ----

    /// Register an account, log it in, and hand back the redirect.
    pub fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AppResult<(SessionUser, Navigation)> {
        let user = self.accounts.sign_up(name, email, password)?;
        Ok((user, Navigation::GoToFeed))
    }

    /// Log an existing account in and hand back the redirect.
    pub fn log_in(&self, email: &str, password: &str) -> AppResult<(SessionUser, Navigation)> {
        let user = self.accounts.log_in(email, password)?;
        Ok((user, Navigation::GoToFeed))
    }

    /// End the session. Clears the session marker and the entire post
    /// collection together, then sends the caller to login.
    pub fn log_out(&mut self) -> AppResult<Navigation> {
        self.accounts.log_out()?;
        self.feed.teardown()?;
        Ok(Navigation::GoToLogin)
    }

    /// The currently logged-in user, if any.
    pub fn current_user(&self) -> AppResult<Option<SessionUser>> {
        Ok(self.accounts.current_session()?)
    }

    /// Where a visitor on `page` belongs right now.
    pub fn resolve_route(&self, page: Page) -> AppResult<Navigation> {
        let session = self.accounts.current_session()?;
        Ok(routes::resolve_route(page, session.as_ref()))
    }

    // ---- Feed operations (session required) ----

    /// Create a post. See [`FeedStore::create`] for validation rules.
    pub fn post(&mut self, content: &str, image_url: &str) -> AppResult<Post> {
        self.require_session()?;
        Ok(self.feed.create(content, image_url)?)
    }

    /// Toggle the like on a post. `false` means the id was unknown.
    pub fn like(&mut self, id: PostId) -> AppResult<bool> {
        self.require_session()?;
        Ok(self.feed.toggle_like(id)?)
    }

    /// Delete a post. `false` means the id was unknown. Confirmation is the
    /// front end's job.
    pub fn delete(&mut self, id: PostId) -> AppResult<bool> {
        self.require_session()?;
        Ok(self.feed.delete(id)?)
    }

    /// Reorder the feed.
    pub fn sort(&mut self, order: SortOrder) -> AppResult<()> {
        self.require_session()?;
        Ok(self.feed.sort(order)?)
    }

    // ---- Read side ----

    /// Build the render model for the current viewer. Works without a
    /// session; the projection falls back to the guest display name.
    pub fn feed_view(&self) -> AppResult<FeedView> {
        let session = self.accounts.current_session()?;
        Ok(FeedProjection::build(self.feed.posts(), session.as_ref()))
    }

    /// The post store, read-only.
    pub fn feed(&self) -> &FeedStore {
        &self.feed
    }

    /// Register a feed observer; see [`FeedObserver`].
    pub fn add_feed_observer(&mut self, observer: Box<dyn FeedObserver>) {
        self.feed.add_observer(observer);
    }

    fn require_session(&self) -> AppResult<SessionUser> {
        self.accounts
            .current_session()?
            .ok_or(AppError::NotLoggedIn)
    }
}

impl std::fmt::Debug for ScrawlApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrawlApp")
            .field("feed", &self.feed)
            .finish_non_exhaustive()
    }
}
