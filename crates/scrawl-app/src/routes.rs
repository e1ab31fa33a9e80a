use scrawl_types::SessionUser;

/// The three pages a Scrawl front end serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Signup,
    Login,
    Feed,
}

/// Where the front end should go next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// The current page is the right one.
    Stay,
    GoToFeed,
    GoToLogin,
}

/// Decide where a visitor on `page` belongs given the session state.
///
/// Pure function: authenticated visitors are sent from the auth pages to
/// the feed, unauthenticated visitors are sent from the feed to login, and
/// everyone else stays put. No timers, no side effects.
pub fn resolve_route(page: Page, session: Option<&SessionUser>) -> Navigation {
    match (page, session.is_some()) {
        (Page::Signup | Page::Login, true) => Navigation::GoToFeed,
        (Page::Feed, false) => Navigation::GoToLogin,
        _ => Navigation::Stay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser::new("Jane", "jane@example.com")
    }

    #[test]
    fn authenticated_visitors_skip_the_auth_pages() {
        let session = user();
        assert_eq!(
            resolve_route(Page::Signup, Some(&session)),
            Navigation::GoToFeed
        );
        assert_eq!(
            resolve_route(Page::Login, Some(&session)),
            Navigation::GoToFeed
        );
    }

    #[test]
    fn authenticated_visitors_stay_on_the_feed() {
        let session = user();
        assert_eq!(resolve_route(Page::Feed, Some(&session)), Navigation::Stay);
    }

    #[test]
    fn unauthenticated_visitors_are_sent_to_login_from_the_feed() {
        assert_eq!(resolve_route(Page::Feed, None), Navigation::GoToLogin);
    }

    #[test]
    fn unauthenticated_visitors_stay_on_the_auth_pages() {
        assert_eq!(resolve_route(Page::Signup, None), Navigation::Stay);
        assert_eq!(resolve_route(Page::Login, None), Navigation::Stay);
    }
}
