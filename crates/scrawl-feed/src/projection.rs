use scrawl_types::{Post, PostId, SessionUser};

/// Display name used when no session is present.
pub const GUEST_NAME: &str = "Guest User";

/// Notice front ends show in place of an empty feed.
pub const EMPTY_FEED_NOTICE: &str = "No posts yet. Be the first to share something!";

/// One post as a front end renders it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostEntry {
    /// Handle for like/delete controls.
    pub id: PostId,
    pub author_name: String,
    /// Avatar badge letter: first character of the author name, uppercased.
    pub author_initial: char,
    /// Display timestamp snapshotted at creation, e.g. `"Jan 5, 3:04 PM"`.
    pub timestamp: String,
    /// Content split on line breaks; empty for image-only posts.
    pub content_lines: Vec<String>,
    pub image_url: Option<String>,
    /// Like count with singular/plural label: `"1 Like"`, `"4 Likes"`.
    pub like_label: String,
    pub is_liked: bool,
}

/// Render model for the whole feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedView {
    pub viewer_name: String,
    pub entries: Vec<PostEntry>,
}

impl FeedView {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The empty-state notice, present only when there are no entries.
    pub fn notice(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_FEED_NOTICE)
    }
}

/// Deterministic projection builder.
///
/// Pure function of the post sequence and the viewer; no storage access,
/// no mutation. Every post is attributed to the viewer -- posts carry no
/// author of their own, the feed is single-user.
pub struct FeedProjection;

impl FeedProjection {
    pub fn build(posts: &[Post], viewer: Option<&SessionUser>) -> FeedView {
        let (viewer_name, initial) = match viewer {
            Some(user) => (user.name.clone(), user.initial()),
            None => (GUEST_NAME.to_string(), GUEST_NAME.chars().next().unwrap_or('?')),
        };

        let entries = posts
            .iter()
            .map(|post| PostEntry {
                id: post.id,
                author_name: viewer_name.clone(),
                author_initial: initial,
                timestamp: post.timestamp.clone(),
                content_lines: content_lines(&post.content),
                image_url: post.image_url.clone(),
                like_label: like_label(post.likes),
                is_liked: post.is_liked,
            })
            .collect();

        FeedView {
            viewer_name,
            entries,
        }
    }
}

fn like_label(likes: u32) -> String {
    if likes == 1 {
        "1 Like".to_string()
    } else {
        format!("{likes} Likes")
    }
}

fn content_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        Vec::new()
    } else {
        content.lines().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use scrawl_types::CreatedAt;

    use super::*;

    fn post(id: u64, content: &str, likes: u32) -> Post {
        let mut p = Post::new(
            PostId::from_millis(id),
            content,
            None,
            CreatedAt::from_millis(id),
        );
        p.likes = likes;
        p
    }

    fn viewer() -> SessionUser {
        SessionUser::new("jane doe", "jane@example.com")
    }

    #[test]
    fn empty_feed_reports_empty_with_notice() {
        let view = FeedProjection::build(&[], Some(&viewer()));
        assert!(view.is_empty());
        assert_eq!(view.notice(), Some(EMPTY_FEED_NOTICE));
    }

    #[test]
    fn non_empty_feed_has_no_notice() {
        let view = FeedProjection::build(&[post(1, "hi", 0)], Some(&viewer()));
        assert!(!view.is_empty());
        assert_eq!(view.notice(), None);
    }

    #[test]
    fn entries_follow_sequence_order() {
        let posts = vec![post(30, "newest", 0), post(20, "middle", 0), post(10, "oldest", 0)];
        let view = FeedProjection::build(&posts, Some(&viewer()));

        let ids: Vec<u64> = view.entries.iter().map(|e| e.id.as_millis()).collect();
        assert_eq!(ids, vec![30, 20, 10]);
    }

    #[test]
    fn posts_are_attributed_to_the_viewer() {
        let view = FeedProjection::build(&[post(1, "mine", 0)], Some(&viewer()));
        let entry = &view.entries[0];
        assert_eq!(entry.author_name, "jane doe");
        assert_eq!(entry.author_initial, 'j');
    }

    #[test]
    fn missing_viewer_falls_back_to_guest() {
        let view = FeedProjection::build(&[post(1, "anonymous", 0)], None);
        assert_eq!(view.viewer_name, GUEST_NAME);

        let entry = &view.entries[0];
        assert_eq!(entry.author_name, "Guest User");
        assert_eq!(entry.author_initial, 'G');
    }

    #[test]
    fn like_label_is_singular_only_for_one() {
        let cases = [(0, "0 Likes"), (1, "1 Like"), (2, "2 Likes"), (41, "41 Likes")];
        for (likes, expected) in cases {
            let view = FeedProjection::build(&[post(1, "x", likes)], None);
            assert_eq!(view.entries[0].like_label, expected);
        }
    }

    #[test]
    fn content_line_breaks_are_preserved() {
        let view = FeedProjection::build(&[post(1, "line one\nline two\n\nline four", 0)], None);
        assert_eq!(
            view.entries[0].content_lines,
            vec!["line one", "line two", "", "line four"]
        );
    }

    #[test]
    fn image_only_post_has_no_content_lines() {
        let mut p = post(1, "", 0);
        p.image_url = Some("https://example.com/a.png".to_string());

        let view = FeedProjection::build(&[p], None);
        let entry = &view.entries[0];
        assert!(entry.content_lines.is_empty());
        assert_eq!(entry.image_url.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn timestamp_and_like_state_pass_through() {
        let mut p = post(1, "x", 1);
        p.is_liked = true;
        let expected_timestamp = p.timestamp.clone();

        let view = FeedProjection::build(&[p], None);
        let entry = &view.entries[0];
        assert_eq!(entry.timestamp, expected_timestamp);
        assert!(entry.is_liked);
    }
}
