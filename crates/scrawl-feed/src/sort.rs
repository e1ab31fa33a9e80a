use std::fmt;
use std::str::FromStr;

use scrawl_types::Post;

use crate::error::FeedError;

/// Feed orderings a user can apply.
///
/// Sorting is destructive: it reorders the stored sequence itself, not a
/// view over it. Each ordering defines a single key; posts that compare
/// equal keep their prior relative order (the sort is stable).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recent creation time first.
    #[default]
    NewestFirst,
    /// Highest like count first.
    MostLiked,
    /// Earliest creation time first.
    OldestFirst,
}

impl SortOrder {
    /// Stable command-line / storage-facing name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewestFirst => "latest",
            Self::MostLiked => "liked",
            Self::OldestFirst => "oldest",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "latest" => Ok(Self::NewestFirst),
            "liked" => Ok(Self::MostLiked),
            "oldest" => Ok(Self::OldestFirst),
            other => Err(FeedError::UnknownSortOrder(other.to_string())),
        }
    }
}

/// Reorder `posts` in place by the given order.
///
/// Uses `slice::sort_by`, which is stable: ties keep their current
/// relative order, so `MostLiked` needs no secondary key.
pub fn sort_posts(posts: &mut [Post], order: SortOrder) {
    match order {
        SortOrder::NewestFirst => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::MostLiked => posts.sort_by(|a, b| b.likes.cmp(&a.likes)),
        SortOrder::OldestFirst => posts.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
}
