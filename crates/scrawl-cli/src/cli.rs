use clap::{Args, Parser, Subcommand};

use scrawl_feed::SortOrder;
use scrawl_types::PostId;

#[derive(Parser)]
#[command(
    name = "scrawl",
    about = "Scrawl, a local-first social feed",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// State directory holding the feed store
    #[arg(long, global = true, default_value = ".scrawl")]
    pub dir: String,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create an account and log in
    Signup(SignupArgs),
    /// Log in with an existing account
    Login(LoginArgs),
    /// Log out and clear the feed
    Logout(LogoutArgs),
    /// Show who is logged in
    Whoami(WhoamiArgs),
    /// Create a post
    Post(PostArgs),
    /// Toggle the like on a post
    Like(LikeArgs),
    /// Delete a post
    Delete(DeleteArgs),
    /// Reorder the feed
    Sort(SortArgs),
    /// Show the feed
    Feed(FeedArgs),
}

#[derive(Args)]
pub struct SignupArgs {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Args)]
pub struct LoginArgs {
    pub email: String,
    pub password: String,
}

#[derive(Args)]
pub struct LogoutArgs {}

#[derive(Args)]
pub struct WhoamiArgs {}

#[derive(Args)]
pub struct PostArgs {
    /// Post text; may be omitted when --image is given
    pub content: Option<String>,
    /// Image URL to attach
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Args)]
pub struct LikeArgs {
    pub id: PostId,
}

#[derive(Args)]
pub struct DeleteArgs {
    pub id: PostId,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct SortArgs {
    pub order: SortKey,
}

#[derive(Args)]
pub struct FeedArgs {}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SortKey {
    /// Most recent first
    Latest,
    /// Most liked first
    Liked,
    /// Oldest first
    Oldest,
}

impl SortKey {
    pub fn order(self) -> SortOrder {
        match self {
            Self::Latest => SortOrder::NewestFirst,
            Self::Liked => SortOrder::MostLiked,
            Self::Oldest => SortOrder::OldestFirst,
        }
    }
}
