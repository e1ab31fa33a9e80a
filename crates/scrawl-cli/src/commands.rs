use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;

use scrawl_app::{AppError, Navigation, Page, ScrawlApp};
use scrawl_auth::AuthError;
use scrawl_feed::{FeedError, FeedView};
use scrawl_storage::JsonFileStore;

use crate::cli::*;

/// File inside the state directory holding the whole store.
const STORE_FILE: &str = "store.json";

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let store = JsonFileStore::open(&Path::new(&cli.dir).join(STORE_FILE))?;
    let mut app = ScrawlApp::new(Arc::new(store))?;

    match cli.command {
        Command::Signup(args) => cmd_signup(&app, args),
        Command::Login(args) => cmd_login(&app, args),
        Command::Logout(_) => cmd_logout(&mut app),
        Command::Whoami(_) => cmd_whoami(&app),
        Command::Post(args) => cmd_post(&mut app, args),
        Command::Like(args) => cmd_like(&mut app, args),
        Command::Delete(args) => cmd_delete(&mut app, args),
        Command::Sort(args) => cmd_sort(&mut app, args),
        Command::Feed(_) => cmd_feed(&app),
    }
}

fn cmd_signup(app: &ScrawlApp, args: SignupArgs) -> anyhow::Result<()> {
    match app.sign_up(&args.name, &args.email, &args.password) {
        Ok((user, nav)) => {
            println!(
                "{} Registered and logged in as {}",
                "✓".green().bold(),
                user.name.bold()
            );
            print_navigation(nav);
            Ok(())
        }
        Err(err) => user_facing(err),
    }
}

fn cmd_login(app: &ScrawlApp, args: LoginArgs) -> anyhow::Result<()> {
    match app.log_in(&args.email, &args.password) {
        Ok((user, nav)) => {
            println!("{} Logged in as {}", "✓".green().bold(), user.name.bold());
            print_navigation(nav);
            Ok(())
        }
        Err(err) => user_facing(err),
    }
}

fn cmd_logout(app: &mut ScrawlApp) -> anyhow::Result<()> {
    app.log_out()?;
    println!("{} Logged out; feed cleared.", "✓".green().bold());
    Ok(())
}

fn cmd_whoami(app: &ScrawlApp) -> anyhow::Result<()> {
    match app.current_user()? {
        Some(user) => println!("{} <{}>", user.name.bold(), user.email),
        None => println!("Not logged in."),
    }
    Ok(())
}

fn cmd_post(app: &mut ScrawlApp, args: PostArgs) -> anyhow::Result<()> {
    let content = args.content.as_deref().unwrap_or("");
    let image = args.image.as_deref().unwrap_or("");

    match app.post(content, image) {
        Ok(post) => {
            println!(
                "{} Posted {}",
                "✓".green().bold(),
                format!("#{}", post.id).yellow()
            );
            if let Some(url) = &post.image_url {
                println!("  {} {}", "image:".blue(), url);
            }
            Ok(())
        }
        Err(err) => user_facing(err),
    }
}

fn cmd_like(app: &mut ScrawlApp, args: LikeArgs) -> anyhow::Result<()> {
    match app.like(args.id) {
        Ok(true) => {
            let liked = app.feed().get(args.id).map(|p| p.is_liked).unwrap_or(false);
            let verb = if liked { "Liked" } else { "Unliked" };
            println!(
                "{} {} {}",
                "✓".green().bold(),
                verb,
                format!("#{}", args.id).yellow()
            );
            Ok(())
        }
        Ok(false) => {
            println!("No post {}.", format!("#{}", args.id).yellow());
            Ok(())
        }
        Err(err) => user_facing(err),
    }
}

fn cmd_delete(app: &mut ScrawlApp, args: DeleteArgs) -> anyhow::Result<()> {
    if app.resolve_route(Page::Feed)? == Navigation::GoToLogin {
        return user_facing(AppError::NotLoggedIn);
    }

    if app.feed().get(args.id).is_none() {
        println!("No post {}.", format!("#{}", args.id).yellow());
        return Ok(());
    }

    if !args.yes {
        let prompt = format!("Delete post {}? [y/N]", format!("#{}", args.id).yellow());
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    app.delete(args.id)?;
    println!(
        "{} Deleted {}",
        "✓".green().bold(),
        format!("#{}", args.id).yellow()
    );
    Ok(())
}

fn cmd_sort(app: &mut ScrawlApp, args: SortArgs) -> anyhow::Result<()> {
    let order = args.order.order();
    match app.sort(order) {
        Ok(()) => {
            println!(
                "{} Feed sorted by {}.",
                "✓".green().bold(),
                order.to_string().cyan()
            );
            Ok(())
        }
        Err(err) => user_facing(err),
    }
}

fn cmd_feed(app: &ScrawlApp) -> anyhow::Result<()> {
    if app.resolve_route(Page::Feed)? == Navigation::GoToLogin {
        return user_facing(AppError::NotLoggedIn);
    }

    let view = app.feed_view()?;
    render_feed(&view);
    Ok(())
}

fn render_feed(view: &FeedView) {
    println!("{}", format!("Welcome, {}", view.viewer_name).bold());

    if let Some(notice) = view.notice() {
        println!();
        println!("{}", notice.dimmed());
        return;
    }

    for entry in &view.entries {
        println!();
        println!(
            "{} {}  {}  {}",
            format!("({})", entry.author_initial).cyan().bold(),
            entry.author_name.bold(),
            entry.timestamp.dimmed(),
            format!("#{}", entry.id).yellow(),
        );
        for line in &entry.content_lines {
            println!("  {line}");
        }
        if let Some(url) = &entry.image_url {
            println!("  {} {}", "image:".blue(), url.underline());
        }
        let likes = if entry.is_liked {
            format!("♥ {}", entry.like_label).red().to_string()
        } else {
            format!("♡ {}", entry.like_label)
        };
        println!("  {likes}");
    }
}

fn print_navigation(nav: Navigation) {
    match nav {
        Navigation::GoToFeed => println!("{}", "Run `scrawl feed` to see the feed.".dimmed()),
        Navigation::GoToLogin => println!("{}", "Run `scrawl login` to sign back in.".dimmed()),
        Navigation::Stay => {}
    }
}

/// Auth and validation failures are messages, not crashes; everything else
/// propagates as an error.
fn user_facing(err: AppError) -> anyhow::Result<()> {
    match err {
        AppError::NotLoggedIn => {
            println!(
                "{} Not logged in. Run {} first.",
                "✗".red().bold(),
                "scrawl login".bold()
            );
            Ok(())
        }
        AppError::Auth(
            e @ (AuthError::MissingField
            | AuthError::AccountExists
            | AuthError::InvalidCredentials),
        ) => {
            println!("{} {}", "✗".red().bold(), e);
            Ok(())
        }
        AppError::Feed(e @ FeedError::EmptyPost) => {
            println!("{} {}", "✗".red().bold(), e);
            Ok(())
        }
        other => Err(other.into()),
    }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
