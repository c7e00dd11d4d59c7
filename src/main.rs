//! CLI shell for the search core
//!
//! Thin presentation layer: parse a query, drive the session manager for
//! one or more pages, render the accumulated results. Everything
//! interesting happens in the library.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use github_search::{Config, GitHubApi, SearchRepositoriesManager};

#[derive(Parser)]
#[command(name = "github-search", version, about = "Search GitHub repositories")]
struct Cli {
    /// Search query (GitHub search syntax)
    query: String,

    /// Number of result pages to fetch
    #[arg(long, default_value_t = 1)]
    pages: u32,

    /// Print the raw JSON records instead of a summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    let config = Config::load()?;
    let api = GitHubApi::new(&config);

    let Some(manager) = SearchRepositoriesManager::new(api, cli.query) else {
        anyhow::bail!("query must not be empty");
    };

    for page in 0..cli.pages {
        // First call refreshes; later calls extend. A rejected call means
        // the server-reported total was already reached.
        if !manager.search(page == 0).await? {
            break;
        }
    }

    let repositories = manager.repositories();

    if cli.json {
        let items: Vec<_> = repositories.iter().map(|repo| repo.to_json()).collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for repo in &repositories {
            println!(
                "{:>7}★  {:<40}  {}",
                repo.stargazers_count,
                repo.full_name,
                repo.description.as_deref().unwrap_or("")
            );
        }
        eprintln!(
            "{} repositories for '{}'{}",
            repositories.len(),
            manager.query(),
            if manager.is_completed() {
                " (all results)"
            } else {
                ""
            }
        );
    }

    Ok(())
}

/// Initialize tracing to stderr with RUST_LOG-based filtering
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("github_search=info".parse()?);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();

    Ok(())
}
