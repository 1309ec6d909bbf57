use clap::Parser;
use tracing::Level;

use nd_newsapi::prelude::*;
use nd_newsapi::query::{DEFAULT_PAGE_SIZE, DEFAULT_SOURCES};

/// Query the news API and print a digest of matching articles.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search query keyword
    #[arg(long)]
    q: Option<String>,
    /// Start date (YYYY-MM-DD), defaults to today (UTC)
    #[arg(long)]
    from_date: Option<String>,
    /// End date (YYYY-MM-DD), defaults to today (UTC)
    #[arg(long)]
    to_date: Option<String>,
    /// News source identifier
    #[arg(long, default_value = DEFAULT_SOURCES)]
    sources: String,
    /// Number of articles to retrieve (upstream caps at 100)
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let client = NewsApiClient::from_env()?;
    let query = NewsQuery::new(cli.q, cli.from_date, cli.to_date, cli.sources, cli.page_size);

    let outcome = client.fetch(&query).await;
    if let Err(err) = &outcome {
        tracing::warn!("news fetch failed: {err}");
    }

    // A failed or empty fetch still prints its diagnostic digest; only
    // missing configuration exits non-zero.
    println!("{}", nd_core::digest::render(outcome));
    Ok(())
}
