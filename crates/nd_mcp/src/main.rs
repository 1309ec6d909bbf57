use anyhow::Context;
use rmcp::{transport::stdio, ServiceExt};
use tracing::Level;

use nd_mcp::NewsService;
use nd_newsapi::NewsApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the MCP protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let client = NewsApiClient::from_env().context("loading news API configuration")?;

    tracing::info!("starting news MCP server over stdio");
    let service = NewsService::new(client)
        .serve(stdio())
        .await
        .context("starting MCP server")?;

    service.waiting().await?;
    Ok(())
}
