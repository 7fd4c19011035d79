//! CLI dry-run for the résumé import pipeline: extract text from a PDF, parse
//! it, populate an in-memory store, and print the parsed value as JSON.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_import::extract::extract_resume_text;
use resume_import::parser::parse_resume_text;
use resume_import::populate::{populate_store, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: resume-import <resume.pdf>")?;

    let bytes = std::fs::read(&path).with_context(|| format!("failed to read '{path}'"))?;
    let text = extract_resume_text(&bytes)?;
    info!(%path, chars = text.len(), "extracted resume text");

    let resume = parse_resume_text(&text);

    let store = MemoryStore::default();
    let report = populate_store(&store, &resume).await?;
    info!(?report, "dry-run import complete");

    println!("{}", serde_json::to_string_pretty(&resume)?);

    Ok(())
}
