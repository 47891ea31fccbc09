//! digestif - turn a week of dated Markdown notes into an AI-generated review
//!
//! digestif provides:
//! - Recursive scanning of a notes directory for `.md` files
//! - YAML front matter parsing with a filename-date fallback
//! - A recency filter over a configurable trailing window
//! - Review synthesis through the Gemini generateContent API

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = cli::Cli::parse();
    cli::run(cli).await
}
