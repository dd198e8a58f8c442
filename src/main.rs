mod config;
mod error;
mod models;
mod services;
mod utils;

use crate::config::Config;
use crate::services::gateway::YouTubeGateway;
use crate::services::{aggregator, reporter, resolver};
use anyhow::{Context, Result};
use std::io;
use std::sync::Arc;

const MAX_CHANNEL_RESULTS: u32 = 1;

#[tokio::main]
async fn main() -> Result<()> {
    config::load_environment();
    config::init_logger();
    let config = Config::from_env()?;

    println!("Enter channel name: ");
    let mut query = String::new();
    io::stdin()
        .read_line(&mut query)
        .context("failed to read channel name")?;
    let query = query.trim().to_string();

    let gateway = Arc::new(YouTubeGateway::new(config.api_key));

    // A resolution failure is fatal: the error surfaces here and maps to a
    // non-zero exit. Per-channel stage failures stay inside their results.
    let candidates = resolver::resolve(gateway.as_ref(), &query, MAX_CHANNEL_RESULTS).await?;
    let results = aggregator::run(gateway, &query, candidates).await;

    for result in &results {
        print!("{}", reporter::render(result));
    }

    Ok(())
}
