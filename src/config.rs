use anyhow::{Context, Result};
use env_logger::Builder;
use log::LevelFilter;
use std::env;

pub struct Config {
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        let api_key = env::var("YOUTUBE_API_KEY")
            .context("YOUTUBE_API_KEY environment variable must be set")?;
        Ok(Config { api_key })
    }
}

pub fn init_logger() {
    Builder::new().filter_level(LevelFilter::Info).init();
}

// A missing .env file is fine; variables may come from the process environment.
pub fn load_environment() {
    dotenv::dotenv().ok();
}
