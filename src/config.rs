use anyhow::{Context, Result};
use env_logger::Builder;
use log::LevelFilter;
use std::env;

pub fn init_logger() {
    Builder::new().filter_level(LevelFilter::Info).init();
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

/// API key fallback when none is passed on the command line.
pub fn youtube_api_key() -> Result<String> {
    env::var("YOUTUBE_API_KEY")
        .context("no API key given and YOUTUBE_API_KEY environment variable is not set")
}
