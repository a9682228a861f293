mod config;
mod error;
mod models;
mod services;
mod utils;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use services::worker::{self, HarvestJob};
use std::path::PathBuf;
use std::sync::atomic::Ordering;

/// Harvest metadata and transcripts for a channel's shorts into a CSV file.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// YouTube Data API key (falls back to YOUTUBE_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Channel URL or handle, e.g. https://www.youtube.com/@handle/shorts
    #[arg(long)]
    channel: String,

    /// Maximum number of shorts to harvest
    #[arg(long, default_value_t = 50)]
    max_shorts: usize,

    /// Folder the CSV file is written to
    #[arg(long)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    config::load_environment();
    config::init_logger();

    let args = Args::parse();
    let api_key = match args.api_key {
        Some(key) => key,
        None => config::youtube_api_key()?,
    };
    if args.max_shorts > 200 {
        warn!("Fetching more than 200 shorts may exceed your API quota.");
    }

    let mut handle = worker::spawn(HarvestJob {
        api_key,
        channel_reference: args.channel,
        max_shorts: args.max_shorts,
        output_folder: args.output,
    });

    let cancel = handle.cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Cancelling...");
            cancel.store(true, Ordering::Relaxed);
        }
    });

    while let Some(line) = handle.logs.recv().await {
        info!("{line}");
    }
    handle.task.await?;

    Ok(())
}
