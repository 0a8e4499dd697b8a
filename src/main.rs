mod commands;
mod render;
mod store;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use cabin_sync_core::config::CabinSyncConfig;
use clap::{Parser, Subcommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "cabin-sync")]
#[command(about = "Import Airbnb calendar feeds into the cabin booking store")]
struct Cli {
    /// Config file to use instead of ~/.config/cabin-sync/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import reservations from a local .ics file
    Import {
        file: PathBuf,

        /// Show what would be imported without storing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Download a feed (by URL or [feeds] name) and import its reservations
    Fetch {
        feed: String,

        /// Show what would be imported without storing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the reservations in a file or feed
    Preview {
        /// Path, URL, or [feeds] name
        source: String,

        /// Print reservations as JSON
        #[arg(long)]
        json: bool,
    },
    /// List known cabins and their stored bookings
    Cabins,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => CabinSyncConfig::load_from(&path)?,
        None => CabinSyncConfig::load()?,
    };

    match cli.command {
        Commands::Import { file, dry_run } => commands::import::run(&config, &file, dry_run),
        Commands::Fetch { feed, dry_run } => commands::fetch::run(&config, &feed, dry_run).await,
        Commands::Preview { source, json } => commands::preview::run(&config, &source, json).await,
        Commands::Cabins => commands::cabins::run(&config),
    }
}
