use std::path::Path;

use anyhow::{Context, Result};
use cabin_sync_core::config::CabinSyncConfig;
use cabin_sync_core::{sync_from_text, sync_from_url};

use crate::render::Render;
use crate::utils::tui::fetch_spinner;

const URL_SCHEMES: [&str; 3] = ["http://", "https://", "webcal://"];

pub async fn run(config: &CabinSyncConfig, source: &str, json: bool) -> Result<()> {
    let source = config.feed_url(source);

    let reservations = if URL_SCHEMES.iter().any(|s| source.starts_with(*s)) {
        let spinner = fetch_spinner(source);
        let result = sync_from_url(source, &config.cabins).await;
        spinner.finish_and_clear();
        result?
    } else {
        let path = Path::new(source);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        sync_from_text(&content, &config.cabins)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&reservations)?);
        return Ok(());
    }

    if reservations.is_empty() {
        println!("No reservations found");
    }
    for reservation in &reservations {
        println!("{}", reservation.render());
    }

    Ok(())
}
