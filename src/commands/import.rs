use std::path::Path;

use anyhow::{Context, Result};
use cabin_sync_core::config::CabinSyncConfig;
use cabin_sync_core::sync_from_text;

pub fn run(config: &CabinSyncConfig, file: &Path, dry_run: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let reservations = sync_from_text(&content, &config.cabins)
        .with_context(|| format!("Failed to import {}", file.display()))?;

    super::store_reservations(config, &reservations, dry_run)
}
