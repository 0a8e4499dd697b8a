use anyhow::Result;
use cabin_sync_core::config::CabinSyncConfig;
use cabin_sync_core::sync_from_url;

use crate::utils::tui::fetch_spinner;

pub async fn run(config: &CabinSyncConfig, feed: &str, dry_run: bool) -> Result<()> {
    let url = config.feed_url(feed);

    let spinner = fetch_spinner(url);
    let result = sync_from_url(url, &config.cabins).await;
    spinner.finish_and_clear();

    super::store_reservations(config, &result?, dry_run)
}
