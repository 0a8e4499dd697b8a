use std::collections::BTreeSet;

use anyhow::Result;
use cabin_sync_core::config::CabinSyncConfig;
use chrono::Utc;
use owo_colors::OwoColorize;

use crate::store::BookingStore;

pub fn run(config: &CabinSyncConfig) -> Result<()> {
    if config.cabins.is_empty() {
        println!(
            "No cabins configured. Add them to {}:\n\n  cabins = [\"Regional Uno\", \"Teja Uno\"]",
            CabinSyncConfig::config_path()?.display()
        );
        return Ok(());
    }

    let store = BookingStore::open(&config.bookings_path())?;
    let now = Utc::now();

    for cabin in &config.cabins {
        let upcoming = store
            .bookings()
            .iter()
            .filter(|s| &s.booking.cabin == cabin && s.booking.end > now)
            .count();

        println!("🏠 {} {}", cabin.bold(), format!("({upcoming} upcoming)").dimmed());
    }

    let unlisted: BTreeSet<&str> = store
        .bookings()
        .iter()
        .map(|s| s.booking.cabin.as_str())
        .filter(|cabin| !config.cabins.iter().any(|c| c == cabin))
        .collect();
    if !unlisted.is_empty() {
        let names: Vec<_> = unlisted.into_iter().collect();
        println!("\nBookings for unlisted cabins: {}", names.join(", ").yellow());
    }

    Ok(())
}
