pub mod cabins;
pub mod fetch;
pub mod import;
pub mod preview;

use anyhow::Result;
use cabin_sync_core::config::CabinSyncConfig;
use cabin_sync_core::{ExternalReservation, run_sync};

use crate::render::Render;
use crate::store::BookingStore;

/// Print the reservations, then store them unless this is a dry run.
fn store_reservations(
    config: &CabinSyncConfig,
    reservations: &[ExternalReservation],
    dry_run: bool,
) -> Result<()> {
    if reservations.is_empty() {
        println!("No reservations found");
        return Ok(());
    }

    for reservation in reservations {
        println!("{}", reservation.render());
    }

    if dry_run {
        println!("\nDry run: nothing stored");
        return Ok(());
    }

    let mut store = BookingStore::open(&config.bookings_path())?;
    let report = run_sync(reservations, &config.cabins, |booking| store.create(booking));

    println!("\n{}", report.render());
    Ok(())
}
