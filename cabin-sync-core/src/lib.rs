//! Import pipeline for Airbnb calendar feeds into cabin bookings.
//!
//! - `ics` parses a feed into [`ExternalReservation`]s
//! - `cabin` and `guest` pull cabin and guest identity out of event text
//! - `booking` converts reservations into [`Booking`]s
//! - `sync` ties it together and reports per-reservation outcomes
//!
//! Persistence and the list of known cabins belong to the host and are
//! passed in explicitly.

pub mod availability;
pub mod booking;
pub mod cabin;
pub mod config;
pub mod error;
pub mod guest;
pub mod ics;
pub mod reservation;
pub mod similarity;
pub mod sync;

pub use booking::{Booking, DiscountCode, to_booking};
pub use error::{ImportError, ImportResult};
pub use reservation::{ExternalReservation, ReservationSource};
pub use sync::{SyncReport, run_sync, sync_from_text, sync_from_url};
