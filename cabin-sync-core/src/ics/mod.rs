//! iCalendar feed parsing.

mod parse;
mod price;

pub use parse::{parse, parse_with_source};
pub use price::estimate_nightly_price;
