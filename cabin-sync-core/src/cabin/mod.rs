//! Cabin identity: cleaning, extraction from event text, and matching
//! against the host's known cabins.

mod known;
mod normalize;
mod resolve;

pub use known::{MIN_SIMILARITY, map_to_known};
pub use normalize::clean;
pub(crate) use normalize::collapse_whitespace;
pub use resolve::{DEFAULT_CABIN, MatchedVia, Resolution, resolve};
