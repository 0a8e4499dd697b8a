//! Error types for the cabin import pipeline.

use thiserror::Error;

/// Errors that abort an import operation.
///
/// Problems with a single calendar event are not errors: the parser logs and
/// skips them. Problems with a single reservation during [`crate::sync::run_sync`]
/// are collected into the report instead of being returned.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Failed to fetch {url}: HTTP {status}")]
    Fetch { url: String, status: u16 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid reservation: {0}")]
    InvalidReservation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
