//! Error types for the export core

use thiserror::Error;

/// Core error type. Text processing and aggregation are total; only
/// spreadsheet serialization can fail here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Excel error: {0}")]
    Excel(String),
}

/// Result alias for the export core.
pub type Result<T> = std::result::Result<T, Error>;
