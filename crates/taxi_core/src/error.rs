//! Error type for the fallible edges of the crate (I/O, codecs, config).
//!
//! The queries themselves are total and never return these.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaxiParkError>;

#[derive(Debug, Error)]
pub enum TaxiParkError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Export was asked to write a table with no rows.
    #[error("nothing to export: {0}")]
    EmptyExport(&'static str),
}

impl TaxiParkError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
