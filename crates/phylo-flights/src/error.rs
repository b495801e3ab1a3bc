//! Error types for the flight pipeline

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while reading or aggregating flight data
#[derive(Debug, Error)]
pub enum FlightsError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Http(String),
}

/// Result type for the flight pipeline
pub type FlightsResult<T> = Result<T, FlightsError>;
