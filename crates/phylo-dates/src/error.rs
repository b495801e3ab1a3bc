//! Error types for date conversions

use thiserror::Error;

/// Errors that can occur during date conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateError {
    #[error("Cannot parse '{input}' with format '{format}': {source}")]
    Parse {
        input: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Decimal year {value} is not a representable date")]
    OutOfRange { value: f64 },
}

/// Result type for date conversions
pub type DateResult<T> = Result<T, DateError>;
