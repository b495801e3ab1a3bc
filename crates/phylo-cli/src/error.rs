//! Error type for the command-line tools

use phylo_dates::DateError;
use phylo_flights::{ConfigError, FlightsError};
use phylo_stats::HpdError;
use thiserror::Error;

use crate::trace::TraceError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Hpd(#[from] HpdError),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Flights(#[from] FlightsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
