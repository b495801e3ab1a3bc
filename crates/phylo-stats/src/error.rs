//! Error types for posterior summaries

use thiserror::Error;

/// Errors raised for caller contract violations
///
/// Too few samples is not an error: `hpd` reports it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HpdError {
    #[error("Density level must be in (0, 1], got {level}")]
    InvalidLevel { level: f64 },

    #[error("Sample {index} is not finite: {value}")]
    NonFiniteSample { index: usize, value: f64 },

    #[error("Burn-in fraction must be in [0, 1), got {fraction}")]
    InvalidBurnin { fraction: f64 },
}

/// Result type for posterior summaries
pub type HpdResult<T> = Result<T, HpdError>;
