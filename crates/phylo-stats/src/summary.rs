//! Posterior trace summaries
//!
//! Provides the per-parameter figures of a dating report:
//! - Mean, standard deviation, median
//! - Min, max
//! - HPD interval at a chosen level
//!
//! Also handles burn-in removal for MCMC traces.

use serde::{Deserialize, Serialize};

use crate::error::{HpdError, HpdResult};
use crate::hpd::{hpd_sorted, validate_level, validate_samples, HpdInterval};

/// Default density level for reported intervals
pub const DEFAULT_LEVEL: f64 = 0.95;

/// Summary of a one-dimensional posterior sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosteriorSummary {
    /// Number of samples
    pub count: usize,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Mean (average)
    pub mean: f64,
    /// Standard deviation (population)
    pub std_dev: f64,
    /// Median (50th percentile)
    pub median: f64,
    /// Density level the interval was computed at
    pub level: f64,
    /// HPD interval, absent when too few samples
    pub hpd: Option<HpdInterval>,
}

impl PosteriorSummary {
    /// Summarize samples, with an HPD interval at `level`
    ///
    /// Returns `Ok(None)` for an empty sample.
    pub fn from_samples(samples: &[f64], level: f64) -> HpdResult<Option<Self>> {
        validate_level(level)?;
        validate_samples(samples)?;

        if samples.is_empty() {
            return Ok(None);
        }

        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        Ok(Some(Self {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean,
            std_dev: variance.sqrt(),
            median,
            level,
            hpd: hpd_sorted(&sorted, level)?,
        }))
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Drop the leading `fraction` of an MCMC trace
///
/// The number of dropped samples is rounded down.
pub fn discard_burnin(samples: &[f64], fraction: f64) -> HpdResult<&[f64]> {
    if !(0.0..1.0).contains(&fraction) {
        return Err(HpdError::InvalidBurnin { fraction });
    }

    let skip = (samples.len() as f64 * fraction).floor() as usize;
    tracing::debug!(skip, total = samples.len(), "discarding burn-in");
    Ok(&samples[skip..])
}
