//! Highest posterior density (HPD) intervals
//!
//! The HPD interval at level `L` is the narrowest contiguous block of the
//! sorted samples that holds `round(L * n)` of them. Both bounds are
//! sample values.
//!
//! # Algorithm
//!
//! Sort a private copy (O(n log n)), then slide a fixed-size window over
//! it and keep the narrowest span (O(n)). Only strictly narrower windows
//! replace the current best, so among equally narrow windows the one with
//! the lowest start index wins.

use serde::{Deserialize, Serialize};

use crate::error::{HpdError, HpdResult};

/// Smallest window that forms an interval
pub const MIN_WINDOW: usize = 2;

/// A highest posterior density interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HpdInterval {
    /// Lower bound (a sample value)
    pub lower: f64,
    /// Upper bound (a sample value)
    pub upper: f64,
    /// Number of samples enclosed by the window
    pub count: usize,
}

impl HpdInterval {
    /// Span of the interval (upper - lower)
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Midpoint of the interval
    pub fn midpoint(&self) -> f64 {
        self.lower + self.width() / 2.0
    }

    /// Check whether a value lies inside the interval (inclusive)
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Bounds as a `(lower, upper)` pair
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

/// Compute the HPD interval of `samples` at density `level`
///
/// Returns `Ok(None)` when `round(level * n)` is below two, which is the
/// normal outcome for tiny traces and must be handled by the caller.
///
/// # Errors
///
/// - [`HpdError::InvalidLevel`] if `level` is outside (0, 1]
/// - [`HpdError::NonFiniteSample`] if any sample is NaN or infinite
pub fn hpd(samples: &[f64], level: f64) -> HpdResult<Option<HpdInterval>> {
    validate_level(level)?;
    validate_samples(samples)?;

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    Ok(scan(&sorted, window_size(level, sorted.len())))
}

/// Compute the HPD interval of samples that are already sorted ascending
///
/// Callers must have validated `sorted` and sorted it; only the level is
/// checked here.
pub(crate) fn hpd_sorted(sorted: &[f64], level: f64) -> HpdResult<Option<HpdInterval>> {
    validate_level(level)?;
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    Ok(scan(sorted, window_size(level, sorted.len())))
}

/// Number of samples the interval must enclose
///
/// Halves round to even (`2.5 -> 2`, `3.5 -> 4`).
pub fn window_size(level: f64, n: usize) -> usize {
    (level * n as f64).round_ties_even() as usize
}

/// Reject levels outside (0, 1], including NaN
pub(crate) fn validate_level(level: f64) -> HpdResult<()> {
    if level > 0.0 && level <= 1.0 {
        Ok(())
    } else {
        Err(HpdError::InvalidLevel { level })
    }
}

/// Reject NaN and infinite samples
pub(crate) fn validate_samples(samples: &[f64]) -> HpdResult<()> {
    match samples.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(HpdError::NonFiniteSample {
            index,
            value: samples[index],
        }),
        None => Ok(()),
    }
}

fn scan(sorted: &[f64], window: usize) -> Option<HpdInterval> {
    if window < MIN_WINDOW || window > sorted.len() {
        tracing::debug!(
            window,
            samples = sorted.len(),
            "not enough samples for an HPD interval"
        );
        return None;
    }

    let last = window - 1;
    let mut best_start = 0;
    let mut best_width = sorted[last] - sorted[0];

    for start in 1..=(sorted.len() - window) {
        let width = sorted[start + last] - sorted[start];
        if width < best_width {
            best_width = width;
            best_start = start;
        }
    }

    Some(HpdInterval {
        lower: sorted[best_start],
        upper: sorted[best_start + last],
        count: window,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hpd_known_result() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let interval = hpd(&data, 0.5).unwrap().unwrap();

        assert_eq!(interval.bounds(), (1.0, 3.0));
        assert_eq!(interval.count, 3);
    }

    #[test]
    fn test_hpd_tie_keeps_first_window() {
        let data = vec![10.0, 11.0, 12.0, 1.0, 2.0, 3.0];
        let interval = hpd(&data, 0.5).unwrap().unwrap();

        assert_eq!(interval.bounds(), (1.0, 3.0));
    }

    #[test]
    fn test_hpd_skips_outlying_tail() {
        let data = vec![-50.0, 0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];
        let interval = hpd(&data, 0.8).unwrap().unwrap();

        assert_eq!(interval.bounds(), (0.0, 0.7));
    }

    #[test]
    fn test_hpd_insufficient_data() {
        assert_eq!(hpd(&[5.0], 0.95), Ok(None));
        assert_eq!(hpd(&[], 1.0), Ok(None));
        // round(0.3 * 3) = 1
        assert_eq!(hpd(&[1.0, 2.0, 3.0], 0.3), Ok(None));
    }

    #[test]
    fn test_hpd_does_not_mutate_input() {
        let data = vec![3.0, 1.0, 2.0];
        let _ = hpd(&data, 1.0).unwrap();
        assert_eq!(data, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_hpd_invalid_level() {
        let data = [1.0, 2.0, 3.0];
        assert_eq!(hpd(&data, 0.0), Err(HpdError::InvalidLevel { level: 0.0 }));
        assert_eq!(hpd(&data, 1.5), Err(HpdError::InvalidLevel { level: 1.5 }));
        assert!(hpd(&data, -0.5).is_err());
        assert!(hpd(&data, f64::NAN).is_err());
    }

    #[test]
    fn test_hpd_non_finite_sample() {
        let err = hpd(&[1.0, f64::NAN, 3.0], 0.5).unwrap_err();
        assert!(matches!(err, HpdError::NonFiniteSample { index: 1, .. }));

        let err = hpd(&[1.0, 2.0, f64::INFINITY], 0.5).unwrap_err();
        assert!(matches!(err, HpdError::NonFiniteSample { index: 2, .. }));
    }

    #[test]
    fn test_window_size_rounds_half_to_even() {
        assert_eq!(window_size(0.5, 5), 2);
        assert_eq!(window_size(0.5, 7), 4);
        assert_eq!(window_size(0.95, 100), 95);
        assert_eq!(window_size(1.0, 0), 0);
    }

    #[test]
    fn test_hpd_sorted_matches_hpd() {
        let data: Vec<f64> = (0..50).map(|i| ((i * 37) % 50) as f64 / 7.0).collect();
        let mut sorted = data.clone();
        sorted.sort_by(f64::total_cmp);

        assert_eq!(hpd(&data, 0.9).unwrap(), hpd_sorted(&sorted, 0.9).unwrap());
    }

    #[test]
    fn test_interval_helpers() {
        let interval = HpdInterval {
            lower: 2020.0,
            upper: 2020.5,
            count: 10,
        };

        assert!((interval.width() - 0.5).abs() < 1e-12);
        assert!((interval.midpoint() - 2020.25).abs() < 1e-12);
        assert!(interval.contains(2020.0));
        assert!(interval.contains(2020.5));
        assert!(!interval.contains(2020.6));
    }
}
