//! Calendar-date intervals
//!
//! Dating tools report interval bounds as decimal years. A
//! `DateInterval` carries those bounds as calendar dates for display.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::decimal::try_decimal_year_to_date;
use crate::error::DateResult;

/// An interval between two calendar date-times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateInterval {
    /// Build an interval from decimal-year bounds
    pub fn from_decimal_years(lower: f64, upper: f64) -> DateResult<Self> {
        Ok(Self {
            start: try_decimal_year_to_date(lower)?,
            end: try_decimal_year_to_date(upper)?,
        })
    }

    /// Length of the interval
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Length of the interval in (fractional) days
    pub fn days(&self) -> f64 {
        self.duration().num_seconds() as f64 / 86_400.0
    }

    /// Check whether a date-time lies inside the interval (inclusive)
    pub fn contains(&self, datetime: NaiveDateTime) -> bool {
        self.start <= datetime && datetime <= self.end
    }

    /// Format both bounds with a strftime-style format
    pub fn format(&self, format: &str) -> (String, String) {
        (
            self.start.format(format).to_string(),
            self.end.format(format).to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_interval_from_decimal_years() {
        let interval = DateInterval::from_decimal_years(2019.0, 2020.0).unwrap();

        assert_eq!(interval.format("%Y-%m-%d"), ("2019-01-01".into(), "2020-01-01".into()));
        assert_eq!(interval.days(), 365.0);
    }

    #[test]
    fn test_interval_contains() {
        let interval = DateInterval::from_decimal_years(2020.0, 2021.0).unwrap();
        let leap_day = NaiveDate::from_ymd_opt(2020, 2, 29)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert!(interval.contains(leap_day));
        assert_eq!(interval.days(), 366.0);
    }

    #[test]
    fn test_interval_rejects_nan() {
        assert!(DateInterval::from_decimal_years(f64::NAN, 2020.0).is_err());
    }
}
