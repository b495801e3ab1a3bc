//! Date axis layout for timeseries plots
//!
//! Minor ticks sit on the first of every month and are labelled with the
//! month name; major ticks sit on the first of every year and carry the
//! year as well. A month start that is also a year start gets only the
//! major tick.

use chrono::{Datelike, NaiveDate, NaiveTime};
use phylo_dates::{datetime_to_decimal_year, try_decimal_year_to_date, DateResult};
use serde::{Deserialize, Serialize};

/// Label format of minor (monthly) ticks
pub const MINOR_LABEL_FORMAT: &str = "%b";

/// Label format of major (yearly) ticks
pub const MAJOR_LABEL_FORMAT: &str = "%Y %b";

/// Label formats for a date axis
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateAxisFormat {
    pub major_format: String,
    pub minor_format: String,
}

impl Default for DateAxisFormat {
    fn default() -> Self {
        Self {
            major_format: MAJOR_LABEL_FORMAT.to_string(),
            minor_format: MINOR_LABEL_FORMAT.to_string(),
        }
    }
}

/// A tick mark on a date axis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DateTick {
    /// Calendar date of the tick
    pub date: NaiveDate,

    /// Position as a decimal year
    pub decimal_year: f64,

    /// Position in normalized coordinates (0.0 to 1.0)
    pub normalized: f64,

    /// Whether this is a major (yearly) tick
    pub is_major: bool,

    /// Label text
    pub label: String,
}

/// Calculate month/year ticks between two dates (inclusive)
pub fn timeseries_ticks(start: NaiveDate, end: NaiveDate) -> Vec<DateTick> {
    timeseries_ticks_with(start, end, &DateAxisFormat::default())
}

/// Calculate ticks for an axis whose range is given in decimal years
pub fn timeseries_ticks_for_decimal_years(lower: f64, upper: f64) -> DateResult<Vec<DateTick>> {
    let start = try_decimal_year_to_date(lower)?.date();
    let end = try_decimal_year_to_date(upper)?.date();
    Ok(timeseries_ticks(start, end))
}

/// Calculate month/year ticks with custom label formats
pub fn timeseries_ticks_with(
    start: NaiveDate,
    end: NaiveDate,
    format: &DateAxisFormat,
) -> Vec<DateTick> {
    if end < start {
        return vec![];
    }

    let span = (end - start).num_days() as f64;
    let mut ticks = Vec::new();
    let mut cursor = first_month_start(start);

    while let Some(date) = cursor.filter(|d| *d <= end) {
        let is_major = date.month() == 1;
        let label_format = if is_major {
            &format.major_format
        } else {
            &format.minor_format
        };

        if let Ok(decimal_year) = datetime_to_decimal_year(date.and_time(NaiveTime::MIN)) {
            let normalized = if span > 0.0 {
                (date - start).num_days() as f64 / span
            } else {
                0.0
            };

            ticks.push(DateTick {
                date,
                decimal_year,
                normalized,
                is_major,
                label: date.format(label_format).to_string(),
            });
        }

        cursor = next_month_start(date);
    }

    ticks
}

fn first_month_start(date: NaiveDate) -> Option<NaiveDate> {
    if date.day() == 1 {
        Some(date)
    } else {
        next_month_start(date)
    }
}

fn next_month_start(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year().checked_add(1)?, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}
