//! Decimal year <-> calendar date conversion

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, ParseResult, TimeDelta};

use crate::error::{DateError, DateResult};

/// Format used when the caller does not supply one
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string with a strftime-style format
///
/// Fields the format leaves out take their earliest value: a missing
/// month or day is 1 and a missing time of day is midnight, so `%Y-%m`
/// and `%Y` parse to the first day of the month or year.
pub fn parse_date(input: &str, format: &str) -> DateResult<NaiveDateTime> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, input, StrftimeItems::new(format))
        .and_then(|()| fill_missing_fields(&mut parsed))
        .and_then(|()| parsed.to_naive_datetime_with_offset(0))
        .map_err(|source| DateError::Parse {
            input: input.to_string(),
            format: format.to_string(),
            source,
        })
}

fn fill_missing_fields(parsed: &mut Parsed) -> ParseResult<()> {
    if parsed.timestamp().is_some() {
        return Ok(());
    }

    let week_based = parsed.ordinal().is_some()
        || parsed.weekday().is_some()
        || parsed.isoweek().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some();
    if !week_based {
        if parsed.month().is_none() {
            parsed.set_month(1)?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1)?;
        }
    }

    if parsed.hour_div_12().is_none() && parsed.hour_mod_12().is_none() {
        parsed.set_hour(0)?;
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    Ok(())
}

/// Convert a date string to a decimal year
///
/// ```
/// let value = phylo_dates::date_to_decimal_year("2021-01-01", "%Y-%m-%d").unwrap();
/// assert_eq!(value, 2021.0);
/// ```
pub fn date_to_decimal_year(input: &str, format: &str) -> DateResult<f64> {
    datetime_to_decimal_year(parse_date(input, format)?)
}

/// Convert a calendar date-time to a decimal year
///
/// The fraction is the seconds elapsed since Jan 1 divided by the seconds
/// between Jan 1 and Jan 1 of the following year.
pub fn datetime_to_decimal_year(datetime: NaiveDateTime) -> DateResult<f64> {
    let year = datetime.year();
    let (start, length) = year_span(year).ok_or(DateError::OutOfRange {
        value: f64::from(year),
    })?;

    Ok(f64::from(year) + seconds(datetime - start) / seconds(length))
}

/// Convert a decimal year to a calendar date-time
///
/// `None` passes through unchanged. Values that cannot be represented as
/// a date (non-finite, or beyond the supported year range) also yield
/// `None`; use [`try_decimal_year_to_date`] to tell the two apart.
pub fn decimal_year_to_date(value: Option<f64>) -> Option<NaiveDateTime> {
    let value = value?;
    match try_decimal_year_to_date(value) {
        Ok(datetime) => Some(datetime),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    }
}

/// Convert a decimal year to a calendar date-time, reporting failures
///
/// The offset from Jan 1 is rounded to the nearest microsecond.
pub fn try_decimal_year_to_date(value: f64) -> DateResult<NaiveDateTime> {
    let out_of_range = || DateError::OutOfRange { value };

    if !value.is_finite() {
        return Err(out_of_range());
    }

    let floor = value.floor();
    if floor < f64::from(i32::MIN) || floor > f64::from(i32::MAX) {
        return Err(out_of_range());
    }

    let (start, length) = year_span(floor as i32).ok_or_else(out_of_range)?;
    let year_micros = length.num_microseconds().ok_or_else(out_of_range)?;
    let offset = ((value - floor) * year_micros as f64).round() as i64;

    start
        .checked_add_signed(TimeDelta::microseconds(offset))
        .ok_or_else(out_of_range)
}

/// Start of `year` and the duration until the start of the next year
fn year_span(year: i32) -> Option<(NaiveDateTime, TimeDelta)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?.and_time(NaiveTime::MIN);
    let next = NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?.and_time(NaiveTime::MIN);
    Some((start, next - start))
}

fn seconds(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) * 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_start_of_year_is_whole() {
        assert_eq!(date_to_decimal_year("2019-01-01", DEFAULT_FORMAT), Ok(2019.0));
    }

    #[test]
    fn test_leap_year_midpoint() {
        // 2020 has 366 days; July 1 is day 183 (182 elapsed)
        let value = date_to_decimal_year("2020-07-01", DEFAULT_FORMAT).unwrap();
        assert!((value - (2020.0 + 182.0 / 366.0)).abs() < 1e-12);
    }

    #[test]
    fn test_common_year_midpoint() {
        let value = date_to_decimal_year("2019-07-01", DEFAULT_FORMAT).unwrap();
        assert!((value - (2019.0 + 181.0 / 365.0)).abs() < 1e-12);
    }

    #[test]
    fn test_time_of_day_counts() {
        let value = datetime_to_decimal_year(datetime(2021, 1, 1, 12, 0, 0)).unwrap();
        assert!((value - (2021.0 + 0.5 / 365.0)).abs() < 1e-12);
    }

    #[test]
    fn test_parse_error() {
        let err = date_to_decimal_year("01/07/2020", DEFAULT_FORMAT).unwrap_err();
        assert!(matches!(err, DateError::Parse { .. }));

        assert!(date_to_decimal_year("2020-02-30", DEFAULT_FORMAT).is_err());
    }

    #[test]
    fn test_parse_with_time_format() {
        let parsed = parse_date("2020-03-04 05:06:07", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(parsed, datetime(2020, 3, 4, 5, 6, 7));
    }

    #[test]
    fn test_partial_formats_start_at_first_day() {
        assert_eq!(parse_date("2020-03", "%Y-%m"), Ok(datetime(2020, 3, 1, 0, 0, 0)));
        assert_eq!(parse_date("2020", "%Y"), Ok(datetime(2020, 1, 1, 0, 0, 0)));
        assert_eq!(
            parse_date("2020-03-04 05", "%Y-%m-%d %H"),
            Ok(datetime(2020, 3, 4, 5, 0, 0))
        );
    }

    #[test]
    fn test_partial_format_still_rejects_mismatch() {
        let err = parse_date("2020-13", "%Y-%m").unwrap_err();
        assert!(matches!(err, DateError::Parse { .. }));
        assert!(parse_date("March 2020", "%Y-%m").is_err());
    }

    #[test]
    fn test_none_passes_through() {
        assert_eq!(decimal_year_to_date(None), None);
    }

    #[test]
    fn test_whole_year_is_new_year() {
        assert_eq!(
            decimal_year_to_date(Some(2020.0)),
            Some(datetime(2020, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_leap_day_reachable() {
        // Feb 29 noon, 2020: 59.5 days elapsed
        let value = 2020.0 + 59.5 / 366.0;
        let date = decimal_year_to_date(Some(value)).unwrap();
        let error = date - datetime(2020, 2, 29, 12, 0, 0);
        assert!(error.num_milliseconds().abs() < 1);
    }

    #[test]
    fn test_negative_year_uses_floor() {
        let date = try_decimal_year_to_date(-0.5).unwrap();
        assert_eq!(date.year(), -1);
    }

    #[test]
    fn test_unrepresentable_values() {
        assert!(try_decimal_year_to_date(f64::NAN).is_err());
        assert!(try_decimal_year_to_date(f64::INFINITY).is_err());
        assert!(try_decimal_year_to_date(1.0e12).is_err());
        assert_eq!(decimal_year_to_date(Some(f64::NAN)), None);
    }
}
