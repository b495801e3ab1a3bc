//! phylo-dates - Decimal years for phylogenetic dating
//!
//! Dating tools report node ages as decimal years (`2020.497...`): the
//! calendar year plus the elapsed fraction of that year. This crate
//! converts between that form and calendar dates.
//!
//! The fraction is measured in seconds between Jan 1 of the year and
//! Jan 1 of the next year, so leap years are 366 days long. Arithmetic is
//! naive (no time zones, no daylight saving).

pub mod decimal;
pub mod error;
pub mod interval;

pub use decimal::*;
pub use error::*;
pub use interval::*;
