//! Per-origin flight counts
//!
//! Flights are attributed to the location of their origin airport: the
//! state or province for local countries, the country otherwise. Counts
//! are then relabelled with full country names and merged by label.

use std::collections::{BTreeMap, HashMap};
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::config::FlightsConfig;
use crate::error::FlightsResult;
use crate::locations::{AirportDirectory, CountryNames, UNKNOWN_STATE};
use crate::record::FlightRecord;

/// Country assigned to every ICAO id with a `K` prefix
const CONTIGUOUS_US: &str = "US";

/// Flights from one origin location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSummary {
    pub origin: String,
    pub flights: u64,
}

/// Attributes flights to origin locations and labels them
pub struct OriginAggregator<'a> {
    airports: &'a AirportDirectory,
    names: &'a CountryNames,
    local_countries: &'a [String],
    name_overrides: &'a BTreeMap<String, String>,
}

impl<'a> OriginAggregator<'a> {
    /// Create an aggregator using the config's local countries and overrides
    pub fn new(
        airports: &'a AirportDirectory,
        names: &'a CountryNames,
        config: &'a FlightsConfig,
    ) -> Self {
        Self {
            airports,
            names,
            local_countries: &config.local_countries,
            name_overrides: &config.name_overrides,
        }
    }

    /// Country code of an origin airport
    ///
    /// `K`-prefixed ids are contiguous-US airports even when missing from
    /// the directory.
    pub fn origin_country(&self, origin: &str) -> Option<&str> {
        if origin.starts_with('K') {
            return Some(CONTIGUOUS_US);
        }
        self.airports.get(origin).map(|a| a.country.as_str())
    }

    /// Location an origin airport is counted under
    ///
    /// `None` when the country, or for local countries the state, is unknown.
    pub fn origin_location(&self, origin: &str) -> Option<&str> {
        let country = self.origin_country(origin)?;

        if self.local_countries.iter().any(|c| c == country) {
            self.airports.get(origin).map(|a| a.state.as_str())
        } else {
            Some(country)
        }
    }

    /// Count flights per origin location
    pub fn count_by_location(&self, flights: &[FlightRecord]) -> HashMap<String, u64> {
        let mut counts = HashMap::new();
        let mut unplaced = 0usize;

        for origin in flights.iter().filter_map(|f| f.origin.as_deref()) {
            match self.origin_location(origin) {
                Some(location) => *counts.entry(location.to_string()).or_insert(0) += 1,
                None => unplaced += 1,
            }
        }

        if unplaced > 0 {
            tracing::warn!(unplaced, "flights with unknown origin location were dropped");
        }
        counts
    }

    /// Display label for a location
    ///
    /// Country codes become country names, dashes become spaces, and
    /// configured overrides apply last.
    pub fn label(&self, location: &str) -> String {
        let name = self.names.name(location).unwrap_or(location).replace('-', " ");
        match self.name_overrides.get(&name) {
            Some(replacement) => replacement.clone(),
            None => name,
        }
    }

    /// Labelled flight counts, merged by label and sorted by origin
    pub fn summarize(&self, flights: &[FlightRecord]) -> Vec<FlightSummary> {
        let mut merged: BTreeMap<String, u64> = BTreeMap::new();

        for (location, count) in self.count_by_location(flights) {
            let label = self.label(&location);
            if label == UNKNOWN_STATE {
                continue;
            }
            *merged.entry(label).or_insert(0) += count;
        }

        merged
            .into_iter()
            .map(|(origin, flights)| FlightSummary { origin, flights })
            .collect()
    }
}

/// Write summaries as CSV with an `origin,flights` header
pub fn write_summary<W: Write>(writer: W, rows: &[FlightSummary]) -> FlightsResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
