//! OpenSky flight-list records
//!
//! Each monthly flight list is a CSV file with one row per flight. Only
//! the columns used downstream are kept; the rest are ignored. Files
//! ending in `.gz` are decompressed while reading, as published.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};

use crate::error::{FlightsError, FlightsResult};

/// A single flight from a flight list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Radio callsign
    pub callsign: Option<String>,
    /// Commercial flight number
    pub number: Option<String>,
    /// Aircraft type designator
    pub typecode: Option<String>,
    /// ICAO code of the departure airport
    pub origin: Option<String>,
    /// ICAO code of the arrival airport
    pub destination: Option<String>,
    /// Day of the flight (UTC)
    pub day: String,
}

impl FlightRecord {
    /// Check whether this flight lands at `destination` and has a known origin
    pub fn arrives_at(&self, destination: &str) -> bool {
        self.destination.as_deref() == Some(destination) && self.origin.is_some()
    }
}

/// Read flights into `destination` from one flight list
///
/// Rows without an origin airport are dropped.
pub fn read_flightlist<R: Read>(reader: R, destination: &str) -> FlightsResult<Vec<FlightRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut flights = Vec::new();
    for result in reader.deserialize::<FlightRecord>() {
        let record = result?;
        if record.arrives_at(destination) {
            flights.push(record);
        }
    }

    Ok(flights)
}

/// Read flights into `destination` from a flight-list file
pub fn read_flightlist_file(path: &Path, destination: &str) -> FlightsResult<Vec<FlightRecord>> {
    let file = File::open(path).map_err(|source| FlightsError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = BufReader::new(file);
    let flights = if is_gzip(path) {
        read_flightlist(GzDecoder::new(reader), destination)?
    } else {
        read_flightlist(reader, destination)?
    };
    tracing::debug!(path = %path.display(), flights = flights.len(), "read flight list");
    Ok(flights)
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Read and concatenate several flight-list files
pub fn read_flightlists(paths: &[PathBuf], destination: &str) -> FlightsResult<Vec<FlightRecord>> {
    let mut flights = Vec::new();
    for path in paths {
        flights.extend(read_flightlist_file(path, destination)?);
    }

    tracing::info!(
        files = paths.len(),
        flights = flights.len(),
        destination,
        "loaded flight lists"
    );
    Ok(flights)
}
