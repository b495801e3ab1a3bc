//! Reference tables for airport locations and country names

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::{FlightsError, FlightsResult};

/// Placeholder for airports without a recorded state
pub const UNKNOWN_STATE: &str = "N/A";

/// Location of an airport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportLocation {
    /// ISO alpha-2 country code
    pub country: String,
    /// State or province, `N/A` when not recorded
    pub state: String,
}

#[derive(Deserialize)]
struct AirportEntry {
    country: String,
    #[serde(default)]
    state: Option<String>,
}

/// ICAO airport id -> location lookup
#[derive(Debug, Clone, Default)]
pub struct AirportDirectory {
    airports: HashMap<String, AirportLocation>,
}

impl AirportDirectory {
    /// Parse the mwgg/Airports JSON database
    ///
    /// The database is an object keyed by ICAO id; only `country` and
    /// `state` are read from each entry.
    pub fn from_json<R: Read>(reader: R) -> FlightsResult<Self> {
        let entries: HashMap<String, AirportEntry> = serde_json::from_reader(reader)?;

        let airports = entries
            .into_iter()
            .map(|(icao, entry)| {
                let location = AirportLocation {
                    country: entry.country,
                    state: entry.state.unwrap_or_else(|| UNKNOWN_STATE.to_string()),
                };
                (icao, location)
            })
            .collect::<HashMap<_, _>>();

        tracing::debug!(airports = airports.len(), "loaded airport directory");
        Ok(Self { airports })
    }

    /// Load the airport database from a local file
    pub fn from_path(path: &Path) -> FlightsResult<Self> {
        Self::from_json(BufReader::new(open(path)?))
    }

    /// Add or replace an airport
    pub fn insert(&mut self, icao: impl Into<String>, location: AirportLocation) {
        self.airports.insert(icao.into(), location);
    }

    /// Look up an airport by ICAO id
    pub fn get(&self, icao: &str) -> Option<&AirportLocation> {
        self.airports.get(icao)
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

/// ISO alpha-2 code -> country name lookup
#[derive(Debug, Clone, Default)]
pub struct CountryNames {
    names: HashMap<String, String>,
}

impl CountryNames {
    /// Parse a country-code table with `Country` and `Alpha-2 code` columns
    ///
    /// Cells may carry stray quotes and padding, which are stripped. When a
    /// code is listed for several countries, the alphabetically first
    /// country name wins.
    pub fn from_csv<R: Read>(reader: R) -> FlightsResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(clean_cell).collect();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| FlightsError::ColumnNotFound(name.to_string()))
        };
        let country_col = column("Country")?;
        let code_col = column("Alpha-2 code")?;

        let mut pairs = Vec::new();
        for result in reader.records() {
            let record = result?;
            match (record.get(country_col), record.get(code_col)) {
                (Some(country), Some(code)) => pairs.push((clean_cell(country), clean_cell(code))),
                _ => tracing::warn!(?record, "skipping short country row"),
            }
        }

        Ok(Self::from_pairs(pairs))
    }

    /// Load the country-code table from a local file
    pub fn from_path(path: &Path) -> FlightsResult<Self> {
        Self::from_csv(BufReader::new(open(path)?))
    }

    /// Build from `(country, code)` pairs
    pub fn from_pairs(mut pairs: Vec<(String, String)>) -> Self {
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        let mut names = HashMap::new();
        for (country, code) in pairs {
            names.entry(code).or_insert(country);
        }

        Self { names }
    }

    /// Full country name for an alpha-2 code
    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn clean_cell(cell: &str) -> String {
    cell.trim().trim_matches('"').trim().to_string()
}

fn open(path: &Path) -> FlightsResult<File> {
    File::open(path).map_err(|source| FlightsError::Open {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airport_directory_missing_state() {
        let json = r#"{
            "KSAN": {"icao": "KSAN", "name": "San Diego International", "state": "California", "country": "US"},
            "EGLL": {"icao": "EGLL", "name": "London Heathrow", "country": "GB"}
        }"#;
        let directory = AirportDirectory::from_json(json.as_bytes()).unwrap();

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.get("KSAN").unwrap().state, "California");
        assert_eq!(directory.get("EGLL").unwrap().state, UNKNOWN_STATE);
        assert!(directory.get("ZZZZ").is_none());
    }

    #[test]
    fn test_country_names_strip_quotes() {
        let csv = "\"Country\",\"Alpha-2 code\",\"Alpha-3 code\"\n\
                   \"Afghanistan\", \"AF\", \"AFG\"\n\
                   \"Korea, Republic of\", \"KR\", \"KOR\"\n";
        let names = CountryNames::from_csv(csv.as_bytes()).unwrap();

        assert_eq!(names.name("AF"), Some("Afghanistan"));
        assert_eq!(names.name("KR"), Some("Korea, Republic of"));
    }

    #[test]
    fn test_country_names_first_alphabetical_wins() {
        let names = CountryNames::from_pairs(vec![
            ("Viet Nam".to_string(), "VN".to_string()),
            ("Vietnam".to_string(), "VN".to_string()),
        ]);
        assert_eq!(names.name("VN"), Some("Viet Nam"));

        let names = CountryNames::from_pairs(vec![
            ("Vietnam".to_string(), "VN".to_string()),
            ("Viet Nam".to_string(), "VN".to_string()),
        ]);
        assert_eq!(names.name("VN"), Some("Viet Nam"));
    }

    #[test]
    fn test_country_names_missing_column() {
        let csv = "Name,Code\nFrance,FR\n";
        let err = CountryNames::from_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, FlightsError::ColumnNotFound(_)));
    }
}
