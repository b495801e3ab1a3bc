//! Configuration for the flight aggregation pipeline
//!
//! Loaded from TOML; every field has a default, so a file only needs the
//! values that differ:
//!
//! ```toml
//! destination = "KSAN"
//! flightlist_dir = "/data/opensky"
//! output = "flights.csv"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// mwgg/Airports database (ICAO id -> location)
pub const AIRPORT_DB_URL: &str = "https://raw.githubusercontent.com/mwgg/Airports/master/airports.json";

/// Country names and ISO alpha-2 codes
pub const COUNTRY_CODES_URL: &str = "https://gist.githubusercontent.com/tadast/8827699/raw/f5cac3d42d16b78348610fc4ec301e9234f82821/countries_codes_and_coordinates.csv";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Empty value: {0}")]
    Empty(String),

    #[error("Invalid ICAO airport code: {0}")]
    InvalidAirport(String),
}

/// Flight aggregation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightsConfig {
    /// ICAO code of the destination airport
    pub destination: String,
    /// Directory holding the flight-list files
    pub flightlist_dir: PathBuf,
    /// Flight-list file names, relative to `flightlist_dir`
    pub flightlist_files: Vec<String>,
    /// Airport database: a path or an http(s) URL
    pub airport_db: String,
    /// Country-code table: a path or an http(s) URL
    pub country_codes: String,
    /// Output CSV path
    pub output: PathBuf,
    /// Countries reported by state/province instead of by country
    pub local_countries: Vec<String>,
    /// Display-name replacements applied after code resolution
    pub name_overrides: BTreeMap<String, String>,
}

impl Default for FlightsConfig {
    fn default() -> Self {
        let flightlist_files = [
            "20190101_20190131",
            "20190201_20190228",
            "20190301_20190331",
            "20190401_20190430",
            "20190501_20190531",
            "20190601_20190630",
            "20190701_20190731",
            "20190801_20190831",
            "20190901_20190930",
            "20191001_20191031",
            "20191101_20191130",
            "20191201_20191231",
        ]
        .iter()
        .map(|range| format!("flightlist_{}.csv.gz", range))
        .collect();

        let mut name_overrides = BTreeMap::new();
        name_overrides.insert("Korea, Republic of".to_string(), "South Korea".to_string());

        Self {
            destination: "KSAN".to_string(),
            flightlist_dir: PathBuf::from("."),
            flightlist_files,
            airport_db: AIRPORT_DB_URL.to_string(),
            country_codes: COUNTRY_CODES_URL.to_string(),
            output: PathBuf::from("flights.csv"),
            local_countries: vec!["US".to_string(), "MX".to_string(), "CA".to_string()],
            name_overrides,
        }
    }
}

impl FlightsConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Full paths of the configured flight-list files
    pub fn flightlist_paths(&self) -> Vec<PathBuf> {
        self.flightlist_files
            .iter()
            .map(|name| self.flightlist_dir.join(name))
            .collect()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_icao_code(&self.destination) {
            return Err(ConfigError::InvalidAirport(self.destination.clone()));
        }

        if self.flightlist_files.is_empty() {
            return Err(ConfigError::Empty("flightlist_files".to_string()));
        }

        if self.airport_db.trim().is_empty() {
            return Err(ConfigError::Empty("airport_db".to_string()));
        }

        if self.country_codes.trim().is_empty() {
            return Err(ConfigError::Empty("country_codes".to_string()));
        }

        Ok(())
    }
}

/// ICAO airport codes are four ASCII letters or digits
fn is_icao_code(code: &str) -> bool {
    code.len() == 4 && code.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Where a reference table comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    /// Classify a configured location as URL or local path
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Source::Url(location.to_string())
        } else {
            Source::Path(PathBuf::from(location))
        }
    }
}
