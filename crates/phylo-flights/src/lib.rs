//! phylo-flights - Flight traffic into an airport, by origin
//!
//! Turns OpenSky flight lists into a per-origin flight count for one
//! destination airport:
//!
//! - **Records**: typed rows of the monthly flight-list CSV files
//! - **Locations**: airport (ICAO) directory and country-code names
//! - **Aggregate**: origin enrichment, counting and name clean-up
//! - **Config**: TOML pipeline configuration
//!
//! Reference tables can be downloaded with the `fetch` feature.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod locations;
pub mod record;

#[cfg(feature = "fetch")]
pub mod fetch;

pub use aggregate::*;
pub use config::*;
pub use error::*;
pub use locations::*;
pub use record::*;
