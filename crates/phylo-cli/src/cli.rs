//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use phylo_dates::DEFAULT_FORMAT;
use phylo_flights::{ConfigError, FlightsConfig};
use phylo_stats::DEFAULT_LEVEL;

#[derive(Debug, Parser)]
#[command(name = "phylo", version, about = "Phylogeographic dating and flight-traffic tools")]
pub struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize a posterior trace column with its HPD interval
    Hpd(HpdArgs),

    /// Convert a calendar date to a decimal year
    ToDecimal {
        date: String,

        /// strftime-style format of DATE
        #[arg(long, default_value = DEFAULT_FORMAT)]
        format: String,
    },

    /// Convert a decimal year to a calendar date
    ToDate {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// strftime-style output format
        #[arg(long, default_value = "%Y-%m-%d %H:%M:%S")]
        format: String,
    },

    /// Count flights into an airport by origin location
    Flights(FlightsArgs),

    /// Print the default figure style as JSON
    Style,
}

#[derive(Debug, Args)]
pub struct HpdArgs {
    /// Trace file (tab- or comma-separated, `#` comments allowed)
    pub file: PathBuf,

    /// Column holding the parameter samples
    #[arg(short, long)]
    pub column: String,

    /// Probability mass enclosed by the interval
    #[arg(short, long, default_value_t = DEFAULT_LEVEL)]
    pub level: f64,

    /// Leading fraction of samples discarded as burn-in
    #[arg(short, long, default_value_t = 0.0)]
    pub burnin: f64,

    /// Also print interval bounds as calendar dates (samples in decimal years)
    #[arg(long)]
    pub dates: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FlightsArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// ICAO code of the destination airport
    #[arg(short, long)]
    pub destination: Option<String>,

    /// Directory holding the flight-list files
    #[arg(long)]
    pub flightlist_dir: Option<PathBuf>,

    /// Output CSV path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl FlightsArgs {
    /// Load the config file (or the defaults) and apply command-line overrides
    pub fn load_config(&self) -> Result<FlightsConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => FlightsConfig::from_file(path)?,
            None => FlightsConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// Replace config values with those given on the command line
    pub fn apply_overrides(&self, config: &mut FlightsConfig) {
        if let Some(destination) = &self.destination {
            config.destination = destination.clone();
        }
        if let Some(dir) = &self.flightlist_dir {
            config.flightlist_dir = dir.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
    }
}
