//! phylo - command-line tools for phylogeographic analyses
//!
//! - `hpd`: posterior summary and HPD interval of a trace column
//! - `to-decimal` / `to-date`: decimal-year conversions
//! - `flights`: flights into an airport, by origin location
//! - `style`: default figure styling as JSON

mod cli;
mod commands;
mod error;
mod trace;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Command::Hpd(args) => commands::hpd(args)?,
        Command::ToDecimal { date, format } => commands::to_decimal(date, format)?,
        Command::ToDate { value, format } => commands::to_date(*value, format)?,
        Command::Flights(args) => commands::flights(args).await?,
        Command::Style => commands::style()?,
    }

    Ok(())
}
