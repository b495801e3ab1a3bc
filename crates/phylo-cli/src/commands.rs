//! Subcommand implementations

use std::fs::File;
use std::io::BufWriter;

use phylo_dates::{date_to_decimal_year, try_decimal_year_to_date, DateInterval, DEFAULT_FORMAT};
use phylo_flights::{
    fetch, read_flightlists, write_summary, AirportDirectory, CountryNames, OriginAggregator,
    Source,
};
use phylo_stats::{discard_burnin, PosteriorSummary};
use phylo_viz::{AxesFormat, DateAxisFormat, Palette, PlotStyle};
use serde::Serialize;

use crate::cli::{FlightsArgs, HpdArgs};
use crate::error::CliResult;
use crate::trace::read_column_file;

/// Summarize one trace column
pub fn hpd(args: &HpdArgs) -> CliResult<()> {
    let samples = read_column_file(&args.file, &args.column)?;
    let samples = discard_burnin(&samples, args.burnin)?;

    let Some(summary) = PosteriorSummary::from_samples(samples, args.level)? else {
        println!("{}: no samples after burn-in", args.column);
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let percent = summary.level * 100.0;
    println!("{:<12}{}", "column", args.column);
    println!("{:<12}{}", "samples", summary.count);
    println!("{:<12}{}", "mean", summary.mean);
    println!("{:<12}{}", "median", summary.median);
    println!("{:<12}{}", "std dev", summary.std_dev);
    println!("{:<12}[{}, {}]", "range", summary.min, summary.max);

    match summary.hpd {
        Some(interval) => {
            println!(
                "{:<12}[{}, {}]",
                format!("{}% HPD", percent),
                interval.lower,
                interval.upper
            );
            if args.dates {
                let (start, end) = DateInterval::from_decimal_years(interval.lower, interval.upper)?
                    .format(DEFAULT_FORMAT);
                println!("{:<12}{} .. {}", "", start, end);
            }
        }
        None => {
            tracing::warn!(
                samples = summary.count,
                level = summary.level,
                "too few samples for an HPD interval"
            );
            println!("{:<12}insufficient data", format!("{}% HPD", percent));
        }
    }

    Ok(())
}

/// Print a date as a decimal year
pub fn to_decimal(date: &str, format: &str) -> CliResult<()> {
    println!("{}", date_to_decimal_year(date, format)?);
    Ok(())
}

/// Print a decimal year as a date
pub fn to_date(value: f64, format: &str) -> CliResult<()> {
    println!("{}", try_decimal_year_to_date(value)?.format(format));
    Ok(())
}

/// Run the flight aggregation pipeline
pub async fn flights(args: &FlightsArgs) -> CliResult<()> {
    let config = args.load_config()?;
    config.validate()?;

    let airports = match Source::parse(&config.airport_db) {
        Source::Path(path) => AirportDirectory::from_path(&path)?,
        Source::Url(url) => fetch::fetch_airport_directory(&url).await?,
    };
    let names = match Source::parse(&config.country_codes) {
        Source::Path(path) => CountryNames::from_path(&path)?,
        Source::Url(url) => fetch::fetch_country_names(&url).await?,
    };

    let flights = read_flightlists(&config.flightlist_paths(), &config.destination)?;
    let summary = OriginAggregator::new(&airports, &names, &config).summarize(&flights);

    write_summary(BufWriter::new(File::create(&config.output)?), &summary)?;
    tracing::info!(
        origins = summary.len(),
        output = %config.output.display(),
        "wrote flight summary"
    );
    Ok(())
}

#[derive(Serialize)]
struct FigureDefaults {
    style: PlotStyle,
    axes: AxesFormat,
    date_axis: DateAxisFormat,
    palette: Palette,
}

/// Print the default figure style
pub fn style() -> CliResult<()> {
    let defaults = FigureDefaults {
        style: PlotStyle::default(),
        axes: AxesFormat::default(),
        date_axis: DateAxisFormat::default(),
        palette: Palette::okabe_ito(),
    };
    println!("{}", serde_json::to_string_pretty(&defaults)?);
    Ok(())
}
