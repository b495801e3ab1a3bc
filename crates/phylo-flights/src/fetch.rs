//! Download reference tables over HTTP

use crate::error::{FlightsError, FlightsResult};
use crate::locations::{AirportDirectory, CountryNames};

async fn fetch_text(url: &str) -> FlightsResult<String> {
    tracing::info!(url, "downloading reference table");

    let response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| FlightsError::Http(e.to_string()))?;

    response
        .text()
        .await
        .map_err(|e| FlightsError::Http(e.to_string()))
}

/// Download and parse the mwgg/Airports database
pub async fn fetch_airport_directory(url: &str) -> FlightsResult<AirportDirectory> {
    let body = fetch_text(url).await?;
    AirportDirectory::from_json(body.as_bytes())
}

/// Download and parse the country-code table
pub async fn fetch_country_names(url: &str) -> FlightsResult<CountryNames> {
    let body = fetch_text(url).await?;
    CountryNames::from_csv(body.as_bytes())
}
