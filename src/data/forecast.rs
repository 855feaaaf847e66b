//! Forecast payload ingestion
//!
//! This module parses a 3-hour forecast payload (the `list` + `city` shape used
//! by common 5-day forecast APIs) into normalized [`HourlySample`]s. Every field
//! in the payload is optional: missing numbers become `0` and missing labels
//! become an empty string, so the outlook pipeline never sees a partial sample.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::HourlySample;
use crate::units::{celsius_to_fahrenheit, Units};

/// Errors that can occur when reading a forecast payload
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Reading the payload failed
    #[error("Failed to read forecast from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Failed to parse JSON payload
    #[error("Failed to parse forecast JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Normalized forecast: samples in chronological order plus the location's UTC offset
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// Samples sorted by timestamp
    pub samples: Vec<HourlySample>,
    /// Offset of local time from UTC in seconds, if the payload supplied one
    pub utc_offset_seconds: Option<i64>,
}

/// Reads and parses a forecast payload from a file, or stdin when `path` is `-`.
///
/// # Arguments
/// * `path` - Path to the JSON payload, or `-`
/// * `units` - Display units; temperatures are converted from Celsius for imperial
///
/// # Returns
/// * `Ok(Forecast)` - Normalized samples and offset
/// * `Err(ForecastError)` - If reading or parsing fails
pub fn read_forecast(path: &Path, units: Units) -> Result<Forecast, ForecastError> {
    let io_error = |source| ForecastError::Io {
        path: path.display().to_string(),
        source,
    };

    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(io_error)?;
        buf
    } else {
        fs::read_to_string(path).map_err(io_error)?
    };

    parse_forecast(&text, units)
}

/// Parses a forecast payload string into normalized samples.
pub fn parse_forecast(text: &str, units: Units) -> Result<Forecast, ForecastError> {
    let payload: ForecastPayload = serde_json::from_str(text)?;

    let mut samples: Vec<HourlySample> = payload
        .list
        .into_iter()
        .map(|entry| to_sample(entry, units))
        .collect();

    let already_sorted = samples.windows(2).all(|w| w[0].timestamp <= w[1].timestamp);
    if !already_sorted {
        warn!("forecast entries were out of order, sorting by timestamp");
        samples.sort_by_key(|s| s.timestamp);
    }

    let utc_offset_seconds = payload.city.and_then(|c| c.timezone);
    debug!(
        samples = samples.len(),
        utc_offset_seconds = ?utc_offset_seconds,
        "parsed forecast payload"
    );

    Ok(Forecast {
        samples,
        utc_offset_seconds,
    })
}

/// Converts one payload entry into a sample, defaulting anything missing
fn to_sample(entry: ForecastEntry, units: Units) -> HourlySample {
    let main = entry.main.unwrap_or_default();
    let weather = entry.weather.into_iter().next().unwrap_or_default();
    let wind = entry.wind.unwrap_or_default();

    let celsius = main.temp.unwrap_or(0.0);
    let temperature = match units {
        Units::Metric => celsius,
        Units::Imperial => celsius_to_fahrenheit(celsius),
    };

    HourlySample {
        timestamp: entry.dt.unwrap_or(0),
        temperature,
        condition: weather.main.unwrap_or_default().trim().to_lowercase(),
        description: weather.description.unwrap_or_default().trim().to_lowercase(),
        humidity: main.humidity.unwrap_or(0.0).round().clamp(0.0, 100.0) as u8,
        wind_speed: wind.speed.unwrap_or(0.0),
        precipitation_probability: entry.pop.unwrap_or(0.0),
    }
}

/// Forecast payload structure
#[derive(Debug, Deserialize)]
struct ForecastPayload {
    #[serde(default)]
    list: Vec<ForecastEntry>,
    #[serde(default)]
    city: Option<CityInfo>,
}

/// Location block of the payload
#[derive(Debug, Deserialize)]
struct CityInfo {
    /// UTC offset in seconds
    #[serde(default)]
    timezone: Option<i64>,
}

/// One 3-hour entry of the payload
#[derive(Debug, Deserialize)]
struct ForecastEntry {
    #[serde(default)]
    dt: Option<i64>,
    #[serde(default)]
    main: Option<MainReadings>,
    #[serde(default)]
    weather: Vec<WeatherLabel>,
    #[serde(default)]
    wind: Option<WindReadings>,
    #[serde(default)]
    pop: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct MainReadings {
    #[serde(default)]
    temp: Option<f64>,
    #[serde(default)]
    humidity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct WeatherLabel {
    #[serde(default)]
    main: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WindReadings {
    #[serde(default)]
    speed: Option<f64>,
}
