//! Core data models for Skycast
//!
//! This module contains the records that flow through the outlook pipeline:
//! raw forecast samples in, per-day aggregates and a narrative out.

pub mod forecast;

pub use forecast::{parse_forecast, read_forecast, Forecast, ForecastError};

use serde::{Deserialize, Serialize};

/// One forecast observation, typically three hours apart from its neighbours
///
/// Samples are produced by the ingestion layer with every missing number
/// defaulted to `0` and every missing label defaulted to an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    /// Seconds since the Unix epoch, UTC
    pub timestamp: i64,
    /// Temperature, already in the caller's display unit
    pub temperature: f64,
    /// Lowercase condition label (e.g. "rain", "clear", "clouds")
    pub condition: String,
    /// Free-text provider description (e.g. "light rain")
    pub description: String,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Precipitation probability as a fraction (0-1)
    pub precipitation_probability: f64,
}

/// Summary of every sample that fell on one local calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    /// Day key (`YYYY-MM-DD`) the samples were grouped under
    pub day_key: String,
    /// Timestamp of the first sample assigned to this day
    pub day_timestamp: i64,
    /// Lowest temperature seen that day
    pub temperature_min: f64,
    /// Highest temperature seen that day
    pub temperature_max: f64,
    /// Condition label of the first sample of the day
    pub representative_condition: String,
    /// Description of the first sample of the day
    pub representative_description: String,
    /// Mean precipitation probability as a whole percentage (0-100)
    pub rain_probability_percent: u8,
    /// Mean wind speed in m/s
    pub average_wind_speed: f64,
    /// Number of samples folded into this day
    pub sample_count: usize,
}

/// Which summary sentence the narrative classifier picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeTemplate {
    /// Six or more rainy days
    PersistentRain,
    /// Three to five rainy days
    ScatteredRain,
    /// One or two rainy days
    OccasionalRain,
    /// Rain reported by the current condition alone, with no day figures
    RainExpected,
    /// Mostly snow
    Snow,
    /// Mostly thunderstorms
    Thunderstorms,
    /// Mostly clear
    ClearSkies,
    /// Mostly cloudy
    Cloudy,
    /// Nothing more specific applies
    Changing,
}

/// The outlook sentence plus the figures that selected it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeResult {
    /// Sentence to display verbatim
    pub summary_text: String,
    /// Template the sentence was built from
    pub template: NarrativeTemplate,
    /// Days with at least two rain-family samples
    pub rainy_day_count: usize,
    /// Distinct days represented, capped at the outlook horizon
    pub total_day_count: usize,
    /// Mean wind over all samples in km/h
    pub average_wind_kmh: f64,
    /// Most frequent condition label, if any samples were seen
    pub dominant_condition: Option<String>,
}

/// Closed grouping of condition labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionFamily {
    Rain,
    Snow,
    Thunderstorm,
    Clear,
    Cloud,
    Fog,
    Other,
}

impl ConditionFamily {
    /// Classifies a condition label or description into a family.
    ///
    /// Well-known labels are looked up directly. Anything else is scanned for
    /// family keywords in a fixed priority order, so "thunderstorm with light
    /// rain" is a thunderstorm, "light snow showers" and "snowstorm" are snow,
    /// and "sandstorm" is fog.
    pub fn from_label(label: &str) -> ConditionFamily {
        let label = label.trim().to_lowercase();
        match label.as_str() {
            "rain" | "drizzle" | "shower rain" | "showers" => return ConditionFamily::Rain,
            "snow" | "sleet" => return ConditionFamily::Snow,
            "thunderstorm" => return ConditionFamily::Thunderstorm,
            "clear" | "sunny" => return ConditionFamily::Clear,
            "clouds" | "cloudy" | "overcast" => return ConditionFamily::Cloud,
            "mist" | "fog" | "haze" => return ConditionFamily::Fog,
            "" => return ConditionFamily::Other,
            _ => {}
        }

        let has = |words: &[&str]| words.iter().any(|w| label.contains(w));
        if has(&["thunder"]) {
            ConditionFamily::Thunderstorm
        } else if has(&["snow", "sleet"]) {
            ConditionFamily::Snow
        } else if has(&["rain", "drizzle", "shower"]) {
            ConditionFamily::Rain
        } else if has(&["sand", "dust"]) {
            ConditionFamily::Fog
        } else if has(&["storm"]) {
            ConditionFamily::Thunderstorm
        } else if has(&["clear", "sun"]) {
            ConditionFamily::Clear
        } else if has(&["cloud", "overcast"]) {
            ConditionFamily::Cloud
        } else if has(&["mist", "fog", "haze", "smoke", "dust", "sand", "ash"]) {
            ConditionFamily::Fog
        } else {
            ConditionFamily::Other
        }
    }

    /// Whether samples of this family count toward a rainy day
    pub fn is_wet(&self) -> bool {
        matches!(self, ConditionFamily::Rain | ConditionFamily::Thunderstorm)
    }
}
