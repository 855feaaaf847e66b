//! Unit conversions for wind speed, temperature and precipitation probability
//!
//! Samples arrive with wind in meters/second and precipitation probability as a
//! fraction. These helpers convert them into the figures shown to users.

use serde::{Deserialize, Serialize};

/// Meters/second to kilometers/hour factor
pub const MS_TO_KMH: f64 = 3.6;

/// Meters/second to miles/hour factor
pub const MS_TO_MPH: f64 = 2.236_936;

/// Display unit preference supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius and km/h
    #[default]
    Metric,
    /// Fahrenheit and mph
    Imperial,
}

impl Units {
    /// Parses a unit name, case-insensitive.
    ///
    /// Returns `None` if the input doesn't match any unit system.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Units> {
        match s.to_lowercase().trim() {
            "metric" | "c" | "celsius" => Some(Units::Metric),
            "imperial" | "f" | "fahrenheit" => Some(Units::Imperial),
            _ => None,
        }
    }

    /// Suffix appended to temperatures in this unit system
    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "\u{00b0}C",
            Units::Imperial => "\u{00b0}F",
        }
    }

    /// Suffix appended to wind speeds in this unit system
    pub fn wind_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "km/h",
            Units::Imperial => "mph",
        }
    }

    /// Converts a wind speed in m/s into this unit system's display unit
    pub fn wind_from_ms(&self, speed: f64) -> f64 {
        match self {
            Units::Metric => ms_to_kmh(speed),
            Units::Imperial => ms_to_mph(speed),
        }
    }
}

/// Converts meters/second to kilometers/hour.
pub fn ms_to_kmh(speed: f64) -> f64 {
    speed * MS_TO_KMH
}

/// Converts kilometers/hour to meters/second.
pub fn kmh_to_ms(speed: f64) -> f64 {
    speed / MS_TO_KMH
}

/// Converts meters/second to miles/hour.
pub fn ms_to_mph(speed: f64) -> f64 {
    speed * MS_TO_MPH
}

/// Converts Celsius to Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Normalizes a precipitation probability fraction (0-1) to a whole percentage.
///
/// The result is rounded and clamped to 0-100. Non-finite input yields 0.
pub fn probability_to_percent(probability: f64) -> u8 {
    if !probability.is_finite() {
        return 0;
    }
    (probability * 100.0).round().clamp(0.0, 100.0) as u8
}
