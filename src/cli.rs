//! Command-line interface parsing for Skycast
//!
//! This module handles parsing of CLI arguments using clap and turning them
//! into an [`OutlookConfig`].

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::config::OutlookConfig;
use crate::units::Units;

/// Largest UTC offset accepted, in seconds (18 hours)
pub const MAX_OFFSET_SECONDS: i64 = 18 * 3_600;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified unit system is not recognized
    #[error("Invalid units: '{0}'. Valid units: metric, imperial")]
    InvalidUnits(String),

    /// The specified output format is not recognized
    #[error("Invalid format: '{0}'. Valid formats: text, json")]
    InvalidFormat(String),

    /// A sample count must be at least one
    #[error("--{0} must be greater than zero")]
    ZeroCount(&'static str),

    /// The UTC offset is outside +/-18 hours
    #[error("Invalid offset: {0} seconds. Offsets must be within +/-64800 seconds")]
    InvalidOffset(i64),
}

/// How the outlook is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Skycast - Daily outlook and weather narrative from a 3-hour forecast
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Daily outlook and weather narrative from a 3-hour forecast")]
#[command(version)]
pub struct Cli {
    /// Forecast JSON file, or `-` to read stdin
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of samples in the "next hours" list
    #[arg(long, value_name = "N")]
    pub hours: Option<usize>,

    /// Number of samples used for the daily outlook and narrative
    #[arg(long, value_name = "N")]
    pub horizon: Option<usize>,

    /// Maximum number of days listed
    #[arg(long, value_name = "N")]
    pub days: Option<usize>,

    /// UTC offset in seconds, overriding the forecast's own
    ///
    /// Examples:
    ///   skycast forecast.json --offset -18000   # UTC-5
    ///   skycast forecast.json --offset 19800    # UTC+5:30
    #[arg(long, value_name = "SECONDS", allow_hyphen_values = true)]
    pub offset: Option<i64>,

    /// Display units: metric or imperial
    #[arg(long, value_name = "UNITS", default_value = "metric")]
    pub units: String,

    /// Output format: text or json
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: String,

    /// Current condition label, used when the forecast has no samples
    #[arg(long, value_name = "LABEL")]
    pub current: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses a units argument into a [`Units`] value.
pub fn parse_units_arg(s: &str) -> Result<Units, CliError> {
    Units::from_str(s).ok_or_else(|| CliError::InvalidUnits(s.to_string()))
}

/// Parses a format argument into an [`OutputFormat`].
pub fn parse_format_arg(s: &str) -> Result<OutputFormat, CliError> {
    match s.to_lowercase().trim() {
        "text" | "txt" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(CliError::InvalidFormat(s.to_string())),
    }
}

impl OutlookConfig {
    /// Creates an OutlookConfig from parsed CLI arguments.
    ///
    /// Flags that were not given keep their defaults.
    ///
    /// # Returns
    /// * `Ok(OutlookConfig)` with the requested settings
    /// * `Err(CliError)` if a count is zero, the offset is out of range, or the units are unknown
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let mut config = OutlookConfig {
            units: parse_units_arg(&cli.units)?,
            ..OutlookConfig::default()
        };

        if let Some(hours) = cli.hours {
            config.hourly_window = non_zero(hours, "hours")?;
        }
        if let Some(horizon) = cli.horizon {
            config.outlook_horizon = non_zero(horizon, "horizon")?;
        }
        if let Some(days) = cli.days {
            config.max_days = non_zero(days, "days")?;
        }
        if let Some(offset) = cli.offset {
            if !(-MAX_OFFSET_SECONDS..=MAX_OFFSET_SECONDS).contains(&offset) {
                return Err(CliError::InvalidOffset(offset));
            }
            config.utc_offset_seconds = Some(offset);
        }

        Ok(config)
    }
}

fn non_zero(value: usize, flag: &'static str) -> Result<usize, CliError> {
    if value == 0 {
        Err(CliError::ZeroCount(flag))
    } else {
        Ok(value)
    }
}
