//! Outlook pipeline
//!
//! Wires the pieces together: cap the horizon, aggregate by day, classify the
//! narrative, and cut the short "next hours" list. Each call owns all of its
//! state, so concurrent calls never interfere.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::OutlookConfig;
use crate::daily::aggregate_daily;
use crate::data::{DailyAggregate, HourlySample, NarrativeResult};
use crate::narrative::{classify_narrative, narrate_condition};
use crate::window::select_window;

/// Everything a renderer needs for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlook {
    /// Leading samples for the "next hours" list
    pub hourly: Vec<HourlySample>,
    /// One aggregate per local day, chronological for sorted input
    pub daily: Vec<DailyAggregate>,
    /// Outlook sentence and its figures
    pub narrative: NarrativeResult,
    /// Offset the days were grouped under
    pub utc_offset_seconds: i64,
}

/// Builds the outlook for a sample stream.
///
/// # Arguments
/// * `samples` - Forecast samples in chronological order
/// * `forecast_offset` - UTC offset reported with the forecast, if any
/// * `current_condition` - Current condition label, used only when there are no samples
/// * `config` - Horizons, day cap and offset override
pub fn build_outlook(
    samples: &[HourlySample],
    forecast_offset: Option<i64>,
    current_condition: Option<&str>,
    config: &OutlookConfig,
) -> Outlook {
    let offset = config.resolve_offset(forecast_offset);
    let horizon = select_window(samples, config.outlook_horizon);

    let mut daily = aggregate_daily(horizon, offset);
    daily.truncate(config.max_days);

    let narrative = match current_condition {
        Some(label) if horizon.is_empty() => {
            debug!(label, "no forecast samples, narrating current condition");
            narrate_condition(label)
        }
        _ => classify_narrative(horizon, offset),
    };

    let hourly = select_window(samples, config.hourly_window).to_vec();

    debug!(
        samples = samples.len(),
        horizon = horizon.len(),
        days = daily.len(),
        rainy_days = narrative.rainy_day_count,
        template = ?narrative.template,
        "built outlook"
    );

    Outlook {
        hourly,
        daily,
        narrative,
        utc_offset_seconds: offset,
    }
}
