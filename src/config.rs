//! Outlook settings
//!
//! Horizons are counted in samples; with 3-hour sampling, 8 samples cover a day.

use crate::units::Units;

/// Settings for one outlook run
#[derive(Debug, Clone, PartialEq)]
pub struct OutlookConfig {
    /// Samples shown in the "next hours" list
    pub hourly_window: usize,
    /// Samples fed into aggregation and the narrative
    pub outlook_horizon: usize,
    /// Daily aggregates kept in the outlook
    pub max_days: usize,
    /// UTC offset override; when `None` the forecast's own offset (or UTC) is used
    pub utc_offset_seconds: Option<i64>,
    /// Display units
    pub units: Units,
}

impl Default for OutlookConfig {
    fn default() -> Self {
        Self {
            hourly_window: 8,     // 24 hours
            outlook_horizon: 40,  // 5 days
            max_days: 10,
            utc_offset_seconds: None,
            units: Units::Metric,
        }
    }
}

impl OutlookConfig {
    /// Picks the offset to bucket days with: the override, then the forecast's, then UTC
    pub fn resolve_offset(&self, forecast_offset: Option<i64>) -> i64 {
        self.utc_offset_seconds.or(forecast_offset).unwrap_or(0)
    }
}
