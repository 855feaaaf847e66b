//! Text and JSON output for an outlook
//!
//! Times are shown in the outlook's local offset; wind uses the caller's units.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::pipeline::Outlook;
use crate::units::{probability_to_percent, Units};

/// Formats an outlook into a human-readable string
pub fn format_text(outlook: &Outlook, units: Units) -> String {
    let offset = outlook.utc_offset_seconds;
    let temp_suffix = units.temperature_suffix();
    let wind_suffix = units.wind_suffix();

    let mut output = format!("{}\n", outlook.narrative.summary_text);

    if !outlook.hourly.is_empty() {
        output.push_str("\nNext hours:\n");
        for sample in &outlook.hourly {
            output.push_str(&format!(
                "  {}  {:>6.1}{}  {:<14}  rain {:>3}%  wind {:.0} {}\n",
                local_time(sample.timestamp, offset).format("%a %H:%M"),
                sample.temperature,
                temp_suffix,
                label_or_dash(&sample.condition),
                probability_to_percent(sample.precipitation_probability),
                units.wind_from_ms(sample.wind_speed),
                wind_suffix
            ));
        }
    }

    if !outlook.daily.is_empty() {
        output.push_str("\nDaily outlook:\n");
        for day in &outlook.daily {
            output.push_str(&format!(
                "  {}  {:>6.1}{} / {:>6.1}{}  {:<14}  rain {:>3}%  wind {:.0} {}\n",
                local_time(day.day_timestamp, offset).format("%a %b %d"),
                day.temperature_min,
                temp_suffix,
                day.temperature_max,
                temp_suffix,
                label_or_dash(&day.representative_condition),
                day.rain_probability_percent,
                units.wind_from_ms(day.average_wind_speed),
                wind_suffix
            ));
        }
    }

    output
}

/// Formats an outlook as pretty-printed JSON
pub fn format_json(outlook: &Outlook) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outlook)
}

fn local_time(timestamp: i64, offset: i64) -> NaiveDateTime {
    DateTime::<Utc>::from_timestamp(timestamp.saturating_add(offset), 0)
        .unwrap_or_default()
        .naive_utc()
}

fn label_or_dash(label: &str) -> &str {
    if label.is_empty() {
        "-"
    } else {
        label
    }
}
