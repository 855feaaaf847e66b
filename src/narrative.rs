//! Rule-based outlook narrative
//!
//! Counts rainy days, finds the dominant condition and picks one summary
//! sentence by a fixed priority of rules. Unknown or empty labels fall through
//! to the "changing weather" sentence, so classification never fails.

use std::collections::HashMap;

use crate::data::{ConditionFamily, HourlySample, NarrativeResult, NarrativeTemplate};
use crate::day_key::day_key;
use crate::units::ms_to_kmh;

/// Days the narrative talks about at most
pub const MAX_OUTLOOK_DAYS: usize = 10;

/// Rain-family samples needed in one day for it to count as rainy.
/// With 3-hour sampling, two samples are about six hours of rain.
pub const RAINY_DAY_MIN_SAMPLES: usize = 2;

/// Builds the outlook narrative from a sample stream.
///
/// # Arguments
/// * `samples` - Forecast samples, normally already capped to the outlook horizon
/// * `utc_offset_seconds` - Offset used to group samples into local days
///
/// # Returns
/// The selected sentence and the figures that selected it. Empty input gives
/// the "changing weather" sentence with every figure at zero.
pub fn classify_narrative(samples: &[HourlySample], utc_offset_seconds: i64) -> NarrativeResult {
    let (rainy_day_count, total_day_count) = count_days(samples, utc_offset_seconds);
    let dominant_condition = dominant_condition(samples);
    let average_wind_kmh = average_wind_kmh(samples);

    let dominant_family = dominant_condition
        .as_deref()
        .map(ConditionFamily::from_label)
        .unwrap_or(ConditionFamily::Other);

    let template = if rainy_day_count >= 6 {
        NarrativeTemplate::PersistentRain
    } else if rainy_day_count >= 3 {
        NarrativeTemplate::ScatteredRain
    } else if rainy_day_count >= 1 {
        NarrativeTemplate::OccasionalRain
    } else {
        match dominant_family {
            ConditionFamily::Snow => NarrativeTemplate::Snow,
            ConditionFamily::Thunderstorm => NarrativeTemplate::Thunderstorms,
            ConditionFamily::Clear => NarrativeTemplate::ClearSkies,
            ConditionFamily::Cloud => NarrativeTemplate::Cloudy,
            _ => NarrativeTemplate::Changing,
        }
    };

    let wind = average_wind_kmh.round();
    let summary_text = match template {
        NarrativeTemplate::PersistentRain => format!(
            "Rain expected in {} of the next {} days.",
            rainy_day_count, total_day_count
        ),
        NarrativeTemplate::ScatteredRain => {
            format!("Scattered rain expected. Winds up to {:.0} km/h.", wind)
        }
        NarrativeTemplate::OccasionalRain => format!(
            "Occasional rain in the next {} days. Winds {:.0} km/h.",
            total_day_count, wind
        ),
        NarrativeTemplate::RainExpected => "Rain expected in the coming days.".to_string(),
        NarrativeTemplate::Snow => {
            format!("Snow expected in the coming days. Winds {:.0} km/h.", wind)
        }
        NarrativeTemplate::Thunderstorms => {
            format!("Thunderstorms possible. Gusts up to {:.0} km/h.", wind)
        }
        NarrativeTemplate::ClearSkies => format!(
            "Clear skies continue throughout the day. Winds up to {:.0} km/h.",
            wind
        ),
        NarrativeTemplate::Cloudy => format!(
            "Cloudy conditions continue throughout the day. Winds up to {:.0} km/h.",
            wind
        ),
        NarrativeTemplate::Changing => {
            format!("Changing weather in the coming days. Winds {:.0} km/h.", wind)
        }
    };

    NarrativeResult {
        summary_text,
        template,
        rainy_day_count,
        total_day_count,
        average_wind_kmh,
        dominant_condition,
    }
}

/// Builds a narrative from a single current-condition label.
///
/// This is the fallback when no forecast series is available. It applies the
/// same family checks as [`classify_narrative`] but has no wind or day figures.
pub fn narrate_condition(label: &str) -> NarrativeResult {
    let (template, text) = match ConditionFamily::from_label(label) {
        ConditionFamily::Rain => (
            NarrativeTemplate::RainExpected,
            "Rain expected in the coming days.",
        ),
        ConditionFamily::Snow => (NarrativeTemplate::Snow, "Snow expected in the coming days."),
        ConditionFamily::Thunderstorm => {
            (NarrativeTemplate::Thunderstorms, "Thunderstorms possible.")
        }
        ConditionFamily::Clear => (
            NarrativeTemplate::ClearSkies,
            "Clear skies continue throughout the day.",
        ),
        ConditionFamily::Cloud => (
            NarrativeTemplate::Cloudy,
            "Cloudy conditions continue throughout the day.",
        ),
        ConditionFamily::Fog | ConditionFamily::Other => (
            NarrativeTemplate::Changing,
            "Changing weather in the coming days.",
        ),
    };

    let label = label.trim().to_lowercase();
    NarrativeResult {
        summary_text: text.to_string(),
        template,
        rainy_day_count: 0,
        total_day_count: 0,
        average_wind_kmh: 0.0,
        dominant_condition: (!label.is_empty()).then_some(label),
    }
}

/// Returns (rainy days, total days), both limited to the first
/// [`MAX_OUTLOOK_DAYS`] days in order of appearance.
fn count_days(samples: &[HourlySample], utc_offset_seconds: i64) -> (usize, usize) {
    let mut wet_by_day: Vec<usize> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut families: HashMap<&str, ConditionFamily> = HashMap::new();

    for sample in samples {
        let key = day_key(sample.timestamp, utc_offset_seconds);
        let slot = match index.get(&key) {
            Some(&i) => i,
            None => {
                index.insert(key, wet_by_day.len());
                wet_by_day.push(0);
                wet_by_day.len() - 1
            }
        };

        let family = *families
            .entry(sample.condition.as_str())
            .or_insert_with(|| ConditionFamily::from_label(&sample.condition));
        if family.is_wet() {
            wet_by_day[slot] += 1;
        }
    }

    let counted = &wet_by_day[..wet_by_day.len().min(MAX_OUTLOOK_DAYS)];
    let rainy = counted
        .iter()
        .filter(|&&wet| wet >= RAINY_DAY_MIN_SAMPLES)
        .count();
    (rainy, counted.len())
}

/// Most frequent condition label; ties go to the label seen first.
fn dominant_condition(samples: &[HourlySample]) -> Option<String> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for sample in samples {
        let label = sample.condition.as_str();
        match index.get(label) {
            Some(&i) => tally[i].1 += 1,
            None => {
                index.insert(label, tally.len());
                tally.push((label, 1));
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for &(label, count) in &tally {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label.to_string())
}

/// Mean wind over all samples in km/h, 0 for no samples
fn average_wind_kmh(samples: &[HourlySample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let total: f64 = samples.iter().map(|s| s.wind_speed).sum();
    let mean = ms_to_kmh(total / samples.len() as f64);
    if mean.is_finite() {
        mean.max(0.0)
    } else {
        0.0
    }
}
