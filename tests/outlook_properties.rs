//! End-to-end properties of the outlook pipeline
//!
//! Exercises aggregation and narrative together through the public library API.

use skycast::daily::aggregate_daily;
use skycast::data::NarrativeTemplate;
use skycast::day_key::day_key;
use skycast::narrative::classify_narrative;
use skycast::window::select_window;
use skycast::{build_outlook, HourlySample, OutlookConfig};

/// 2024-07-15T00:00:00Z
const DAY_START: i64 = 1_721_001_600;
const HOUR: i64 = 3_600;

fn sample(timestamp: i64, condition: &str, temperature: f64, pop: f64) -> HourlySample {
    HourlySample {
        timestamp,
        temperature,
        condition: condition.to_string(),
        description: String::new(),
        humidity: 50,
        wind_speed: 5.0,
        precipitation_probability: pop,
    }
}

/// Deterministic mixed stream of `n` 3-hour samples
fn mixed_stream(n: usize) -> Vec<HourlySample> {
    let labels = ["clear", "clouds", "rain", "rain", "drizzle", "snow", "mist", ""];
    (0..n)
        .map(|i| {
            sample(
                DAY_START + i as i64 * 3 * HOUR,
                labels[(i * 7) % labels.len()],
                ((i * 37) % 29) as f64 - 8.5,
                ((i * 13) % 11) as f64 / 10.0,
            )
        })
        .collect()
}

#[test]
fn test_partition_property_across_offsets_and_windows() {
    let stream = mixed_stream(64);

    for max_count in [0, 1, 7, 40, 64, 100] {
        let window = select_window(&stream, max_count);
        for offset in [-43_200, -18_000, 0, 19_800, 50_400] {
            let days = aggregate_daily(window, offset);
            let folded: usize = days.iter().map(|d| d.sample_count).sum();
            assert_eq!(folded, window.len(), "window {} offset {}", max_count, offset);
        }
    }
}

#[test]
fn test_min_max_equal_true_extremes() {
    let stream = mixed_stream(48);
    let offset = -18_000;

    for day in aggregate_daily(&stream, offset) {
        let temps: Vec<f64> = stream
            .iter()
            .filter(|s| day_key(s.timestamp, offset) == day.day_key)
            .map(|s| s.temperature)
            .collect();
        let min = temps.iter().copied().fold(f64::INFINITY, f64::min);
        let max = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        assert_eq!(day.temperature_min, min);
        assert_eq!(day.temperature_max, max);
        assert!(day.temperature_min <= day.temperature_max);
        assert!(day.rain_probability_percent <= 100);
    }
}

#[test]
fn test_scenario_single_rainy_day() {
    let samples = vec![
        sample(DAY_START, "rain", 10.0, 0.5),
        sample(DAY_START + 3 * HOUR, "rain", 11.0, 0.7),
        sample(DAY_START + 6 * HOUR, "rain", 12.0, 0.9),
    ];

    let days = aggregate_daily(&samples, 0);
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].rain_probability_percent, 70);

    let narrative = classify_narrative(&samples, 0);
    assert_eq!(narrative.rainy_day_count, 1);
    assert_eq!(narrative.template, NarrativeTemplate::OccasionalRain);
    assert!(narrative.summary_text.starts_with("Occasional rain"));
}

#[test]
fn test_scenario_six_rainy_days_of_eight() {
    let mut samples = Vec::new();
    for day in 0..8 {
        for slot in 0..8 {
            let label = if day < 6 && slot < 2 { "rain" } else { "clouds" };
            samples.push(sample(
                DAY_START + day * 24 * HOUR + slot * 3 * HOUR,
                label,
                15.0,
                0.3,
            ));
        }
    }

    let narrative = classify_narrative(&samples, 0);
    assert_eq!(narrative.summary_text, "Rain expected in 6 of the next 8 days.");
}

#[test]
fn test_scenario_wind_conversion() {
    let samples: Vec<HourlySample> = (0..10)
        .map(|i| sample(DAY_START + i * 3 * HOUR, "clouds", 10.0, 0.0))
        .collect();

    let narrative = classify_narrative(&samples, 0);
    assert!((narrative.average_wind_kmh - 18.0).abs() < 1e-9);
}

#[test]
fn test_scenario_day_bucketing_across_offset() {
    // 02:00 UTC and 14:00 UTC on July 15th; 21:00 on the 14th and 09:00 on the 15th in UTC-5
    let early = DAY_START + 2 * HOUR;
    let later = early + 12 * HOUR;

    assert_eq!(day_key(early, -18_000), "2024-07-14");
    assert_eq!(day_key(later, -18_000), "2024-07-15");

    let samples = vec![sample(early, "clear", 10.0, 0.0), sample(later, "clear", 20.0, 0.0)];
    let days = aggregate_daily(&samples, -18_000);
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].day_timestamp, early);
    assert_eq!(days[1].day_timestamp, later);
}

#[test]
fn test_empty_input_boundary() {
    assert!(aggregate_daily(&[], 0).is_empty());

    let narrative = classify_narrative(&[], 0);
    assert_eq!(narrative.rainy_day_count, 0);
    assert_eq!(narrative.template, NarrativeTemplate::Changing);
}

#[test]
fn test_outlook_is_bit_identical_on_rerun() {
    let stream = mixed_stream(40);
    let config = OutlookConfig::default();

    let first = build_outlook(&stream, Some(-14_400), None, &config);
    let second = build_outlook(&stream, Some(-14_400), None, &config);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
