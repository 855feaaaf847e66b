//! Daily aggregation of forecast samples
//!
//! Folds a sample stream into one [`DailyAggregate`] per local calendar day:
//! temperature range, first-seen condition, mean precipitation probability and
//! mean wind. All running state lives in a per-call accumulator that is
//! discarded once the aggregates are finalized.

use std::collections::HashMap;

use crate::data::{DailyAggregate, HourlySample};
use crate::day_key::day_key;
use crate::units::probability_to_percent;

/// Running totals for one day while samples are being folded in
#[derive(Debug, Clone)]
struct DayAccumulator {
    day_key: String,
    day_timestamp: i64,
    /// (min, max) once at least one temperature has been seen
    temperature_range: Option<(f64, f64)>,
    condition: String,
    description: String,
    probability_sum: f64,
    wind_sum: f64,
    sample_count: usize,
}

impl DayAccumulator {
    fn new(day_key: String, first: &HourlySample) -> Self {
        Self {
            day_key,
            day_timestamp: first.timestamp,
            temperature_range: None,
            // The first sample of the day names the day's condition
            condition: first.condition.clone(),
            description: first.description.clone(),
            probability_sum: 0.0,
            wind_sum: 0.0,
            sample_count: 0,
        }
    }

    fn fold(&mut self, sample: &HourlySample) {
        let t = sample.temperature;
        self.temperature_range = Some(match self.temperature_range {
            None => (t, t),
            Some((min, max)) => (min.min(t), max.max(t)),
        });
        self.probability_sum += sample.precipitation_probability;
        self.wind_sum += sample.wind_speed;
        self.sample_count += 1;
    }

    fn finish(self) -> DailyAggregate {
        let (temperature_min, temperature_max) = self.temperature_range.unwrap_or((0.0, 0.0));
        let (rain_probability_percent, average_wind_speed) = if self.sample_count == 0 {
            (0, 0.0)
        } else {
            let n = self.sample_count as f64;
            (
                probability_to_percent(self.probability_sum / n),
                self.wind_sum / n,
            )
        };

        DailyAggregate {
            day_key: self.day_key,
            day_timestamp: self.day_timestamp,
            temperature_min,
            temperature_max,
            representative_condition: self.condition,
            representative_description: self.description,
            rain_probability_percent,
            average_wind_speed,
            sample_count: self.sample_count,
        }
    }
}

/// Aggregates samples into one record per local calendar day.
///
/// Days are returned in order of first appearance. For chronologically sorted
/// input that is also chronological order; otherwise sort by `day_timestamp`.
///
/// # Arguments
/// * `samples` - Forecast samples, normally sorted by timestamp
/// * `utc_offset_seconds` - Offset used to decide which local day a sample is on
///
/// # Returns
/// One `DailyAggregate` per distinct day key; empty for empty input.
pub fn aggregate_daily(samples: &[HourlySample], utc_offset_seconds: i64) -> Vec<DailyAggregate> {
    let mut days: Vec<DayAccumulator> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for sample in samples {
        let key = day_key(sample.timestamp, utc_offset_seconds);
        let slot = match index.get(&key) {
            Some(&i) => i,
            None => {
                index.insert(key.clone(), days.len());
                days.push(DayAccumulator::new(key, sample));
                days.len() - 1
            }
        };
        days[slot].fold(sample);
    }

    days.into_iter().map(DayAccumulator::finish).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// 2024-07-15T00:00:00Z
    const DAY_START: i64 = 1_721_001_600;
    const HOUR: i64 = 3_600;
    const DAY: i64 = 24 * HOUR;

    fn sample(timestamp: i64, temperature: f64, condition: &str, pop: f64) -> HourlySample {
        HourlySample {
            timestamp,
            temperature,
            condition: condition.to_string(),
            description: format!("{} description", condition),
            humidity: 50,
            wind_speed: 2.0,
            precipitation_probability: pop,
        }
    }

    #[test]
    fn test_empty_input_yields_no_days() {
        assert!(aggregate_daily(&[], 0).is_empty());
    }

    #[test]
    fn test_single_rainy_day_probability_mean() {
        let samples = vec![
            sample(DAY_START, 15.0, "rain", 0.5),
            sample(DAY_START + 3 * HOUR, 16.0, "rain", 0.7),
            sample(DAY_START + 6 * HOUR, 17.0, "rain", 0.9),
        ];

        let days = aggregate_daily(&samples, 0);

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].rain_probability_percent, 70);
        assert_eq!(days[0].sample_count, 3);
        assert_eq!(days[0].day_key, "2024-07-15");
    }

    #[test]
    fn test_min_max_track_true_extremes() {
        let samples = vec![
            sample(DAY_START, 12.0, "clear", 0.0),
            sample(DAY_START + 3 * HOUR, -4.5, "clear", 0.0),
            sample(DAY_START + 6 * HOUR, 21.25, "clear", 0.0),
            sample(DAY_START + 9 * HOUR, 3.0, "clear", 0.0),
        ];

        let days = aggregate_daily(&samples, 0);

        assert_eq!(days[0].temperature_min, -4.5);
        assert_eq!(days[0].temperature_max, 21.25);
        assert!(days[0].temperature_min <= days[0].temperature_max);
    }

    #[test]
    fn test_single_sample_day_has_equal_min_and_max() {
        let days = aggregate_daily(&[sample(DAY_START, 9.0, "clear", 0.1)], 0);
        assert_eq!(days[0].temperature_min, 9.0);
        assert_eq!(days[0].temperature_max, 9.0);
        assert_eq!(days[0].rain_probability_percent, 10);
    }

    #[test]
    fn test_first_condition_wins() {
        let samples = vec![
            sample(DAY_START, 10.0, "clouds", 0.0),
            sample(DAY_START + 3 * HOUR, 10.0, "rain", 0.0),
            sample(DAY_START + 6 * HOUR, 10.0, "rain", 0.0),
            sample(DAY_START + 9 * HOUR, 10.0, "rain", 0.0),
        ];

        let days = aggregate_daily(&samples, 0);

        assert_eq!(days[0].representative_condition, "clouds");
        assert_eq!(days[0].representative_description, "clouds description");
    }

    #[test]
    fn test_days_anchor_on_first_sample_timestamp() {
        let samples = vec![
            sample(DAY_START + 9 * HOUR, 10.0, "clear", 0.0),
            sample(DAY_START + 12 * HOUR, 10.0, "clear", 0.0),
            sample(DAY_START + DAY + 3 * HOUR, 10.0, "clear", 0.0),
        ];

        let days = aggregate_daily(&samples, 0);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].day_timestamp, DAY_START + 9 * HOUR);
        assert_eq!(days[1].day_timestamp, DAY_START + DAY + 3 * HOUR);
    }

    #[test]
    fn test_every_sample_lands_in_exactly_one_day() {
        // Five days of 3-hour samples starting mid-morning
        let samples: Vec<HourlySample> = (0..40)
            .map(|i| sample(DAY_START + 10 * HOUR + i * 3 * HOUR, i as f64, "clouds", 0.3))
            .collect();

        for offset in [0, -18_000, 19_800, 50_400] {
            let days = aggregate_daily(&samples, offset);
            let folded: usize = days.iter().map(|d| d.sample_count).sum();
            assert_eq!(folded, samples.len(), "offset {}", offset);

            let keys: HashSet<&str> = days.iter().map(|d| d.day_key.as_str()).collect();
            assert_eq!(keys.len(), days.len(), "day keys must be unique");
        }
    }

    #[test]
    fn test_offset_moves_samples_between_days() {
        // 03:00 and 15:00 UTC; in UTC-5 the first one belongs to the previous day
        let samples = vec![
            sample(DAY_START + 3 * HOUR, 10.0, "clear", 0.0),
            sample(DAY_START + 15 * HOUR, 20.0, "clear", 0.0),
        ];

        assert_eq!(aggregate_daily(&samples, 0).len(), 1);

        let shifted = aggregate_daily(&samples, -18_000);
        assert_eq!(shifted.len(), 2);
        assert_eq!(shifted[0].day_key, "2024-07-14");
        assert_eq!(shifted[1].day_key, "2024-07-15");
    }

    #[test]
    fn test_unsorted_input_keeps_first_appearance_order() {
        let samples = vec![
            sample(DAY_START + DAY, 10.0, "clear", 0.0),
            sample(DAY_START, 10.0, "rain", 0.0),
            sample(DAY_START + DAY + HOUR, 10.0, "clear", 0.0),
        ];

        let days = aggregate_daily(&samples, 0);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].day_key, "2024-07-16");
        assert_eq!(days[0].sample_count, 2);
        assert_eq!(days[1].day_key, "2024-07-15");
    }

    #[test]
    fn test_average_wind_speed() {
        let mut samples = vec![
            sample(DAY_START, 10.0, "clear", 0.0),
            sample(DAY_START + 3 * HOUR, 10.0, "clear", 0.0),
        ];
        samples[0].wind_speed = 3.0;
        samples[1].wind_speed = 6.0;

        let days = aggregate_daily(&samples, 0);
        assert!((days[0].average_wind_speed - 4.5).abs() < 0.01);
    }

    #[test]
    fn test_probability_percent_stays_in_range() {
        let samples = vec![
            sample(DAY_START, 10.0, "rain", 1.0),
            sample(DAY_START + 3 * HOUR, 10.0, "rain", 1.0),
            sample(DAY_START + DAY, 10.0, "rain", 2.5),
            sample(DAY_START + 2 * DAY, 10.0, "rain", -1.0),
        ];

        for day in aggregate_daily(&samples, 0) {
            assert!(day.rain_probability_percent <= 100);
        }
    }

    #[test]
    fn test_empty_condition_is_kept() {
        let days = aggregate_daily(&[sample(DAY_START, 10.0, "", 0.0)], 0);
        assert_eq!(days[0].representative_condition, "");
    }

    #[test]
    fn test_aggregation_is_repeatable() {
        let samples: Vec<HourlySample> = (0..17)
            .map(|i| {
                let temperature = (i % 5) as f64 * 1.7;
                let pop = 0.13 * (i % 7) as f64;
                sample(DAY_START + i * 3 * HOUR, temperature, "rain", pop)
            })
            .collect();

        assert_eq!(aggregate_daily(&samples, 3_600), aggregate_daily(&samples, 3_600));
    }

    #[test]
    fn test_zero_sample_accumulator_defaults() {
        let first = sample(DAY_START, 10.0, "clear", 0.4);
        let aggregate = DayAccumulator::new("2024-07-15".to_string(), &first).finish();

        assert_eq!(aggregate.temperature_min, 0.0);
        assert_eq!(aggregate.temperature_max, 0.0);
        assert_eq!(aggregate.rain_probability_percent, 0);
        assert_eq!(aggregate.sample_count, 0);
    }
}
