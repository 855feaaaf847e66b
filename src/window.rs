//! Bounded look-ahead over the sample stream

use crate::data::HourlySample;

/// Returns the first `max_count` samples, or all of them if there are fewer.
///
/// Order is preserved. Used both for the "next hours" list and to cap the
/// horizon fed into aggregation and the narrative.
pub fn select_window(samples: &[HourlySample], max_count: usize) -> &[HourlySample] {
    &samples[..max_count.min(samples.len())]
}
