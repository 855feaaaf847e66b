//! Skycast library
//!
//! Turns a stream of 3-hour forecast samples into a per-day outlook and a
//! one-line narrative. The binary and the integration tests build on these
//! modules.

pub mod cli;
pub mod config;
pub mod daily;
pub mod data;
pub mod day_key;
pub mod narrative;
pub mod pipeline;
pub mod render;
pub mod units;
pub mod window;

pub use config::OutlookConfig;
pub use data::{DailyAggregate, HourlySample, NarrativeResult};
pub use pipeline::{build_outlook, Outlook};
