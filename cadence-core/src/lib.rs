//! cadence-core
//!
//! Core types, the detector seam, and the two chained steps of frequency
//! inference from arrival timestamps.
//!
//! - `types`: re-exports of labels, configuration, reports and errors.
//! - `detector`: the `FrequencyDetector` trait implemented by calendar backends.
//! - `timeseries`: epoch conversion, interval estimation and frequency resolution.
//!
//! Everything here is synchronous and stateless; every function is a pure
//! function of its arguments and may be called from any thread.
#![warn(missing_docs)]

/// Calendar frequency detector trait.
pub mod detector;
/// Time-series utilities for estimating intervals and resolving frequencies.
pub mod timeseries;
pub mod types;

pub use detector::FrequencyDetector;
pub use timeseries::epoch::{
    EPOCH, RECENT, RECENT_SECONDS, date_from_epoch_seconds, dates_from_epoch_seconds,
    epoch_seconds_from_date, epoch_seconds_from_dates,
};
pub use timeseries::estimate::{
    approx_mode, estimate_interval, estimate_typical_interval, inter_arrival_gaps,
    round_to_digits,
};
pub use timeseries::resolve::{infer_frequency, resolve_frequency, synthetic_timestamps};
pub use types::*;
