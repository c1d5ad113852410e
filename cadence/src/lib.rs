//! Cadence infers the sampling frequency of a series of arrival timestamps.
//!
//! Overview
//! - Timestamps are epoch seconds (`f64`), converted to naive UTC datetimes.
//! - A calendar-aware detector is asked for a frequency label first.
//! - If it cannot tell, the typical gap between arrivals is estimated from the
//!   rounded inter-arrival times and the detector is asked again with an
//!   evenly spaced series built from that gap.
//!
//! Key behaviors and trade-offs
//! - The modal gap is only trusted once at least `min_points` timestamps are
//!   present; below that the configured default gap is reported.
//! - `FallbackPolicy::ObservedGap` (the default) skips the retry when no gap
//!   was observed, so short irregular series stay undetermined instead of
//!   being labelled with the default gap.
//! - `FallbackPolicy::Always` is the classic behaviour: it retries with the
//!   default gap too, which labels any input with at least one usable gap.
//!   Under it `[0, 7, 23, 101, 9999]` resolves to `"min"` through the
//!   synthetic path, where `ObservedGap` leaves it undetermined.
//!
//! Examples
//! ```
//! use cadence::{Cadence, FrequencyLabel};
//!
//! let cadence = Cadence::builder().build()?;
//! let hourly: Vec<f64> = (0..24).map(|h| 1_609_459_200.0 + f64::from(h) * 3600.0).collect();
//! assert_eq!(cadence.infer_frequency(&hourly)?, Some(FrequencyLabel::new("h")));
//!
//! let irregular = [0.0, 7.0, 23.0, 101.0, 9999.0];
//! assert_eq!(cadence.infer_frequency(&irregular)?, None);
//! # Ok::<(), cadence::CadenceError>(())
//! ```
//!
//! See `cadence/examples/` for runnable demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{Cadence, CadenceBuilder};

pub use cadence_calendar::{
    CalendarDetector, Offset, date_range, date_range_for_label, infer_calendar_frequency,
    is_valid_frequency_label,
};

// Re-export core types for convenience
pub use cadence_core::{
    CadenceConfig, CadenceError, EPOCH, EstimatorConfig, FallbackPolicy, FrequencyDetector,
    FrequencyLabel, IntervalEstimate, IntervalSource, NaiveDateTime, RECENT, Resolution,
    ResolutionPath, ResolverConfig, TieBreak, date_from_epoch_seconds, dates_from_epoch_seconds,
    epoch_seconds_from_date, epoch_seconds_from_dates, estimate_typical_interval, infer_frequency,
    resolve_frequency,
};
