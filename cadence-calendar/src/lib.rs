//! cadence-calendar
//!
//! Calendar-aware frequency detection for cadence.
//!
//! - `offset`: the frequency-label grammar (`"h"`, `"15min"`, `"QS-OCT"`, ...)
//!   and anchored date offsets.
//! - `range`: fixed-frequency date ranges and label validation.
//! - `infer`: label inference over a datetime index.
//!
//! [`CalendarDetector`] plugs the inferer into the resolver in `cadence-core`.
#![warn(missing_docs)]

/// Labelled inference over datetime indexes.
pub mod infer;
/// Frequency labels and date offsets.
pub mod offset;
/// Date ranges built from offsets.
pub mod range;
mod util;

use cadence_core::{FrequencyDetector, FrequencyLabel, NaiveDateTime};

pub use infer::{infer_calendar_frequency, infer_offset};
pub use offset::{Offset, OffsetKind, Position, Tick};
pub use range::{date_range, date_range_for_label, is_valid_frequency_label};

/// Default [`FrequencyDetector`] backed by calendar inference.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarDetector;

impl CalendarDetector {
    /// Create a calendar detector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FrequencyDetector for CalendarDetector {
    fn name(&self) -> &'static str {
        "calendar"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cadence::calendar::detect",
            skip(self, dates),
            fields(len = dates.len()),
        )
    )]
    fn detect(&self, dates: &[NaiveDateTime]) -> Option<FrequencyLabel> {
        let label = infer_calendar_frequency(dates);
        #[cfg(feature = "tracing")]
        tracing::trace!(label = ?label, "calendar inference finished");
        label
    }
}
