use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::FrequencyLabel;

/// Calendar-aware frequency detector.
///
/// Implementations classify a sequence of naive UTC datetimes into a
/// frequency label (daily, month start, business day, ...) or return `None`
/// when the sequence has no regular structure they recognize. Detection never
/// fails with an error: an unrecognized sequence is simply `None`.
pub trait FrequencyDetector: Send + Sync {
    /// Stable detector name used in logs.
    fn name(&self) -> &'static str;

    /// Classify `dates`, which are supplied in the caller's order.
    fn detect(&self, dates: &[NaiveDateTime]) -> Option<FrequencyLabel>;
}

impl<T: FrequencyDetector + ?Sized> FrequencyDetector for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn detect(&self, dates: &[NaiveDateTime]) -> Option<FrequencyLabel> {
        (**self).detect(dates)
    }
}

impl<T: FrequencyDetector + ?Sized> FrequencyDetector for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn detect(&self, dates: &[NaiveDateTime]) -> Option<FrequencyLabel> {
        (**self).detect(dates)
    }
}

impl<T: FrequencyDetector + ?Sized> FrequencyDetector for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn detect(&self, dates: &[NaiveDateTime]) -> Option<FrequencyLabel> {
        (**self).detect(dates)
    }
}
