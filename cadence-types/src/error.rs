use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the cadence workspace.
///
/// Only conversion, range construction and configuration can fail. An
/// undetermined frequency is not an error; resolvers report it as `None`.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[non_exhaustive]
pub enum CadenceError {
    /// A frequency label could not be parsed or does not produce a usable range.
    #[error("invalid frequency label {label:?}: {reason}")]
    InvalidFrequencyLabel {
        /// The offending label as supplied by the caller.
        label: String,
        /// Human-readable reason.
        reason: String,
    },

    /// Epoch seconds are non-finite or outside the representable calendar range.
    #[error("timestamp out of range: {seconds}")]
    TimestampOutOfRange {
        /// The raw epoch seconds that failed to convert.
        seconds: f64,
    },

    /// Calendar arithmetic left the representable date range.
    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    /// Invalid configuration value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl CadenceError {
    /// Helper: build an `InvalidFrequencyLabel` error.
    pub fn invalid_label(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFrequencyLabel {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Helper: build a `TimestampOutOfRange` error.
    #[must_use]
    pub const fn timestamp_out_of_range(seconds: f64) -> Self {
        Self::TimestampOutOfRange { seconds }
    }
}
