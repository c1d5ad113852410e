//! Test doubles for the `FrequencyDetector` seam.
//!
//! - [`FixedDetector`] answers every call with the same label.
//! - [`ScriptedDetector`] replays queued behaviors and records every input it
//!   receives, driven from the outside through a [`ScriptController`].

use cadence_core::{FrequencyDetector, FrequencyLabel, NaiveDateTime};

mod dynamic;

pub use dynamic::{DetectBehavior, ScriptController, ScriptedDetector};

/// Detector that returns the same answer for any input.
#[derive(Debug, Clone, Default)]
pub struct FixedDetector {
    label: Option<FrequencyLabel>,
}

impl FixedDetector {
    /// Always report `label`.
    #[must_use]
    pub fn returning(label: impl Into<FrequencyLabel>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    /// Never recognize anything.
    #[must_use]
    pub const fn undetermined() -> Self {
        Self { label: None }
    }
}

impl FrequencyDetector for FixedDetector {
    fn name(&self) -> &'static str {
        "cadence-mock-fixed"
    }

    fn detect(&self, _dates: &[NaiveDateTime]) -> Option<FrequencyLabel> {
        self.label.clone()
    }
}
