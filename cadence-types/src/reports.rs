//! Report envelopes produced by the estimator and the resolver.

use serde::{Deserialize, Serialize};

use crate::label::FrequencyLabel;

/// Where an interval estimate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalSource {
    /// The most frequent rounded gap observed in the series.
    Modal,
    /// The configured default, used for short series or when no gap repeats.
    Default,
}

/// Typical inter-arrival gap in seconds, tagged with its source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalEstimate {
    /// Gap in seconds.
    pub gap: f64,
    /// How the gap was obtained.
    pub source: IntervalSource,
}

impl IntervalEstimate {
    /// Estimate backed by an observed modal gap.
    #[must_use]
    pub const fn modal(gap: f64) -> Self {
        Self {
            gap,
            source: IntervalSource::Modal,
        }
    }

    /// Estimate that fell back to the default gap.
    #[must_use]
    pub const fn default_gap(gap: f64) -> Self {
        Self {
            gap,
            source: IntervalSource::Default,
        }
    }

    /// `true` if the gap was observed rather than defaulted.
    #[must_use]
    pub const fn is_observed(&self) -> bool {
        matches!(self.source, IntervalSource::Modal)
    }
}

/// Which detection attempt produced the final answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionPath {
    /// Detection on the original timestamps succeeded.
    Direct,
    /// Direct detection failed; a synthetic series was tried.
    Synthetic,
    /// Direct detection failed and no synthetic retry was allowed.
    NoFallback,
}

/// Summary of one frequency resolution.
///
/// `label` is `None` when no periodic structure was found, which is a normal
/// outcome for event-driven series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Inferred label, if any.
    pub label: Option<FrequencyLabel>,
    /// Detection attempt that produced `label`.
    pub path: ResolutionPath,
    /// Interval estimate consulted for the fallback; absent on a direct hit.
    pub estimate: Option<IntervalEstimate>,
}

impl Resolution {
    /// Resolution from a successful first attempt.
    #[must_use]
    pub const fn direct(label: FrequencyLabel) -> Self {
        Self {
            label: Some(label),
            path: ResolutionPath::Direct,
            estimate: None,
        }
    }

    /// `true` if a label was found by either attempt.
    #[must_use]
    pub const fn is_determined(&self) -> bool {
        self.label.is_some()
    }

    /// Consume the report and return the label.
    #[must_use]
    pub fn into_label(self) -> Option<FrequencyLabel> {
        self.label
    }
}
