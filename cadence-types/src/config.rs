//! Configuration types shared by the estimator, the resolver and the facade.

use serde::{Deserialize, Serialize};

use crate::error::CadenceError;

/// Rule for choosing among equally frequent rounded gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// The numerically smallest of the tied gaps wins.
    #[default]
    Smallest,
    /// The tied gap that occurs first in the series wins.
    FirstSeen,
    /// Any tie leaves the mode undefined, so the default gap is used.
    Unique,
}

/// Whether the resolver may retry detection with a synthetic series built
/// from the default gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FallbackPolicy {
    /// Retry only when a modal gap was actually observed in the series.
    ///
    /// A short irregular series such as `[0, 7, 23, 101, 9999]` stays
    /// undetermined under this policy.
    #[default]
    ObservedGap,
    /// Retry unconditionally with whatever the estimator returned, including
    /// the default gap.
    ///
    /// This is the classic resolver behaviour. With the default 60 second
    /// gap, `[0, 7, 23, 101, 9999]` is labelled `"min"`.
    Always,
}

/// Settings for the interval estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Minimum series length before a mode is attempted.
    pub min_points: usize,
    /// Gap returned when the series is too short or has no repeating gap.
    pub default_gap: f64,
    /// Decimal digits kept when rounding gaps before tallying.
    pub ndigits: i32,
    /// Tie-breaking rule for equally frequent gaps.
    pub tie_break: TieBreak,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            min_points: 6,
            default_gap: 60.0,
            ndigits: 0,
            tie_break: TieBreak::Smallest,
        }
    }
}

impl EstimatorConfig {
    /// Check value ranges.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `default_gap` is not a positive finite number
    /// or `min_points` is below 2.
    pub fn validate(&self) -> Result<(), CadenceError> {
        if !self.default_gap.is_finite() || self.default_gap <= 0.0 {
            return Err(CadenceError::InvalidConfig(format!(
                "default_gap must be positive and finite, got {}",
                self.default_gap
            )));
        }
        if self.min_points < 2 {
            return Err(CadenceError::InvalidConfig(format!(
                "min_points must be at least 2, got {}",
                self.min_points
            )));
        }
        Ok(())
    }
}

/// Settings for the frequency resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Number of synthetic timestamps generated for the fallback attempt.
    pub synthetic_len: usize,
    /// When the fallback attempt is allowed.
    pub fallback: FallbackPolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            synthetic_len: 20,
            fallback: FallbackPolicy::ObservedGap,
        }
    }
}

impl ResolverConfig {
    /// Check value ranges.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `synthetic_len` is below 3, the minimum a
    /// calendar detector can work with.
    pub fn validate(&self) -> Result<(), CadenceError> {
        if self.synthetic_len < 3 {
            return Err(CadenceError::InvalidConfig(format!(
                "synthetic_len must be at least 3, got {}",
                self.synthetic_len
            )));
        }
        Ok(())
    }
}

/// Global configuration for the `Cadence` orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CadenceConfig {
    /// Interval estimator settings.
    pub estimator: EstimatorConfig,
    /// Resolver settings.
    pub resolver: ResolverConfig,
}

impl CadenceConfig {
    /// Validate both halves of the configuration.
    ///
    /// # Errors
    /// Propagates the first `InvalidConfig` found.
    pub fn validate(&self) -> Result<(), CadenceError> {
        self.estimator.validate()?;
        self.resolver.validate()
    }
}
