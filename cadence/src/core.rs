use std::sync::Arc;

use cadence_calendar::CalendarDetector;
use cadence_core::{
    CadenceConfig, CadenceError, FallbackPolicy, FrequencyDetector, FrequencyLabel,
    IntervalEstimate, Resolution, TieBreak, estimate_interval, resolve_frequency,
};

/// Frequency inference pipeline bound to one detector and one configuration.
///
/// Cheap to clone and safe to share across threads.
#[derive(Clone)]
pub struct Cadence {
    pub(crate) detector: Arc<dyn FrequencyDetector>,
    pub(crate) cfg: CadenceConfig,
}

/// Builder for constructing a [`Cadence`] with custom configuration.
pub struct CadenceBuilder {
    detector: Option<Arc<dyn FrequencyDetector>>,
    cfg: CadenceConfig,
}

impl Default for CadenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CadenceBuilder {
    /// Create a builder with the default configuration and no explicit detector.
    ///
    /// Without a call to [`with_detector`](Self::with_detector) the built
    /// pipeline uses [`CalendarDetector`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            detector: None,
            cfg: CadenceConfig::default(),
        }
    }

    /// Use `detector` for both the direct and the synthetic attempt.
    #[must_use]
    pub fn with_detector(mut self, detector: Arc<dyn FrequencyDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: CadenceConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Minimum number of timestamps before the modal gap is trusted.
    #[must_use]
    pub const fn min_points(mut self, n: usize) -> Self {
        self.cfg.estimator.min_points = n;
        self
    }

    /// Gap, in seconds, reported when no modal gap can be observed.
    #[must_use]
    pub const fn default_gap(mut self, seconds: f64) -> Self {
        self.cfg.estimator.default_gap = seconds;
        self
    }

    /// Decimal digits kept when rounding gaps before tallying.
    #[must_use]
    pub const fn ndigits(mut self, ndigits: i32) -> Self {
        self.cfg.estimator.ndigits = ndigits;
        self
    }

    /// How to choose between equally frequent gaps.
    #[must_use]
    pub const fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.cfg.estimator.tie_break = tie_break;
        self
    }

    /// Length of the evenly spaced series handed to the detector on retry.
    #[must_use]
    pub const fn synthetic_len(mut self, len: usize) -> Self {
        self.cfg.resolver.synthetic_len = len;
        self
    }

    /// When the synthetic retry is allowed to run.
    #[must_use]
    pub const fn fallback_policy(mut self, policy: FallbackPolicy) -> Self {
        self.cfg.resolver.fallback = policy;
        self
    }

    /// Build the pipeline.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn build(self) -> Result<Cadence, CadenceError> {
        self.cfg.validate()?;
        let detector = self
            .detector
            .unwrap_or_else(|| Arc::new(CalendarDetector::new()));
        Ok(Cadence {
            detector,
            cfg: self.cfg,
        })
    }
}

impl Cadence {
    /// Start building a new `Cadence` instance.
    ///
    /// ```
    /// use cadence::{Cadence, FallbackPolicy};
    ///
    /// let cadence = Cadence::builder()
    ///     .synthetic_len(30)
    ///     .fallback_policy(FallbackPolicy::Always)
    ///     .build()?;
    /// assert_eq!(cadence.detector_name(), "calendar");
    /// # Ok::<(), cadence::CadenceError>(())
    /// ```
    #[must_use]
    pub fn builder() -> CadenceBuilder {
        CadenceBuilder::new()
    }

    /// Name of the detector in use.
    #[must_use]
    pub fn detector_name(&self) -> &'static str {
        self.detector.name()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &CadenceConfig {
        &self.cfg
    }

    /// Resolve the frequency of `timestamps` and report how it was found.
    ///
    /// # Errors
    /// Returns `TimestampOutOfRange` if any timestamp cannot be converted to a
    /// calendar datetime.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cadence::core::resolve",
            skip(self, timestamps),
            fields(len = timestamps.len(), detector = self.detector.name()),
        )
    )]
    pub fn resolve(&self, timestamps: &[f64]) -> Result<Resolution, CadenceError> {
        resolve_frequency(timestamps, self.detector.as_ref(), &self.cfg)
    }

    /// Frequency label of `timestamps`, or `None` when it cannot be determined.
    ///
    /// # Errors
    /// Returns `TimestampOutOfRange` if any timestamp cannot be converted to a
    /// calendar datetime.
    pub fn infer_frequency(&self, timestamps: &[f64]) -> Result<Option<FrequencyLabel>, CadenceError> {
        self.resolve(timestamps).map(Resolution::into_label)
    }

    /// Typical gap between arrivals together with where it came from.
    #[must_use]
    pub fn estimate_interval(&self, timestamps: &[f64]) -> IntervalEstimate {
        estimate_interval(timestamps, &self.cfg.estimator)
    }

    /// Typical gap between arrivals, in seconds.
    #[must_use]
    pub fn typical_interval(&self, timestamps: &[f64]) -> f64 {
        self.estimate_interval(timestamps).gap
    }
}
