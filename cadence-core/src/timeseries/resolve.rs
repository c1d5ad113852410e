use crate::timeseries::epoch::dates_from_epoch_seconds;
use crate::timeseries::estimate::estimate_interval;
use crate::{
    CadenceConfig, CadenceError, FallbackPolicy, FrequencyDetector, FrequencyLabel,
    IntervalEstimate, Resolution, ResolutionPath,
};

/// Evenly spaced epoch timestamps `[0, gap, 2*gap, ..., (len-1)*gap]`.
///
/// The series is anchored at epoch zero rather than at any observed arrival,
/// so calendar detectors see clean period boundaries.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn synthetic_timestamps(gap: f64, len: usize) -> Vec<f64> {
    (0..len).map(|j| j as f64 * gap).collect()
}

fn fallback_allowed(estimate: &IntervalEstimate, policy: FallbackPolicy) -> bool {
    if !estimate.gap.is_finite() || estimate.gap <= 0.0 {
        return false;
    }
    match policy {
        FallbackPolicy::Always => true,
        FallbackPolicy::ObservedGap => estimate.is_observed(),
    }
}

/// Resolve the frequency of an arrival series, reporting which attempt won.
///
/// 1. Detect directly on the converted timestamps; a hit is returned as-is.
/// 2. Otherwise estimate the typical gap and, when the fallback policy admits
///    it, detect on a synthetic series spaced by that gap.
///
/// No third attempt is made. A `Resolution` without a label is a normal
/// outcome for series with no periodic structure.
///
/// # Errors
/// Returns `TimestampOutOfRange` when an input timestamp cannot be converted.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "cadence::resolve::resolve_frequency",
        skip(timestamps, detector, cfg),
        fields(len = timestamps.len(), detector = detector.name()),
    )
)]
pub fn resolve_frequency<D>(
    timestamps: &[f64],
    detector: &D,
    cfg: &CadenceConfig,
) -> Result<Resolution, CadenceError>
where
    D: FrequencyDetector + ?Sized,
{
    let dates = dates_from_epoch_seconds(timestamps)?;
    if let Some(label) = detector.detect(&dates) {
        #[cfg(feature = "tracing")]
        tracing::debug!(label = %label, "direct detection succeeded");
        return Ok(Resolution::direct(label));
    }

    let estimate = estimate_interval(timestamps, &cfg.estimator);
    if !fallback_allowed(&estimate, cfg.resolver.fallback) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            gap = estimate.gap,
            observed = estimate.is_observed(),
            "synthetic retry skipped"
        );
        return Ok(Resolution {
            label: None,
            path: ResolutionPath::NoFallback,
            estimate: Some(estimate),
        });
    }

    let synthetic = synthetic_timestamps(estimate.gap, cfg.resolver.synthetic_len);
    let label = detector.detect(&dates_from_epoch_seconds(&synthetic)?);
    #[cfg(feature = "tracing")]
    tracing::debug!(
        gap = estimate.gap,
        found = label.is_some(),
        "synthetic retry finished"
    );
    Ok(Resolution {
        label,
        path: ResolutionPath::Synthetic,
        estimate: Some(estimate),
    })
}

/// Infer a frequency label from epoch timestamps using the default configuration.
///
/// Returns `Ok(None)` when neither the direct nor the synthetic attempt finds
/// a frequency.
///
/// # Errors
/// Returns `TimestampOutOfRange` when an input timestamp cannot be converted.
pub fn infer_frequency<D>(
    timestamps: &[f64],
    detector: &D,
) -> Result<Option<FrequencyLabel>, CadenceError>
where
    D: FrequencyDetector + ?Sized,
{
    resolve_frequency(timestamps, detector, &CadenceConfig::default()).map(Resolution::into_label)
}
