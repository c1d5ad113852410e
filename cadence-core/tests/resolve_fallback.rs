use std::sync::Mutex;

use cadence_core::{
    CadenceConfig, CadenceError, FallbackPolicy, FrequencyDetector, FrequencyLabel,
    IntervalSource, NaiveDateTime, ResolutionPath, epoch_seconds_from_dates, infer_frequency,
    resolve_frequency,
};

/// Recognizes only strictly uniform spacing and records every call.
#[derive(Default)]
struct UniformSpacing {
    calls: Mutex<Vec<Vec<f64>>>,
}

impl UniformSpacing {
    fn calls(&self) -> Vec<Vec<f64>> {
        self.calls.lock().unwrap().clone()
    }
}

impl FrequencyDetector for UniformSpacing {
    fn name(&self) -> &'static str {
        "uniform-spacing"
    }

    fn detect(&self, dates: &[NaiveDateTime]) -> Option<FrequencyLabel> {
        let secs = epoch_seconds_from_dates(dates);
        self.calls.lock().unwrap().push(secs.clone());
        if secs.len() < 3 {
            return None;
        }
        let step = secs[1] - secs[0];
        let uniform = step > 0.0 && secs.windows(2).all(|w| (w[1] - w[0] - step).abs() < 1e-6);
        uniform.then(|| FrequencyLabel::new(format!("{step}s")))
    }
}

#[test]
fn regular_series_is_detected_directly() {
    let det = UniformSpacing::default();
    let res = resolve_frequency(
        &[0.0, 3600.0, 7200.0, 10_800.0],
        &det,
        &CadenceConfig::default(),
    )
    .unwrap();
    assert_eq!(res.path, ResolutionPath::Direct);
    assert_eq!(res.label, Some(FrequencyLabel::new("3600s")));
    assert!(res.estimate.is_none());
    assert_eq!(det.calls().len(), 1);
}

#[test]
fn jittered_series_resolves_through_synthetic_retry() {
    let det = UniformSpacing::default();
    let ts = [1000.0, 1060.2, 1119.9, 1180.0, 1240.4, 1300.0, 1359.8, 1420.0];
    let res = resolve_frequency(&ts, &det, &CadenceConfig::default()).unwrap();

    assert_eq!(res.path, ResolutionPath::Synthetic);
    assert_eq!(res.label, Some(FrequencyLabel::new("60s")));
    let est = res.estimate.unwrap();
    assert_eq!(est.source, IntervalSource::Modal);

    let calls = det.calls();
    assert_eq!(calls.len(), 2);
    // Second attempt is anchored at epoch zero, not at the first arrival.
    let synthetic = &calls[1];
    assert_eq!(synthetic.len(), 20);
    assert!(synthetic[0].abs() < 1e-9);
    assert!((synthetic[19] - 19.0 * 60.0).abs() < 1e-6);
}

#[test]
fn irregular_short_series_is_undetermined() {
    let det = UniformSpacing::default();
    let label = infer_frequency(&[0.0, 7.0, 23.0, 101.0, 9999.0], &det).unwrap();
    assert!(label.is_none());
    // Default gap was not observed, so only the direct attempt ran.
    assert_eq!(det.calls().len(), 1);
}

#[test]
fn always_policy_retries_with_default_gap() {
    let det = UniformSpacing::default();
    let mut cfg = CadenceConfig::default();
    cfg.resolver.fallback = FallbackPolicy::Always;
    let res = resolve_frequency(&[0.0, 7.0, 23.0, 101.0, 9999.0], &det, &cfg).unwrap();
    assert_eq!(res.path, ResolutionPath::Synthetic);
    assert_eq!(res.label, Some(FrequencyLabel::new("60s")));
    assert_eq!(res.estimate.map(|e| e.source), Some(IntervalSource::Default));
}

#[test]
fn zero_modal_gap_skips_retry() {
    let det = UniformSpacing::default();
    let ts = [5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 9.0];
    let res = resolve_frequency(&ts, &det, &CadenceConfig::default()).unwrap();
    assert_eq!(res.path, ResolutionPath::NoFallback);
    assert!(res.label.is_none());
    assert_eq!(det.calls().len(), 1);
}

#[test]
fn synthetic_length_follows_config() {
    let det = UniformSpacing::default();
    let mut cfg = CadenceConfig::default();
    cfg.resolver.synthetic_len = 5;
    let ts = [0.0, 30.0, 60.0, 91.0, 120.0, 150.0, 181.0];
    let _ = resolve_frequency(&ts, &det, &cfg).unwrap();
    let calls = det.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1], vec![0.0, 30.0, 60.0, 90.0, 120.0]);
}

#[test]
fn conversion_errors_propagate() {
    let det = UniformSpacing::default();
    let err = infer_frequency(&[0.0, f64::NAN, 120.0], &det).unwrap_err();
    assert!(matches!(err, CadenceError::TimestampOutOfRange { .. }));
    assert!(det.calls().is_empty());
}

#[test]
fn detector_can_be_passed_as_trait_object() {
    let det: Box<dyn FrequencyDetector> = Box::new(UniformSpacing::default());
    let label = infer_frequency(&[0.0, 60.0, 120.0], det.as_ref()).unwrap();
    assert_eq!(label, Some(FrequencyLabel::new("60s")));
}
