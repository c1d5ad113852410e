use cadence_core::{
    EstimatorConfig, IntervalSource, TieBreak, estimate_interval, estimate_typical_interval,
};
use proptest::prelude::*;

fn cumulative(gaps: &[f64]) -> Vec<f64> {
    let mut ts = Vec::with_capacity(gaps.len() + 1);
    let mut cur = 0.0;
    ts.push(cur);
    for g in gaps {
        cur += g;
        ts.push(cur);
    }
    ts
}

#[test]
fn minutely_series_yields_sixty() {
    let ts = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0, 360.0];
    assert!((estimate_typical_interval(&ts, 60.0) - 60.0).abs() < f64::EPSILON);
    assert!((estimate_typical_interval(&ts, 5.0) - 60.0).abs() < f64::EPSILON);
}

#[test]
fn empty_and_singleton_do_not_panic() {
    assert!((estimate_typical_interval(&[], 42.0) - 42.0).abs() < f64::EPSILON);
    assert!((estimate_typical_interval(&[7.0], 42.0) - 42.0).abs() < f64::EPSILON);
}

#[test]
fn prime_gaps_fall_back_to_default() {
    let ts = cumulative(&[2.0, 3.0, 5.0, 7.0, 11.0, 13.0, 17.0]);
    let est = estimate_interval(&ts, &EstimatorConfig::default());
    assert_eq!(est.source, IntervalSource::Default);
    assert!((est.gap - 60.0).abs() < f64::EPSILON);
}

#[test]
fn noisy_gaps_round_to_whole_seconds() {
    let ts = cumulative(&[59.8, 60.3, 60.1, 59.6, 300.0, 12.0]);
    assert!((estimate_typical_interval(&ts, 1.0) - 60.0).abs() < f64::EPSILON);
}

#[test]
fn ties_resolve_to_smallest_by_default() {
    // 120 appears before 60 in the series; both occur twice.
    let ts = cumulative(&[120.0, 120.0, 60.0, 60.0, 7.0]);
    assert!((estimate_typical_interval(&ts, 1.0) - 60.0).abs() < f64::EPSILON);

    let first_seen = EstimatorConfig {
        tie_break: TieBreak::FirstSeen,
        ..EstimatorConfig::default()
    };
    assert!((estimate_interval(&ts, &first_seen).gap - 120.0).abs() < f64::EPSILON);

    let unique = EstimatorConfig {
        tie_break: TieBreak::Unique,
        ..EstimatorConfig::default()
    };
    let est = estimate_interval(&ts, &unique);
    assert_eq!(est.source, IntervalSource::Default);
}

#[test]
fn unordered_input_uses_absolute_gaps() {
    let ts = [300.0, 240.0, 180.0, 120.0, 60.0, 0.0];
    assert!((estimate_typical_interval(&ts, 1.0) - 60.0).abs() < f64::EPSILON);
}

proptest! {
    #[test]
    fn short_series_always_default(ts in proptest::collection::vec(-1.0e9f64..1.0e9, 0..=5), default_gap in 1.0f64..10_000.0) {
        prop_assert_eq!(estimate_typical_interval(&ts, default_gap), default_gap);
    }

    #[test]
    fn constant_step_is_recovered(step in 1u32..100_000, n in 6usize..200, offset in -1.0e9f64..1.0e9, rev in any::<bool>()) {
        let step = f64::from(step);
        let mut ts: Vec<f64> = (0..n).map(|i| offset + step * f64::from(u32::try_from(i).unwrap())).collect();
        if rev { ts.reverse(); }
        // Offsets add float noise well below half a second, so rounding recovers the step.
        prop_assert_eq!(estimate_typical_interval(&ts, 0.5), step);
    }

    #[test]
    fn distinct_gaps_fall_back(gaps in proptest::collection::btree_set(1u32..1_000_000, 5..40), default_gap in 1.0f64..10_000.0) {
        let gaps: Vec<f64> = gaps.into_iter().map(f64::from).collect();
        let ts = cumulative(&gaps);
        let est = estimate_interval(&ts, &EstimatorConfig { default_gap, ..EstimatorConfig::default() });
        prop_assert_eq!(est.source, IntervalSource::Default);
        prop_assert_eq!(est.gap, default_gap);
    }

    #[test]
    fn idempotent(ts in proptest::collection::vec(-1.0e6f64..1.0e6, 0..60)) {
        let a = estimate_typical_interval(&ts, 60.0);
        let b = estimate_typical_interval(&ts, 60.0);
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn result_is_finite_and_non_negative(ts in proptest::collection::vec(-1.0e6f64..1.0e6, 0..60)) {
        let g = estimate_typical_interval(&ts, 60.0);
        prop_assert!(g.is_finite());
        prop_assert!(g >= 0.0);
    }

    #[test]
    fn dominant_step_survives_bounded_noise(step_idx in 0usize..4, n in 12usize..100, kinds in proptest::collection::vec(0u8..=2, 11..100)) {
        let steps = [60.0f64, 300.0, 3600.0, 86_400.0];
        let step = steps[step_idx];
        let m = kinds.len().min(n - 1);
        let noise_budget = m / 4;
        let mut used = 0usize;
        let gaps: Vec<f64> = kinds.iter().take(m).map(|&k| {
            if k == 0 || used >= noise_budget {
                step
            } else {
                used += 1;
                if k == 1 { step * 2.0 } else { 1.0 }
            }
        }).collect();
        let ts = cumulative(&gaps);
        prop_assert_eq!(estimate_typical_interval(&ts, 7.0), step);
    }
}
