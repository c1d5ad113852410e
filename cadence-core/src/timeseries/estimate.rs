use crate::{EstimatorConfig, IntervalEstimate, TieBreak};

/// Absolute differences between adjacent timestamps, in input order.
///
/// Returns an empty vector for fewer than two timestamps.
#[must_use]
pub fn inter_arrival_gaps(timestamps: &[f64]) -> Vec<f64> {
    timestamps.windows(2).map(|w| (w[1] - w[0]).abs()).collect()
}

/// Round `x` to `ndigits` decimal digits, ties to even.
///
/// Negative `ndigits` round to tens, hundreds, and so on. Values whose scaled
/// form is not finite are returned unchanged.
#[must_use]
pub fn round_to_digits(x: f64, ndigits: i32) -> f64 {
    if ndigits == 0 {
        return x.round_ties_even();
    }
    let scale = 10f64.powi(ndigits);
    let scaled = x * scale;
    if !scaled.is_finite() || scale == 0.0 {
        return x;
    }
    scaled.round_ties_even() / scale
}

/// Mode of the values after rounding to `ndigits`, or `None`.
///
/// Non-finite values are ignored. The mode is undefined when no rounded value
/// occurs more than once. Equally frequent values are resolved by `tie_break`:
///
/// ```
/// use cadence_core::{approx_mode, TieBreak};
///
/// // 60 and 120 both appear twice
/// let xs = [120.2, 60.0, 119.9, 59.7, 300.0];
/// assert_eq!(approx_mode(&xs, 0, TieBreak::Smallest), Some(60.0));
/// assert_eq!(approx_mode(&xs, 0, TieBreak::FirstSeen), Some(120.0));
/// assert_eq!(approx_mode(&xs, 0, TieBreak::Unique), None);
///
/// // No repeats: undefined
/// assert_eq!(approx_mode(&[2.0, 3.0, 5.0], 0, TieBreak::Smallest), None);
/// ```
#[must_use]
pub fn approx_mode(values: &[f64], ndigits: i32, tie_break: TieBreak) -> Option<f64> {
    // `+ 0.0` folds -0.0 into 0.0 so both tally together.
    let rounded: Vec<f64> = values
        .iter()
        .filter(|v| v.is_finite())
        .map(|&v| round_to_digits(v, ndigits) + 0.0)
        .collect();
    if rounded.is_empty() {
        return None;
    }
    let mut sorted = rounded.clone();
    sorted.sort_unstable_by(f64::total_cmp);

    // Run-length tally over the sorted values; candidates stay in ascending order.
    let mut best_count: usize = 0;
    let mut candidates: Vec<f64> = Vec::new();
    let mut cur = sorted[0];
    let mut cur_count: usize = 1;
    for &v in sorted.iter().skip(1) {
        if v.total_cmp(&cur).is_eq() {
            cur_count += 1;
            continue;
        }
        tally_run(cur, cur_count, &mut best_count, &mut candidates);
        cur = v;
        cur_count = 1;
    }
    tally_run(cur, cur_count, &mut best_count, &mut candidates);

    if best_count < 2 {
        return None;
    }
    match tie_break {
        TieBreak::Smallest => candidates.first().copied(),
        TieBreak::FirstSeen => rounded
            .iter()
            .copied()
            .find(|r| candidates.iter().any(|c| c.total_cmp(r).is_eq())),
        TieBreak::Unique => (candidates.len() == 1).then(|| candidates[0]),
    }
}

fn tally_run(value: f64, count: usize, best_count: &mut usize, candidates: &mut Vec<f64>) {
    if count > *best_count {
        *best_count = count;
        candidates.clear();
        candidates.push(value);
    } else if count == *best_count {
        candidates.push(value);
    }
}

/// Estimate the typical gap between arrivals, reporting where it came from.
///
/// Series shorter than `cfg.min_points`, and series whose rounded gaps never
/// repeat, yield `cfg.default_gap` tagged as [`IntervalSource::Default`].
///
/// [`IntervalSource::Default`]: crate::IntervalSource::Default
#[must_use]
pub fn estimate_interval(timestamps: &[f64], cfg: &EstimatorConfig) -> IntervalEstimate {
    if timestamps.len() < cfg.min_points {
        return IntervalEstimate::default_gap(cfg.default_gap);
    }
    let gaps = inter_arrival_gaps(timestamps);
    approx_mode(&gaps, cfg.ndigits, cfg.tie_break).map_or_else(
        || IntervalEstimate::default_gap(cfg.default_gap),
        IntervalEstimate::modal,
    )
}

/// Crude estimate of the typical time between arrivals, in seconds.
///
/// Five or fewer timestamps, or gaps that never repeat once rounded to whole
/// seconds, return `default_gap`. Otherwise the most frequent rounded gap is
/// returned, the smallest one on ties.
///
/// ```
/// use cadence_core::estimate_typical_interval;
///
/// let minutely = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0, 360.0];
/// assert_eq!(estimate_typical_interval(&minutely, 60.0), 60.0);
///
/// // Too short to estimate
/// assert_eq!(estimate_typical_interval(&[0.0, 5.0, 10.0], 30.0), 30.0);
/// ```
#[must_use]
pub fn estimate_typical_interval(timestamps: &[f64], default_gap: f64) -> f64 {
    let cfg = EstimatorConfig {
        default_gap,
        ..EstimatorConfig::default()
    };
    estimate_interval(timestamps, &cfg).gap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_is_half_to_even() {
        assert!((round_to_digits(2.5, 0) - 2.0).abs() < f64::EPSILON);
        assert!((round_to_digits(3.5, 0) - 4.0).abs() < f64::EPSILON);
        assert!((round_to_digits(1.26, 1) - 1.3).abs() < 1e-12);
        assert!((round_to_digits(149.0, -2) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn gaps_are_absolute() {
        assert_eq!(inter_arrival_gaps(&[10.0, 4.0, 7.0]), vec![6.0, 3.0]);
        assert!(inter_arrival_gaps(&[1.0]).is_empty());
        assert!(inter_arrival_gaps(&[]).is_empty());
    }

    #[test]
    fn non_finite_values_are_skipped() {
        let xs = [f64::NAN, 5.0, 5.2, f64::INFINITY, f64::NAN];
        assert_eq!(approx_mode(&xs, 0, TieBreak::Smallest), Some(5.0));
        assert_eq!(approx_mode(&[f64::NAN, f64::NAN], 0, TieBreak::Smallest), None);
    }

    #[test]
    fn zero_gaps_tally_together() {
        assert_eq!(approx_mode(&[0.4, 0.0, 7.0], 0, TieBreak::Smallest), Some(0.0));
    }

    #[test]
    fn unique_mode_is_independent_of_tie_break() {
        let xs = [3.0, 3.0, 3.0, 1.0, 1.0, 9.0];
        for tb in [TieBreak::Smallest, TieBreak::FirstSeen, TieBreak::Unique] {
            assert_eq!(approx_mode(&xs, 0, tb), Some(3.0));
        }
    }

    #[test]
    fn min_points_is_configurable() {
        let ts = [0.0, 10.0, 20.0, 30.0];
        let cfg = EstimatorConfig {
            min_points: 4,
            ..EstimatorConfig::default()
        };
        assert_eq!(estimate_interval(&ts, &cfg), IntervalEstimate::modal(10.0));
        assert_eq!(
            estimate_interval(&ts, &EstimatorConfig::default()),
            IntervalEstimate::default_gap(60.0)
        );
    }
}
