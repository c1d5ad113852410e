use cadence_core::{
    EPOCH, RECENT, RECENT_SECONDS, date_from_epoch_seconds, dates_from_epoch_seconds,
    epoch_seconds_from_date, epoch_seconds_from_dates,
};
use chrono::{Datelike, Timelike};
use proptest::prelude::*;

#[test]
fn origin_maps_to_epoch_constant() {
    assert_eq!(date_from_epoch_seconds(0.0).unwrap(), EPOCH);
    assert!(epoch_seconds_from_date(EPOCH).abs() < f64::EPSILON);
}

#[test]
fn recent_constant_round_trips() {
    #[allow(clippy::cast_precision_loss)]
    let secs = RECENT_SECONDS as f64;
    assert_eq!(date_from_epoch_seconds(secs).unwrap(), RECENT);
    assert!((epoch_seconds_from_date(RECENT) - secs).abs() < f64::EPSILON);
}

#[test]
fn known_instant_has_expected_fields() {
    // 2021-03-14T15:09:26.5
    let d = date_from_epoch_seconds(1_615_734_566.5).unwrap();
    assert_eq!((d.year(), d.month(), d.day()), (2021, 3, 14));
    assert_eq!((d.hour(), d.minute(), d.second()), (15, 9, 26));
    assert_eq!(d.nanosecond(), 500_000_000);
}

proptest! {
    #[test]
    fn scalar_round_trip(t in -1.0e10f64..1.0e10) {
        let back = epoch_seconds_from_date(date_from_epoch_seconds(t).unwrap());
        let tol = 1.0e-6f64.max(t.abs() * 1.0e-15);
        prop_assert!((back - t).abs() <= tol, "t={t} back={back}");
    }

    #[test]
    fn sequence_round_trip_preserves_order(ts in proptest::collection::vec(-1.0e9f64..1.0e9, 0..50)) {
        let dates = dates_from_epoch_seconds(&ts).unwrap();
        prop_assert_eq!(dates.len(), ts.len());
        let back = epoch_seconds_from_dates(&dates);
        for (a, b) in ts.iter().zip(back.iter()) {
            prop_assert!((a - b).abs() <= 1.0e-6);
        }
    }
}
