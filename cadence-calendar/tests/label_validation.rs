use cadence_calendar::{Offset, date_range, date_range_for_label, is_valid_frequency_label};
use cadence_core::CadenceError;
use chrono::{NaiveDate, NaiveDateTime};

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn known_labels_are_valid() {
    for label in [
        "1D", "H", "h", "15min", "5T", "B", "W", "W-MON", "WOM-1MON", "ME", "BMS", "QS-OCT",
        "BQ", "A-JUN", "YS", "250ms", "ns", "-1D", "3QE-MAR",
    ] {
        assert!(is_valid_frequency_label(label), "{label} should be valid");
    }
}

#[test]
fn unknown_or_degenerate_labels_are_invalid() {
    for label in [
        "not-a-freq", "0D", "0h", "", "5", "W-FOO", "WOM-0MON", "QS-FOO", "999999999999D",
        "300000000B",
    ] {
        assert!(!is_valid_frequency_label(label), "{label} should be invalid");
    }
}

#[test]
fn zero_count_does_not_increment() {
    let off: Offset = "0D".parse().unwrap();
    let err = date_range(at(2021, 1, 1), 3, &off).unwrap_err();
    assert!(matches!(err, CadenceError::InvalidFrequencyLabel { .. }));
}

#[test]
fn empty_range_is_allowed() {
    let off: Offset = "D".parse().unwrap();
    assert!(date_range(at(2021, 1, 1), 0, &off).unwrap().is_empty());
}

#[test]
fn anchored_range_rolls_onto_first_anchor() {
    let dates = date_range_for_label(at(2021, 1, 15), 3, "ME").unwrap();
    assert_eq!(dates, vec![at(2021, 1, 31), at(2021, 2, 28), at(2021, 3, 31)]);
}

#[test]
fn negative_count_walks_backwards() {
    let dates = date_range_for_label(at(2021, 3, 15), 3, "-1ME").unwrap();
    assert_eq!(dates, vec![at(2021, 2, 28), at(2021, 1, 31), at(2020, 12, 31)]);

    let days = date_range_for_label(at(2021, 1, 3), 3, "-2D").unwrap();
    assert_eq!(days, vec![at(2021, 1, 3), at(2021, 1, 1), at(2020, 12, 30)]);
}

#[test]
fn week_of_month_range() {
    // Third Friday of each month
    let dates = date_range_for_label(at(2021, 1, 1), 3, "WOM-3FRI").unwrap();
    assert_eq!(dates, vec![at(2021, 1, 15), at(2021, 2, 19), at(2021, 3, 19)]);
}

#[test]
fn unparseable_label_reports_the_label() {
    let err = date_range_for_label(at(2021, 1, 1), 3, "not-a-freq").unwrap_err();
    match err {
        CadenceError::InvalidFrequencyLabel { label, .. } => assert_eq!(label, "not-a-freq"),
        other => panic!("unexpected error: {other:?}"),
    }
}
