use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::CadenceError;

const NANOS_PER_SEC: u32 = 1_000_000_000;
// Well past chrono's supported range but still exactly castable to i64.
const SECONDS_LIMIT: f64 = 1.0e16;

const fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        panic!("invalid calendar date");
    };
    let Some(time) = NaiveTime::from_hms_opt(0, 0, 0) else {
        panic!("invalid time of day");
    };
    date.and_time(time)
}

/// Unix epoch start as a naive UTC datetime.
pub const EPOCH: NaiveDateTime = midnight(1970, 1, 1);

/// A more recent reference instant (2021-01-01T00:00:00).
pub const RECENT: NaiveDateTime = midnight(2021, 1, 1);

/// Epoch seconds of [`RECENT`].
pub const RECENT_SECONDS: i64 = 1_609_459_200;

/// Convert epoch seconds to a naive UTC datetime with nanosecond precision.
///
/// # Errors
/// Returns `TimestampOutOfRange` if `seconds` is not finite or falls outside
/// the calendar range chrono can represent.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn date_from_epoch_seconds(seconds: f64) -> Result<NaiveDateTime, CadenceError> {
    if !seconds.is_finite() || seconds.abs() >= SECONDS_LIMIT {
        return Err(CadenceError::timestamp_out_of_range(seconds));
    }
    let whole = seconds.floor();
    let mut secs = whole as i64;
    // Fractional part lies in [0, 1), so the rounded nanos fit in u32.
    let mut nanos = ((seconds - whole) * f64::from(NANOS_PER_SEC)).round() as u32;
    if nanos >= NANOS_PER_SEC {
        secs += 1;
        nanos -= NANOS_PER_SEC;
    }
    DateTime::from_timestamp(secs, nanos)
        .map(|dt| dt.naive_utc())
        .ok_or(CadenceError::timestamp_out_of_range(seconds))
}

/// Convert a sequence of epoch seconds, preserving order.
///
/// # Errors
/// Returns the first `TimestampOutOfRange` encountered.
pub fn dates_from_epoch_seconds(seconds: &[f64]) -> Result<Vec<NaiveDateTime>, CadenceError> {
    seconds.iter().copied().map(date_from_epoch_seconds).collect()
}

/// Convert a naive UTC datetime back to epoch seconds.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn epoch_seconds_from_date(date: NaiveDateTime) -> f64 {
    let utc = date.and_utc();
    utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) / f64::from(NANOS_PER_SEC)
}

/// Convert a sequence of naive UTC datetimes back to epoch seconds.
#[must_use]
pub fn epoch_seconds_from_dates(dates: &[NaiveDateTime]) -> Vec<f64> {
    dates.iter().copied().map(epoch_seconds_from_date).collect()
}
