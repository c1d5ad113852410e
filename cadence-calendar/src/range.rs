use cadence_core::{CadenceError, EPOCH};
use chrono::NaiveDateTime;

use crate::offset::Offset;

/// Build `periods` datetimes spaced by `offset`, starting at `start`.
///
/// Anchored offsets first roll `start` onto the nearest anchor in the
/// direction of travel (forward for positive counts, backward for negative).
///
/// # Errors
/// - `InvalidFrequencyLabel` if the offset count is zero, since the range
///   would never advance.
/// - `DateOutOfRange` if calendar arithmetic leaves chrono's supported range.
pub fn date_range(
    start: NaiveDateTime,
    periods: usize,
    offset: &Offset,
) -> Result<Vec<NaiveDateTime>, CadenceError> {
    if offset.n() == 0 {
        return Err(CadenceError::invalid_label(
            offset.to_string(),
            "offset does not advance",
        ));
    }
    let mut out = Vec::with_capacity(periods);
    if periods == 0 {
        return Ok(out);
    }
    let overflow = || CadenceError::DateOutOfRange(format!("{offset} from {start}"));

    let first = if offset.n() > 0 {
        offset.rollforward(start)
    } else {
        offset.rollback(start)
    }
    .ok_or_else(overflow)?;
    out.push(first);
    let mut cur = first;
    for _ in 1..periods {
        cur = offset.advance(cur).ok_or_else(overflow)?;
        out.push(cur);
    }
    Ok(out)
}

/// Parse `label` and build a range from it in one go.
///
/// # Errors
/// Returns `InvalidFrequencyLabel` for unparseable labels and propagates the
/// errors of [`date_range`].
pub fn date_range_for_label(
    start: NaiveDateTime,
    periods: usize,
    label: &str,
) -> Result<Vec<NaiveDateTime>, CadenceError> {
    let offset: Offset = label.parse()?;
    date_range(start, periods, &offset)
}

/// `true` if `label` names a frequency that can produce a three-period range
/// from the Unix epoch.
///
/// ```
/// use cadence_calendar::is_valid_frequency_label;
///
/// assert!(is_valid_frequency_label("1D"));
/// assert!(is_valid_frequency_label("H"));
/// assert!(!is_valid_frequency_label("not-a-freq"));
/// ```
#[must_use]
pub fn is_valid_frequency_label(label: &str) -> bool {
    date_range_for_label(EPOCH, 3, label).is_ok()
}
