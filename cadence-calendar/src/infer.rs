//! Calendar-aware frequency inference over a datetime index.
//!
//! Sub-daily series are labelled with the largest tick that divides their
//! single spacing. Day-multiple series are tried, in order, as annual,
//! quarterly, monthly, daily/weekly, business-daily and week-of-month
//! patterns. The first rule that fits wins.

use std::collections::BTreeSet;

use cadence_core::FrequencyLabel;
use chrono::{Datelike, NaiveDateTime, Weekday};

use crate::offset::{Offset, OffsetKind, Position, Tick};
use crate::util::last_of_month;

const NANOS_PER_DAY: i128 = 86_400_000_000_000;

// Largest unit first.
const TICKS: [Tick; 6] = [
    Tick::Hour,
    Tick::Minute,
    Tick::Second,
    Tick::Milli,
    Tick::Micro,
    Tick::Nano,
];

/// Infer the canonical frequency label of `dates`.
///
/// A strictly decreasing index is labelled like its ascending mirror with a
/// negated count (`"-1D"`, `"-1h"`). Returns `None` when fewer than three
/// points are given, when the index repeats a value or changes direction, or
/// when no rule describes every point.
///
/// ```
/// use cadence_calendar::infer_calendar_frequency;
/// use chrono::NaiveDate;
///
/// let ends: Vec<_> = [(1, 31), (2, 28), (3, 31), (4, 30)]
///     .iter()
///     .map(|&(m, d)| NaiveDate::from_ymd_opt(2021, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap())
///     .collect();
/// assert_eq!(infer_calendar_frequency(&ends).unwrap().as_str(), "ME");
/// ```
#[must_use]
pub fn infer_calendar_frequency(dates: &[NaiveDateTime]) -> Option<FrequencyLabel> {
    infer_offset(dates).map(|o| o.label())
}

/// Same as [`infer_calendar_frequency`] but returns the parsed [`Offset`].
#[must_use]
pub fn infer_offset(dates: &[NaiveDateTime]) -> Option<Offset> {
    if dates.len() >= 3 && dates.windows(2).all(|w| w[1] < w[0]) {
        let ascending: Vec<NaiveDateTime> = dates.iter().rev().copied().collect();
        let forward = Inferer::new(&ascending)?.label()?;
        return Some(Offset::new(forward.n().checked_neg()?, forward.kind()));
    }
    Inferer::new(dates)?.label()
}

struct Inferer<'a> {
    dates: &'a [NaiveDateTime],
    // Sorted distinct spacings in nanoseconds.
    deltas: Vec<i128>,
}

fn nanos_since_epoch(dt: NaiveDateTime) -> i128 {
    let utc = dt.and_utc();
    i128::from(utc.timestamp()) * 1_000_000_000 + i128::from(utc.timestamp_subsec_nanos())
}

fn sorted_unique_diffs<I: IntoIterator<Item = i128>>(values: I) -> Vec<i128> {
    let values: Vec<i128> = values.into_iter().collect();
    values
        .windows(2)
        .map(|w| w[1] - w[0])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn with_count(n: i128, kind: OffsetKind) -> Option<Offset> {
    if n <= 0 {
        return None;
    }
    Some(Offset::new(i64::try_from(n).ok()?, kind))
}

impl<'a> Inferer<'a> {
    fn new(dates: &'a [NaiveDateTime]) -> Option<Self> {
        if dates.len() < 3 || dates.windows(2).any(|w| w[1] <= w[0]) {
            return None;
        }
        let deltas = sorted_unique_diffs(dates.iter().map(|&d| nanos_since_epoch(d)));
        Some(Self { dates, deltas })
    }

    fn first(&self) -> NaiveDateTime {
        self.dates[0]
    }

    fn label(&self) -> Option<Offset> {
        let smallest = *self.deltas.first()?;
        if smallest % NANOS_PER_DAY == 0 {
            return self.daily_rule();
        }
        // Sub-daily spacing has to be exact.
        let [delta] = self.deltas.as_slice() else {
            return None;
        };
        let tick = TICKS
            .into_iter()
            .find(|t| delta % i128::from(t.nanos()) == 0)?;
        with_count(delta / i128::from(tick.nanos()), OffsetKind::Tick(tick))
    }

    fn daily_rule(&self) -> Option<Offset> {
        if let Some(o) = self.annual_rule() {
            return Some(o);
        }
        if let Some(o) = self.quarterly_rule() {
            return Some(o);
        }
        if let Some(o) = self.monthly_rule() {
            return Some(o);
        }
        if let [delta] = self.deltas.as_slice() {
            let days = delta / NANOS_PER_DAY;
            return if days % 7 == 0 {
                with_count(days / 7, OffsetKind::Week(self.first().weekday()))
            } else {
                with_count(days, OffsetKind::Day)
            };
        }
        if self.is_business_daily() {
            return Some(Offset::new(1, OffsetKind::BusinessDay));
        }
        self.week_of_month_rule()
    }

    fn year_diffs(&self) -> Vec<i128> {
        sorted_unique_diffs(self.dates.iter().map(|d| i128::from(d.year())))
    }

    fn month_diffs(&self) -> Vec<i128> {
        sorted_unique_diffs(
            self.dates
                .iter()
                .map(|d| i128::from(d.year()) * 12 + i128::from(d.month())),
        )
    }

    fn annual_rule(&self) -> Option<Offset> {
        let diffs = self.year_diffs();
        let [years] = diffs[..] else {
            return None;
        };
        let month = self.first().month();
        if self.dates.iter().any(|d| d.month() != month) {
            return None;
        }
        let (position, business) = self.month_position()?;
        with_count(
            years,
            OffsetKind::Year {
                position,
                business,
                month,
            },
        )
    }

    fn quarterly_rule(&self) -> Option<Offset> {
        let diffs = self.month_diffs();
        let [months] = diffs[..] else {
            return None;
        };
        if months % 3 != 0 {
            return None;
        }
        let (position, business) = self.month_position()?;
        // Name the quarter by the last month of its three-month cycle.
        let month = match self.first().month() % 3 {
            0 => 12,
            1 => 10,
            _ => 11,
        };
        with_count(
            months / 3,
            OffsetKind::Quarter {
                position,
                business,
                month,
            },
        )
    }

    fn monthly_rule(&self) -> Option<Offset> {
        let diffs = self.month_diffs();
        let [months] = diffs[..] else {
            return None;
        };
        let (position, business) = self.month_position()?;
        with_count(months, OffsetKind::Month { position, business })
    }

    // Where every point sits within its month, if they all agree.
    fn month_position(&self) -> Option<(Position, bool)> {
        let (mut cal_start, mut bus_start, mut cal_end, mut bus_end) = (true, true, true, true);
        for d in self.dates {
            let day = d.day();
            let dim = last_of_month(d.year(), d.month())?.day();
            let wd = d.weekday();
            cal_start &= day == 1;
            bus_start &= day == 1 || (day <= 3 && wd == Weekday::Mon);
            cal_end &= day == dim;
            bus_end &= day == dim || (dim - day < 3 && wd == Weekday::Fri);
            if !(cal_start || bus_start || cal_end || bus_end) {
                return None;
            }
        }
        if cal_end {
            Some((Position::End, false))
        } else if bus_end {
            Some((Position::End, true))
        } else if cal_start {
            Some((Position::Begin, false))
        } else {
            Some((Position::Begin, true))
        }
    }

    // Spacings are one or three days, and three-day jumps only ever land on Monday.
    fn is_business_daily(&self) -> bool {
        if self.deltas != [NANOS_PER_DAY, 3 * NANOS_PER_DAY] {
            return false;
        }
        let mut weekday = i128::from(self.first().weekday().num_days_from_monday());
        self.dates.windows(2).all(|w| {
            let shift = (nanos_since_epoch(w[1]) - nanos_since_epoch(w[0])).div_euclid(NANOS_PER_DAY);
            weekday = (weekday + shift).rem_euclid(7);
            (weekday == 0 && shift == 3) || ((1..=4).contains(&weekday) && shift == 1)
        })
    }

    fn week_of_month_rule(&self) -> Option<Offset> {
        let weekday = self.first().weekday();
        if self.dates.iter().any(|d| d.weekday() != weekday) {
            return None;
        }
        let weeks: BTreeSet<u32> = self
            .dates
            .iter()
            .map(|d| (d.day() - 1) / 7)
            .filter(|&w| w < 4)
            .collect();
        let mut it = weeks.into_iter();
        let (Some(week), None) = (it.next(), it.next()) else {
            return None;
        };
        let week = u8::try_from(week + 1).ok()?;
        Some(Offset::new(1, OffsetKind::WeekOfMonth { week, weekday }))
    }
}
