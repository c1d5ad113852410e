//! Date offsets and their frequency-label grammar.
//!
//! A label is an optional signed count followed by an alias, e.g. `"H"`,
//! `"15min"`, `"-2D"`, `"QS-OCT"` or `"WOM-2TUE"`. Both the current aliases
//! (`h`, `min`, `ME`, `YE-DEC`, ...) and their legacy spellings (`H`, `T`,
//! `M`, `A-DEC`, ...) are accepted; `Display` always renders the current one.

use std::fmt;
use std::str::FromStr;

use cadence_core::{CadenceError, FrequencyLabel};
use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Weekday};

use crate::util::{
    first_business_day, first_of_month, is_business_weekday, last_business_day, last_of_month,
    month_alias, next_month, nth_weekday_of_month, parse_month, parse_weekday, prev_month,
    weekday_alias,
};

const MAX_ANCHORED_STEPS: u64 = 200_000_000;

/// Fixed-length sub-daily unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tick {
    /// One nanosecond.
    Nano,
    /// One microsecond.
    Micro,
    /// One millisecond.
    Milli,
    /// One second.
    Second,
    /// One minute.
    Minute,
    /// One hour.
    Hour,
}

impl Tick {
    /// Length of one unit in nanoseconds.
    #[must_use]
    pub const fn nanos(self) -> i64 {
        match self {
            Self::Nano => 1,
            Self::Micro => 1_000,
            Self::Milli => 1_000_000,
            Self::Second => 1_000_000_000,
            Self::Minute => 60_000_000_000,
            Self::Hour => 3_600_000_000_000,
        }
    }

    /// Canonical alias.
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Self::Nano => "ns",
            Self::Micro => "us",
            Self::Milli => "ms",
            Self::Second => "s",
            Self::Minute => "min",
            Self::Hour => "h",
        }
    }
}

/// Which end of a month-based period an offset lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// First (business) day of the period.
    Begin,
    /// Last (business) day of the period.
    End,
}

/// The unit an [`Offset`] steps by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetKind {
    /// Fixed sub-daily duration.
    Tick(Tick),
    /// Calendar day.
    Day,
    /// Monday through Friday.
    BusinessDay,
    /// Weekly, landing on the given weekday.
    Week(Weekday),
    /// Monthly, on the `week`-th (1 to 4) occurrence of `weekday`.
    WeekOfMonth {
        /// Occurrence within the month, 1-based.
        week: u8,
        /// Target weekday.
        weekday: Weekday,
    },
    /// Every month.
    Month {
        /// Start or end of the month.
        position: Position,
        /// Use the first/last weekday instead of the calendar day.
        business: bool,
    },
    /// Every three months, aligned so that `month` is a quarter month.
    Quarter {
        /// Start or end of the quarter month.
        position: Position,
        /// Use the first/last weekday instead of the calendar day.
        business: bool,
        /// Anchor month in `1..=12`.
        month: u32,
    },
    /// Every year, in `month`.
    Year {
        /// Start or end of the anchor month.
        position: Position,
        /// Use the first/last weekday instead of the calendar day.
        business: bool,
        /// Anchor month in `1..=12`.
        month: u32,
    },
}

/// A parsed frequency label: `n` repetitions of an [`OffsetKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    n: i64,
    kind: OffsetKind,
}

impl Offset {
    /// Build an offset from a count and a kind.
    #[must_use]
    pub const fn new(n: i64, kind: OffsetKind) -> Self {
        Self { n, kind }
    }

    /// Signed repetition count.
    #[must_use]
    pub const fn n(&self) -> i64 {
        self.n
    }

    /// Unit stepped by this offset.
    #[must_use]
    pub const fn kind(&self) -> OffsetKind {
        self.kind
    }

    /// Canonical label for this offset.
    #[must_use]
    pub fn label(&self) -> FrequencyLabel {
        FrequencyLabel::new(self.to_string())
    }

    /// `true` when `dt` falls on an anchor point of this offset.
    ///
    /// Fixed-length kinds (ticks and calendar days) accept every instant.
    #[must_use]
    pub fn is_on_offset(&self, dt: NaiveDateTime) -> bool {
        let date = dt.date();
        match self.kind {
            OffsetKind::Tick(_) | OffsetKind::Day => true,
            OffsetKind::BusinessDay => is_business_weekday(date.weekday()),
            OffsetKind::Week(wd) => date.weekday() == wd,
            _ => self.anchor_in_month(date.year(), date.month()) == Some(date),
        }
    }

    /// `dt` if it is on offset, otherwise the next anchor point after it.
    #[must_use]
    pub fn rollforward(&self, dt: NaiveDateTime) -> Option<NaiveDateTime> {
        if self.is_on_offset(dt) {
            Some(dt)
        } else {
            self.step(dt, true)
        }
    }

    /// `dt` if it is on offset, otherwise the previous anchor point before it.
    #[must_use]
    pub fn rollback(&self, dt: NaiveDateTime) -> Option<NaiveDateTime> {
        if self.is_on_offset(dt) {
            Some(dt)
        } else {
            self.step(dt, false)
        }
    }

    /// Apply the offset `n` times to `dt`; `None` on calendar overflow.
    ///
    /// Anchored kinds move to the next (or previous, for negative `n`) anchor
    /// point on each repetition and keep the time of day.
    #[must_use]
    pub fn advance(&self, dt: NaiveDateTime) -> Option<NaiveDateTime> {
        match self.kind {
            OffsetKind::Tick(t) => {
                let nanos = self.n.checked_mul(t.nanos())?;
                dt.checked_add_signed(TimeDelta::nanoseconds(nanos))
            }
            OffsetKind::Day => dt.checked_add_signed(TimeDelta::try_days(self.n)?),
            _ => {
                // Each anchored step moves at least a day; larger counts cannot
                // stay inside chrono's calendar.
                if self.n.unsigned_abs() > MAX_ANCHORED_STEPS {
                    return None;
                }
                let forward = self.n > 0;
                let mut cur = dt;
                for _ in 0..self.n.unsigned_abs() {
                    cur = self.step(cur, forward)?;
                }
                Some(cur)
            }
        }
    }

    // One unit toward the next (or previous) anchor strictly past `dt`.
    fn step(&self, dt: NaiveDateTime, forward: bool) -> Option<NaiveDateTime> {
        let time = dt.time();
        match self.kind {
            OffsetKind::Tick(t) => {
                let delta = TimeDelta::nanoseconds(t.nanos());
                if forward {
                    dt.checked_add_signed(delta)
                } else {
                    dt.checked_sub_signed(delta)
                }
            }
            OffsetKind::Day | OffsetKind::BusinessDay | OffsetKind::Week(_) => {
                let mut date = dt.date();
                for _ in 0..7 {
                    date = if forward {
                        date.succ_opt()?
                    } else {
                        date.pred_opt()?
                    };
                    if self.is_on_offset(date.and_time(time)) {
                        return Some(date.and_time(time));
                    }
                }
                None
            }
            _ => {
                let date = dt.date();
                let (mut y, mut m) = (date.year(), date.month());
                // Every month-based kind has an anchor at least once a year.
                for _ in 0..=13 {
                    if let Some(anchor) = self.anchor_in_month(y, m) {
                        let past = if forward { anchor > date } else { anchor < date };
                        if past {
                            return Some(anchor.and_time(time));
                        }
                    }
                    (y, m) = if forward {
                        next_month(y, m)?
                    } else {
                        prev_month(y, m)?
                    };
                }
                None
            }
        }
    }

    // Anchor date inside (year, month), or None when the month carries no anchor.
    fn anchor_in_month(&self, year: i32, month: u32) -> Option<NaiveDate> {
        let (position, business) = match self.kind {
            OffsetKind::WeekOfMonth { week, weekday } => {
                return nth_weekday_of_month(year, month, week, weekday);
            }
            OffsetKind::Month { position, business } => (position, business),
            OffsetKind::Quarter {
                position,
                business,
                month: anchor,
            } => {
                if (month + 12 - anchor) % 3 != 0 {
                    return None;
                }
                (position, business)
            }
            OffsetKind::Year {
                position,
                business,
                month: anchor,
            } => {
                if month != anchor {
                    return None;
                }
                (position, business)
            }
            OffsetKind::Tick(_) | OffsetKind::Day | OffsetKind::BusinessDay | OffsetKind::Week(_) => {
                return None;
            }
        };
        match (position, business) {
            (Position::Begin, false) => first_of_month(year, month),
            (Position::Begin, true) => first_business_day(year, month),
            (Position::End, false) => last_of_month(year, month),
            (Position::End, true) => last_business_day(year, month),
        }
    }
}

const fn period_prefix(period: char, position: Position, business: bool) -> &'static str {
    match (period, position, business) {
        ('M', Position::Begin, false) => "MS",
        ('M', Position::End, false) => "ME",
        ('M', Position::Begin, true) => "BMS",
        ('M', Position::End, true) => "BME",
        ('Q', Position::Begin, false) => "QS",
        ('Q', Position::End, false) => "QE",
        ('Q', Position::Begin, true) => "BQS",
        ('Q', Position::End, true) => "BQE",
        (_, Position::Begin, false) => "YS",
        (_, Position::End, false) => "YE",
        (_, Position::Begin, true) => "BYS",
        (_, Position::End, true) => "BYE",
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.n != 1 {
            write!(f, "{}", self.n)?;
        }
        match self.kind {
            OffsetKind::Tick(t) => f.write_str(t.alias()),
            OffsetKind::Day => f.write_str("D"),
            OffsetKind::BusinessDay => f.write_str("B"),
            OffsetKind::Week(wd) => write!(f, "W-{}", weekday_alias(wd)),
            OffsetKind::WeekOfMonth { week, weekday } => {
                write!(f, "WOM-{week}{}", weekday_alias(weekday))
            }
            OffsetKind::Month { position, business } => {
                f.write_str(period_prefix('M', position, business))
            }
            OffsetKind::Quarter {
                position,
                business,
                month,
            } => write!(
                f,
                "{}-{}",
                period_prefix('Q', position, business),
                month_alias(month)
            ),
            OffsetKind::Year {
                position,
                business,
                month,
            } => write!(
                f,
                "{}-{}",
                period_prefix('Y', position, business),
                month_alias(month)
            ),
        }
    }
}

fn parse_kind(alias: &str) -> Option<OffsetKind> {
    let simple = match alias {
        "ns" | "N" => Some(OffsetKind::Tick(Tick::Nano)),
        "us" | "U" => Some(OffsetKind::Tick(Tick::Micro)),
        "ms" | "L" => Some(OffsetKind::Tick(Tick::Milli)),
        "s" | "S" => Some(OffsetKind::Tick(Tick::Second)),
        "min" | "T" => Some(OffsetKind::Tick(Tick::Minute)),
        "h" | "H" => Some(OffsetKind::Tick(Tick::Hour)),
        "D" | "d" => Some(OffsetKind::Day),
        "B" => Some(OffsetKind::BusinessDay),
        "ME" | "M" => Some(OffsetKind::Month {
            position: Position::End,
            business: false,
        }),
        "MS" => Some(OffsetKind::Month {
            position: Position::Begin,
            business: false,
        }),
        "BME" | "BM" => Some(OffsetKind::Month {
            position: Position::End,
            business: true,
        }),
        "BMS" => Some(OffsetKind::Month {
            position: Position::Begin,
            business: true,
        }),
        _ => None,
    };
    if simple.is_some() {
        return simple;
    }

    let (base, suffix) = match alias.split_once('-') {
        Some((b, s)) => (b, Some(s)),
        None => (alias, None),
    };
    let anchor_month = |default: u32| match suffix {
        Some(s) => parse_month(s),
        None => Some(default),
    };
    match base {
        "W" => {
            let weekday = match suffix {
                Some(s) => parse_weekday(s)?,
                None => Weekday::Sun,
            };
            Some(OffsetKind::Week(weekday))
        }
        "WOM" => {
            let s = suffix?;
            let (digit, wd) = s.split_at_checked(1)?;
            let week: u8 = digit.parse().ok()?;
            if !(1..=4).contains(&week) {
                return None;
            }
            Some(OffsetKind::WeekOfMonth {
                week,
                weekday: parse_weekday(wd)?,
            })
        }
        "Q" | "QE" => Some(OffsetKind::Quarter {
            position: Position::End,
            business: false,
            month: anchor_month(12)?,
        }),
        "QS" => Some(OffsetKind::Quarter {
            position: Position::Begin,
            business: false,
            month: anchor_month(1)?,
        }),
        "BQ" | "BQE" => Some(OffsetKind::Quarter {
            position: Position::End,
            business: true,
            month: anchor_month(12)?,
        }),
        "BQS" => Some(OffsetKind::Quarter {
            position: Position::Begin,
            business: true,
            month: anchor_month(1)?,
        }),
        "A" | "Y" | "YE" => Some(OffsetKind::Year {
            position: Position::End,
            business: false,
            month: anchor_month(12)?,
        }),
        "AS" | "YS" => Some(OffsetKind::Year {
            position: Position::Begin,
            business: false,
            month: anchor_month(1)?,
        }),
        "BA" | "BY" | "BYE" => Some(OffsetKind::Year {
            position: Position::End,
            business: true,
            month: anchor_month(12)?,
        }),
        "BAS" | "BYS" => Some(OffsetKind::Year {
            position: Position::Begin,
            business: true,
            month: anchor_month(1)?,
        }),
        _ => None,
    }
}

impl FromStr for Offset {
    type Err = CadenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
            .map_or(trimmed.len(), |(i, _)| i);
        let (count, alias) = trimmed.split_at(split);
        if alias.is_empty() {
            return Err(CadenceError::invalid_label(s, "missing frequency alias"));
        }
        let n = match count {
            "" => 1,
            "-" => -1,
            "+" => 1,
            digits => digits
                .parse::<i64>()
                .map_err(|e| CadenceError::invalid_label(s, format!("bad count: {e}")))?,
        };
        let kind = parse_kind(alias)
            .ok_or_else(|| CadenceError::invalid_label(s, format!("unknown alias {alias:?}")))?;
        Ok(Self { n, kind })
    }
}

impl TryFrom<&FrequencyLabel> for Offset {
    type Error = CadenceError;

    fn try_from(label: &FrequencyLabel) -> Result<Self, Self::Error> {
        label.as_str().parse()
    }
}
