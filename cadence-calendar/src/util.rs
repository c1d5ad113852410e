//! Calendar field helpers shared by offsets and inference.

use chrono::{Datelike, Months, NaiveDate, Weekday};

const WEEKDAY_ALIASES: [(&str, Weekday); 7] = [
    ("MON", Weekday::Mon),
    ("TUE", Weekday::Tue),
    ("WED", Weekday::Wed),
    ("THU", Weekday::Thu),
    ("FRI", Weekday::Fri),
    ("SAT", Weekday::Sat),
    ("SUN", Weekday::Sun),
];

const MONTH_ALIASES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

pub const fn weekday_alias(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
        Weekday::Sun => "SUN",
    }
}

pub fn parse_weekday(s: &str) -> Option<Weekday> {
    WEEKDAY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == s)
        .map(|&(_, wd)| wd)
}

/// Three-letter alias for a month in `1..=12`.
pub fn month_alias(month: u32) -> &'static str {
    usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|i| MONTH_ALIASES.get(i))
        .copied()
        .unwrap_or("???")
}

pub fn parse_month(s: &str) -> Option<u32> {
    MONTH_ALIASES
        .iter()
        .position(|alias| *alias == s)
        .and_then(|i| u32::try_from(i + 1).ok())
}

pub const fn is_business_weekday(wd: Weekday) -> bool {
    !matches!(wd, Weekday::Sat | Weekday::Sun)
}

pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// The day before the first of the following month.
pub fn last_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    first_of_month(year, month)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// First Monday-to-Friday date of the month.
pub fn first_business_day(year: i32, month: u32) -> Option<NaiveDate> {
    let first = first_of_month(year, month)?;
    let skip = match first.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    first.checked_add_days(chrono::Days::new(skip))
}

/// Last Monday-to-Friday date of the month.
pub fn last_business_day(year: i32, month: u32) -> Option<NaiveDate> {
    let last = last_of_month(year, month)?;
    let back = match last.weekday() {
        Weekday::Sat => 1,
        Weekday::Sun => 2,
        _ => 0,
    };
    last.checked_sub_days(chrono::Days::new(back))
}

/// The `week`-th (1-based) occurrence of `weekday` in the month.
pub fn nth_weekday_of_month(year: i32, month: u32, week: u8, weekday: Weekday) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, week)
}

pub const fn next_month(year: i32, month: u32) -> Option<(i32, u32)> {
    if month >= 12 {
        match year.checked_add(1) {
            Some(y) => Some((y, 1)),
            None => None,
        }
    } else {
        Some((year, month + 1))
    }
}

pub const fn prev_month(year: i32, month: u32) -> Option<(i32, u32)> {
    if month <= 1 {
        match year.checked_sub(1) {
            Some(y) => Some((y, 12)),
            None => None,
        }
    } else {
        Some((year, month - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        let len = |y, m| last_of_month(y, m).map(|d| d.day());
        assert_eq!(len(2021, 2), Some(28));
        assert_eq!(len(2024, 2), Some(29));
        assert_eq!(len(1900, 2), Some(28));
        assert_eq!(len(2000, 2), Some(29));
        assert_eq!(len(2021, 4), Some(30));
        assert_eq!(len(2021, 12), Some(31));
        assert_eq!(len(2021, 13), None);
    }

    #[test]
    fn business_month_edges() {
        // 2021-05-01 is a Saturday, 2021-07-31 is a Saturday
        assert_eq!(first_business_day(2021, 5), NaiveDate::from_ymd_opt(2021, 5, 3));
        assert_eq!(last_business_day(2021, 7), NaiveDate::from_ymd_opt(2021, 7, 30));
        assert_eq!(first_business_day(2021, 6), NaiveDate::from_ymd_opt(2021, 6, 1));
    }

    #[test]
    fn aliases_round_trip() {
        for m in 1..=12 {
            assert_eq!(parse_month(month_alias(m)), Some(m));
        }
        for (alias, wd) in WEEKDAY_ALIASES {
            assert_eq!(weekday_alias(wd), alias);
            assert_eq!(parse_weekday(alias), Some(wd));
        }
        assert_eq!(parse_month("Jan"), None);
    }
}
