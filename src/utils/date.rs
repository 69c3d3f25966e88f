//! Calendar date validation for `YYYY-MM-DD` strings.
//!
//! Two flavours exist because the month segment means different things in
//! different places:
//!
//! - [`validate_date`] reads the month as a zero-based index (`00` = January,
//!   `11` = December). `1996-00-01` is valid, `1996-12-01` is not, and
//!   `1996-01-30` is rejected because index `01` is February of a leap year.
//! - [`validate_calendar_date`] reads the month one-based, as used by the
//!   `.ttldb` interchange format, and shifts it through
//!   [`internal_month`] before the same check.
//!
//! Day-of-month validity itself is `chrono::NaiveDate::from_ymd_opt`.

use crate::interchange::codec::internal_month;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static YMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid date regex"));

/// Gregorian leap year: February 29th exists.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Number of days in `month` (one-based, `1..=12`), or `None` for an out of
/// range month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// True when `day` exists in the month at zero-based `month_index`.
pub fn is_valid_day(year: i32, month_index: u32, day: u32) -> bool {
    month_index
        .checked_add(1)
        .and_then(|month| NaiveDate::from_ymd_opt(year, month, day))
        .is_some()
}

/// Splits a strict `YYYY-MM-DD` string into its numeric segments, without
/// checking any range.
pub fn split_ymd(s: &str) -> Option<(i32, u32, u32)> {
    let caps = YMD.captures(s)?;
    Some((
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    ))
}

/// Validates a `YYYY-MM-DD` string whose month segment is a zero-based index.
pub fn validate_date(s: &str) -> bool {
    split_ymd(s).is_some_and(|(year, month, day)| is_valid_day(year, month, day))
}

/// Validates a `YYYY-MM-DD` string with a one-based (human) month.
pub fn validate_calendar_date(s: &str) -> bool {
    split_ymd(s).is_some_and(|(year, month, day)| {
        internal_month(month).is_some_and(|index| is_valid_day(year, index, day))
    })
}
