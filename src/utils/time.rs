//! Time utilities: signed `HH:MM` parsing, validation, formatting and algebra.
//!
//! Values handled here are durations, not wall-clock times: hours may go past
//! 23 (`48:00` is fine) and a leading `-` marks a negative amount. Zero is
//! always rendered unsigned as `00:00`.

use crate::errors::{AppError, AppResult};
use crate::models::duration::Duration;
use chrono::{DateTime, TimeZone};
use regex::{Captures, Regex};
use std::fmt::Display;
use std::sync::LazyLock;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Canonical shape: optional sign, exactly two digits on each side.
static STRICT_HHMM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-)?(\d{2}):(\d{2})$").expect("valid HH:MM regex"));

/// Lenient shape accepted by the arithmetic helpers (`1:00`, `124:05`).
static LOOSE_HHMM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-)?(\d+):(\d+)$").expect("valid H:M regex"));

fn captures_to_minutes(caps: &Captures<'_>, raw: &str) -> AppResult<i64> {
    let invalid = || AppError::InvalidTime(raw.to_string());

    let hours: i64 = caps[2].parse().map_err(|_| invalid())?;
    let minutes: i64 = caps[3].parse().map_err(|_| invalid())?;
    let total = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(invalid)?;

    Ok(if caps.get(1).is_some() { -total } else { total })
}

/// Parses a canonical `[-]HH:MM` string into a [`Duration`].
///
/// Minutes are not range-checked (`00:75` is 75 minutes); use
/// [`validate_time`] when the value must be a proper clock reading.
pub fn parse_duration(s: &str) -> AppResult<Duration> {
    let caps = STRICT_HHMM
        .captures(s)
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    captures_to_minutes(&caps, s).map(Duration::from_minutes)
}

/// Strict validity gate for persisted times: `^-?\d{2}:\d{2}$`, hours in
/// `00..=23` and minutes in `00..=59`.
pub fn validate_time(s: &str) -> bool {
    STRICT_HHMM.captures(s).is_some_and(|caps| {
        let hours_ok = matches!(caps[2].parse::<u32>(), Ok(h) if h <= 23);
        let minutes_ok = matches!(caps[3].parse::<u32>(), Ok(m) if m <= 59);
        hours_ok && minutes_ok
    })
}

/// Converts a `[-]H:M` string to signed total minutes.
///
/// Accepts non-canonical input such as `1:00` or `24:15`.
pub fn hour_to_minutes(s: &str) -> AppResult<i64> {
    let caps = LOOSE_HHMM
        .captures(s)
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    captures_to_minutes(&caps, s)
}

/// Renders signed minutes as `[-]HH:MM`, carrying minute overflow into hours.
pub fn minutes_to_hour_formatted(mins: i64) -> String {
    if mins == 0 {
        return "00:00".to_string();
    }

    let sign = if mins < 0 { "-" } else { "" };
    let abs = mins.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
}

/// `a + b`, formatted.
pub fn sum_time(a: &str, b: &str) -> AppResult<String> {
    let total = hour_to_minutes(a)?
        .checked_add(hour_to_minutes(b)?)
        .ok_or_else(|| AppError::InvalidTime(format!("{a} + {b}")))?;
    Ok(minutes_to_hour_formatted(total))
}

/// Time left from `a` until `b`, i.e. `b - a`.
///
/// Note the argument order: the first value is subtracted from the second.
pub fn subtract_time(a: &str, b: &str) -> AppResult<String> {
    let delta = hour_to_minutes(b)?
        .checked_sub(hour_to_minutes(a)?)
        .ok_or_else(|| AppError::InvalidTime(format!("{b} - {a}")))?;
    Ok(minutes_to_hour_formatted(delta))
}

/// `a * factor`, formatted. A negative factor flips the sign.
pub fn multiply_time(a: &str, factor: i64) -> AppResult<String> {
    let minutes = hour_to_minutes(a)?;
    let product = minutes
        .checked_mul(factor)
        .ok_or_else(|| AppError::InvalidTime(format!("{a} * {factor}")))?;
    Ok(minutes_to_hour_formatted(product))
}

/// True when the string form of `value` starts with `-`.
pub fn is_negative<T: Display + ?Sized>(value: &T) -> bool {
    value.to_string().starts_with('-')
}

/// Whole days from `first` to `second`, rounded to the nearest day.
///
/// The sign follows the argument order; callers pass the earlier instant first
/// to get a positive count.
pub fn diff_days<Tz: TimeZone>(first: &DateTime<Tz>, second: &DateTime<Tz>) -> i64 {
    let delta_ms = second.timestamp_millis() - first.timestamp_millis();
    (delta_ms as f64 / MILLIS_PER_DAY).round() as i64
}
