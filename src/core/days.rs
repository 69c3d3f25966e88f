//! Editing single days in the stores.
//!
//! Dates come in one-based (`YYYY-MM-DD`, as typed by the user) and are keyed
//! the way each store expects.

use crate::errors::{AppError, AppResult};
use crate::models::{CalendarDate, DayPunchEntry, Duration, WaivedDayEntry};
use crate::store::KeyValueStore;
use crate::utils::time::validate_time;
use tracing::debug;

/// One punch day as shown by `list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchDay {
    pub date: CalendarDate,
    pub entry: DayPunchEntry,
    pub worked: Duration,
}

fn check_times<'a>(times: impl IntoIterator<Item = &'a String>) -> AppResult<()> {
    for t in times {
        if !validate_time(t) {
            return Err(AppError::InvalidTime(t.clone()));
        }
    }
    Ok(())
}

/// Replaces the punch list of `date`. Returns the store key written.
pub fn set_day_punches<S>(store: &mut S, date: &str, values: Vec<String>) -> AppResult<String>
where
    S: KeyValueStore<Value = DayPunchEntry>,
{
    let key = CalendarDate::from_external(date)?.punch_key();
    check_times(&values)?;

    debug!(key = %key, punches = values.len(), "replacing day punches");
    store.set(&key, DayPunchEntry::new(values))?;
    Ok(key)
}

/// Returns whether the day had punches.
pub fn remove_day_punches<S>(store: &mut S, date: &str) -> AppResult<bool>
where
    S: KeyValueStore<Value = DayPunchEntry>,
{
    let key = CalendarDate::from_external(date)?.punch_key();
    store.delete(&key)
}

/// Adds or replaces the waiver of `date`.
pub fn set_waiver<S>(store: &mut S, date: &str, reason: &str, hours: &str) -> AppResult<String>
where
    S: KeyValueStore<Value = WaivedDayEntry>,
{
    let key = CalendarDate::from_external(date)?.external();
    if !validate_time(hours) {
        return Err(AppError::InvalidTime(hours.to_string()));
    }
    if reason.trim().is_empty() {
        return Err(AppError::InvalidRecord("waiver reason must not be empty".into()));
    }

    store.set(&key, WaivedDayEntry::new(reason, hours))?;
    Ok(key)
}

/// Returns whether the day was waived.
pub fn remove_waiver<S>(store: &mut S, date: &str) -> AppResult<bool>
where
    S: KeyValueStore<Value = WaivedDayEntry>,
{
    let key = CalendarDate::from_external(date)?.external();
    store.delete(&key)
}

/// All punch days in calendar order, with their worked totals.
///
/// `period` filters on the one-based date prefix (`2020`, `2020-04`).
pub fn punch_days<S>(store: &S, period: Option<&str>) -> AppResult<Vec<PunchDay>>
where
    S: KeyValueStore<Value = DayPunchEntry>,
{
    let mut days = Vec::new();
    for (key, entry) in store.entries()? {
        let date = CalendarDate::from_punch_key(&key)?;
        if period.is_some_and(|p| !date.external().starts_with(p)) {
            continue;
        }
        let worked = entry.worked_time()?;
        days.push(PunchDay { date, entry, worked });
    }
    days.sort_by_key(|d| d.date);
    Ok(days)
}

/// Waived days matching `period`, sorted by date.
pub fn waived_days<S>(store: &S, period: Option<&str>) -> AppResult<Vec<(String, WaivedDayEntry)>>
where
    S: KeyValueStore<Value = WaivedDayEntry>,
{
    Ok(store
        .entries()?
        .into_iter()
        .filter(|(key, _)| period.is_none_or(|p| key.starts_with(p)))
        .collect())
}
