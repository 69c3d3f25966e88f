use crate::errors::{AppError, AppResult};
use crate::models::duration::Duration;
use crate::utils::time::hour_to_minutes;
use serde::{Deserialize, Serialize};

/// Punches recorded for one day, in the order they were entered.
///
/// A day's list is always replaced wholesale, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPunchEntry {
    pub values: Vec<String>,
}

impl DayPunchEntry {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Sum of `out - in` over consecutive (in, out) pairs.
    ///
    /// A trailing punch without its pair (day still open) adds nothing.
    pub fn worked_time(&self) -> AppResult<Duration> {
        let mut total: i64 = 0;
        for pair in self.values.chunks_exact(2) {
            let start = hour_to_minutes(&pair[0])?;
            let end = hour_to_minutes(&pair[1])?;
            total = end
                .checked_sub(start)
                .and_then(|span| total.checked_add(span))
                .ok_or_else(|| AppError::InvalidTime(format!("{} - {}", pair[1], pair[0])))?;
        }
        Ok(Duration::from_minutes(total))
    }
}

/// A day exempted from the usual work-time expectations (holiday, leave…).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaivedDayEntry {
    pub reason: String,
    /// Credited hours, `HH:MM`.
    pub hours: String,
}

impl WaivedDayEntry {
    pub fn new(reason: impl Into<String>, hours: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            hours: hours.into(),
        }
    }
}
