use crate::errors::{AppError, AppResult};
use crate::interchange::codec::{external_month, internal_month};
use crate::utils::date::{is_valid_day, split_ymd};
use std::fmt;

/// A calendar day with a zero-based month index (`0` = January).
///
/// The punch store keys days as `YYYY-M-D` using this index directly; the
/// interchange format and the waiver store use `YYYY-MM-DD` with a one-based
/// month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> AppResult<Self> {
        if !is_valid_day(year, month, day) {
            return Err(AppError::InvalidDate(format!(
                "{year}-{month}-{day} (zero-based month)"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Parses a punch store key (`YYYY-M-D`, zero-based month, padding optional).
    pub fn from_punch_key(key: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidDate(key.to_string());

        let mut parts = key.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let year = y.parse().map_err(|_| invalid())?;
        let month = m.parse().map_err(|_| invalid())?;
        let day = d.parse().map_err(|_| invalid())?;
        Self::new(year, month, day).map_err(|_| invalid())
    }

    /// Parses a one-based `YYYY-MM-DD` date as written in `.ttldb` files.
    pub fn from_external(s: &str) -> AppResult<Self> {
        let (year, month, day) = split_ymd(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
        let month = internal_month(month).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
        Self::new(year, month, day).map_err(|_| AppError::InvalidDate(s.to_string()))
    }

    /// Punch store key, e.g. `2020-3-1` for April 1st 2020.
    pub fn punch_key(&self) -> String {
        format!("{}-{}-{}", self.year, self.month, self.day)
    }

    /// One-based, zero-padded `YYYY-MM-DD`; also the waiver store key.
    pub fn external(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.year,
            external_month(self.month),
            self.day
        )
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.external())
    }
}
