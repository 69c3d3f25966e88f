use crate::errors::AppError;
use crate::utils::time::{minutes_to_hour_formatted, parse_duration};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Signed amount of minutes, rendered as `[-]HH:MM`.
///
/// Formatting then parsing yields the same minute count; hours are not capped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    minutes: i64,
}

impl Duration {
    pub const ZERO: Duration = Duration { minutes: 0 };

    pub const fn from_minutes(minutes: i64) -> Self {
        Self { minutes }
    }

    pub const fn minutes(self) -> i64 {
        self.minutes
    }

    pub const fn is_negative(self) -> bool {
        self.minutes < 0
    }
}

impl FromStr for Duration {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&minutes_to_hour_formatted(self.minutes))
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration::from_minutes(self.minutes + rhs.minutes)
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration::from_minutes(self.minutes - rhs.minutes)
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, factor: i64) -> Duration {
        Duration::from_minutes(self.minutes * factor)
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration::from_minutes(-self.minutes)
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, Add::add)
    }
}
