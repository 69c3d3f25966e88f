pub mod colors;
pub mod date;
pub mod fs_utils;
pub mod path;
pub mod table;
pub mod time;

pub use date::{validate_calendar_date, validate_date};
pub use time::{
    diff_days, hour_to_minutes, is_negative, minutes_to_hour_formatted, multiply_time,
    parse_duration, subtract_time, sum_time, validate_time,
};
