pub mod calendar_date;
pub mod duration;
pub mod entries;
pub mod record;

pub use calendar_date::CalendarDate;
pub use duration::Duration;
pub use entries::{DayPunchEntry, WaivedDayEntry};
pub use record::InterchangeRecord;
