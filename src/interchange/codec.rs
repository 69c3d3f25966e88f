//! Conversion between the two stores and the portable record shape.
//!
//! The punch store uses a zero-based month in its keys, the interchange
//! format a one-based one. Every shift between the two goes through
//! [`external_month`] / [`internal_month`].

use crate::errors::{AppError, AppResult};
use crate::models::{CalendarDate, DayPunchEntry, InterchangeRecord, WaivedDayEntry};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tracing::warn;

/// Zero-based month index to one-based month number.
pub const fn external_month(internal: u32) -> u32 {
    internal + 1
}

/// One-based month number to zero-based index; `None` outside `1..=12`.
pub fn internal_month(external: u32) -> Option<u32> {
    (1..=12).contains(&external).then(|| external - 1)
}

/// Where a decoded record has to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreTarget {
    Punch(DayPunchEntry),
    Waiver(WaivedDayEntry),
}

/// Builds the interchange record of one punch store entry.
pub fn punch_record(key: &str, entry: DayPunchEntry) -> AppResult<InterchangeRecord> {
    let date = CalendarDate::from_punch_key(key)?;
    Ok(InterchangeRecord::Flexible {
        date: date.external(),
        values: entry.values,
    })
}

/// Builds the interchange record of one waiver store entry. Waiver keys are
/// already one-based and pass through untouched.
pub fn waiver_record(key: String, entry: WaivedDayEntry) -> InterchangeRecord {
    InterchangeRecord::Waived {
        date: key,
        data: entry.reason,
        hours: entry.hours,
    }
}

/// Encodes both stores: punch records first, waiver records appended.
///
/// Punch keys that do not parse as a calendar day are logged and left out.
pub fn to_interchange<P, W>(punches: P, waivers: W) -> Vec<InterchangeRecord>
where
    P: IntoIterator<Item = (String, DayPunchEntry)>,
    W: IntoIterator<Item = (String, WaivedDayEntry)>,
{
    let mut records = Vec::new();

    for (key, entry) in punches {
        match punch_record(&key, entry) {
            Ok(record) => records.push(record),
            Err(e) => warn!(key = %key, error = %e, "skipping punch entry with malformed key"),
        }
    }

    records.extend(
        waivers
            .into_iter()
            .map(|(key, entry)| waiver_record(key, entry)),
    );

    records
}

/// Decodes one record into its store key and value.
///
/// Exact inverse of [`to_interchange`] for well-formed keys.
pub fn from_interchange(record: InterchangeRecord) -> AppResult<(String, StoreTarget)> {
    match record {
        InterchangeRecord::Flexible { date, values } => {
            let key = CalendarDate::from_external(&date)?.punch_key();
            Ok((key, StoreTarget::Punch(DayPunchEntry::new(values))))
        }
        InterchangeRecord::Waived { date, data, hours } => Ok((
            date,
            StoreTarget::Waiver(WaivedDayEntry::new(data, hours)),
        )),
    }
}

/// Serializes records as JSON indented with one tab per level.
pub fn encode_records(records: &[InterchangeRecord]) -> AppResult<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    records.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| AppError::Export(e.to_string()))
}

/// Parses file content as a JSON array of loosely-typed records.
///
/// Anything other than an array is a structural error; the elements are
/// validated one by one later.
pub fn decode_records(content: &str) -> AppResult<Vec<Value>> {
    match serde_json::from_str::<Value>(content)? {
        Value::Array(items) => Ok(items),
        other => Err(AppError::Import(format!(
            "expected a JSON array of records, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
