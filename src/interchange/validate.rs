//! Per-record validation for `.ttldb` input.
//!
//! Validation never fails loudly: a record is either usable or it is not.

use crate::models::InterchangeRecord;
use crate::utils::date::validate_calendar_date;
use crate::utils::time::validate_time;
use serde::Deserialize;
use serde_json::Value;

/// Checks field semantics of an already-shaped record.
pub fn is_valid_record(record: &InterchangeRecord) -> bool {
    match record {
        InterchangeRecord::Flexible { date, values } => {
            validate_calendar_date(date) && values.iter().all(|v| validate_time(v))
        }
        InterchangeRecord::Waived { date, data, hours } => {
            validate_calendar_date(date) && validate_time(hours) && !data.trim().is_empty()
        }
    }
}

/// Shapes a raw JSON value into a record and validates it.
///
/// Returns `None` for a missing or unknown `type`, missing or mistyped fields
/// (e.g. `values` not being an array) and any field failing validation.
pub fn validated_record(value: &Value) -> Option<InterchangeRecord> {
    InterchangeRecord::deserialize(value)
        .ok()
        .filter(is_valid_record)
}

pub fn valid_entry(value: &Value) -> bool {
    validated_record(value).is_some()
}
