use serde::{Deserialize, Serialize};

/// One element of a `.ttldb` file.
///
/// ```json
/// {"type":"flexible","date":"2020-04-01","values":["08:00","12:00"]}
/// {"type":"waived","date":"2020-01-01","data":"New Year's Day","hours":"08:00"}
/// ```
///
/// Dates always use a one-based month. Records are built per export/import
/// call and never stored as such.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InterchangeRecord {
    Flexible {
        date: String,
        values: Vec<String>,
    },
    Waived {
        date: String,
        /// Free-text reason.
        data: String,
        hours: String,
    },
}

impl InterchangeRecord {
    pub fn date(&self) -> &str {
        match self {
            InterchangeRecord::Flexible { date, .. } | InterchangeRecord::Waived { date, .. } => date,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InterchangeRecord::Flexible { .. } => "flexible",
            InterchangeRecord::Waived { .. } => "waived",
        }
    }
}
