//! Database import/export over the `.ttldb` interchange format.
//!
//! Both entry points keep every failure inside their return value:
//! export answers `true`/`false`, import answers an [`ImportOutcome`].
//! The causes are logged through `tracing`.

use crate::errors::{AppError, AppResult};
use crate::interchange::{
    StoreTarget, decode_records, encode_records, from_interchange, to_interchange,
    validated_record,
};
use crate::models::{DayPunchEntry, WaivedDayEntry};
use crate::store::KeyValueStore;
use crate::utils::fs_utils::write_atomically;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of an import, serialized exactly as the UI layer expects it:
///
/// - `{"result": true}` when every record was imported
/// - `{"result": false, "total": N, "failed": F}` when `F` of `N` were skipped
///   (the valid ones are still committed)
/// - `{"result": false, "total": 0, "failed": 0}` when the file could not be
///   read or parsed (nothing committed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported,
    Partial { total: usize, failed: usize },
    Unreadable,
}

impl ImportOutcome {
    pub fn result(&self) -> bool {
        matches!(self, ImportOutcome::Imported)
    }

    /// Record count; absent on full success.
    pub fn total(&self) -> Option<usize> {
        match self {
            ImportOutcome::Imported => None,
            ImportOutcome::Partial { total, .. } => Some(*total),
            ImportOutcome::Unreadable => Some(0),
        }
    }

    /// Skipped record count; absent on full success.
    pub fn failed(&self) -> Option<usize> {
        match self {
            ImportOutcome::Imported => None,
            ImportOutcome::Partial { failed, .. } => Some(*failed),
            ImportOutcome::Unreadable => Some(0),
        }
    }
}

impl Serialize for ImportOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.result() { 1 } else { 3 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("result", &self.result())?;
        if let (Some(total), Some(failed)) = (self.total(), self.failed()) {
            map.serialize_entry("total", &total)?;
            map.serialize_entry("failed", &failed)?;
        }
        map.end()
    }
}

/// High-level import/export logic. Stores are passed in by the caller; the
/// engine assumes exclusive access to them for the duration of a call.
pub struct ImportExportLogic;

impl ImportExportLogic {
    /// Writes both stores to `path` as a tab-indented JSON array.
    ///
    /// Returns `false` on any failure (unreadable store, missing directory,
    /// permission error); the destination is then left as it was.
    pub fn export_database_to_file<P, W>(punches: &P, waivers: &W, path: impl AsRef<Path>) -> bool
    where
        P: KeyValueStore<Value = DayPunchEntry>,
        W: KeyValueStore<Value = WaivedDayEntry>,
    {
        let path = path.as_ref();

        match Self::write_export(punches, waivers, path) {
            Ok(count) => {
                info!(path = %path.display(), records = count, "database exported");
                true
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "database export failed");
                false
            }
        }
    }

    fn write_export<P, W>(punches: &P, waivers: &W, path: &Path) -> AppResult<usize>
    where
        P: KeyValueStore<Value = DayPunchEntry>,
        W: KeyValueStore<Value = WaivedDayEntry>,
    {
        let records = to_interchange(punches.entries()?, waivers.entries()?);
        let json = encode_records(&records)?;
        write_atomically(path, json.as_bytes())?;
        Ok(records.len())
    }

    /// Imports the first file of `paths`; any further paths are ignored.
    ///
    /// Invalid records are counted and skipped, valid ones are committed with
    /// one bulk write per store. Existing keys not present in the file are kept.
    pub fn import_database_from_file<P, W, F>(
        punches: &mut P,
        waivers: &mut W,
        paths: &[F],
    ) -> ImportOutcome
    where
        P: KeyValueStore<Value = DayPunchEntry>,
        W: KeyValueStore<Value = WaivedDayEntry>,
        F: AsRef<Path>,
    {
        let Some(path) = paths.first().map(AsRef::as_ref) else {
            warn!("import called without a file");
            return ImportOutcome::Unreadable;
        };

        match Self::read_import(punches, waivers, path) {
            Ok(outcome) => {
                info!(path = %path.display(), ?outcome, "database import finished");
                outcome
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "database import failed");
                ImportOutcome::Unreadable
            }
        }
    }

    fn read_import<P, W>(punches: &mut P, waivers: &mut W, path: &Path) -> AppResult<ImportOutcome>
    where
        P: KeyValueStore<Value = DayPunchEntry>,
        W: KeyValueStore<Value = WaivedDayEntry>,
    {
        let content = fs::read_to_string(path)?;
        let raw_records = decode_records(&content)?;
        let total = raw_records.len();

        let mut failed = 0;
        let mut day_entries: BTreeMap<String, DayPunchEntry> = BTreeMap::new();
        let mut waiver_entries: BTreeMap<String, WaivedDayEntry> = BTreeMap::new();

        for (index, raw) in raw_records.iter().enumerate() {
            let decoded = validated_record(raw)
                .ok_or_else(|| AppError::InvalidRecord(format!("record #{index}")))
                .and_then(from_interchange);

            match decoded {
                Ok((key, StoreTarget::Punch(entry))) => {
                    day_entries.insert(key, entry);
                }
                Ok((key, StoreTarget::Waiver(entry))) => {
                    waiver_entries.insert(key, entry);
                }
                Err(e) => {
                    failed += 1;
                    debug!(index, error = %e, "skipping invalid record");
                }
            }
        }

        punches.set_many(day_entries)?;
        waivers.set_many(waiver_entries)?;

        if failed == 0 {
            Ok(ImportOutcome::Imported)
        } else {
            Ok(ImportOutcome::Partial { total, failed })
        }
    }
}

/// Empties both stores. The two clears are independent: if the second one
/// fails the first is not rolled back.
pub fn clear_database<P, W>(punches: &mut P, waivers: &mut W) -> AppResult<()>
where
    P: KeyValueStore<Value = DayPunchEntry>,
    W: KeyValueStore<Value = WaivedDayEntry>,
{
    punches.clear()?;
    waivers.clear()?;
    info!("database cleared");
    Ok(())
}
