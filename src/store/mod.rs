//! Key-value stores holding the punch days and the waived days.
//!
//! The engine only talks to [`KeyValueStore`]; the SQLite tables used by the
//! binary and the in-memory map used when embedding are interchangeable.

pub mod memory;
pub mod sqlite;

use crate::errors::AppResult;
use crate::models::{DayPunchEntry, WaivedDayEntry};
use std::collections::BTreeMap;

pub use memory::MemoryStore;
pub use sqlite::{SqliteStore, StoreTable};

pub trait KeyValueStore {
    type Value;

    /// Every (key, value) pair, in ascending key order.
    fn entries(&self) -> AppResult<Vec<(String, Self::Value)>>;

    fn get(&self, key: &str) -> AppResult<Option<Self::Value>>;

    fn has(&self, key: &str) -> AppResult<bool>;

    /// Inserts or replaces a single key.
    fn set(&mut self, key: &str, value: Self::Value) -> AppResult<()>;

    /// Inserts or replaces every key of `entries` in one write. Keys not in
    /// the map are left alone.
    fn set_many(&mut self, entries: BTreeMap<String, Self::Value>) -> AppResult<()>;

    /// Returns whether the key existed.
    fn delete(&mut self, key: &str) -> AppResult<bool>;

    fn clear(&mut self) -> AppResult<()>;
}

/// Punch store backed by SQLite: `YYYY-M-D` (zero-based month) → punches.
pub type PunchStore<'c> = SqliteStore<'c, DayPunchEntry>;

/// Waiver store backed by SQLite: `YYYY-MM-DD` (one-based month) → waiver.
pub type WaiverStore<'c> = SqliteStore<'c, WaivedDayEntry>;
