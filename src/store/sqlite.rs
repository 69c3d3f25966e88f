//! SQLite-backed stores: one two-column table per store, values kept as JSON.

use super::KeyValueStore;
use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use tracing::debug;

/// Tables created by the migrations; one per store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreTable {
    Flexible,
    Waived,
}

impl StoreTable {
    pub fn name(self) -> &'static str {
        match self {
            StoreTable::Flexible => "flexible_store",
            StoreTable::Waived => "waived_workdays",
        }
    }
}

pub struct SqliteStore<'c, V> {
    conn: &'c Connection,
    table: StoreTable,
    _value: PhantomData<V>,
}

impl<'c, V> SqliteStore<'c, V> {
    /// The table must already exist (see `db::initialize::init_db`).
    pub fn new(conn: &'c Connection, table: StoreTable) -> Self {
        Self {
            conn,
            table,
            _value: PhantomData,
        }
    }

    pub fn table(&self) -> StoreTable {
        self.table
    }

    fn upsert_sql(&self) -> String {
        format!(
            "INSERT INTO {} (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            self.table.name()
        )
    }
}

impl<V: Serialize + DeserializeOwned> KeyValueStore for SqliteStore<'_, V> {
    type Value = V;

    fn entries(&self) -> AppResult<Vec<(String, V)>> {
        let sql = format!(
            "SELECT key, value FROM {} ORDER BY key ASC",
            self.table.name()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (key, raw) = row?;
            out.push((key, serde_json::from_str(&raw)?));
        }
        Ok(out)
    }

    fn get(&self, key: &str) -> AppResult<Option<V>> {
        let sql = format!("SELECT value FROM {} WHERE key = ?1", self.table.name());
        let raw: Option<String> = self
            .conn
            .query_row(&sql, [key], |row| row.get(0))
            .optional()?;

        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn has(&self, key: &str) -> AppResult<bool> {
        let sql = format!("SELECT 1 FROM {} WHERE key = ?1", self.table.name());
        let found: Option<i64> = self
            .conn
            .query_row(&sql, [key], |row| row.get(0))
            .optional()?;
        Ok(found.is_some())
    }

    fn set(&mut self, key: &str, value: V) -> AppResult<()> {
        let raw = serde_json::to_string(&value)?;
        self.conn.execute(&self.upsert_sql(), params![key, raw])?;
        Ok(())
    }

    fn set_many(&mut self, entries: BTreeMap<String, V>) -> AppResult<()> {
        let count = entries.len();
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(&self.upsert_sql())?;
            for (key, value) in entries {
                let raw = serde_json::to_string(&value)?;
                stmt.execute(params![key, raw])?;
            }
        }
        tx.commit()?;

        debug!(table = self.table.name(), count, "bulk write committed");
        Ok(())
    }

    fn delete(&mut self, key: &str) -> AppResult<bool> {
        let sql = format!("DELETE FROM {} WHERE key = ?1", self.table.name());
        let removed = self.conn.execute(&sql, [key])?;
        Ok(removed > 0)
    }

    fn clear(&mut self) -> AppResult<()> {
        let sql = format!("DELETE FROM {}", self.table.name());
        let removed = self.conn.execute(&sql, [])?;
        debug!(table = self.table.name(), removed, "store cleared");
        Ok(())
    }
}
