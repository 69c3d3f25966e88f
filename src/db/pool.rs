//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! One database file holds both stores; each store borrows the connection.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::store::{PunchStore, SqliteStore, StoreTable, WaiverStore};
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Opens (or creates) the database file and applies pending migrations.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Fresh in-memory database with the full schema.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn punches(&self) -> PunchStore<'_> {
        SqliteStore::new(&self.conn, StoreTable::Flexible)
    }

    pub fn waivers(&self) -> WaiverStore<'_> {
        SqliteStore::new(&self.conn, StoreTable::Waived)
    }
}
