use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Kinds of rows written to the internal `log` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOperation {
    Init,
    Import,
    Export,
    Clear,
    MigrationApplied,
}

impl LogOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            LogOperation::Init => "init",
            LogOperation::Import => "import",
            LogOperation::Export => "export",
            LogOperation::Clear => "clear",
            LogOperation::MigrationApplied => "migration_applied",
        }
    }
}

/// Append one line to the internal `log` table (local time, RFC 3339).
pub fn ttlog(conn: &Connection, operation: LogOperation, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![now, operation.as_str(), target, message])?;

    Ok(())
}

/// Number of log rows for `operation`.
pub fn count(conn: &Connection, operation: LogOperation) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = ?1",
        [operation.as_str()],
        |row| row.get(0),
    )?;
    Ok(n)
}
