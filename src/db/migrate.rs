//! Schema migrations.
//!
//! Each migration runs once; applied versions are recorded in the `log` table
//! with operation `migration_applied`.

use crate::db::log::{LogOperation, ttlog};
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};
use tracing::info;

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240301_0001_create_flexible_store",
        description: "Created flexible_store table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS flexible_store (
            key    TEXT PRIMARY KEY NOT NULL,
            value  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20240301_0002_create_waived_workdays",
        description: "Created waived_workdays table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS waived_workdays (
            key    TEXT PRIMARY KEY NOT NULL,
            value  TEXT NOT NULL
        );
        "#,
    },
];

/// Ensure that the `log` table exists; migrations are tracked in it.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = ?1 AND target = ?2
         LIMIT 1",
    )?;
    let found = chk
        .query_row([LogOperation::MigrationApplied.as_str(), version], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

/// Public entry point: run all pending migrations, in order.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        conn.execute_batch(m.sql)
            .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;
        ttlog(conn, LogOperation::MigrationApplied, m.version, m.description)?;

        info!(version = m.version, "{}", m.description);
    }

    Ok(())
}
