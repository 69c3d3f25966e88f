use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ImportExportLogic;
use crate::db::DbPool;
use crate::db::log::{LogOperation, ttlog};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::fs_utils::ensure_writable;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let path = Path::new(file);

        if !ensure_writable(path, *force)? {
            warning("Export cancelled: existing file not overwritten.");
            return Ok(());
        }

        let pool = DbPool::open(&cfg.database)?;
        let exported =
            ImportExportLogic::export_database_to_file(&pool.punches(), &pool.waivers(), path);

        if !exported {
            return Err(AppError::Export(format!(
                "could not write {}",
                path.display()
            )));
        }

        ttlog(&pool.conn, LogOperation::Export, file, "Database exported")?;
        success(format!("Database exported: {}", path.display()));
    }
    Ok(())
}
