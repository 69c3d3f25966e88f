use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ImportExportLogic, ImportOutcome};
use crate::db::DbPool;
use crate::db::log::{LogOperation, ttlog};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let mut punches = pool.punches();
        let mut waivers = pool.waivers();

        let outcome = ImportExportLogic::import_database_from_file(
            &mut punches,
            &mut waivers,
            std::slice::from_ref(file),
        );

        match outcome {
            ImportOutcome::Imported => {
                ttlog(&pool.conn, LogOperation::Import, file, "Database imported")?;
                success(format!("Database imported: {file}"));
            }
            ImportOutcome::Partial { total, failed } => {
                let message = format!("{failed}/{total} entries could not be imported");
                ttlog(&pool.conn, LogOperation::Import, file, &message)?;
                warning(message);
            }
            ImportOutcome::Unreadable => {
                return Err(AppError::Import(format!(
                    "{file} is missing or is not a valid .ttldb file"
                )));
            }
        }
    }
    Ok(())
}
