use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clear_database;
use crate::db::DbPool;
use crate::db::log::{LogOperation, ttlog};
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes {
            warning("This removes every punch and waived day.");
            if !confirm("Clear the database?")? {
                info("Nothing was removed.");
                return Ok(());
            }
        }

        let pool = DbPool::open(&cfg.database)?;
        clear_database(&mut pool.punches(), &mut pool.waivers())?;
        ttlog(&pool.conn, LogOperation::Clear, &cfg.database, "Database cleared")?;
        success("Database cleared.");
    }
    Ok(())
}
