use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::DbPool;
use crate::db::log::{LogOperation, ttlog};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing timepunch…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", cfg.database);

    let pool = DbPool::open(&cfg.database)?;
    if let Err(e) = ttlog(
        &pool.conn,
        LogOperation::Init,
        &cfg.database,
        "Database initialized",
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
