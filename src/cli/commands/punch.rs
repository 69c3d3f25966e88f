use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::days::{remove_day_punches, set_day_punches};
use crate::db::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        date,
        times,
        remove,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        let mut punches = pool.punches();

        if *remove {
            if remove_day_punches(&mut punches, date)? {
                success(format!("Punches removed for {date}"));
            } else {
                warning(format!("No punches recorded for {date}"));
            }
            return Ok(());
        }

        set_day_punches(&mut punches, date, times.clone())?;
        success(format!("{} punch(es) saved for {date}", times.len()));
    }
    Ok(())
}
