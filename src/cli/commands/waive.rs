use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::days::{remove_waiver, set_waiver};
use crate::db::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Waive {
        date,
        reason,
        hours,
        remove,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        let mut waivers = pool.waivers();

        if *remove {
            if remove_waiver(&mut waivers, date)? {
                success(format!("Waiver removed for {date}"));
            } else {
                warning(format!("{date} was not waived"));
            }
            return Ok(());
        }

        let hours = hours.as_deref().unwrap_or(&cfg.hours_per_day);
        set_waiver(&mut waivers, date, reason, hours)?;
        success(format!("{date} waived ({hours}): {reason}"));
    }
    Ok(())
}
