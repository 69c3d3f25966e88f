use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::days::{punch_days, waived_days};
use crate::db::DbPool;
use crate::errors::AppResult;
use crate::models::Duration;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let period = period.as_deref();

        let days = punch_days(&pool.punches(), period)?;
        let waivers = waived_days(&pool.waivers(), period)?;

        if days.is_empty() && waivers.is_empty() {
            info("No punches or waived days recorded.");
            return Ok(());
        }

        if !days.is_empty() {
            header("Punches");
            let mut table = Table::new(&["Date", "Punches", "Worked"]);
            for day in &days {
                table.add_row(vec![
                    day.date.external(),
                    day.entry.values.join(" "),
                    day.worked.to_string(),
                ]);
            }
            let total: Duration = days.iter().map(|d| d.worked).sum();
            table.add_row(vec!["Total".into(), String::new(), total.to_string()]);
            print!("{}", table.render());
        }

        if !waivers.is_empty() {
            header("Waived days");
            let mut table = Table::new(&["Date", "Hours", "Reason"]);
            for (date, waiver) in waivers {
                table.add_row(vec![date, waiver.hours, waiver.reason]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}
