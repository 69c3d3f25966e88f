use clap::{Parser, Subcommand};

/// Command-line interface definition for timepunch
#[derive(Parser)]
#[command(
    name = "timepunch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Time-punch tracker: record punches and waived days, import/export .ttldb databases",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Export punches and waived days to a .ttldb file
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Import punches and waived days from a .ttldb file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Remove every punch and waived day
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Set (replace) the punches of a day
    Punch {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        /// Punch times in order (HH:MM)
        times: Vec<String>,

        #[arg(long, conflicts_with = "times", help = "Delete the day instead")]
        remove: bool,
    },

    /// Waive a day (holiday, vacation, ...)
    Waive {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        #[arg(long, default_value = "Waived workday")]
        reason: String,

        #[arg(long, value_name = "HH:MM", help = "Credited hours (default: hours_per_day)")]
        hours: Option<String>,

        #[arg(long, help = "Remove the waiver instead")]
        remove: bool,
    },

    /// List punch days and waived days
    List {
        #[arg(long, short, help = "Filter by year (YYYY) or month (YYYY-MM)")]
        period: Option<String>,
    },
}
