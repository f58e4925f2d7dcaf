use clap::{Parser, Subcommand};

/// Command-line interface definition for timekeeper
/// Per-day time tracker with start/stop rows, backed by SQLite
#[derive(Parser)]
#[command(
    name = "timekeeper",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple per-day time keeper: named rows with start/stop timers, persisted to SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the active date (YYYY-MM-DD, defaults to today)
    #[arg(global = true, long = "date")]
    pub date: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The date every storage operation is scoped to: the `--date`
    /// override when given, otherwise today.
    pub fn active_date(&self) -> crate::errors::AppResult<chrono::NaiveDate> {
        match &self.date {
            Some(s) => crate::utils::date::parse_date(s),
            None => Ok(crate::utils::date::today()),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the database
    Init,

    /// Open the interactive tracker for the active date
    Run,

    /// Print the rows persisted for the active date and exit
    Show,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },
}
