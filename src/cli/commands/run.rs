use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::registry::TimerRegistry;
use crate::db::store::SqliteDayStore;
use crate::errors::AppResult;
use crate::ui::shell::Shell;
use crate::utils::path::expand_tilde;

/// Handle the `run` command: load (or bootstrap) the active date and
/// hand control to the interactive shell. The shell's final persist
/// happens before the store is dropped.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let date = cli.active_date()?;
    let db_path = expand_tilde(&cfg.database);

    let store = SqliteDayStore::open(&db_path.to_string_lossy())?;
    let registry = TimerRegistry::load(store, date)?;

    Shell::new(registry, &cfg.title_prefix).run()
}
