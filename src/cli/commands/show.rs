use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::DayStore;
use crate::db::store::SqliteDayStore;
use crate::errors::AppResult;
use crate::ui::render;
use crate::utils::path::expand_tilde;

/// Handle the `show` command: print the persisted rows for the active
/// date without opening the tracker (read-only, no bootstrap).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let date = cli.active_date()?;
    let db_path = expand_tilde(&cfg.database);

    let mut store = SqliteDayStore::open(&db_path.to_string_lossy())?;
    let rows = store.load_rows(&date)?;

    println!("{}", render::title(&cfg.title_prefix, date));

    if rows.is_empty() {
        println!("No rows recorded for {}", date);
        return Ok(());
    }

    for (i, row) in rows.iter().enumerate() {
        println!("  {}  {:<20} {:<12} {}", i, row.name, row.tag, row.elapsed);
    }
    Ok(())
}
