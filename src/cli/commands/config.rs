use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::fs;

/// Handle the `config` command.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                println!("{}", fs::read_to_string(&path)?);
            } else {
                warning(format!(
                    "No config file at {} (run 'timekeeper init' first)",
                    path.display()
                ));
            }
        } else {
            println!("Config file: {}", Config::config_file().display());
        }
    }
    Ok(())
}
