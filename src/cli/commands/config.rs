use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = cmd
    {
        // ---- INIT CONFIG ----
        if *init {
            if Config::write_default(path, *force)? {
                success(format!("Config file written: {}", path.display()));
            } else {
                warning(format!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                ));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config || !*init {
            info(format!("Config file: {}", path.display()));
            println!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
