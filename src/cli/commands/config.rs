use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::missing_keys;
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration ({}):\n", config_path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *check {
            if !config_path.exists() {
                warning(format!(
                    "No configuration file at {}; defaults are in use.",
                    config_path.display()
                ));
            } else {
                let content = fs::read_to_string(config_path)
                    .map_err(|e| AppError::Config(e.to_string()))?;
                let missing = missing_keys(&content)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning("Missing keys (defaults will be used):");
                    for key in missing {
                        println!("  - {key}");
                    }
                }
            }
        }

        if *edit_config {
            ConfigLogic::edit(config_path, editor)?;
        }
    }

    Ok(())
}
