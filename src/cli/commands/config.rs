use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;

/// Inspect the configuration file.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("📄 {}\n", path.display());
                println!("{content}");
            } else {
                warning(format!("No config file found at {}", path.display()));
            }
        }

        if *check {
            if !path.exists() {
                warning(format!("No config file found at {}", path.display()));
                return Ok(());
            }

            let content = fs::read_to_string(&path)?;
            match serde_yaml::from_str::<Config>(&content) {
                Ok(cfg) => {
                    success("Configuration OK");
                    println!("Database:      {}", cfg.database);
                    println!("Working week:  {}d x {}h", cfg.working_days, cfg.working_hours);
                    match &cfg.default_member {
                        Some(member) => println!("Default member: {member}"),
                        None => println!("Default member: (none)"),
                    }
                }
                Err(e) => {
                    return Err(AppError::Config(format!("invalid config file: {e}")));
                }
            }
        }
    }
    Ok(())
}
