use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            match serde_yaml::to_string(cfg) {
                Ok(yaml) => println!("{}", yaml),
                Err(e) => warning(format!("cannot render configuration: {}", e)),
            }
        }

        if *check {
            let missing = migrate::check()?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!(
                    "Missing keys: {} (run `rtracker config --migrate` to fill them)",
                    missing.join(", ")
                ));
            }
        }

        if *run_migrate {
            if migrate::run()? {
                success("Configuration migrated.");
            } else {
                println!("Nothing to migrate.");
            }
        }
    }

    Ok(())
}
