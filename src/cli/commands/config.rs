use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, init } = cmd {
        // ---- INIT CONFIG ----
        if *init {
            let path = cfg.save()?;
            messages::success(format!("Default configuration written to {}", path.display()));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Effective configuration:\n");
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("cannot serialize config: {}", e)))?;
            println!("{}", yaml);
        }
    }
    Ok(())
}
