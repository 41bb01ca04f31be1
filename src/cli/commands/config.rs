use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        // Fail early on values the pipeline would reject.
        cfg.pipeline()?;

        let yaml = serde_yaml::to_string(cfg)
            .map_err(|e| AppError::Config(format!("cannot serialize config: {e}")))?;
        println!("📄 Current configuration ({}):\n", Config::config_file().display());
        println!("{yaml}");
    }
    Ok(())
}
