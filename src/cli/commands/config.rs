use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        write,
    } = cmd
    {
        // ---- WRITE DEFAULT CONFIG ----
        if let Some(file) = write {
            let path = Config::write_default(file)?;
            success(format!("Default configuration written to {}", path.display()));
        }

        // ---- PRINT CONFIG ----
        if *print_config || write.is_none() {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if cfg.batch.total() == 0 {
            info("The batch plan is empty: `generate` will not write any file.");
        }
    }
    Ok(())
}
