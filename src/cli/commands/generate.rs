use crate::cli::parser::Commands;
use crate::config::{BatchPlan, Config};
use crate::core::batch::generate_batch;
use crate::errors::AppResult;
use std::path::PathBuf;

/// Handle the `generate` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        out,
        scenario,
        count,
        seed,
    } = cmd
    {
        let out_dir = out
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| cfg.output_path());

        let plan = match scenario {
            Some(s) => BatchPlan::only(*s, count.unwrap_or_else(|| cfg.batch.count(*s))),
            None => cfg.batch.clone(),
        };

        generate_batch(cfg, &out_dir, &plan, *seed)?;
    }
    Ok(())
}
