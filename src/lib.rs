//! interlock-fixtures library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Generate { .. } => cli::commands::generate::handle(cmd, cfg),
        Commands::Analyze { .. } => cli::commands::analyze::handle(cmd, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cmd, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config (default se --config non è indicato)
    let cfg = Config::load(cli.config.as_deref())?;

    // 3️⃣ nessun subcommand → batch completo
    let cmd = cli.command.unwrap_or_else(Commands::default_generate);

    dispatch(&cmd, &cfg)
}
