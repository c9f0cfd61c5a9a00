use crate::models::Scenario;
use clap::{Parser, Subcommand};

/// Command-line interface definition for interlock-fixtures
/// CLI application to generate sample ignition-interlock driving logs
#[derive(Parser)]
#[command(
    name = "interlock-fixtures",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate sample CSV logs of a breath-alcohol ignition-interlock device",
    long_about = None
)]
pub struct Cli {
    /// YAML configuration file (defaults are used when omitted)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Subcommand; `generate` with default options when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the sample log batch (default: 35 normal, 5 tampering,
    /// 5 excessive failures, 3 bypass, 2 insufficient)
    Generate {
        /// Output directory (overrides `output_dir` from the configuration)
        #[arg(long = "out", value_name = "DIR")]
        out: Option<String>,

        /// Only generate files of this scenario
        #[arg(long, value_enum)]
        scenario: Option<Scenario>,

        /// Number of files to generate for --scenario
        #[arg(long, requires = "scenario")]
        count: Option<u32>,

        /// Seed the random generator to get reproducible files
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Analyze driving log files and report the detected anomaly
    Analyze {
        /// CSV files to analyze
        #[arg(required = true, value_name = "FILE")]
        files: Vec<String>,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or write the configuration
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the effective configuration as YAML")]
        print_config: bool,

        /// Write the default configuration to a file
        #[arg(long = "write", value_name = "FILE")]
        write: Option<String>,
    },
}

impl Commands {
    /// `generate` with every option left to its default.
    pub fn default_generate() -> Self {
        Commands::Generate {
            out: None,
            scenario: None,
            count: None,
            seed: None,
        }
    }
}
