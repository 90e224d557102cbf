//! CLI interface for courtside
//!
//! Provides subcommands for:
//! - `run`: Poll live games and issue signals
//! - `status`: Summarize the signal log
//! - `config`: Show the effective configuration

mod run;
mod status;

pub use run::RunArgs;
pub use status::{print_config, print_status};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "courtside")]
#[command(about = "Live basketball edge signals with Kelly staking")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll live games and issue signals
    Run(RunArgs),
    /// Show signal counts and P&L per league
    Status,
    /// Show the effective configuration
    Config,
}
