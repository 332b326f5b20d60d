//! CLI interface for tickbook
//!
//! Provides subcommands for:
//! - `shell`: Interactive menu over an in-memory price ledger
//! - `stats`: One-shot summary statistics for a file of records
//! - `config`: Show resolved configuration

mod shell;
mod stats;

pub use shell::{run_shell, ShellArgs};
pub use stats::StatsArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tickbook")]
#[command(about = "Interactive ledger of timestamped stock prices")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "tickbook.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu shell
    Shell(ShellArgs),
    /// Summarize timestamp,price records from a file or stdin
    Stats(StatsArgs),
    /// Show resolved configuration
    Config,
}
