//! Top-level `pawhub` arguments.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the pawhub services.
#[derive(Parser)]
#[command(name = "pawhub")]
#[command(about = "Run pawhub services and manage their data")]
#[command(version)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
