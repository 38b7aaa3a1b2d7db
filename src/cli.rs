//! Command-line interface for the arbor optimizer driver.

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "arbor")]
#[command(about = "Rule-based expression optimizer", long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the configured transforms in application order
    Rules,
    /// Optimize the built-in sample expressions and check their values
    Demo,
}

impl Cli {
    /// Log filter used when RUST_LOG is unset.
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
