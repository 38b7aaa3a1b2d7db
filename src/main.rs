//! arbor optimizer driver entry point.

mod cli;

use arbor::{Optimizer, run_demo};
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let optimizer = Optimizer::default();
    match cli.command {
        Command::Rules => {
            for transform in optimizer.transforms() {
                println!("{transform}");
            }
        }
        Command::Demo => {
            let outcomes = run_demo(&optimizer);
            for outcome in &outcomes {
                println!("{outcome}");
            }
            let failed = outcomes.iter().filter(|o| !o.preserved()).count();
            if failed > 0 {
                eprintln!("{failed} sample(s) changed value under optimization");
                std::process::exit(1);
            }
            println!("All samples preserved their value.");
        }
    }
}
