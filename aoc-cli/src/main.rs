//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod input;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_harness::{Harness, RegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use input::InputDirectory;
use output::OutputFormatter;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_tracing(&config);
    debug!(?config, "resolved configuration");

    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    let engine = config.engine()?;
    let input = InputDirectory::new(config.data_dir.clone());

    let formatter = OutputFormatter::new(config.quiet);
    let report = Harness::new(&registry, &engine, &input).run(&config.run_config())?;
    formatter.print_report(&report)?;

    if !report.failures.is_empty() {
        return Err(CliError::DaysFailed(report.failures.len()));
    }
    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the level chosen by `-v`
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level().as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
