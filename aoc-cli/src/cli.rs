//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(
    name = "aoc",
    about = "Run Advent of Code solvers against example or real input",
    version
)]
pub struct Args {
    /// Year to run (defaults to the current year)
    #[arg(short, long, env = "AOC_YEAR")]
    pub year: Option<u16>,

    /// Days to run, repeated or comma-separated
    #[arg(
        short,
        long,
        value_delimiter = ',',
        value_parser = clap::value_parser!(u8).range(1..=25)
    )]
    pub day: Vec<u8>,

    /// Run every day registered for the year (overrides --day)
    #[arg(short, long)]
    pub all: bool,

    /// Part to run (runs both parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Use real input instead of example input
    #[arg(short, long)]
    pub real: bool,

    /// Directory holding `{year}/DayNN.txt` and `{year}/DayNNExample.txt`
    #[arg(long, env = "AOC_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Solve the datasets of each part in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads for --parallel
    #[arg(long, requires = "parallel")]
    pub threads: Option<usize>,

    /// Quiet mode - only output answers
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
