//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use aoc_harness::{
    ConfigurationError, DaySelection, ExecutionEngine, InputKind, PartSelection, RunConfig,
};
use chrono::{Datelike, Local};
use std::path::{Path, PathBuf};
use tracing::Level;

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub year: u16,
    /// Selected day numbers; ignored when `all` is set
    pub days: Vec<u8>,
    pub all: bool,
    pub part: Option<u8>,
    pub input_kind: InputKind,
    /// Data directory with `~` expanded
    pub data_dir: PathBuf,
    /// Worker threads, `None` for sequential execution
    pub threads: Option<usize>,
    pub quiet: bool,
    pub verbose: u8,
}

impl Config {
    /// Build config from CLI args, filling in defaults
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let year = match args.year {
            Some(year) => year,
            None => current_year()?,
        };

        let threads = match (args.parallel, args.threads) {
            (false, _) => None,
            (true, Some(0)) => {
                return Err(CliError::Config("--threads must be at least 1".to_string()));
            }
            (true, threads) => Some(threads.unwrap_or_else(num_cpus)),
        };

        let input_kind = if args.real {
            InputKind::Real
        } else {
            InputKind::Example
        };

        Ok(Config {
            year,
            days: args.day,
            all: args.all,
            part: args.part,
            input_kind,
            data_dir: expand_tilde(&args.data_dir),
            threads,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }

    /// Settings handed to the harness for one batch
    pub fn run_config(&self) -> RunConfig {
        let selection = if self.all {
            DaySelection::All
        } else {
            DaySelection::from_days(self.days.iter().copied())
        };

        RunConfig {
            year: self.year,
            input_kind: self.input_kind,
            selection,
            parts: PartSelection::from_part(self.part),
        }
    }

    pub fn engine(&self) -> Result<ExecutionEngine, ConfigurationError> {
        match self.threads {
            Some(threads) => ExecutionEngine::parallel(threads),
            None => Ok(ExecutionEngine::sequential()),
        }
    }

    /// Default log level, used when `RUST_LOG` is not set
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

fn current_year() -> Result<u16, CliError> {
    u16::try_from(Local::now().year())
        .map_err(|_| CliError::Config("current year is out of range".to_string()))
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
