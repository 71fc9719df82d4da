//! Error types for the CLI

use aoc_harness::{ConfigurationError, HarnessError};
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command-line configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registry or engine setup failed
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The batch run was aborted
    #[error(transparent)]
    Harness(#[from] HarnessError),

    /// One or more days failed while the rest of the batch completed
    #[error("{0} day(s) failed")]
    DaysFailed(usize),

    /// Writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
