//! Error types for the harness

use crate::dataset::Part;
use std::path::PathBuf;
use thiserror::Error;

/// A solver set-up or run selection that cannot be executed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Neither "run all" nor any day was requested
    #[error("No days configured to run")]
    NoDaysSelected,
    /// Days were requested but none of them has a solver for the year
    #[error("No solvers for year {year} match the requested days: {}", .requested.join(", "))]
    NoMatchingDays { year: u16, requested: Vec<String> },
    /// A registered solver's name does not follow the `DayNN` convention
    #[error("Day solver name does not match required pattern Day## for day {day}: {name}")]
    InvalidDayName { name: String, day: u8 },
    /// Year or day outside the supported range
    #[error("Invalid year {0} or day {1}")]
    InvalidYearDay(u16, u8),
    /// Attempted to register a solver for a year-day combination that already exists
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Declared expected answers do not line up with the datasets for a part
    #[error(
        "{name} part {part}: expected answer count must match the number of datasets \
         (datasets: {datasets}, expected answers: {expected})"
    )]
    ExpectedAnswerCountMismatch {
        name: String,
        part: Part,
        datasets: usize,
        expected: usize,
    },
    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),
}

/// Input data that cannot be turned into datasets
#[derive(Debug, Error)]
pub enum DataError {
    /// The input source has no lines at all
    #[error("There is no data provided to read from")]
    EmptyInput,
    /// The input file does not exist
    #[error("Input file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    /// The input file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error raised from inside a solve operation
#[derive(Debug, Error)]
pub enum SolveError {
    /// The dataset is not in the shape the solver expects
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Any other failure while solving
    #[error("Solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The solver panicked
    #[error("Solver panicked: {0}")]
    Panicked(String),
}

impl SolveError {
    /// Wrap any error type as a solve failure
    pub fn failed<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Failed(error.into())
    }
}

/// Top-level error for a harness run
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Configuration problem, always fatal for the batch
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    /// Input problem for a specific day, always fatal for the batch
    #[error("Data error for {name}: {source}")]
    Data {
        name: String,
        #[source]
        source: DataError,
    },
    /// A solver failed while solving one dataset
    #[error("{name} part {part} dataset {} failed: {source}", .dataset + 1)]
    Solve {
        name: String,
        part: Part,
        dataset: usize,
        #[source]
        source: SolveError,
    },
}
