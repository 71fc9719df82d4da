//! Advent of Code Solver Harness
//!
//! Discovers the solvers registered for a year, feeds them the right
//! datasets, runs and times both puzzle parts, and checks the answers
//! against the known example answers.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based contract for two-part solvers ([`DaySolver`])
//! - An explicit `(year, day)` registration table ([`SolverRegistry`]),
//!   filled by hand or by `#[derive(AocDay)]`
//! - A reader splitting delimited example files into datasets ([`DatasetReader`])
//! - An engine that solves, times and validates each dataset ([`ExecutionEngine`])
//! - A batch runner collecting everything into a [`RunReport`] ([`Harness`])
//!
//! # Quick Example
//!
//! ```
//! use aoc_harness::{
//!     DaySelection, DaySolver, ExecutionEngine, ExpectedAnswers, Harness, InputKind,
//!     MemoryInput, PartSelection, RegistryBuilder, RunConfig, SolveError, SolverRegistration,
//! };
//!
//! struct Day01;
//!
//! impl DaySolver for Day01 {
//!     fn solve_part_one(&self, input: &[String]) -> Result<String, SolveError> {
//!         let sum = input
//!             .iter()
//!             .map(|l| l.parse::<i64>().map_err(SolveError::failed))
//!             .sum::<Result<i64, _>>()?;
//!         Ok(sum.to_string())
//!     }
//!
//!     fn solve_part_two(&self, input: &[String]) -> Result<String, SolveError> {
//!         Ok(input.len().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register(SolverRegistration {
//!         year: 2018,
//!         day: 1,
//!         name: "Day01",
//!         expected: ExpectedAnswers { part_one: &["3", "0"], part_two: &["2"] },
//!         factory: || Box::new(Day01),
//!     })
//!     .unwrap()
//!     .build();
//!
//! let input = MemoryInput::new().with(
//!     2018,
//!     "Day01",
//!     InputKind::Example,
//!     "[part1]\n+1\n+2\n[part1]\n+1\n-1\n[part2]\n+7\n-7",
//! );
//!
//! let engine = ExecutionEngine::sequential();
//! let report = Harness::new(&registry, &engine, &input)
//!     .run(&RunConfig {
//!         year: 2018,
//!         input_kind: InputKind::Example,
//!         selection: DaySelection::All,
//!         parts: PartSelection::BOTH,
//!     })
//!     .unwrap();
//!
//! assert!(report.days[0].all_match());
//! ```
//!
//! # Example input files
//!
//! Example files may hold several datasets per part, separated by the
//! delimiter lines `[part1]` and `[part2]` (matched case-insensitively).
//! Each solve operation declares one expected answer per dataset, in order.
//!
//! ## Derive macro
//!
//! ```ignore
//! #[derive(AocDay, Default)]
//! #[aoc(year = 2018, day = 1, part_one = ["3", "0", "-6"], part_two = ["0", "10", "5", "14"])]
//! pub struct Day01;
//! ```

mod aggregator;
mod dataset;
mod engine;
mod error;
mod harness;
mod reader;
mod registry;
mod solver;

// Re-export public API
pub use aggregator::{DayFailure, DayResult, PartResult, ResultAggregator, RunReport, UNKNOWN_ANSWER};
pub use dataset::{Dataset, DatasetCollection, InputKind, Part};
pub use engine::{ExecutionEngine, PartSelection};
pub use error::{ConfigurationError, DataError, HarnessError, SolveError};
pub use harness::{Harness, InputProvider, MemoryInput, RunConfig};
pub use reader::{DatasetReader, PART_ONE_DELIMITER, PART_TWO_DELIMITER};
pub use registry::{
    DaySelection, RegistryBuilder, SolverDescriptor, SolverFactory, SolverRegistration,
    SolverRegistry,
};
pub use solver::{DaySolver, DaySolverExt, ExpectedAnswers};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use aoc_harness_macros::AocDay;
