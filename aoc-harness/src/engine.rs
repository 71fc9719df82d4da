//! Execution engine: runs a solver's parts against their datasets
//!
//! For every enabled part the engine builds a solver from its descriptor,
//! checks that the declared example answers line up with the datasets, then
//! solves each dataset with its own timer and compares the answer with the
//! expected one.

use crate::aggregator::{DayResult, PartResult, UNKNOWN_ANSWER};
use crate::dataset::{Dataset, DatasetCollection, Part};
use crate::error::{ConfigurationError, HarnessError, SolveError};
use crate::registry::SolverDescriptor;
use crate::solver::{DaySolver, DaySolverExt};
use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Which parts of a day to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartSelection {
    pub part_one: bool,
    pub part_two: bool,
}

impl PartSelection {
    pub const BOTH: PartSelection = PartSelection {
        part_one: true,
        part_two: true,
    };

    /// `Some(1)` runs only part one, `Some(2)` only part two, anything else both
    pub fn from_part(part: Option<u8>) -> Self {
        match part {
            Some(1) => PartSelection {
                part_one: true,
                part_two: false,
            },
            Some(2) => PartSelection {
                part_one: false,
                part_two: true,
            },
            _ => Self::BOTH,
        }
    }

    pub fn includes(&self, part: Part) -> bool {
        match part {
            Part::One => self.part_one,
            Part::Two => self.part_two,
        }
    }
}

impl Default for PartSelection {
    fn default() -> Self {
        Self::BOTH
    }
}

/// Runs solvers against datasets, sequentially or on a thread pool
pub struct ExecutionEngine {
    thread_pool: Option<rayon::ThreadPool>,
}

impl ExecutionEngine {
    /// Solve every dataset on the calling thread, one after another
    pub fn sequential() -> Self {
        Self { thread_pool: None }
    }

    /// Solve the datasets of a part concurrently on a dedicated pool
    ///
    /// Each task builds its own solver and its own timer; results keep
    /// dataset order.
    pub fn parallel(threads: usize) -> Result<Self, ConfigurationError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| ConfigurationError::ThreadPool(e.to_string()))?;

        Ok(Self {
            thread_pool: Some(thread_pool),
        })
    }

    pub fn is_parallel(&self) -> bool {
        self.thread_pool.is_some()
    }

    /// Run the selected parts of one day
    ///
    /// # Returns
    /// * `Ok(DayResult)` - All selected parts ran to completion
    /// * `Err(HarnessError::Configuration)` - Expected answer count does not match
    ///   the dataset count for any selected part (checked before anything is solved)
    /// * `Err(HarnessError::Solve)` - A solver returned an error or panicked;
    ///   the rest of the day is not run
    pub fn run_day(
        &self,
        descriptor: &SolverDescriptor,
        datasets: &DatasetCollection,
        parts: PartSelection,
    ) -> Result<DayResult, HarnessError> {
        info!(
            year = descriptor.year(),
            day = descriptor.name(),
            kind = %datasets.kind(),
            "running day"
        );

        let selected = Part::ALL
            .into_iter()
            .filter(|p| parts.includes(*p))
            .map(|part| {
                expected_answers(descriptor, datasets, part).map(|expected| (part, expected))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut part_one = Vec::new();
        let mut part_two = Vec::new();

        for (part, expected) in selected {
            let results = self.run_part(descriptor, datasets, part, expected)?;
            match part {
                Part::One => part_one = results,
                Part::Two => part_two = results,
            }
        }

        Ok(DayResult::new(
            descriptor.name(),
            descriptor.year(),
            descriptor.day(),
            datasets.kind(),
            part_one,
            part_two,
        ))
    }

    fn run_part(
        &self,
        descriptor: &SolverDescriptor,
        datasets: &DatasetCollection,
        part: Part,
        expected: Vec<&'static str>,
    ) -> Result<Vec<PartResult>, HarnessError> {
        let part_datasets = datasets.datasets(part);

        match &self.thread_pool {
            None => {
                let solver = descriptor.instantiate();
                part_datasets
                    .iter()
                    .zip(expected)
                    .enumerate()
                    .map(|(index, (dataset, expected))| {
                        solve_dataset(&*solver, descriptor, part, index, dataset, expected)
                    })
                    .collect()
            }
            Some(pool) => pool.install(|| {
                part_datasets
                    .par_iter()
                    .zip(expected)
                    .enumerate()
                    .map(|(index, (dataset, expected))| {
                        let solver = descriptor.instantiate();
                        solve_dataset(&*solver, descriptor, part, index, dataset, expected)
                    })
                    .collect()
            }),
        }
    }
}

impl Default for ExecutionEngine {
    fn default() -> Self {
        Self::sequential()
    }
}

/// Expected answer per dataset for a part
///
/// Example input must declare exactly one expected answer per dataset. Real
/// input has no authoritative answer, so every dataset gets the `"?"` placeholder.
fn expected_answers(
    descriptor: &SolverDescriptor,
    datasets: &DatasetCollection,
    part: Part,
) -> Result<Vec<&'static str>, ConfigurationError> {
    let count = datasets.datasets(part).len();

    if !datasets.kind().is_example() {
        return Ok(vec![UNKNOWN_ANSWER; count]);
    }

    let declared = descriptor.expected_answers(part);
    if declared.len() != count {
        return Err(ConfigurationError::ExpectedAnswerCountMismatch {
            name: descriptor.name().to_string(),
            part,
            datasets: count,
            expected: declared.len(),
        });
    }
    Ok(declared.to_vec())
}

/// Solve one dataset with a fresh timer and compare against `expected`
fn solve_dataset(
    solver: &dyn DaySolver,
    descriptor: &SolverDescriptor,
    part: Part,
    index: usize,
    dataset: &Dataset,
    expected: &str,
) -> Result<PartResult, HarnessError> {
    let (answer, duration) = timed_solve(solver, part, dataset);
    let answer = answer.map_err(|source| HarnessError::Solve {
        name: descriptor.name().to_string(),
        part,
        dataset: index,
        source,
    })?;

    let result = PartResult::new(answer, expected, duration);
    debug!(
        day = descriptor.name(),
        %part,
        dataset = index + 1,
        answer = %result.answer,
        matches = result.matches,
        ?duration,
        "solved dataset"
    );
    Ok(result)
}

/// Invoke the solve operation, turning a panic into a [`SolveError`]
fn timed_solve(
    solver: &dyn DaySolver,
    part: Part,
    dataset: &Dataset,
) -> (Result<String, SolveError>, Duration) {
    let start = Instant::now();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| solver.solve(part, dataset)));
    let elapsed = start.elapsed();

    let answer =
        outcome.unwrap_or_else(|payload| Err(SolveError::Panicked(panic_message(&*payload))));
    (answer, elapsed)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
