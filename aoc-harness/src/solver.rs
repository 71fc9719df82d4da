//! The contract a puzzle solution implements

use crate::dataset::Part;
use crate::error::SolveError;

/// Core trait that every puzzle-day solver implements.
///
/// Each solve operation receives one dataset (the lines of one input batch)
/// and returns the answer as a string. Solvers are expected to be pure
/// functions of their dataset: the engine may build a fresh instance per
/// part, or per dataset when running datasets in parallel.
///
/// # Example
///
/// ```
/// use aoc_harness::{DaySolver, SolveError};
///
/// #[derive(Default)]
/// struct Day01;
///
/// impl DaySolver for Day01 {
///     fn solve_part_one(&self, input: &[String]) -> Result<String, SolveError> {
///         let sum = input
///             .iter()
///             .map(|line| line.parse::<i64>().map_err(SolveError::failed))
///             .sum::<Result<i64, _>>()?;
///         Ok(sum.to_string())
///     }
///
///     fn solve_part_two(&self, input: &[String]) -> Result<String, SolveError> {
///         Ok(input.len().to_string())
///     }
/// }
///
/// let lines = vec!["+1".to_string(), "-3".to_string()];
/// assert_eq!(Day01.solve_part_one(&lines).unwrap(), "-2");
/// ```
pub trait DaySolver {
    /// Solve part one for a single dataset
    fn solve_part_one(&self, input: &[String]) -> Result<String, SolveError>;

    /// Solve part two for a single dataset
    fn solve_part_two(&self, input: &[String]) -> Result<String, SolveError>;
}

/// Part-indexed access to the two solve operations
pub trait DaySolverExt: DaySolver {
    /// Dispatch to the solve operation for `part`
    fn solve(&self, part: Part, input: &[String]) -> Result<String, SolveError> {
        match part {
            Part::One => self.solve_part_one(input),
            Part::Two => self.solve_part_two(input),
        }
    }
}

impl<T: DaySolver + ?Sized> DaySolverExt for T {}

/// Known-correct example answers, index-aligned with the example datasets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpectedAnswers {
    pub part_one: &'static [&'static str],
    pub part_two: &'static [&'static str],
}

impl ExpectedAnswers {
    pub const NONE: ExpectedAnswers = ExpectedAnswers {
        part_one: &[],
        part_two: &[],
    };

    /// Expected answers for a part, in dataset order
    pub fn for_part(&self, part: Part) -> &'static [&'static str] {
        match part {
            Part::One => self.part_one,
            Part::Two => self.part_two,
        }
    }
}
