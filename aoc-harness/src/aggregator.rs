//! Result types and the aggregator that assembles them into a run report

use crate::dataset::{InputKind, Part};
use crate::error::HarnessError;
use chrono::{DateTime, Local};
use std::time::Duration;

/// Expected answer shown when no authoritative answer is known
pub const UNKNOWN_ANSWER: &str = "?";

/// Outcome of one solve invocation on one dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartResult {
    /// The answer returned by the solver
    pub answer: String,
    /// The declared expected answer, or `"?"`
    pub expected_answer: String,
    /// Whether `answer` equals `expected_answer` exactly
    pub matches: bool,
    /// Time spent inside the solve operation
    pub duration: Duration,
}

impl PartResult {
    pub fn new(answer: String, expected_answer: &str, duration: Duration) -> Self {
        let matches = expected_answer != UNKNOWN_ANSWER && answer == expected_answer;
        Self {
            answer,
            expected_answer: expected_answer.to_string(),
            matches,
            duration,
        }
    }
}

/// All part results of a single solver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayResult {
    pub name: String,
    pub year: u16,
    pub day: u8,
    pub input_kind: InputKind,
    pub part_one: Vec<PartResult>,
    pub part_two: Vec<PartResult>,
}

impl DayResult {
    pub fn new(
        name: impl Into<String>,
        year: u16,
        day: u8,
        input_kind: InputKind,
        part_one: Vec<PartResult>,
        part_two: Vec<PartResult>,
    ) -> Self {
        Self {
            name: name.into(),
            year,
            day,
            input_kind,
            part_one,
            part_two,
        }
    }

    pub fn using_example_data(&self) -> bool {
        self.input_kind.is_example()
    }

    /// Results for a part, in dataset order
    pub fn results(&self, part: Part) -> &[PartResult] {
        match part {
            Part::One => &self.part_one,
            Part::Two => &self.part_two,
        }
    }

    /// Every produced answer matched its expected answer
    pub fn all_match(&self) -> bool {
        self.part_one.iter().chain(&self.part_two).all(|r| r.matches)
    }

    /// Number of results whose answer differs from the expected answer
    pub fn mismatches(&self) -> usize {
        self.part_one
            .iter()
            .chain(&self.part_two)
            .filter(|r| !r.matches)
            .count()
    }

    /// Sum of all solve durations
    pub fn total_duration(&self) -> Duration {
        self.part_one
            .iter()
            .chain(&self.part_two)
            .map(|r| r.duration)
            .sum()
    }
}

/// A day whose solver failed; no partial results are kept for it
#[derive(Debug)]
pub struct DayFailure {
    pub name: String,
    pub day: u8,
    pub error: HarnessError,
}

/// Everything a batch run produced, handed to display code
#[derive(Debug)]
pub struct RunReport {
    pub year: u16,
    pub input_kind: InputKind,
    pub started_at: DateTime<Local>,
    pub days: Vec<DayResult>,
    pub failures: Vec<DayFailure>,
}

impl RunReport {
    pub fn using_example_data(&self) -> bool {
        self.input_kind.is_example()
    }

    /// Number of days that ran to completion
    pub fn solved(&self) -> usize {
        self.days.len()
    }

    /// Number of answers that did not match across all days
    pub fn mismatches(&self) -> usize {
        self.days.iter().map(DayResult::mismatches).sum()
    }

    pub fn total_solve_time(&self) -> Duration {
        self.days.iter().map(DayResult::total_duration).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty() && self.failures.is_empty()
    }
}

/// Collects day results of a batch in the order they complete
pub struct ResultAggregator {
    year: u16,
    input_kind: InputKind,
    started_at: DateTime<Local>,
    days: Vec<DayResult>,
    failures: Vec<DayFailure>,
}

impl ResultAggregator {
    pub fn new(year: u16, input_kind: InputKind) -> Self {
        Self {
            year,
            input_kind,
            started_at: Local::now(),
            days: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Record a completed day
    pub fn add_day(&mut self, result: DayResult) {
        self.days.push(result);
    }

    /// Record a day whose run was aborted
    pub fn add_failure(&mut self, name: impl Into<String>, day: u8, error: HarnessError) {
        self.failures.push(DayFailure {
            name: name.into(),
            day,
            error,
        });
    }

    pub fn finish(self) -> RunReport {
        RunReport {
            year: self.year,
            input_kind: self.input_kind,
            started_at: self.started_at,
            days: self.days,
            failures: self.failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;

    fn part(answer: &str, expected: &str, micros: u64) -> PartResult {
        PartResult::new(answer.to_string(), expected, Duration::from_micros(micros))
    }

    #[test]
    fn test_part_result_matching() {
        assert!(part("3", "3", 1).matches);
        assert!(!part("3", "4", 1).matches);
        assert!(!part("?", UNKNOWN_ANSWER, 1).matches);
        assert!(!part("3", " 3", 1).matches);
    }

    #[test]
    fn test_day_result_summaries() {
        let day = DayResult::new(
            "Day01",
            2018,
            1,
            InputKind::Example,
            vec![part("3", "3", 10), part("0", "1", 20)],
            vec![part("14", "14", 5)],
        );

        assert!(day.using_example_data());
        assert!(!day.all_match());
        assert_eq!(day.mismatches(), 1);
        assert_eq!(day.total_duration(), Duration::from_micros(35));
        assert_eq!(day.results(Part::Two).len(), 1);
    }

    #[test]
    fn test_aggregator_keeps_insertion_order_and_failures() {
        let mut aggregator = ResultAggregator::new(2023, InputKind::Example);
        for (name, day) in [("Day01", 1), ("Day03", 3)] {
            aggregator.add_day(DayResult::new(
                name,
                2023,
                day,
                InputKind::Example,
                vec![part("1", "1", 7)],
                Vec::new(),
            ));
        }
        aggregator.add_failure(
            "Day02",
            2,
            HarnessError::Solve {
                name: "Day02".to_string(),
                part: Part::One,
                dataset: 0,
                source: SolveError::InvalidInput("bad".to_string()),
            },
        );

        let report = aggregator.finish();
        assert_eq!(report.year, 2023);
        assert!(report.using_example_data());
        assert_eq!(report.solved(), 2);
        assert_eq!(report.days[0].name, "Day01");
        assert_eq!(report.days[1].name, "Day03");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].day, 2);
        assert_eq!(report.mismatches(), 0);
        assert_eq!(report.total_solve_time(), Duration::from_micros(14));
        assert!(!report.is_empty());
    }
}
