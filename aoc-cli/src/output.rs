//! Output formatting for run reports

use aoc_harness::{DayResult, Part, PartResult, RunReport};
use itertools::Itertools;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Output formatter for run reports
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    /// Create a new output formatter, starting the wall-clock timer
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Print a report to stdout
    pub fn print_report(&self, report: &RunReport) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(&mut out, report)
    }

    pub fn write_report<W: Write>(&self, out: &mut W, report: &RunReport) -> io::Result<()> {
        if self.quiet {
            return self.write_quiet(out, report);
        }

        if report.is_empty() {
            writeln!(out, "No solvers found for {}.", report.year)?;
            return Ok(());
        }

        writeln!(
            out,
            "Advent of Code {} ({}), started {}",
            report.year,
            report.input_kind,
            report.started_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(
            out,
            "Days: {}",
            report
                .days
                .iter()
                .map(|d| d.name.as_str())
                .chain(report.failures.iter().map(|f| f.name.as_str()))
                .sorted()
                .join(", ")
        )?;

        for day in &report.days {
            self.write_day(out, day)?;
        }
        for failure in &report.failures {
            writeln!(out)?;
            writeln!(out, "{}: FAILED - {}", failure.name, failure.error)?;
        }

        self.write_summary(out, report)
    }

    /// Answers only, one per line
    fn write_quiet<W: Write>(&self, out: &mut W, report: &RunReport) -> io::Result<()> {
        for day in &report.days {
            for result in Part::ALL.into_iter().flat_map(|p| day.results(p)) {
                writeln!(out, "{}", result.answer)?;
            }
        }
        Ok(())
    }

    fn write_day<W: Write>(&self, out: &mut W, day: &DayResult) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", day.name)?;
        for part in Part::ALL {
            let results = day.results(part);
            if results.is_empty() {
                continue;
            }
            writeln!(out, "  Part {part}")?;
            for (index, result) in results.iter().enumerate() {
                writeln!(
                    out,
                    "    {}",
                    format_result(index, result, day.using_example_data())
                )?;
            }
        }
        Ok(())
    }

    /// Summary after all days
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    fn write_summary<W: Write>(&self, out: &mut W, report: &RunReport) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "--- Summary ---")?;
        writeln!(
            out,
            "Days: {} solved, {} failed",
            report.solved(),
            report.failures.len()
        )?;
        if report.using_example_data() {
            writeln!(out, "Mismatches: {}", report.mismatches())?;
        }
        writeln!(
            out,
            "Total solve time: {}",
            format_duration(report.total_solve_time())
        )?;
        writeln!(
            out,
            "Elapsed wall-clock time: {}",
            format_duration(self.start_time.elapsed())
        )
    }
}

/// One dataset line, e.g. `Dataset 1: 3 | expected 3 | CORRECT | 12µs`
fn format_result(index: usize, result: &PartResult, example: bool) -> String {
    let timing = format_duration(result.duration);
    if example {
        let verdict = if result.matches { "CORRECT" } else { "INCORRECT" };
        format!(
            "Dataset {}: {} | expected {} | {} | {}",
            index + 1,
            result.answer,
            result.expected_answer,
            verdict,
            timing
        )
    } else {
        format!("Dataset {}: {} | {}", index + 1, result.answer, timing)
    }
}

/// Format a duration for display
fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_harness::{HarnessError, InputKind, ResultAggregator, SolveError};

    fn result(answer: &str, expected: &str) -> PartResult {
        PartResult::new(answer.to_string(), expected, Duration::from_micros(42))
    }

    fn report(kind: InputKind) -> RunReport {
        let mut aggregator = ResultAggregator::new(2018, kind);
        aggregator.add_day(DayResult::new(
            "Day01",
            2018,
            1,
            kind,
            vec![result("3", "3"), result("1", "0")],
            vec![result("10", "10")],
        ));
        aggregator.add_failure(
            "Day02",
            2,
            HarnessError::Solve {
                name: "Day02".to_string(),
                part: Part::One,
                dataset: 0,
                source: SolveError::InvalidInput("bad box id".to_string()),
            },
        );
        aggregator.finish()
    }

    fn render(quiet: bool, report: &RunReport) -> String {
        let mut out = Vec::new();
        OutputFormatter::new(quiet)
            .write_report(&mut out, report)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(500)), "500µs");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.50ms");
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.50s");
    }

    #[test]
    fn test_example_report() {
        let text = render(false, &report(InputKind::Example));

        assert!(text.contains("Advent of Code 2018 (example data)"));
        assert!(text.contains("Days: Day01, Day02"));
        assert!(text.contains("  Part 1\n    Dataset 1: 3 | expected 3 | CORRECT | 42µs"));
        assert!(text.contains("    Dataset 2: 1 | expected 0 | INCORRECT | 42µs"));
        assert!(text.contains("  Part 2\n    Dataset 1: 10 | expected 10 | CORRECT | 42µs"));
        assert!(text.contains("Day02: FAILED - "));
        assert!(text.contains("bad box id"));
        assert!(text.contains("Days: 1 solved, 1 failed"));
        assert!(text.contains("Mismatches: 1"));
        assert!(text.contains("Total solve time: 126µs"));
    }

    #[test]
    fn test_real_report_omits_expected() {
        let text = render(false, &report(InputKind::Real));

        assert!(text.contains("(real data)"));
        assert!(text.contains("Dataset 1: 3 | 42µs"));
        assert!(!text.contains("expected"));
        assert!(!text.contains("Mismatches"));
    }

    #[test]
    fn test_quiet_prints_answers_only() {
        let text = render(true, &report(InputKind::Example));
        assert_eq!(text, "3\n1\n10\n");
    }

    #[test]
    fn test_empty_report() {
        let report = ResultAggregator::new(2019, InputKind::Example).finish();
        assert_eq!(render(false, &report), "No solvers found for 2019.\n");
    }
}
