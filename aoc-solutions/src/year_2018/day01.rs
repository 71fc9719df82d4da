//! Chronal Calibration

use anyhow::{Context, anyhow};
use aoc_harness::{AocDay, DaySolver, SolveError};
use std::collections::HashSet;

#[derive(AocDay, Default)]
#[aoc(year = 2018, day = 1, part_one = ["3", "0", "-6"], part_two = ["0", "10", "5", "14"])]
pub struct Day01;

fn parse_changes(input: &[String]) -> anyhow::Result<Vec<i64>> {
    input
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            line.trim()
                .parse::<i64>()
                .with_context(|| format!("(line {}) invalid frequency change {line:?}", idx + 1))
        })
        .collect()
}

fn first_repeated_frequency(changes: &[i64]) -> anyhow::Result<i64> {
    if changes.is_empty() {
        return Err(anyhow!("no frequency changes to apply"));
    }

    let mut seen = HashSet::from([0]);
    let mut current = 0;
    // Loops until a frequency repeats
    for change in changes.iter().cycle() {
        current += change;
        if !seen.insert(current) {
            break;
        }
    }
    Ok(current)
}

impl DaySolver for Day01 {
    fn solve_part_one(&self, input: &[String]) -> Result<String, SolveError> {
        let changes = parse_changes(input).map_err(SolveError::failed)?;
        Ok(changes.iter().sum::<i64>().to_string())
    }

    fn solve_part_two(&self, input: &[String]) -> Result<String, SolveError> {
        parse_changes(input)
            .and_then(|changes| first_repeated_frequency(&changes))
            .map(|frequency| frequency.to_string())
            .map_err(SolveError::failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::example;
    use aoc_harness::Part;
    use proptest::prelude::*;

    const EXAMPLE: &str = include_str!("../../../data/2018/Day01Example.txt");

    fn lines(changes: &[&str]) -> Vec<String> {
        changes.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_example_answers() {
        let datasets = example(EXAMPLE);
        for part in Part::ALL {
            let answers: Vec<String> = datasets
                .datasets(part)
                .iter()
                .map(|d| match part {
                    Part::One => Day01.solve_part_one(d).unwrap(),
                    Part::Two => Day01.solve_part_two(d).unwrap(),
                })
                .collect();
            let expected: Vec<String> = match part {
                Part::One => lines(&["3", "0", "-6"]),
                Part::Two => lines(&["0", "10", "5", "14"]),
            };
            assert_eq!(answers, expected, "{part}");
        }
    }

    #[test]
    fn test_invalid_change_is_reported() {
        let err = Day01.solve_part_one(&lines(&["+1", "two"])).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_part_two_empty_input_fails() {
        assert!(Day01.solve_part_two(&[]).is_err());
    }

    proptest! {
        #[test]
        fn prop_part_one_is_sum(changes in prop::collection::vec(-1000i64..1000, 1..50)) {
            let input: Vec<String> = changes.iter().map(|c| format!("{c:+}")).collect();
            let answer = Day01.solve_part_one(&input).unwrap();
            prop_assert_eq!(answer, changes.iter().sum::<i64>().to_string());
        }
    }
}
