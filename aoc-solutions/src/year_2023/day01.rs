//! Trebuchet?!

use aoc_harness::{AocDay, DaySolver, SolveError};

#[derive(AocDay, Default)]
#[aoc(year = 2023, day = 1, part_one = ["142"], part_two = ["281"])]
pub struct Day01;

const DIGIT_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Digit starting at byte `idx` of `line`, optionally also accepting spelled-out digits
fn digit_at(line: &str, idx: usize, words: bool) -> Option<u32> {
    let rest = &line[idx..];
    let first = rest.chars().next()?;
    if let Some(digit) = first.to_digit(10) {
        return Some(digit);
    }
    if !words {
        return None;
    }
    DIGIT_WORDS
        .iter()
        .position(|word| rest.starts_with(word))
        .map(|pos| pos as u32 + 1)
}

fn calibration_value(line: &str, words: bool) -> Result<u32, SolveError> {
    let mut digits = line
        .char_indices()
        .filter_map(|(idx, _)| digit_at(line, idx, words));

    let first = digits
        .next()
        .ok_or_else(|| SolveError::InvalidInput(format!("no digit in line {line:?}")))?;
    let last = digits.last().unwrap_or(first);
    Ok(first * 10 + last)
}

fn calibration_sum(input: &[String], words: bool) -> Result<String, SolveError> {
    input
        .iter()
        .map(|line| calibration_value(line, words))
        .sum::<Result<u32, _>>()
        .map(|sum| sum.to_string())
}

impl DaySolver for Day01 {
    fn solve_part_one(&self, input: &[String]) -> Result<String, SolveError> {
        calibration_sum(input, false)
    }

    fn solve_part_two(&self, input: &[String]) -> Result<String, SolveError> {
        calibration_sum(input, true)
    }
}
