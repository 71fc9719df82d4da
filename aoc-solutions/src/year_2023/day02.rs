//! Cube Conundrum

use anyhow::{Context, anyhow, bail};
use aoc_harness::{AocDay, DaySolver, SolveError};

#[derive(AocDay, Default)]
#[aoc(year = 2023, day = 2, part_one = ["8"], part_two = ["2286"])]
pub struct Day02;

/// Cube counts of one handful, or the bag limits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

const BAG: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

impl Cubes {
    fn fits_in(&self, bag: &Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

#[derive(Debug)]
struct Game {
    id: u32,
    handfuls: Vec<Cubes>,
}

impl Game {
    /// Smallest set of cubes that makes every handful possible
    fn minimum_set(&self) -> Cubes {
        self.handfuls.iter().fold(Cubes::default(), |acc, h| acc.max(*h))
    }
}

fn parse_handful(text: &str) -> anyhow::Result<Cubes> {
    text.split(',').try_fold(Cubes::default(), |mut cubes, entry| {
        let (count, color) = entry
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected \"<count> <color>\", got {entry:?}"))?;
        let count: u32 = count.parse().with_context(|| format!("invalid count {count:?}"))?;
        match color {
            "red" => cubes.red += count,
            "green" => cubes.green += count,
            "blue" => cubes.blue += count,
            other => bail!("unknown color {other:?}"),
        }
        Ok(cubes)
    })
}

fn parse_game(line: &str) -> anyhow::Result<Game> {
    let (header, handfuls) = line
        .split_once(": ")
        .ok_or_else(|| anyhow!("missing ': ' in {line:?}"))?;
    let id = header
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("expected \"Game <id>\", got {header:?}"))?
        .parse()
        .with_context(|| format!("invalid game id in {header:?}"))?;
    let handfuls = handfuls
        .split(';')
        .map(parse_handful)
        .collect::<anyhow::Result<_>>()?;
    Ok(Game { id, handfuls })
}

fn parse_games(input: &[String]) -> Result<Vec<Game>, SolveError> {
    input
        .iter()
        .map(|line| parse_game(line))
        .collect::<anyhow::Result<_>>()
        .map_err(SolveError::failed)
}

impl DaySolver for Day02 {
    fn solve_part_one(&self, input: &[String]) -> Result<String, SolveError> {
        let sum: u32 = parse_games(input)?
            .iter()
            .filter(|game| game.handfuls.iter().all(|h| h.fits_in(&BAG)))
            .map(|game| game.id)
            .sum();
        Ok(sum.to_string())
    }

    fn solve_part_two(&self, input: &[String]) -> Result<String, SolveError> {
        let sum: u32 = parse_games(input)?
            .iter()
            .map(|game| game.minimum_set().power())
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::example;

    const EXAMPLE: &str = include_str!("../../../data/2023/Day02Example.txt");

    #[test]
    fn test_example_answers() {
        let datasets = example(EXAMPLE);
        assert_eq!(Day02.solve_part_one(&datasets.part_one()[0]).unwrap(), "8");
        assert_eq!(Day02.solve_part_two(&datasets.part_two()[0]).unwrap(), "2286");
    }

    #[test]
    fn test_parse_game() {
        let game = parse_game("Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green").unwrap();
        assert_eq!(game.id, 3);
        assert_eq!(
            game.handfuls,
            vec![
                Cubes { red: 20, green: 8, blue: 6 },
                Cubes { red: 4, green: 13, blue: 5 },
            ]
        );
        assert_eq!(game.minimum_set(), Cubes { red: 20, green: 13, blue: 6 });
    }

    #[test]
    fn test_unknown_color_fails() {
        let input = vec!["Game 1: 3 purple".to_string()];
        assert!(matches!(
            Day02.solve_part_one(&input),
            Err(SolveError::Failed(_))
        ));
    }
}
