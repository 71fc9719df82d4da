//! Datasets and the per-part collections handed to the engine

use std::fmt;
use std::ops::Deref;

/// One of the two sub-problems of a puzzle day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    /// Both parts, in running order
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    /// The part number as used on the puzzle page (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Which input file variant a run uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// The personal puzzle input: one dataset shared by both parts
    Real,
    /// The example variant with delimited datasets and known answers
    #[default]
    Example,
}

impl InputKind {
    pub fn is_example(self) -> bool {
        matches!(self, InputKind::Example)
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Real => f.write_str("real data"),
            InputKind::Example => f.write_str("example data"),
        }
    }
}

/// An ordered batch of input lines fed to a single solve invocation
///
/// Datasets produced by [`DatasetReader`](crate::DatasetReader) are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset(Vec<String>);

impl Dataset {
    pub fn new(lines: Vec<String>) -> Self {
        Self(lines)
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }
}

impl Deref for Dataset {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> From<Vec<&'a str>> for Dataset {
    fn from(lines: Vec<&'a str>) -> Self {
        Self(lines.into_iter().map(String::from).collect())
    }
}

/// Datasets for both parts of one puzzle day
///
/// Produced fresh for every run and never shared between solvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetCollection {
    kind: InputKind,
    part_one: Vec<Dataset>,
    part_two: Vec<Dataset>,
}

impl DatasetCollection {
    pub fn new(kind: InputKind, part_one: Vec<Dataset>, part_two: Vec<Dataset>) -> Self {
        Self {
            kind,
            part_one,
            part_two,
        }
    }

    /// The input variant these datasets were read from
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Ordered datasets for a part
    pub fn datasets(&self, part: Part) -> &[Dataset] {
        match part {
            Part::One => &self.part_one,
            Part::Two => &self.part_two,
        }
    }

    pub fn part_one(&self) -> &[Dataset] {
        &self.part_one
    }

    pub fn part_two(&self) -> &[Dataset] {
        &self.part_two
    }
}
