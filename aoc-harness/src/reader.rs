//! Splits a line-oriented input source into per-part datasets
//!
//! Real input becomes a single dataset used by both parts. Example input
//! may hold several datasets per part, separated by delimiter lines:
//!
//! ```text
//! [part1]
//! +1
//! -2
//! [part1]
//! +3
//! [part2]
//! +1
//! -1
//! ```

use crate::dataset::{Dataset, DatasetCollection, InputKind, Part};
use crate::error::DataError;
use tracing::debug;

/// Delimiter line switching the active part to part one
pub const PART_ONE_DELIMITER: &str = "[part1]";
/// Delimiter line switching the active part to part two
pub const PART_TWO_DELIMITER: &str = "[part2]";

/// Parses raw input lines into a [`DatasetCollection`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetReader;

impl DatasetReader {
    pub fn new() -> Self {
        Self
    }

    /// Read datasets from a sequence of lines
    ///
    /// # Returns
    /// * `Ok(DatasetCollection)` - Datasets for both parts, in file order
    /// * `Err(DataError::EmptyInput)` - `lines` contained nothing
    pub fn read<I, S>(&self, lines: I, kind: InputKind) -> Result<DatasetCollection, DataError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Err(DataError::EmptyInput);
        }

        let collection = match kind {
            InputKind::Real => {
                let dataset = Dataset::new(lines);
                DatasetCollection::new(kind, vec![dataset.clone()], vec![dataset])
            }
            InputKind::Example => split_example(lines),
        };

        debug!(
            %kind,
            part_one = collection.part_one().len(),
            part_two = collection.part_two().len(),
            "read datasets"
        );
        Ok(collection)
    }

    /// Read datasets from a string, one line per input line
    pub fn read_str(&self, input: &str, kind: InputKind) -> Result<DatasetCollection, DataError> {
        self.read(input.lines(), kind)
    }
}

/// Map a line to the part it switches to, if it is a delimiter
fn delimiter_part(line: &str) -> Option<Part> {
    if line.eq_ignore_ascii_case(PART_ONE_DELIMITER) {
        Some(Part::One)
    } else if line.eq_ignore_ascii_case(PART_TWO_DELIMITER) {
        Some(Part::Two)
    } else {
        None
    }
}

/// Accumulator state while walking example input
struct SplitState {
    current: Part,
    buffer: Vec<String>,
    part_one: Vec<Dataset>,
    part_two: Vec<Dataset>,
}

impl SplitState {
    fn new() -> Self {
        Self {
            current: Part::One,
            buffer: Vec::new(),
            part_one: Vec::new(),
            part_two: Vec::new(),
        }
    }

    /// Move the accumulated lines into the current part's list, if any
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let dataset = Dataset::new(std::mem::take(&mut self.buffer));
        match self.current {
            Part::One => self.part_one.push(dataset),
            Part::Two => self.part_two.push(dataset),
        }
    }

    fn feed(&mut self, line: String) {
        match delimiter_part(&line) {
            Some(part) => {
                self.flush();
                self.current = part;
            }
            None => self.buffer.push(line),
        }
    }

    fn finish(mut self) -> DatasetCollection {
        self.flush();
        DatasetCollection::new(InputKind::Example, self.part_one, self.part_two)
    }
}

fn split_example(lines: Vec<String>) -> DatasetCollection {
    let mut state = SplitState::new();
    for line in lines {
        state.feed(line);
    }
    state.finish()
}
