//! Batch runner wiring discovery, input reading, execution and aggregation

use crate::aggregator::{ResultAggregator, RunReport};
use crate::dataset::InputKind;
use crate::engine::{ExecutionEngine, PartSelection};
use crate::error::{DataError, HarnessError};
use crate::reader::DatasetReader;
use crate::registry::{DaySelection, SolverRegistry};
use std::collections::HashMap;
use tracing::{info, warn};

/// Source of raw input lines for a puzzle day
///
/// Implemented outside the core by whatever owns the input files.
pub trait InputProvider {
    /// Load the lines of the input for solver `name` of `year`
    fn load(&self, year: u16, name: &str, kind: InputKind) -> Result<Vec<String>, DataError>;
}

/// In-memory input, keyed by `(year, name, kind)`
#[derive(Debug, Clone, Default)]
pub struct MemoryInput {
    inputs: HashMap<(u16, String, InputKind), String>,
}

impl MemoryInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the raw text of one input file
    pub fn with(mut self, year: u16, name: &str, kind: InputKind, text: &str) -> Self {
        self.inputs.insert((year, name.to_string(), kind), text.to_string());
        self
    }
}

impl InputProvider for MemoryInput {
    fn load(&self, year: u16, name: &str, kind: InputKind) -> Result<Vec<String>, DataError> {
        self.inputs
            .get(&(year, name.to_string(), kind))
            .map(|text| text.lines().map(String::from).collect())
            .ok_or_else(|| DataError::NotFound {
                path: format!("{year}/{name}").into(),
            })
    }
}

/// Settings for one batch run, passed in explicitly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub year: u16,
    pub input_kind: InputKind,
    pub selection: DaySelection,
    pub parts: PartSelection,
}

/// Runs every selected day of a year and collects the results
pub struct Harness<'a, P: InputProvider> {
    registry: &'a SolverRegistry,
    engine: &'a ExecutionEngine,
    provider: &'a P,
    reader: DatasetReader,
}

impl<'a, P: InputProvider> Harness<'a, P> {
    pub fn new(registry: &'a SolverRegistry, engine: &'a ExecutionEngine, provider: &'a P) -> Self {
        Self {
            registry,
            engine,
            provider,
            reader: DatasetReader::new(),
        }
    }

    /// Run a batch
    ///
    /// Configuration and data errors abort the whole batch. A solver failure
    /// only aborts its own day: it is recorded in the report and the batch
    /// continues with the next day.
    pub fn run(&self, config: &RunConfig) -> Result<RunReport, HarnessError> {
        let descriptors = self.registry.discover(config.year, &config.selection)?;
        info!(
            year = config.year,
            kind = %config.input_kind,
            days = descriptors.len(),
            "starting run"
        );

        let mut aggregator = ResultAggregator::new(config.year, config.input_kind);

        for descriptor in &descriptors {
            let name = descriptor.name();
            let datasets = self
                .provider
                .load(config.year, name, config.input_kind)
                .and_then(|lines| self.reader.read(lines, config.input_kind))
                .map_err(|source| HarnessError::Data {
                    name: name.to_string(),
                    source,
                })?;

            match self.engine.run_day(descriptor, &datasets, config.parts) {
                Ok(result) => aggregator.add_day(result),
                Err(error @ HarnessError::Solve { .. }) => {
                    warn!(day = name, %error, "day failed");
                    aggregator.add_failure(name, descriptor.day(), error);
                }
                Err(error) => return Err(error),
            }
        }

        Ok(aggregator.finish())
    }
}
