//! Solver registry: the explicit `(year, day)` registration table
//!
//! Registrations come from two places: entries submitted at link time by
//! `#[derive(AocDay)]` (collected with `inventory`) and entries passed to
//! [`RegistryBuilder::register`] by hand. Either way the key is explicit,
//! so discovery never has to scan types at runtime.

use crate::dataset::Part;
use crate::error::ConfigurationError;
use crate::solver::{DaySolver, ExpectedAnswers};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Flat index range holding every day of `year`
fn year_range(year: u16) -> Option<std::ops::Range<usize>> {
    let start = calc_index(year, 1)?;
    Some(start..start + DAYS_PER_YEAR)
}

/// Required shape of a solver name: `Day` followed by two digits
static DAY_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Day(\d{2})$").expect("day name pattern is valid"));

/// Check that `name` is `DayNN` with `NN` equal to `day`
fn validate_day_name(name: &str, day: u8) -> Result<(), ConfigurationError> {
    let matches_day = DAY_NAME_PATTERN
        .captures(name)
        .and_then(|caps| caps[1].parse::<u8>().ok())
        .is_some_and(|n| n == day);

    if matches_day {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidDayName {
            name: name.to_string(),
            day,
        })
    }
}

// ============================================================================
// Registration and Descriptor Types
// ============================================================================

/// Zero-argument construction function for a solver
pub type SolverFactory = fn() -> Box<dyn DaySolver>;

/// Entry of the registration table
///
/// Usually generated by `#[derive(AocDay)]`, but can be written by hand:
///
/// ```
/// use aoc_harness::{DaySolver, ExpectedAnswers, RegistryBuilder, SolveError, SolverRegistration};
///
/// struct Day03;
///
/// impl DaySolver for Day03 {
///     fn solve_part_one(&self, input: &[String]) -> Result<String, SolveError> {
///         Ok(input.len().to_string())
///     }
///     fn solve_part_two(&self, _input: &[String]) -> Result<String, SolveError> {
///         Ok("0".to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register(SolverRegistration {
///         year: 2022,
///         day: 3,
///         name: "Day03",
///         expected: ExpectedAnswers { part_one: &["2"], part_two: &["0"] },
///         factory: || Box::new(Day03),
///     })
///     .unwrap()
///     .build();
/// assert!(registry.get(2022, 3).is_some());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SolverRegistration {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Identifier of the solver type, expected to be `DayNN`
    pub name: &'static str,
    /// Expected example answers per part
    pub expected: ExpectedAnswers,
    /// Builds a fresh solver instance
    pub factory: SolverFactory,
}

// Enable plugin collection via inventory
inventory::collect!(SolverRegistration);

/// Discovery-time record identifying a solver and how to construct it
#[derive(Debug, Clone, Copy)]
pub struct SolverDescriptor {
    registration: SolverRegistration,
}

impl SolverDescriptor {
    pub fn year(&self) -> u16 {
        self.registration.year
    }

    pub fn day(&self) -> u8 {
        self.registration.day
    }

    pub fn name(&self) -> &'static str {
        self.registration.name
    }

    /// Expected example answers for a part, index-aligned with its datasets
    pub fn expected_answers(&self, part: Part) -> &'static [&'static str] {
        self.registration.expected.for_part(part)
    }

    /// Construct a new solver instance
    pub fn instantiate(&self) -> Box<dyn DaySolver> {
        (self.registration.factory)()
    }
}

impl From<SolverRegistration> for SolverDescriptor {
    fn from(registration: SolverRegistration) -> Self {
        Self { registration }
    }
}

/// Which days of a year to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaySelection {
    /// Every solver registered for the year
    All,
    /// Only solvers whose name matches one of these identifiers (case-insensitive)
    Days(Vec<String>),
}

impl DaySelection {
    /// Select days by number, e.g. `[1, 12]` selects `Day01` and `Day12`
    pub fn from_days<I>(days: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        Self::Days(days.into_iter().map(|d| format!("Day{d:02}")).collect())
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            DaySelection::All => true,
            DaySelection::Days(ids) => ids.iter().any(|id| id.eq_ignore_ascii_case(name)),
        }
    }
}

// ============================================================================
// Builder and Registry
// ============================================================================

/// Builder for constructing a [`SolverRegistry`] with a fluent API
///
/// Registration fails on out-of-range keys and on duplicates, so the built
/// registry holds at most one solver per `(year, day)`.
pub struct RegistryBuilder {
    entries: Vec<Option<SolverRegistration>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: vec![None; CAPACITY],
        }
    }

    /// Register a single solver
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(ConfigurationError::InvalidYearDay)` - Year or day out of range
    /// * `Err(ConfigurationError::DuplicateSolver)` - Year-day already registered
    pub fn register(mut self, registration: SolverRegistration) -> Result<Self, ConfigurationError> {
        let (year, day) = (registration.year, registration.day);
        let index = calc_index(year, day).ok_or(ConfigurationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(ConfigurationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(registration);
        Ok(self)
    }

    /// Register all solvers submitted through `#[derive(AocDay)]`
    ///
    /// ```no_run
    /// # use aoc_harness::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, ConfigurationError> {
        self.register_plugins(|_| true)
    }

    /// Register submitted solvers that match the given filter predicate
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&SolverRegistration) -> bool,
    {
        for registration in inventory::iter::<SolverRegistration>() {
            if filter(registration) {
                self = self.register(*registration)?;
            }
        }
        Ok(self)
    }

    /// Build the immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registration table with O(1) lookup by `(year, day)`
pub struct SolverRegistry {
    entries: Vec<Option<SolverRegistration>>,
}

impl SolverRegistry {
    /// Discover the solvers to run for `year`
    ///
    /// Every solver registered for the year is name-checked before the
    /// selection is applied, so a single malformed registration fails the
    /// whole discovery pass.
    ///
    /// # Returns
    /// * `Ok(descriptors)` - Selected solvers in ascending day order
    /// * `Err(ConfigurationError::InvalidDayName)` - A solver name is not `DayNN`
    /// * `Err(ConfigurationError::NoDaysSelected)` - An empty day list was given
    /// * `Err(ConfigurationError::NoMatchingDays)` - No requested day has a solver
    pub fn discover(
        &self,
        year: u16,
        selection: &DaySelection,
    ) -> Result<Vec<SolverDescriptor>, ConfigurationError> {
        if matches!(selection, DaySelection::Days(ids) if ids.is_empty()) {
            return Err(ConfigurationError::NoDaysSelected);
        }

        let for_year: Vec<SolverRegistration> = self.year_entries(year).copied().collect();
        for registration in &for_year {
            validate_day_name(registration.name, registration.day)?;
        }

        let selected: Vec<SolverDescriptor> = for_year
            .into_iter()
            .filter(|r| selection.matches(r.name))
            .map(SolverDescriptor::from)
            .collect();

        debug!(year, selected = selected.len(), "discovered solvers");

        match selection {
            DaySelection::Days(ids) if selected.is_empty() => {
                Err(ConfigurationError::NoMatchingDays {
                    year,
                    requested: ids.clone(),
                })
            }
            _ => Ok(selected),
        }
    }

    /// Look up the solver for a specific year and day
    pub fn get(&self, year: u16, day: u8) -> Option<SolverDescriptor> {
        calc_index(year, day)
            .and_then(|i| self.entries[i])
            .map(SolverDescriptor::from)
    }

    /// Years that have at least one registered solver, ascending
    pub fn years(&self) -> Vec<u16> {
        (0..MAX_YEARS as u16)
            .map(|offset| BASE_YEAR + offset)
            .filter(|&year| self.year_entries(year).next().is_some())
            .collect()
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }

    fn year_entries(&self, year: u16) -> impl Iterator<Item = &SolverRegistration> + '_ {
        year_range(year)
            .map(|range| &self.entries[range])
            .unwrap_or_default()
            .iter()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;

    struct Constant;

    impl DaySolver for Constant {
        fn solve_part_one(&self, _input: &[String]) -> Result<String, SolveError> {
            Ok("1".to_string())
        }

        fn solve_part_two(&self, _input: &[String]) -> Result<String, SolveError> {
            Ok("2".to_string())
        }
    }

    fn entry(year: u16, day: u8, name: &'static str) -> SolverRegistration {
        SolverRegistration {
            year,
            day,
            name,
            expected: ExpectedAnswers::NONE,
            factory: || Box::new(Constant),
        }
    }

    fn registry(entries: &[SolverRegistration]) -> SolverRegistry {
        entries
            .iter()
            .try_fold(RegistryBuilder::new(), |builder, e| builder.register(*e))
            .unwrap()
            .build()
    }

    fn days(descriptors: &[SolverDescriptor]) -> Vec<u8> {
        descriptors.iter().map(SolverDescriptor::day).collect()
    }

    #[test]
    fn test_calc_index_bounds() {
        assert_eq!(calc_index(2015, 1), Some(0));
        assert_eq!(calc_index(2016, 1), Some(25));
        assert_eq!(calc_index(2034, 25), Some(CAPACITY - 1));
        assert_eq!(calc_index(2014, 1), None);
        assert_eq!(calc_index(2035, 1), None);
        assert_eq!(calc_index(2020, 0), None);
        assert_eq!(calc_index(2020, 26), None);
    }

    #[test]
    fn test_day_name_validation() {
        assert!(validate_day_name("Day01", 1).is_ok());
        assert!(validate_day_name("Day25", 25).is_ok());
        assert!(validate_day_name("Day1", 1).is_err());
        assert!(validate_day_name("day01", 1).is_err());
        assert!(validate_day_name("Day01Year2018", 1).is_err());
        assert!(validate_day_name("Day02", 1).is_err());
        assert!(validate_day_name("Solver", 1).is_err());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let result = RegistryBuilder::new()
            .register(entry(2018, 1, "Day01"))
            .unwrap()
            .register(entry(2018, 1, "Day01"));
        assert!(matches!(result, Err(ConfigurationError::DuplicateSolver(2018, 1))));
    }

    #[test]
    fn test_out_of_range_registration_rejected() {
        let result = RegistryBuilder::new().register(entry(2018, 26, "Day26"));
        assert!(matches!(result, Err(ConfigurationError::InvalidYearDay(2018, 26))));

        let result = RegistryBuilder::new().register(entry(2014, 1, "Day01"));
        assert!(matches!(result, Err(ConfigurationError::InvalidYearDay(2014, 1))));
    }

    #[test]
    fn test_discover_all_keeps_only_requested_year_in_day_order() {
        let registry = registry(&[
            entry(2023, 2, "Day02"),
            entry(2018, 1, "Day01"),
            entry(2023, 1, "Day01"),
            entry(2024, 1, "Day01"),
        ]);

        let found = registry.discover(2023, &DaySelection::All).unwrap();
        assert_eq!(days(&found), vec![1, 2]);
        assert!(found.iter().all(|d| d.year() == 2023));
    }

    #[test]
    fn test_discover_all_for_empty_year_is_empty() {
        let registry = registry(&[entry(2018, 1, "Day01")]);
        let found = registry.discover(2019, &DaySelection::All).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_discover_rejects_bad_name_even_with_valid_neighbours() {
        let registry = registry(&[
            entry(2023, 1, "Day01"),
            entry(2023, 2, "DayTwo"),
            entry(2023, 3, "Day03"),
        ]);

        let err = registry
            .discover(2023, &DaySelection::from_days([1]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidDayName {
                name: "DayTwo".to_string(),
                day: 2,
            }
        );

        // Other years are not affected by the malformed entry
        let registry = registry_with_other_year();
        assert!(registry.discover(2018, &DaySelection::All).is_ok());
    }

    fn registry_with_other_year() -> SolverRegistry {
        registry(&[entry(2018, 1, "Day01"), entry(2023, 2, "Solver")])
    }

    #[test]
    fn test_discover_filters_case_insensitively() {
        let registry = registry(&[
            entry(2023, 1, "Day01"),
            entry(2023, 2, "Day02"),
            entry(2023, 3, "Day03"),
        ]);

        let selection = DaySelection::Days(vec!["day03".to_string(), "DAY01".to_string()]);
        let found = registry.discover(2023, &selection).unwrap();
        assert_eq!(days(&found), vec![1, 3]);
    }

    #[test]
    fn test_discover_empty_day_list_is_configuration_error() {
        let registry = registry(&[entry(2023, 1, "Day01")]);
        let err = registry
            .discover(2023, &DaySelection::Days(Vec::new()))
            .unwrap_err();
        assert_eq!(err, ConfigurationError::NoDaysSelected);
    }

    #[test]
    fn test_discover_unmatched_days_is_configuration_error() {
        let registry = registry(&[entry(2023, 1, "Day01")]);
        let err = registry
            .discover(2023, &DaySelection::from_days([7]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::NoMatchingDays {
                year: 2023,
                requested: vec!["Day07".to_string()],
            }
        );
    }

    #[test]
    fn test_descriptor_instantiates_solver() {
        let registry = registry(&[entry(2018, 1, "Day01")]);
        let descriptor = registry.get(2018, 1).unwrap();
        assert_eq!(descriptor.name(), "Day01");
        let solver = descriptor.instantiate();
        assert_eq!(solver.solve_part_two(&[]).unwrap(), "2");
        assert!(registry.get(2018, 2).is_none());
    }

    #[test]
    fn test_len_and_years() {
        let empty = RegistryBuilder::default().build();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);

        let registry = registry(&[
            entry(2023, 1, "Day01"),
            entry(2018, 1, "Day01"),
            entry(2023, 5, "Day05"),
        ]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.years(), vec![2018, 2023]);
    }
}
