//! Error taxonomy.
//!
//! Two fatal error families exist, both surfaced before a search starts:
//! [`ValidationError`] for malformed problem input and [`ConfigError`] for
//! unusable search parameters. Constraint violations found during the search
//! are never errors; they are scored by the fitness evaluator.

use thiserror::Error;

/// A problem-definition integrity error.
///
/// Produced by [`crate::validation::validate_problem`] and by interval
/// parsing in [`crate::models`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A catalog (days, slots, rooms, courses) is empty.
    EmptyCatalog,
    /// Two entries of one catalog share a name.
    DuplicateName,
    /// A name or teacher field is blank.
    BlankName,
    /// A clock time or interval does not parse as `HH:MM` / `HH:MM-HH:MM`,
    /// or an interval does not end after it starts.
    MalformedTime,
    /// The same interval appears twice in the slot catalogs.
    DuplicateSlot,
    /// Two catalog intervals partially overlap; slots must be atomic.
    OverlappingSlots,
    /// A course declares zero weekly meetings.
    ZeroWeeklySlots,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// An unusable search parameter, detected when a driver is constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Fewer than two individuals cannot breed.
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// At least one generation must run.
    #[error("max_generations must be at least 1")]
    NoGenerations,

    /// A probability landed outside `[0, 1]`.
    #[error("{name} must lie in [0, 1], got {value}")]
    RateOutOfRange {
        /// Which parameter.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Elites would fill the whole population, leaving no offspring slots.
    #[error("elite_ratio {ratio} leaves no offspring slot in a population of {population_size}")]
    EliteShareTooLarge {
        /// Configured ratio.
        ratio: f64,
        /// Configured population size.
        population_size: usize,
    },

    /// A tournament needs at least one contestant.
    #[error("tournament size must be at least 1")]
    EmptyTournament,

    /// Early stop must observe at least one generation.
    #[error("early-stop patience must be at least 1 generation")]
    ZeroPatience,
}
