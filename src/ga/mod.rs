//! Genetic search over course timetables.
//!
//! The population is a flat `Vec<Timetable>` with penalties kept in a
//! parallel `Vec<PenaltyReport>`, both indexed the same way. Evolution
//! minimizes total penalty; the reciprocal fitness value exists only for
//! roulette selection.
//!
//! # Key Types
//!
//! - [`Timetable`]: A candidate schedule, one [`Assignment`] per section
//! - [`SearchConfig`]: Algorithm parameters (population size, selection, rates)
//! - [`SearchDriver`]: Executes the evolutionary loop
//! - [`SearchResult`]: Final search result with statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
mod config;
mod fitness;
mod operators;
mod population;
mod runner;
mod selection;

pub use chromosome::{Assignment, ScheduledClass, Timetable};
pub use config::{EarlyStop, SearchConfig};
pub use fitness::{evaluate, PenaltyReport, PenaltyWeights};
pub use operators::{mutate, Crossover};
pub use population::{next_generation, select_parents};
pub use runner::{SearchDriver, SearchPhase, SearchResult};
pub use selection::Selection;
