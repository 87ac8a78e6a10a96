//! Weekly course timetabling by genetic search.
//!
//! Places a set of course sections into a week of days, time slots, and
//! rooms, penalizing teacher and room double bookings, cohort overlaps,
//! theory classes in lab rooms, and missed time-of-day preferences. The
//! search evolves a population of candidate timetables toward the lowest
//! total penalty.
//!
//! - **[`models`]**: Problem vocabulary (days, time slots, rooms, courses).
//! - **[`validation`]**: Problem integrity checks, run before a search starts.
//! - **[`ga`]**: The evolutionary search itself, from encoding and
//!   evaluation through the driver loop.
//! - **[`render`]**: Plain-text and SVG renditions of a timetable.
//! - **[`error`]**: Validation and configuration error types.
//!
//! # Example
//!
//! ```
//! use timetabler::ga::{SearchConfig, SearchDriver};
//! use timetabler::models::ProblemDefinition;
//! use timetabler::validation::validate_problem;
//!
//! let problem = ProblemDefinition::sample();
//! validate_problem(&problem).expect("sample campus is well-formed");
//!
//! let config = SearchConfig::default().with_seed(7);
//! let mut driver = SearchDriver::new(&problem, config)?;
//! let result = driver.run();
//!
//! assert_eq!(result.champion.len(), problem.course_count());
//! # Ok::<(), timetabler::error::ConfigError>(())
//! ```

pub mod error;
pub mod ga;
pub mod models;
pub mod render;
pub mod validation;
