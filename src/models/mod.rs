//! Problem-definition models.
//!
//! Everything the search reads and never writes: teaching days, slot
//! catalogs, rooms, and course sections. See
//! [`ProblemDefinition`] for the aggregate and its JSON form.

mod course;
mod problem;
mod room;
mod time;

pub use course::{Course, TimePreference};
pub use problem::ProblemDefinition;
pub use room::{Room, RoomKind};
pub use time::{ClockTime, DayPart, Interval};
