//! Timetable chromosome: the direct encoding the search evolves.
//!
//! A timetable holds exactly one [`Assignment`] per course section, in
//! section order. Position `i` always belongs to section `i`; operators
//! replace assignments in place and never move a section to another
//! position, so "which course is this gene" needs no bookkeeping.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Interval, ProblemDefinition};

/// One scheduled meeting: a course section pinned to a day, slot, and room.
///
/// All fields are indices into the problem catalogs. Two assignments are
/// equal exactly when all four indices match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    /// Course section index; equals the assignment's position in its
    /// timetable.
    pub course: usize,
    /// Teaching day index.
    pub day: usize,
    /// Slot index into the combined catalog.
    pub slot: usize,
    /// Room index.
    pub room: usize,
}

impl Assignment {
    /// Draws a fresh catalog-valid assignment for `course`.
    ///
    /// Day and slot are uniform over their catalogs; the room is uniform
    /// over [`ProblemDefinition::compatible_rooms`]. Initialization and
    /// mutation share this sampler.
    pub fn random_for<R: Rng>(course: usize, problem: &ProblemDefinition, rng: &mut R) -> Self {
        let rooms = problem.compatible_rooms(course);
        Self {
            course,
            day: rng.random_range(0..problem.day_count()),
            slot: rng.random_range(0..problem.slot_count()),
            room: *rooms
                .choose(rng)
                .expect("validated problems have at least one room"),
        }
    }
}

/// A candidate weekly timetable: one assignment per course section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Assignments in section order.
    pub assignments: Vec<Assignment>,
}

impl Timetable {
    /// Draws a uniformly random timetable for `problem`.
    pub fn random<R: Rng>(problem: &ProblemDefinition, rng: &mut R) -> Self {
        let assignments = (0..problem.course_count())
            .map(|course| Assignment::random_for(course, problem, rng))
            .collect();
        Self { assignments }
    }

    /// Number of scheduled sections.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the timetable schedules no sections.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Whether position `i` holds section `i` everywhere.
    pub fn positions_consistent(&self) -> bool {
        self.assignments
            .iter()
            .enumerate()
            .all(|(i, a)| a.course == i)
    }

    /// Resolves catalog indices into displayable rows, in section order.
    pub fn classes(&self, problem: &ProblemDefinition) -> Vec<ScheduledClass> {
        self.assignments
            .iter()
            .map(|a| {
                let course = &problem.courses[a.course];
                ScheduledClass {
                    course: course.name.clone(),
                    teacher: course.teacher.clone(),
                    room: problem.rooms[a.room].name.clone(),
                    day: problem.days[a.day].clone(),
                    interval: problem.slot_interval(a.slot),
                }
            })
            .collect()
    }
}

/// A resolved, directly displayable meeting row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledClass {
    /// Course name.
    pub course: String,
    /// Teacher name.
    pub teacher: String,
    /// Room name.
    pub room: String,
    /// Day name.
    pub day: String,
    /// Teaching period.
    pub interval: Interval,
}
