//! Penalty scoring of candidate timetables.
//!
//! Evaluation is pure: the same timetable, problem, and weights always
//! produce the same [`PenaltyReport`]. Hard categories decide feasibility;
//! the preference category is soft and only shapes the score.
//!
//! # Categories
//!
//! Per pair of sections sharing a day and slot (all fire independently):
//! 1. Teacher double-booking: same teacher
//! 2. Room double-booking: same room
//! 3. Slot overlap: the pair itself, when the problem declares a single
//!    cohort
//!
//! Per section:
//! 4. Lab mismatch: lab section outside a lab room (and a theory section
//!    inside one when lab rooms are reserved)
//! 5. Preference miss (soft): scheduled day part outside the stated
//!    preference

use crate::ga::chromosome::Timetable;
use crate::models::ProblemDefinition;

/// Penalty points per violation, by category.
///
/// Defaults carry the scoring constants the sample campus data was tuned
/// against, with the soft preference weight well below every hard weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenaltyWeights {
    /// Per teacher double-booked pair.
    pub teacher_conflict: u32,
    /// Per room double-booked pair.
    pub room_conflict: u32,
    /// Per pair sharing a day and slot in a single-cohort problem.
    pub slot_overlap: u32,
    /// Per section in a room of the wrong kind.
    pub lab_mismatch: u32,
    /// Per section scheduled against its time preference.
    pub preference_miss: u32,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            teacher_conflict: 200,
            room_conflict: 200,
            slot_overlap: 150,
            lab_mismatch: 300,
            preference_miss: 50,
        }
    }
}

/// Violation counts and the weighted total for one timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PenaltyReport {
    /// Teacher double-booked pairs.
    pub teacher_conflicts: u32,
    /// Room double-booked pairs.
    pub room_conflicts: u32,
    /// Pairs sharing a day and slot (single-cohort problems only).
    pub slot_overlaps: u32,
    /// Sections in a room of the wrong kind.
    pub lab_mismatches: u32,
    /// Sections scheduled against their time preference.
    pub preference_misses: u32,
    /// Weighted total over all categories.
    pub penalty: u32,
}

impl PenaltyReport {
    /// Total count over the hard categories (1–4).
    pub fn hard_violations(&self) -> u32 {
        self.teacher_conflicts + self.room_conflicts + self.slot_overlaps + self.lab_mismatches
    }

    /// Whether every hard constraint holds. Preference misses do not
    /// affect feasibility.
    pub fn is_feasible(&self) -> bool {
        self.hard_violations() == 0
    }

    /// Bounded maximization view of the penalty: `1 / (1 + penalty)`,
    /// in `(0, 1]`, exactly `1.0` for a perfect timetable. Used as the
    /// roulette-wheel weight.
    pub fn fitness(&self) -> f64 {
        1.0 / (1.0 + f64::from(self.penalty))
    }
}

/// Scores a timetable against the problem catalogs.
///
/// # Complexity
/// O(n²) over the section count for the pairwise categories, O(n) for the
/// per-section categories.
pub fn evaluate(
    timetable: &Timetable,
    problem: &ProblemDefinition,
    weights: &PenaltyWeights,
) -> PenaltyReport {
    let mut report = PenaltyReport::default();
    let assignments = &timetable.assignments;

    for (i, a) in assignments.iter().enumerate() {
        for b in &assignments[i + 1..] {
            if a.day == b.day && a.slot == b.slot {
                if problem.single_cohort {
                    report.slot_overlaps += 1;
                }
                if problem.courses[a.course].teacher == problem.courses[b.course].teacher {
                    report.teacher_conflicts += 1;
                }
                if a.room == b.room {
                    report.room_conflicts += 1;
                }
            }
        }

        let course = &problem.courses[a.course];
        let room = &problem.rooms[a.room];
        if course.requires_lab && !room.is_lab() {
            report.lab_mismatches += 1;
        } else if problem.reserve_lab_rooms && !course.requires_lab && room.is_lab() {
            report.lab_mismatches += 1;
        }

        if !course.preference.admits(problem.slot_part(a.slot)) {
            report.preference_misses += 1;
        }
    }

    report.penalty = report.teacher_conflicts * weights.teacher_conflict
        + report.room_conflicts * weights.room_conflict
        + report.slot_overlaps * weights.slot_overlap
        + report.lab_mismatches * weights.lab_mismatch
        + report.preference_misses * weights.preference_miss;
    report
}
