//! The immutable problem definition.
//!
//! A [`ProblemDefinition`] holds every catalog a search reads: teaching
//! days, the morning and afternoon slot catalogs, rooms, and course
//! sections. The search never mutates it; assignments reference catalog
//! entries by index.

use serde::{Deserialize, Serialize};

use crate::models::{Course, DayPart, Interval, Room, TimePreference};

/// Full input to a timetabling run.
///
/// Slots are addressed by index into the concatenation of `morning` and
/// `afternoon` (morning first); days and rooms by index into their lists.
///
/// # JSON form
///
/// ```json
/// {
///   "days": ["Monday", "Tuesday"],
///   "morning": ["08:00-10:00"],
///   "afternoon": ["13:30-15:30"],
///   "rooms": [{"name": "Room 101", "kind": "theory"}],
///   "courses": [{"name": "Calculus I", "teacher": "Ana", "preference": "morning"}]
/// }
/// ```
///
/// `single_cohort` defaults to `true` and `reserve_lab_rooms` to `false`
/// when omitted, as do the optional course fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDefinition {
    /// Teaching day names, in display order. Day strings are compared
    /// exactly (case-sensitive).
    pub days: Vec<String>,
    /// Morning slot catalog.
    pub morning: Vec<Interval>,
    /// Afternoon slot catalog.
    pub afternoon: Vec<Interval>,
    /// Available rooms.
    pub rooms: Vec<Room>,
    /// Sections to place, one grid meeting each.
    pub courses: Vec<Course>,
    /// Treat all sections as one student cohort: two sections in the same
    /// day and slot are penalized even in different rooms.
    #[serde(default = "default_true")]
    pub single_cohort: bool,
    /// Keep theory sections out of lab rooms: scored as a mismatch and
    /// excluded from room sampling while theory rooms exist.
    #[serde(default)]
    pub reserve_lab_rooms: bool,
}

fn default_true() -> bool {
    true
}

impl ProblemDefinition {
    /// Number of teaching days.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of course sections.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of slots in the combined catalog.
    pub fn slot_count(&self) -> usize {
        self.morning.len() + self.afternoon.len()
    }

    /// Interval of slot `slot` in the combined catalog.
    pub fn slot_interval(&self, slot: usize) -> Interval {
        if slot < self.morning.len() {
            self.morning[slot]
        } else {
            self.afternoon[slot - self.morning.len()]
        }
    }

    /// Day part of slot `slot` in the combined catalog.
    pub fn slot_part(&self, slot: usize) -> DayPart {
        if slot < self.morning.len() {
            DayPart::Morning
        } else {
            DayPart::Afternoon
        }
    }

    /// Room indices a section may draw from.
    ///
    /// Lab sections draw among lab rooms; with `reserve_lab_rooms`, theory
    /// sections draw among theory rooms. Either filter falls back to the
    /// full room list when it would leave nothing to draw from, so sampling
    /// stays total and mismatches are left to the evaluator.
    pub fn compatible_rooms(&self, course: usize) -> Vec<usize> {
        let course = &self.courses[course];
        let wanted: Vec<usize> = self
            .rooms
            .iter()
            .enumerate()
            .filter(|(_, room)| {
                if course.requires_lab {
                    room.is_lab()
                } else if self.reserve_lab_rooms {
                    !room.is_lab()
                } else {
                    true
                }
            })
            .map(|(i, _)| i)
            .collect();
        if wanted.is_empty() {
            (0..self.rooms.len()).collect()
        } else {
            wanted
        }
    }

    /// Loads a problem from its JSON form.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Built-in five-course sample campus: four rooms, Monday to Friday,
    /// two morning and two afternoon slots.
    pub fn sample() -> Self {
        let slot = |s: &str| Interval::parse(s).expect("sample interval is well-formed");
        Self {
            days: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                .map(String::from)
                .to_vec(),
            morning: vec![slot("08:00-10:00"), slot("10:00-12:00")],
            afternoon: vec![slot("13:30-15:30"), slot("15:30-17:30")],
            rooms: vec![
                Room::theory("Room 101"),
                Room::theory("Room 102"),
                Room::lab("Software Lab"),
                Room::lab("Hardware Lab"),
            ],
            courses: vec![
                Course::new("Calculus I", "Ana").with_preference(TimePreference::Morning),
                Course::lab("Algorithms and Programming", "Alice")
                    .with_preference(TimePreference::Afternoon),
                Course::lab("Digital Circuits", "Carlos")
                    .with_preference(TimePreference::Afternoon),
                Course::new("Artificial Intelligence", "Bruno"),
                Course::lab("Operating Systems", "Bruno")
                    .with_preference(TimePreference::Morning),
            ],
            single_cohort: true,
            reserve_lab_rooms: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomKind;

    #[test]
    fn test_sample_shape() {
        let problem = ProblemDefinition::sample();
        assert_eq!(problem.day_count(), 5);
        assert_eq!(problem.slot_count(), 4);
        assert_eq!(problem.room_count(), 4);
        assert_eq!(problem.course_count(), 5);
        assert!(problem.single_cohort);
        assert!(!problem.reserve_lab_rooms);
    }

    #[test]
    fn test_slot_accessors_cross_the_catalog_boundary() {
        let problem = ProblemDefinition::sample();
        assert_eq!(problem.slot_part(0), DayPart::Morning);
        assert_eq!(problem.slot_part(1), DayPart::Morning);
        assert_eq!(problem.slot_part(2), DayPart::Afternoon);
        assert_eq!(problem.slot_part(3), DayPart::Afternoon);
        assert_eq!(problem.slot_interval(0).to_string(), "08:00-10:00");
        assert_eq!(problem.slot_interval(2).to_string(), "13:30-15:30");
    }

    #[test]
    fn test_compatible_rooms_for_lab_section() {
        let problem = ProblemDefinition::sample();
        // "Algorithms and Programming" is lab-taught.
        let rooms = problem.compatible_rooms(1);
        assert_eq!(rooms, vec![2, 3]);
        assert!(rooms
            .iter()
            .all(|&r| problem.rooms[r].kind == RoomKind::Lab));
    }

    #[test]
    fn test_compatible_rooms_for_theory_section() {
        let mut problem = ProblemDefinition::sample();
        // Theory sections may sit anywhere by default.
        assert_eq!(problem.compatible_rooms(0), vec![0, 1, 2, 3]);

        // Reserving lab rooms restricts them to theory rooms.
        problem.reserve_lab_rooms = true;
        assert_eq!(problem.compatible_rooms(0), vec![0, 1]);
        // Lab sections are unaffected by the reservation flag.
        assert_eq!(problem.compatible_rooms(1), vec![2, 3]);
    }

    #[test]
    fn test_compatible_rooms_falls_back_to_all() {
        let mut problem = ProblemDefinition::sample();
        problem.rooms = vec![Room::theory("Room 101"), Room::theory("Room 102")];
        // No lab room exists, so a lab section draws from the full list.
        assert_eq!(problem.compatible_rooms(1), vec![0, 1]);
    }

    #[test]
    fn test_from_json_with_defaults() {
        let text = r#"{
            "days": ["Monday"],
            "morning": ["08:00-10:00"],
            "afternoon": [],
            "rooms": [{"name": "Room 101", "kind": "theory"}],
            "courses": [{"name": "Calculus I", "teacher": "Ana"}]
        }"#;
        let problem = ProblemDefinition::from_json(text).unwrap();
        assert!(problem.single_cohort);
        assert!(!problem.reserve_lab_rooms);
        assert_eq!(problem.slot_count(), 1);
        assert_eq!(problem.courses[0].preference, TimePreference::Any);
    }

    #[test]
    fn test_from_json_rejects_malformed_interval() {
        let text = r#"{
            "days": ["Monday"],
            "morning": ["8:00-10:00"],
            "afternoon": [],
            "rooms": [{"name": "Room 101", "kind": "theory"}],
            "courses": [{"name": "Calculus I", "teacher": "Ana"}]
        }"#;
        assert!(ProblemDefinition::from_json(text).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let problem = ProblemDefinition::sample();
        let text = serde_json::to_string(&problem).unwrap();
        let back = ProblemDefinition::from_json(&text).unwrap();
        assert_eq!(back, problem);
    }
}
