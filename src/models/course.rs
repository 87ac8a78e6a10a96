//! Course sections and time-of-day preferences.

use serde::{Deserialize, Serialize};

use crate::models::DayPart;

/// A teacher's stated preference for when a section should meet.
///
/// Unmet preferences are scored as soft violations; they never make a
/// timetable infeasible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePreference {
    /// Meet in a morning slot.
    Morning,
    /// Meet in an afternoon slot.
    Afternoon,
    /// No stated preference.
    #[default]
    Any,
}

impl TimePreference {
    /// Whether a slot in `part` satisfies the preference.
    pub fn admits(&self, part: DayPart) -> bool {
        match self {
            TimePreference::Morning => part == DayPart::Morning,
            TimePreference::Afternoon => part == DayPart::Afternoon,
            TimePreference::Any => true,
        }
    }
}

/// A course section to place on the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Display name, unique within a problem.
    pub name: String,
    /// Assigned teacher.
    pub teacher: String,
    /// Weekly meeting count carried from the catalog. The grid places one
    /// meeting per section; sections meeting twice appear twice in the
    /// course list.
    #[serde(default = "default_weekly_slots")]
    pub weekly_slots: u8,
    /// Whether the section must meet in a lab room.
    #[serde(default)]
    pub requires_lab: bool,
    /// Stated time-of-day preference.
    #[serde(default)]
    pub preference: TimePreference,
}

fn default_weekly_slots() -> u8 {
    1
}

impl Course {
    /// Theory section with no stated preference.
    pub fn new(name: impl Into<String>, teacher: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            teacher: teacher.into(),
            weekly_slots: 1,
            requires_lab: false,
            preference: TimePreference::Any,
        }
    }

    /// Lab-taught section with no stated preference.
    pub fn lab(name: impl Into<String>, teacher: impl Into<String>) -> Self {
        Self {
            requires_lab: true,
            ..Self::new(name, teacher)
        }
    }

    /// Sets the time-of-day preference.
    pub fn with_preference(mut self, preference: TimePreference) -> Self {
        self.preference = preference;
        self
    }

    /// Sets the weekly meeting count.
    pub fn with_weekly_slots(mut self, count: u8) -> Self {
        self.weekly_slots = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let course = Course::lab("Operating Systems", "Bruno")
            .with_preference(TimePreference::Morning)
            .with_weekly_slots(2);
        assert!(course.requires_lab);
        assert_eq!(course.preference, TimePreference::Morning);
        assert_eq!(course.weekly_slots, 2);

        let plain = Course::new("Calculus I", "Ana");
        assert!(!plain.requires_lab);
        assert_eq!(plain.preference, TimePreference::Any);
        assert_eq!(plain.weekly_slots, 1);
    }

    #[test]
    fn test_preference_admits() {
        assert!(TimePreference::Morning.admits(DayPart::Morning));
        assert!(!TimePreference::Morning.admits(DayPart::Afternoon));
        assert!(TimePreference::Afternoon.admits(DayPart::Afternoon));
        assert!(TimePreference::Any.admits(DayPart::Morning));
        assert!(TimePreference::Any.admits(DayPart::Afternoon));
    }

    #[test]
    fn test_serde_defaults() {
        let course: Course =
            serde_json::from_str(r#"{"name": "Calculus I", "teacher": "Ana"}"#).unwrap();
        assert_eq!(course.weekly_slots, 1);
        assert!(!course.requires_lab);
        assert_eq!(course.preference, TimePreference::Any);
    }
}
