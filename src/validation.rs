//! Problem-definition integrity checks.
//!
//! Run before any search. Detects:
//! - Empty catalogs (days, slots, rooms, courses)
//! - Blank or duplicate names
//! - Duplicate or partially overlapping slot intervals
//! - Zero weekly meeting counts
//!
//! All issues are collected instead of stopping at the first. A lab course
//! in a problem without lab rooms is not an error (the search runs and
//! penalizes it) but logs a warning.

use std::collections::HashSet;

use crate::error::{ValidationError, ValidationErrorKind};
use crate::models::{Interval, ProblemDefinition};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Validates a problem definition.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &ProblemDefinition) -> ValidationResult {
    let mut errors = Vec::new();

    check_days(problem, &mut errors);
    check_slots(problem, &mut errors);
    check_rooms(problem, &mut errors);
    check_courses(problem, &mut errors);

    if problem.courses.iter().any(|c| c.requires_lab) && !problem.rooms.iter().any(|r| r.is_lab())
    {
        for course in problem.courses.iter().filter(|c| c.requires_lab) {
            log::warn!(
                "course '{}' requires a lab but the problem has no lab room; \
                 every timetable will carry that penalty",
                course.name
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_days(problem: &ProblemDefinition, errors: &mut Vec<ValidationError>) {
    if problem.days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "day list is empty",
        ));
    }

    let mut seen = HashSet::new();
    for day in &problem.days {
        if day.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                "blank day name",
            ));
        } else if !seen.insert(day.as_str()) {
            // Exact comparison: "Monday" and "monday" are distinct days.
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("duplicate day name: {day}"),
            ));
        }
    }
}

fn check_slots(problem: &ProblemDefinition, errors: &mut Vec<ValidationError>) {
    if problem.slot_count() == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "slot catalog is empty",
        ));
        return;
    }

    let slots: Vec<Interval> = problem
        .morning
        .iter()
        .chain(&problem.afternoon)
        .copied()
        .collect();
    for (i, a) in slots.iter().enumerate() {
        for b in &slots[i + 1..] {
            if a == b {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSlot,
                    format!("duplicate slot interval: {a}"),
                ));
            } else if a.overlaps(b) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingSlots,
                    format!("slot intervals {a} and {b} overlap"),
                ));
            }
        }
    }
}

fn check_rooms(problem: &ProblemDefinition, errors: &mut Vec<ValidationError>) {
    if problem.rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "room list is empty",
        ));
    }

    let mut seen = HashSet::new();
    for room in &problem.rooms {
        if room.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                "blank room name",
            ));
        } else if !seen.insert(room.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("duplicate room name: {}", room.name),
            ));
        }
    }
}

fn check_courses(problem: &ProblemDefinition, errors: &mut Vec<ValidationError>) {
    if problem.courses.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "course list is empty",
        ));
    }

    let mut seen = HashSet::new();
    for course in &problem.courses {
        if course.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                "blank course name",
            ));
        } else if !seen.insert(course.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("duplicate course name: {}", course.name),
            ));
        }

        if course.teacher.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                format!("course '{}' has a blank teacher", course.name),
            ));
        }

        if course.weekly_slots == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroWeeklySlots,
                format!("course '{}' declares zero weekly meetings", course.name),
            ));
        }
    }
}
