//! Text and SVG renditions of a timetable.
//!
//! [`table`] lists every section sorted by day and slot, [`grid`] draws a
//! week overview with days as columns, and [`svg`] produces a standalone
//! vector image suitable for saving to disk.

use std::fmt::Write;

use crate::ga::{PenaltyReport, Timetable};
use crate::models::ProblemDefinition;

const GRID_CELL: usize = 28;
const GRID_LABEL: usize = 13;

/// Renders one line per section, sorted by day, then slot, then room.
pub fn table(timetable: &Timetable, problem: &ProblemDefinition) -> String {
    let mut assignments: Vec<_> = timetable.assignments.iter().collect();
    assignments.sort_by_key(|a| (a.day, a.slot, a.room));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<13} {:<28} {:<12} {}",
        "Day", "Time", "Course", "Teacher", "Room"
    );
    let _ = writeln!(out, "{}", "-".repeat(80));

    for a in assignments {
        let course = &problem.courses[a.course];
        // Interval's Display does not honor width flags; convert first.
        let _ = writeln!(
            out,
            "{:<12} {:<13} {:<28} {:<12} {}",
            problem.days[a.day],
            problem.slot_interval(a.slot).to_string(),
            course.name,
            course.teacher,
            problem.rooms[a.room].name,
        );
    }
    out
}

/// Renders a week overview with days as columns and slots as rows.
///
/// Sections sharing a cell are joined with ` / `, so double bookings stay
/// visible. Labels longer than the cell width are truncated.
pub fn grid(timetable: &Timetable, problem: &ProblemDefinition) -> String {
    let mut out = String::new();

    let mut header = pad_cell("", GRID_LABEL);
    for day in &problem.days {
        header.push(' ');
        header.push_str(&pad_cell(day, GRID_CELL));
    }
    let _ = writeln!(out, "{}", header.trim_end());
    let _ = writeln!(
        out,
        "{}",
        "-".repeat(GRID_LABEL + (GRID_CELL + 1) * problem.day_count())
    );

    for slot in 0..problem.slot_count() {
        let mut row = pad_cell(&problem.slot_interval(slot).to_string(), GRID_LABEL);
        for day in 0..problem.day_count() {
            let labels: Vec<String> = timetable
                .assignments
                .iter()
                .filter(|a| a.day == day && a.slot == slot)
                .map(|a| {
                    format!(
                        "{} ({})",
                        problem.courses[a.course].name, problem.rooms[a.room].name
                    )
                })
                .collect();
            row.push(' ');
            row.push_str(&pad_cell(&labels.join(" / "), GRID_CELL));
        }
        let _ = writeln!(out, "{}", row.trim_end());
    }
    out
}

/// Renders a standalone SVG image of the week.
///
/// Cells are tinted by room kind (blue for theory, green for lab) and the
/// header states the timetable's penalty and feasibility.
pub fn svg(timetable: &Timetable, problem: &ProblemDefinition, report: &PenaltyReport) -> String {
    const CELL_W: usize = 190;
    const CELL_H: usize = 70;
    const LEFT: usize = 110;
    const TOP: usize = 70;
    const MARGIN: usize = 20;

    let days = problem.day_count();
    let slots = problem.slot_count();
    let width = LEFT + days * CELL_W + MARGIN;
    let height = TOP + slots * CELL_H + MARGIN;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        out,
        r#"<rect width="{width}" height="{height}" fill="white"/>"#
    );

    let verdict = if report.is_feasible() {
        "feasible"
    } else {
        "infeasible"
    };
    let _ = writeln!(
        out,
        r#"<text x="{MARGIN}" y="32" font-family="sans-serif" font-size="16" font-weight="bold">Penalty {} ({verdict})</text>"#,
        report.penalty
    );

    for (i, day) in problem.days.iter().enumerate() {
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" font-family="sans-serif" font-size="13" font-weight="bold" text-anchor="middle">{}</text>"#,
            LEFT + i * CELL_W + CELL_W / 2,
            TOP - 12,
            xml_escape(day)
        );
    }

    for slot in 0..slots {
        let y = TOP + slot * CELL_H;
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" font-family="sans-serif" font-size="12" text-anchor="end">{}</text>"#,
            LEFT - 10,
            y + CELL_H / 2 + 4,
            xml_escape(&problem.slot_interval(slot).to_string())
        );

        for day in 0..days {
            let x = LEFT + day * CELL_W;
            let classes: Vec<_> = timetable
                .assignments
                .iter()
                .filter(|a| a.day == day && a.slot == slot)
                .collect();

            let fill = match classes.first() {
                Some(a) if problem.rooms[a.room].is_lab() => "honeydew",
                Some(_) => "aliceblue",
                None => "white",
            };
            let _ = writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}" stroke="silver"/>"#,
                x + 2,
                y + 2,
                CELL_W - 4,
                CELL_H - 4,
            );

            for (line, a) in classes.iter().take(3).enumerate() {
                let label = format!(
                    "{} ({})",
                    problem.courses[a.course].name, problem.rooms[a.room].name
                );
                let _ = writeln!(
                    out,
                    r#"<text x="{}" y="{}" font-family="sans-serif" font-size="11">{}</text>"#,
                    x + 10,
                    y + 22 + line * 16,
                    xml_escape(&label)
                );
            }
            if classes.len() > 3 {
                let _ = writeln!(
                    out,
                    r#"<text x="{}" y="{}" font-family="sans-serif" font-size="11">+{} more</text>"#,
                    x + 10,
                    y + 22 + 3 * 16,
                    classes.len() - 3
                );
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn pad_cell(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{truncated:<width$}")
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{evaluate, Assignment, PenaltyWeights};
    use crate::models::{Course, Interval, Room};

    fn asg(course: usize, day: usize, slot: usize, room: usize) -> Assignment {
        Assignment {
            course,
            day,
            slot,
            room,
        }
    }

    fn sample_timetable() -> Timetable {
        Timetable {
            assignments: vec![
                asg(0, 1, 0, 0),
                asg(1, 0, 1, 2),
                asg(2, 0, 0, 3),
                asg(3, 4, 3, 1),
                asg(4, 2, 2, 2),
            ],
        }
    }

    #[test]
    fn test_table_sorts_by_day_then_slot() {
        let problem = ProblemDefinition::sample();
        let out = table(&sample_timetable(), &problem);

        let positions: Vec<usize> = [
            "Digital Circuits",          // Monday 08:00
            "Algorithms and Programming", // Monday 10:00
            "Calculus I",                // Tuesday 08:00
            "Operating Systems",         // Wednesday 13:30
            "Artificial Intelligence",   // Friday 15:30
        ]
        .iter()
        .map(|name| out.find(name).expect("course must be listed"))
        .collect();

        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "rows must appear in day/slot order: {positions:?}"
        );
        assert!(out.starts_with("Day"));
        assert!(out.contains("08:00-10:00"));
        assert!(out.contains("Software Lab"));
    }

    #[test]
    fn test_grid_shows_course_under_day() {
        let problem = ProblemDefinition::sample();
        let out = grid(&sample_timetable(), &problem);

        assert!(out.contains("Monday"));
        assert!(out.contains("Friday"));
        assert!(out.contains("Calculus I (Room 101)"));
        assert!(out.contains("13:30-15:30"));
    }

    #[test]
    fn test_grid_joins_double_bookings() {
        let problem = ProblemDefinition::sample();
        let timetable = Timetable {
            assignments: vec![
                asg(0, 0, 0, 0),
                asg(1, 0, 0, 2),
                asg(2, 1, 1, 3),
                asg(3, 2, 2, 1),
                asg(4, 3, 3, 2),
            ],
        };
        let out = grid(&timetable, &problem);
        assert!(out.contains(" / "), "colliding sections must share the cell");
    }

    #[test]
    fn test_svg_is_well_formed_and_escaped() {
        let problem = ProblemDefinition {
            days: vec!["Monday".into()],
            morning: vec![Interval::parse("08:00-10:00").unwrap()],
            afternoon: vec![],
            rooms: vec![Room::theory("Room 101")],
            courses: vec![Course::new("Systems & Signals", "Ana")],
            single_cohort: true,
            reserve_lab_rooms: false,
        };
        let timetable = Timetable {
            assignments: vec![asg(0, 0, 0, 0)],
        };
        let report = evaluate(&timetable, &problem, &PenaltyWeights::default());

        let image = svg(&timetable, &problem, &report);
        assert!(image.starts_with("<svg"));
        assert!(image.trim_end().ends_with("</svg>"));
        assert!(image.contains("Systems &amp; Signals"));
        assert!(image.contains("Penalty 0 (feasible)"));
    }

    #[test]
    fn test_svg_tints_lab_cells() {
        let problem = ProblemDefinition::sample();
        let timetable = sample_timetable();
        let report = evaluate(&timetable, &problem, &PenaltyWeights::default());

        let image = svg(&timetable, &problem, &report);
        assert!(image.contains("honeydew"), "lab cells must use the lab tint");
        assert!(image.contains("aliceblue"), "theory cells must use the theory tint");
    }
}
