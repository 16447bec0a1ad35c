//! Timetable rendering.
//!
//! Turns a solved assignment into a fixed-width text table, one row per slot,
//! ordered by weekday then time slot (catalog order, not label order).

use std::fmt::Write;

use crate::models::{Assignment, Catalog};

const SEPARATOR_WIDTH: usize = 115;

/// Renders `assignment` as a table with columns day, time, subject,
/// teacher, group, room.
pub fn render(catalog: &Catalog, assignment: &Assignment) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "{:<10} {:<15} {:<40} {:<30} {:<15} {}",
        "Day", "Time", "Subject", "Teacher", "Group", "Room"
    );
    let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));

    for (_, c) in assignment.sorted_by_slot() {
        let _ = writeln!(
            out,
            "{:<10} {:<15} {:<40} {:<30} {:<15} {}",
            c.weekday_in(catalog),
            c.time_slot_in(catalog),
            c.subject_in(catalog).name,
            c.teacher_in(catalog).name,
            c.group_in(catalog).name,
            c.room_in(catalog).name,
        );
    }

    out
}
