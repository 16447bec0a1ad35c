//! Independent check of a finished assignment.
//!
//! Re-applies the hard rules to every slot and every pair of slots and
//! reports what is broken. The search never needs this; it is for callers
//! that want to audit a timetable from another source, or to confirm a
//! solver result in tests.

use crate::models::{Assignment, Catalog, Violation, ViolationType};

/// Lists every rule broken by `assignment`.
///
/// Capacity is reported once per overfull slot. Each same-day pair is checked
/// against the teacher, group, and room rules independently, so one pair can
/// yield several violations.
pub fn check(catalog: &Catalog, assignment: &Assignment) -> Vec<Violation> {
    let entries: Vec<_> = assignment.iter().copied().collect();
    let mut violations = Vec::new();

    for &(var, c) in &entries {
        if !c.fits_capacity(catalog) {
            violations.push(Violation::new(
                ViolationType::CapacityExceeded,
                vec![var],
                format!(
                    "Group '{}' ({} students) does not fit room '{}' ({} seats)",
                    c.group_in(catalog).name,
                    c.group_in(catalog).num_students,
                    c.room_in(catalog).name,
                    c.room_in(catalog).capacity,
                ),
            ));
        }
    }

    for (i, &(var_a, a)) in entries.iter().enumerate() {
        for &(var_b, b) in &entries[i + 1..] {
            if a.weekday != b.weekday {
                continue;
            }
            let clashes = [
                (a.teacher == b.teacher, ViolationType::TeacherClash),
                (
                    a.group_in(catalog).shares_name_chars(b.group_in(catalog)),
                    ViolationType::GroupClash,
                ),
                (a.room == b.room, ViolationType::RoomClash),
            ];
            for (clash, violation_type) in clashes {
                if clash {
                    violations.push(Violation::new(
                        violation_type,
                        vec![var_a, var_b],
                        format!(
                            "{:?} on {} between variables {} and {}",
                            violation_type,
                            a.weekday_in(catalog),
                            var_a,
                            var_b
                        ),
                    ));
                }
            }
        }
    }

    violations
}

/// Whether `assignment` breaks no rule.
pub fn is_valid(catalog: &Catalog, assignment: &Assignment) -> bool {
    check(catalog, assignment).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Candidate;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_subject("S")
            .with_teacher("T0")
            .with_teacher("T1")
            .with_group("MI", 15)
            .with_group("TK-1", 30)
            .with_group("ab", 10)
            .with_room("R0", 20)
            .with_room("R1", 20)
            .with_weekday("Mon")
            .with_weekday("Tue")
            .with_time_slot("1")
            .with_time_slot("2")
    }

    fn c(teacher: usize, group: usize, room: usize, weekday: usize, time_slot: usize) -> Candidate {
        Candidate::new(0, teacher, group, room, weekday, time_slot)
    }

    #[test]
    fn test_clean_assignment() {
        let cat = catalog();
        let mut a = Assignment::new();
        a.commit(0, c(0, 0, 0, 0, 0));
        a.commit(1, c(0, 0, 0, 1, 0));
        assert!(is_valid(&cat, &a));
        assert!(check(&cat, &Assignment::new()).is_empty());
    }

    #[test]
    fn test_teacher_clash() {
        let cat = catalog();
        let mut a = Assignment::new();
        a.commit(0, c(0, 0, 0, 0, 0));
        a.commit(1, c(0, 2, 1, 0, 1));

        let v = check(&cat, &a);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].violation_type, ViolationType::TeacherClash);
        assert_eq!(v[0].variables, vec![0, 1]);
        assert!(v[0].message.contains("Mon"));
    }

    #[test]
    fn test_room_clash() {
        let cat = catalog();
        let mut a = Assignment::new();
        a.commit(0, c(0, 0, 0, 1, 0));
        a.commit(1, c(1, 2, 0, 1, 1));

        let v = check(&cat, &a);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].violation_type, ViolationType::RoomClash);
    }

    #[test]
    fn test_group_clash() {
        let cat = catalog();
        let mut a = Assignment::new();
        // "MI" twice on Tuesday with different teachers and rooms
        a.commit(0, c(0, 0, 0, 1, 0));
        a.commit(1, c(1, 0, 1, 1, 1));

        let v = check(&cat, &a);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].violation_type, ViolationType::GroupClash);
    }

    #[test]
    fn test_capacity_reported_per_slot() {
        let cat = catalog();
        let mut a = Assignment::new();
        a.commit(0, c(0, 1, 0, 0, 0)); // 30 in 20 seats
        a.commit(1, c(1, 0, 1, 1, 0));

        let v = check(&cat, &a);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].violation_type, ViolationType::CapacityExceeded);
        assert_eq!(v[0].variables, vec![0]);
        assert!(v[0].message.contains("TK-1"));
    }

    #[test]
    fn test_pair_with_several_clashes() {
        let cat = catalog();
        let mut a = Assignment::new();
        // Same teacher, group, and room on Monday in different slots
        a.commit(0, c(0, 0, 0, 0, 0));
        a.commit(1, c(0, 0, 0, 0, 1));

        let kinds: Vec<ViolationType> = check(&cat, &a).iter().map(|v| v.violation_type).collect();
        assert_eq!(
            kinds,
            vec![
                ViolationType::TeacherClash,
                ViolationType::GroupClash,
                ViolationType::RoomClash
            ]
        );
    }
}
