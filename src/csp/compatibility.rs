//! Pairwise compatibility of candidates.
//!
//! Four hard rules decide whether two slots may both appear in a timetable:
//!
//! | Rule | Incompatible when |
//! |------|-------------------|
//! | Teacher | same teacher, same weekday |
//! | Capacity | either group is larger than its room |
//! | Group | group names share a character, same weekday |
//! | Room | same room, same weekday |
//!
//! None of the rules look at the time slot, so a teacher or room is limited to
//! one slot per day. The group rule treats any shared character as a clash
//! ("TTP-41" and "TK-2" share 'T' and '-'). Both behaviors are load-bearing for
//! which solution the search finds and are kept as is.

use crate::models::{Candidate, Catalog};

/// Which rule makes two candidates incompatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictKind {
    /// Same teacher on the same weekday.
    Teacher,
    /// A group does not fit its room.
    Capacity,
    /// Group names overlap on the same weekday.
    Group,
    /// Same room on the same weekday.
    Room,
}

/// Returns the first rule broken by the pair, checked in table order.
///
/// An absent side (no commitment yet) never conflicts.
pub fn conflict(
    catalog: &Catalog,
    a: Option<&Candidate>,
    b: Option<&Candidate>,
) -> Option<ConflictKind> {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return None,
    };
    let same_day = a.weekday == b.weekday;

    if a.teacher == b.teacher && same_day {
        return Some(ConflictKind::Teacher);
    }
    if !a.fits_capacity(catalog) || !b.fits_capacity(catalog) {
        return Some(ConflictKind::Capacity);
    }
    if same_day && a.group_in(catalog).shares_name_chars(b.group_in(catalog)) {
        return Some(ConflictKind::Group);
    }
    if a.room == b.room && same_day {
        return Some(ConflictKind::Room);
    }
    None
}

/// Whether two candidates may coexist in a timetable.
#[inline]
pub fn compatible(catalog: &Catalog, a: Option<&Candidate>, b: Option<&Candidate>) -> bool {
    conflict(catalog, a, b).is_none()
}
