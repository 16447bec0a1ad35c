//! Candidate model.
//!
//! A candidate is one fully specified timetable slot: which subject, taught by
//! which teacher, to which group, in which room, on which weekday, in which
//! time slot. Candidates refer to catalog entries by index, so two candidates
//! are equal exactly when they pick the same catalog entries.
//!
//! The candidate space is the full cross product of the catalog, enumerated
//! subject-major. Every candidate is also a search variable: its [`VarId`] is
//! its position in the enumeration.

use serde::{Deserialize, Serialize};

use super::{Catalog, Group, Room, Subject, Teacher};

/// Search variable identifier (position in the cross product).
pub type VarId = usize;

/// A (subject, teacher, group, room, weekday, time-slot) tuple of catalog indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// Index into [`Catalog::subjects`].
    pub subject: usize,
    /// Index into [`Catalog::teachers`].
    pub teacher: usize,
    /// Index into [`Catalog::groups`].
    pub group: usize,
    /// Index into [`Catalog::rooms`].
    pub room: usize,
    /// Index into [`Catalog::weekdays`].
    pub weekday: usize,
    /// Index into [`Catalog::time_slots`].
    pub time_slot: usize,
}

impl Candidate {
    /// Creates a candidate from its six indices.
    pub fn new(
        subject: usize,
        teacher: usize,
        group: usize,
        room: usize,
        weekday: usize,
        time_slot: usize,
    ) -> Self {
        Self {
            subject,
            teacher,
            group,
            room,
            weekday,
            time_slot,
        }
    }

    /// Resolves the subject in `catalog`.
    #[inline]
    pub fn subject_in<'a>(&self, catalog: &'a Catalog) -> &'a Subject {
        &catalog.subjects[self.subject]
    }

    /// Resolves the teacher in `catalog`.
    #[inline]
    pub fn teacher_in<'a>(&self, catalog: &'a Catalog) -> &'a Teacher {
        &catalog.teachers[self.teacher]
    }

    /// Resolves the group in `catalog`.
    #[inline]
    pub fn group_in<'a>(&self, catalog: &'a Catalog) -> &'a Group {
        &catalog.groups[self.group]
    }

    /// Resolves the room in `catalog`.
    #[inline]
    pub fn room_in<'a>(&self, catalog: &'a Catalog) -> &'a Room {
        &catalog.rooms[self.room]
    }

    /// Resolves the weekday label in `catalog`.
    #[inline]
    pub fn weekday_in<'a>(&self, catalog: &'a Catalog) -> &'a str {
        &catalog.weekdays[self.weekday]
    }

    /// Resolves the time-slot label in `catalog`.
    #[inline]
    pub fn time_slot_in<'a>(&self, catalog: &'a Catalog) -> &'a str {
        &catalog.time_slots[self.time_slot]
    }

    /// Whether the group fits into the room.
    pub fn fits_capacity(&self, catalog: &Catalog) -> bool {
        self.room_in(catalog).fits(self.group_in(catalog))
    }
}

/// The full cross product of a catalog, indexed by [`VarId`].
#[derive(Debug, Clone, Default)]
pub struct CandidateSpace {
    candidates: Vec<Candidate>,
}

impl CandidateSpace {
    /// Enumerates every candidate of `catalog`.
    ///
    /// Nesting order is subject, teacher, group, room, weekday, time slot
    /// (outermost first), so the same catalog always yields the same ids.
    pub fn build(catalog: &Catalog) -> Self {
        let mut candidates = Vec::with_capacity(catalog.candidate_count());

        for subject in 0..catalog.subjects.len() {
            for teacher in 0..catalog.teachers.len() {
                for group in 0..catalog.groups.len() {
                    for room in 0..catalog.rooms.len() {
                        for weekday in 0..catalog.weekdays.len() {
                            for time_slot in 0..catalog.time_slots.len() {
                                candidates.push(Candidate::new(
                                    subject, teacher, group, room, weekday, time_slot,
                                ));
                            }
                        }
                    }
                }
            }
        }

        Self { candidates }
    }

    /// Number of candidates (= number of variables).
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the space is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The candidate for a variable.
    pub fn get(&self, var: VarId) -> Option<&Candidate> {
        self.candidates.get(var)
    }

    /// All candidates in id order.
    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Iterates `(VarId, Candidate)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VarId, &Candidate)> {
        self.candidates.iter().enumerate()
    }
}
