//! Catalog entities.
//!
//! Subjects, teachers, groups, and rooms are the named things a timetable
//! slot pairs together. Groups and rooms also carry a head count, which the
//! capacity rule compares.

use serde::{Deserialize, Serialize};

/// A subject (course) to be taught.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Display name.
    pub name: String,
}

/// A teacher who can deliver a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Display name.
    pub name: String,
}

/// A student group attending sessions together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Display name. Also used by the group-collision rule, which compares
    /// names character by character.
    pub name: String,
    /// Number of students in the group.
    pub num_students: i32,
}

/// A room sessions take place in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Display name.
    pub name: String,
    /// Number of seats.
    pub capacity: i32,
}

impl Subject {
    /// Creates a subject.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Teacher {
    /// Creates a teacher.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Group {
    /// Creates a group with the given head count.
    pub fn new(name: impl Into<String>, num_students: i32) -> Self {
        Self {
            name: name.into(),
            num_students,
        }
    }

    /// Whether this group's name shares at least one character with `other`'s.
    pub fn shares_name_chars(&self, other: &Group) -> bool {
        self.name.chars().any(|ch| other.name.contains(ch))
    }
}

impl Room {
    /// Creates a room with the given capacity.
    pub fn new(name: impl Into<String>, capacity: i32) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }

    /// Whether the group fits in this room.
    #[inline]
    pub fn fits(&self, group: &Group) -> bool {
        group.num_students <= self.capacity
    }
}
