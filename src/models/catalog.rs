//! Entity catalog.
//!
//! The catalog is the fixed problem instance: ordered lists of subjects,
//! teachers, groups, rooms, weekday labels, and time-slot labels. List order
//! matters, since it fixes the order of the candidate cross product and
//! therefore which solution the search finds first.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Group, Room, Subject, Teacher};
use crate::error::Result;

/// The immutable problem instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Subjects, in enumeration order.
    pub subjects: Vec<Subject>,
    /// Teachers, in enumeration order.
    pub teachers: Vec<Teacher>,
    /// Student groups, in enumeration order.
    pub groups: Vec<Group>,
    /// Rooms, in enumeration order.
    pub rooms: Vec<Room>,
    /// Weekday labels (e.g. "Monday").
    pub weekdays: Vec<String>,
    /// Time-slot labels (e.g. "8:40-10:15").
    pub time_slots: Vec<String>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subject.
    pub fn with_subject(mut self, name: impl Into<String>) -> Self {
        self.subjects.push(Subject::new(name));
        self
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, name: impl Into<String>) -> Self {
        self.teachers.push(Teacher::new(name));
        self
    }

    /// Adds a group.
    pub fn with_group(mut self, name: impl Into<String>, num_students: i32) -> Self {
        self.groups.push(Group::new(name, num_students));
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, name: impl Into<String>, capacity: i32) -> Self {
        self.rooms.push(Room::new(name, capacity));
        self
    }

    /// Adds a weekday label.
    pub fn with_weekday(mut self, label: impl Into<String>) -> Self {
        self.weekdays.push(label.into());
        self
    }

    /// Adds a time-slot label.
    pub fn with_time_slot(mut self, label: impl Into<String>) -> Self {
        self.time_slots.push(label.into());
        self
    }

    /// Size of the full candidate cross product.
    ///
    /// Saturates instead of overflowing for absurdly large catalogs.
    pub fn candidate_count(&self) -> usize {
        [
            self.subjects.len(),
            self.teachers.len(),
            self.groups.len(),
            self.rooms.len(),
            self.weekdays.len(),
            self.time_slots.len(),
        ]
        .iter()
        .fold(1usize, |acc, &n| acc.saturating_mul(n))
    }

    /// Parses a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the catalog to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// The built-in computer-science department catalog.
    ///
    /// 15 subjects, 15 teachers, 5 groups, 20 rooms (4 × 50 seats,
    /// 10 × 20 seats, 6 × 15 seats), 5 weekdays, 3 time slots.
    pub fn university() -> Self {
        const TEACHERS: [&str; 15] = [
            "0 Shevchenko",
            "1 Kovalenko",
            "2 Melnyk",
            "3 Tkachuk",
            "4 Hrytsenko",
            "5 Bondarenko",
            "6 Ponomarenko",
            "7 Petrenko",
            "8 Lysenko",
            "9 Marchenko",
            "10 Dmytrenko",
            "11 Zaytsev",
            "12 Ivanchenko",
            "13 Savchenko",
            "14 Vasylenko",
        ];
        const SUBJECTS: [&str; 15] = [
            "0 Introduction to Computer Science",
            "1 Data Structures and Algorithms",
            "2 Operating Systems",
            "3 Computer Networks",
            "4 Database Systems",
            "5 Software Engineering",
            "6 Artificial Intelligence",
            "7 Machine Learning",
            "8 Computer Graphics",
            "9 Web Development",
            "10 Cybersecurity",
            "11 Human-Computer Interaction",
            "12 Compiler Design",
            "13 Parallel and Distributed Computing",
            "14 Computer Architecture",
        ];
        const GROUPS: [(&str, i32); 5] = [
            ("MI", 15),
            ("TTP-41", 25),
            ("TTP-42", 24),
            ("TK-1", 30),
            ("TK-2", 20),
        ];
        const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
        const TIME_SLOTS: [&str; 3] = ["8:40-10:15", "10:35-12:10", "12:20-13:55"];

        let rooms = (0..20).map(|i| {
            let capacity = match i {
                0..=3 => 50,
                4..=13 => 20,
                _ => 15,
            };
            Room::new(format!("Room_{i}"), capacity)
        });

        Self {
            subjects: SUBJECTS.iter().map(|&s| Subject::new(s)).collect(),
            teachers: TEACHERS.iter().map(|&t| Teacher::new(t)).collect(),
            groups: GROUPS.iter().map(|&(n, s)| Group::new(n, s)).collect(),
            rooms: rooms.collect(),
            weekdays: WEEKDAYS.iter().map(|&d| d.to_string()).collect(),
            time_slots: TIME_SLOTS.iter().map(|&t| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let c = Catalog::new()
            .with_subject("Math")
            .with_teacher("Ada")
            .with_group("G1", 10)
            .with_group("G2", 12)
            .with_room("R1", 30)
            .with_weekday("Monday")
            .with_time_slot("9:00");

        assert_eq!(c.subjects.len(), 1);
        assert_eq!(c.groups[1].num_students, 12);
        assert_eq!(c.rooms[0].capacity, 30);
        assert_eq!(c.candidate_count(), 2);
    }

    #[test]
    fn test_university_catalog() {
        let c = Catalog::university();
        assert_eq!(c.subjects.len(), 15);
        assert_eq!(c.teachers.len(), 15);
        assert_eq!(c.groups.len(), 5);
        assert_eq!(c.rooms.len(), 20);
        assert_eq!(c.weekdays.len(), 5);
        assert_eq!(c.time_slots.len(), 3);
        assert_eq!(c.candidate_count(), 15 * 15 * 5 * 20 * 5 * 3);

        assert_eq!(c.rooms[3].capacity, 50);
        assert_eq!(c.rooms[4].capacity, 20);
        assert_eq!(c.rooms[13].capacity, 20);
        assert_eq!(c.rooms[14].capacity, 15);
        assert_eq!(c.rooms[19].name, "Room_19");
    }

    #[test]
    fn test_empty_catalog_has_no_candidates() {
        assert_eq!(Catalog::new().candidate_count(), 0);
    }

    #[test]
    fn test_json_round_trip() {
        let c = Catalog::university();
        let json = c.to_json_string().unwrap();
        let back = Catalog::from_json_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn test_json_parse_error() {
        assert!(Catalog::from_json_str("{ not json").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Catalog::load("/nonexistent/catalog.json").is_err());
    }
}
