//! Input validation for timetable catalogs.
//!
//! The solver assumes a well-formed catalog and checks nothing itself.
//! Callers that accept catalogs from outside should run
//! [`validate_catalog`] first. Detects:
//! - Empty entity or label collections
//! - Negative group sizes
//! - Negative room capacities
//! - Duplicate names within one collection

use std::collections::HashSet;

use crate::models::Catalog;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A collection has no entries, so the candidate space is empty.
    EmptyCollection,
    /// A group has a negative number of students.
    NegativeGroupSize,
    /// A room has a negative capacity.
    NegativeCapacity,
    /// Two entries of one collection share a name.
    DuplicateName,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog before solving.
///
/// Checks:
/// 1. Every collection (subjects, teachers, groups, rooms, weekdays, time slots) is non-empty
/// 2. No group has a negative size
/// 3. No room has a negative capacity
/// 4. Names are unique within each collection
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    let collections: [(&str, Vec<&str>); 6] = [
        ("subject", catalog.subjects.iter().map(|s| s.name.as_str()).collect()),
        ("teacher", catalog.teachers.iter().map(|t| t.name.as_str()).collect()),
        ("group", catalog.groups.iter().map(|g| g.name.as_str()).collect()),
        ("room", catalog.rooms.iter().map(|r| r.name.as_str()).collect()),
        ("weekday", catalog.weekdays.iter().map(String::as_str).collect()),
        ("time slot", catalog.time_slots.iter().map(String::as_str).collect()),
    ];

    for (label, names) in &collections {
        if names.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCollection,
                format!("Catalog has no {label} entries"),
            ));
        }

        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(*name) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateName,
                    format!("Duplicate {label} name: {name}"),
                ));
            }
        }
    }

    for group in &catalog.groups {
        if group.num_students < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeGroupSize,
                format!("Group '{}' has {} students", group.name, group.num_students),
            ));
        }
    }

    for room in &catalog.rooms {
        if room.capacity < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeCapacity,
                format!("Room '{}' has capacity {}", room.name, room.capacity),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
