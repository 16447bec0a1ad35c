//! Timetabling domain models.
//!
//! Provides the catalog of entities a timetable is built from, the candidate
//! slot type and its cross-product enumeration, and the assignment returned
//! by the solver.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | School | Training Center |
//! |-------------|------------|--------|-----------------|
//! | Subject | Course | Lesson | Module |
//! | Teacher | Lecturer | Teacher | Trainer |
//! | Group | Student Group | Class | Cohort |
//! | Room | Lecture Hall | Classroom | Lab |

mod assignment;
mod candidate;
mod catalog;
mod entity;

pub use assignment::{Assignment, Violation, ViolationType};
pub use candidate::{Candidate, CandidateSpace, VarId};
pub use catalog::Catalog;
pub use entity::{Group, Room, Subject, Teacher};
