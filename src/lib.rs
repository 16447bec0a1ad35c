//! Timetable constraint solver for the U-Engine ecosystem.
//!
//! Assigns (subject, teacher, group, room, weekday, time-slot) slots so that
//! no two slots break the hard rules: teacher double-booking, room capacity,
//! group collision, and room double-booking.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Catalog`, `Subject`, `Teacher`, `Group`,
//!   `Room`, `Candidate`, `CandidateSpace`, `Assignment`, `Violation`
//! - **`csp`**: Compatibility rules, domain store, forward checking, MRV
//!   selection, and the backtracking solver
//! - **`validation`**: Catalog integrity checks (empty collections,
//!   negative sizes, duplicate names)
//! - **`verify`**: Audit of a finished assignment against the hard rules
//! - **`report`**: Text table rendering of a solution
//!
//! # Example
//!
//! ```
//! use u_timetable::csp::backtracking_search;
//! use u_timetable::models::Catalog;
//! use u_timetable::report;
//!
//! let catalog = Catalog::new()
//!     .with_subject("Compiler Design")
//!     .with_teacher("Ivanchenko")
//!     .with_group("MI", 15)
//!     .with_room("Room_0", 50)
//!     .with_weekday("Monday")
//!     .with_weekday("Wednesday")
//!     .with_time_slot("8:40-10:15");
//!
//! let assignment = backtracking_search(&catalog).expect("feasible");
//! assert_eq!(assignment.len(), 2);
//! println!("{}", report::render(&catalog, &assignment));
//! ```
//!
//! # References
//!
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod csp;
pub mod error;
pub mod models;
pub mod report;
pub mod validation;
pub mod verify;

pub use error::{Result, TimetableError};
