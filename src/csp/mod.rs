//! Constraint-satisfaction core.
//!
//! Every tuple of the catalog cross product is a variable whose domain starts
//! as the singleton list of that tuple. The search commits variables one at a
//! time, forward-checks the remaining domains against each new commitment,
//! and picks the next variable by minimum remaining values.
//!
//! # Key Components
//!
//! - **Compatibility**: [`compatible`] — the four hard rules between two slots
//! - **Domains**: [`DomainStore`] — remaining candidates per variable, trail-backed
//! - **Propagation**: [`forward_check`] — prune against the latest commitment
//! - **Selection**: [`min_remaining`] — MRV minimum over unassigned variables
//! - **Search**: [`TimetableSolver`] — backtracking driver on an explicit frame stack
//!
//! # References
//!
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for Constraint Satisfaction Problems"
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6

mod compatibility;
mod config;
mod domain;
mod propagation;
mod search;
mod selection;

pub use compatibility::{compatible, conflict, ConflictKind};
pub use config::{CancelFlag, SolverConfig};
pub use domain::{DomainStore, Mark};
pub use propagation::forward_check;
pub use search::{backtracking_search, SearchStats, Solution, SolverStatus, TimetableSolver};
pub use selection::{min_remaining, variables_with_size};
