//! Forward checking.
//!
//! After a commitment, every unassigned variable drops the candidates that
//! are incompatible with it. Only the most recent commitment is consulted;
//! earlier ones were applied when they were made and are not re-checked.

use super::compatibility::compatible;
use super::domain::DomainStore;
use crate::models::{Assignment, Catalog};

/// Prunes unassigned domains against the latest commitment.
///
/// With an empty assignment there is nothing to check against and no
/// domain changes. Returns the total number of candidates removed.
pub fn forward_check(catalog: &Catalog, store: &mut DomainStore, assignment: &Assignment) -> usize {
    let Some(latest) = assignment.last().copied() else {
        return 0;
    };

    let mut pruned = 0;
    for var in 0..store.len() {
        if assignment.is_assigned(var) {
            continue;
        }
        pruned += store.narrow(var, |c| compatible(catalog, Some(&latest), Some(c)));
    }
    pruned
}
