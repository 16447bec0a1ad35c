//! Minimum-remaining-values variable selection.

use super::domain::DomainStore;
use crate::models::{Assignment, VarId};

/// Smallest domain size among unassigned variables.
///
/// `None` when every variable is assigned. `Some(0)` means some unassigned
/// variable has no candidates left, so the current branch is dead.
pub fn min_remaining(store: &DomainStore, assignment: &Assignment) -> Option<usize> {
    (0..store.len())
        .filter(|&var| !assignment.is_assigned(var))
        .map(|var| store.size(var))
        .min()
}

/// Unassigned variables whose domain size equals `min`, in id order.
pub fn variables_with_size(store: &DomainStore, assignment: &Assignment, min: usize) -> Vec<VarId> {
    (0..store.len())
        .filter(|&var| !assignment.is_assigned(var) && store.size(var) == min)
        .collect()
}
