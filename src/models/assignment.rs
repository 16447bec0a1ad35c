//! Assignment (solution) model.
//!
//! An assignment maps search variables to committed candidates, in commit
//! order. The search grows and shrinks it one entry at a time; a returned
//! assignment covers every variable.
//!
//! Also holds the violation types reported by [`crate::verify`].

use serde::{Deserialize, Serialize};

use super::{Candidate, VarId};

/// Ordered variable → candidate mapping.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Assignment {
    /// Committed entries, oldest first.
    entries: Vec<(VarId, Candidate)>,
    /// Membership by variable id.
    #[serde(skip)]
    assigned: Vec<bool>,
}

/// A broken hard rule between two slots of an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Which rule is broken.
    pub violation_type: ViolationType,
    /// The variables involved (one for capacity, two for clashes).
    pub variables: Vec<VarId>,
    /// Human-readable description.
    pub message: String,
}

/// Classification of hard-rule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationType {
    /// Same teacher twice on one weekday.
    TeacherClash,
    /// Group larger than its room.
    CapacityExceeded,
    /// Overlapping group names on one weekday.
    GroupClash,
    /// Same room twice on one weekday.
    RoomClash,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty assignment sized for `num_variables`.
    pub fn with_variables(num_variables: usize) -> Self {
        Self {
            entries: Vec::with_capacity(num_variables),
            assigned: vec![false; num_variables],
        }
    }

    /// Commits `candidate` to `var`.
    ///
    /// Re-committing an assigned variable moves it to the end with the new
    /// candidate; each variable appears at most once.
    pub fn commit(&mut self, var: VarId, candidate: Candidate) {
        if self.is_assigned(var) {
            self.undo(var);
        }
        if var >= self.assigned.len() {
            self.assigned.resize(var + 1, false);
        }
        self.assigned[var] = true;
        self.entries.push((var, candidate));
    }

    /// Removes `var`'s commitment, returning its candidate.
    pub fn undo(&mut self, var: VarId) -> Option<Candidate> {
        if !self.is_assigned(var) {
            return None;
        }
        self.assigned[var] = false;

        // Search undoes in LIFO order, so the last entry is the usual hit
        let pos = self.entries.iter().rposition(|&(v, _)| v == var)?;
        Some(self.entries.remove(pos).1)
    }

    /// Whether `var` is committed.
    #[inline]
    pub fn is_assigned(&self, var: VarId) -> bool {
        self.assigned.get(var).copied().unwrap_or(false)
    }

    /// The candidate committed to `var`.
    pub fn get(&self, var: VarId) -> Option<&Candidate> {
        if !self.is_assigned(var) {
            return None;
        }
        self.entries.iter().find(|(v, _)| *v == var).map(|(_, c)| c)
    }

    /// The most recently committed candidate.
    pub fn last(&self) -> Option<&Candidate> {
        self.entries.last().map(|(_, c)| c)
    }

    /// Number of committed variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is committed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in commit order.
    pub fn iter(&self) -> impl Iterator<Item = &(VarId, Candidate)> {
        self.entries.iter()
    }

    /// Candidates in commit order.
    pub fn candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter().map(|(_, c)| c)
    }

    /// Entries sorted by (weekday, time slot); ties keep commit order.
    pub fn sorted_by_slot(&self) -> Vec<(VarId, Candidate)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|(_, c)| (c.weekday, c.time_slot));
        sorted
    }
}

impl PartialEq for Assignment {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Assignment {}

impl Violation {
    /// Creates a violation.
    pub fn new(
        violation_type: ViolationType,
        variables: Vec<VarId>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            variables,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(weekday: usize, time_slot: usize) -> Candidate {
        Candidate::new(0, 0, 0, 0, weekday, time_slot)
    }

    #[test]
    fn test_commit_and_undo() {
        let mut a = Assignment::with_variables(4);
        assert!(a.is_empty());
        assert!(a.last().is_none());

        a.commit(2, cand(0, 0));
        a.commit(0, cand(1, 0));
        assert_eq!(a.len(), 2);
        assert!(a.is_assigned(2));
        assert!(!a.is_assigned(1));
        assert_eq!(a.last(), Some(&cand(1, 0)));
        assert_eq!(a.get(2), Some(&cand(0, 0)));

        assert_eq!(a.undo(0), Some(cand(1, 0)));
        assert_eq!(a.last(), Some(&cand(0, 0)));
        assert_eq!(a.undo(0), None);
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_undo_out_of_order() {
        let mut a = Assignment::with_variables(3);
        a.commit(0, cand(0, 0));
        a.commit(1, cand(0, 1));
        a.commit(2, cand(0, 2));

        assert_eq!(a.undo(1), Some(cand(0, 1)));
        let vars: Vec<VarId> = a.iter().map(|(v, _)| *v).collect();
        assert_eq!(vars, vec![0, 2]);
    }

    #[test]
    fn test_commit_grows_membership() {
        let mut a = Assignment::new();
        a.commit(7, cand(0, 0));
        assert!(a.is_assigned(7));
        assert!(!a.is_assigned(100));
    }

    #[test]
    fn test_recommit_keeps_single_entry() {
        let mut a = Assignment::with_variables(2);
        a.commit(0, cand(0, 0));
        a.commit(0, cand(1, 1));
        assert_eq!(a.len(), 1);
        assert_eq!(a.get(0), Some(&cand(1, 1)));
    }

    #[test]
    fn test_sorted_by_slot() {
        let mut a = Assignment::with_variables(4);
        a.commit(0, cand(1, 0));
        a.commit(1, cand(0, 2));
        a.commit(2, cand(0, 0));
        a.commit(3, cand(1, 0));

        let vars: Vec<VarId> = a.sorted_by_slot().iter().map(|(v, _)| *v).collect();
        assert_eq!(vars, vec![2, 1, 0, 3]);
    }

    #[test]
    fn test_serialize_entries() {
        let mut a = Assignment::with_variables(1);
        a.commit(0, cand(0, 0));
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains("entries"));
        assert!(!json.contains("assigned"));
    }
}
