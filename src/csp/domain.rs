//! Trail-backed domain store.
//!
//! Holds the remaining candidates of every variable. Narrowing records the
//! replaced list on a trail, so any amount of pruning can be undone by
//! rewinding to an earlier mark. The search takes a mark before each
//! forward-checking pass and rewinds to it when that level is exhausted.

use crate::models::{Candidate, CandidateSpace, VarId};

/// Position in the trail to rewind to.
pub type Mark = usize;

/// Variable → remaining candidates, with undo.
#[derive(Debug, Clone, Default)]
pub struct DomainStore {
    domains: Vec<Vec<Candidate>>,
    /// (variable, list before narrowing), oldest first.
    trail: Vec<(VarId, Vec<Candidate>)>,
}

impl DomainStore {
    /// Seeds each variable with the singleton list of its own candidate.
    pub fn seeded(space: &CandidateSpace) -> Self {
        Self {
            domains: space.as_slice().iter().map(|&c| vec![c]).collect(),
            trail: Vec::new(),
        }
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Whether the store has no variables.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Remaining candidates of `var`.
    pub fn domain(&self, var: VarId) -> &[Candidate] {
        &self.domains[var]
    }

    /// Remaining domain size of `var`.
    #[inline]
    pub fn size(&self, var: VarId) -> usize {
        self.domains[var].len()
    }

    /// Keeps only the candidates of `var` satisfying `keep`.
    ///
    /// Returns the number of candidates removed. Nothing is recorded when
    /// the domain is left unchanged.
    pub fn narrow<F>(&mut self, var: VarId, mut keep: F) -> usize
    where
        F: FnMut(&Candidate) -> bool,
    {
        let current = &self.domains[var];
        if current.iter().all(&mut keep) {
            return 0;
        }

        let narrowed: Vec<Candidate> = current.iter().copied().filter(|c| keep(c)).collect();
        let removed = current.len() - narrowed.len();
        let previous = std::mem::replace(&mut self.domains[var], narrowed);
        self.trail.push((var, previous));
        removed
    }

    /// Current trail position.
    pub fn mark(&self) -> Mark {
        self.trail.len()
    }

    /// Undoes every narrowing made since `mark`.
    pub fn restore(&mut self, mark: Mark) {
        while self.trail.len() > mark {
            if let Some((var, previous)) = self.trail.pop() {
                self.domains[var] = previous;
            }
        }
    }

    /// Number of recorded narrowings.
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }
}
