//! Backtracking search.
//!
//! # Algorithm
//!
//! Depth-first search over the candidate variables:
//!
//! 1. If every variable is assigned, the assignment is the solution.
//! 2. Forward-check the unassigned domains against the latest commitment.
//! 3. Find the MRV minimum; collect the unassigned variables of that size.
//! 4. For each such variable (id order) and each of its remaining candidates
//!    (list order): commit, descend; on failure, undo and try the next one.
//! 5. When a level runs out of choices, rewind the domain store to the mark
//!    taken before its forward check and fail to the parent.
//!
//! Levels live on an explicit frame stack instead of the call stack, since
//! depth reaches the number of variables.
//!
//! # Complexity
//! Exponential in the number of variables in the worst case. There is one
//! variable per catalog cross-product tuple, so even modest catalogs are
//! large; use [`SolverConfig::time_limit_ms`] or a [`CancelFlag`] to bound a run.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6.3

use std::time::Instant;

use tracing::{debug, info, trace};

use super::config::{CancelFlag, SolverConfig};
use super::domain::{DomainStore, Mark};
use super::propagation::forward_check;
use super::selection::{min_remaining, variables_with_size};
use crate::error::{Result, TimetableError};
use crate::models::{Assignment, Candidate, CandidateSpace, Catalog, VarId};
use crate::validation::validate_catalog;

/// Status of the solver after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// Every variable was assigned.
    Feasible,
    /// The search space is exhausted without a complete assignment.
    Infeasible,
    /// The time limit expired first.
    Timeout,
    /// The cancel flag was set first.
    Cancelled,
}

/// Search counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Commitments made.
    pub nodes: u64,
    /// Levels exhausted and unwound.
    pub backtracks: u64,
    /// Candidates removed by forward checking.
    pub pruned: u64,
    /// Deepest frame stack reached.
    pub max_depth: usize,
}

/// Result of a solver run.
///
/// `assignment` is present exactly when `status` is [`SolverStatus::Feasible`],
/// and then covers every variable.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Solver status.
    pub status: SolverStatus,
    /// The complete assignment, if one was found.
    pub assignment: Option<Assignment>,
    /// Search counters.
    pub stats: SearchStats,
    /// Solve time in milliseconds.
    pub solve_time_ms: i64,
}

impl Solution {
    /// Whether a complete assignment was found.
    pub fn is_solution_found(&self) -> bool {
        self.status == SolverStatus::Feasible
    }

    /// Takes the assignment, if any.
    pub fn into_assignment(self) -> Option<Assignment> {
        self.assignment
    }
}

/// One search level.
struct Frame {
    /// Domain store position before this level's forward check.
    mark: Mark,
    /// (variable, candidate) pairs to try, in order.
    choices: Vec<(VarId, Candidate)>,
    /// Index of the next untried choice.
    next: usize,
    /// Variable committed by the choice currently being explored.
    committed: Option<VarId>,
}

/// Backtracking timetable solver with forward checking and MRV ordering.
///
/// # Example
///
/// ```
/// use u_timetable::csp::{SolverStatus, TimetableSolver};
/// use u_timetable::models::Catalog;
///
/// let catalog = Catalog::new()
///     .with_subject("Compilers")
///     .with_teacher("Melnyk")
///     .with_group("MI", 15)
///     .with_room("Room_0", 50)
///     .with_weekday("Monday")
///     .with_weekday("Tuesday")
///     .with_time_slot("8:40-10:15");
///
/// let solution = TimetableSolver::new().solve(&catalog);
/// assert_eq!(solution.status, SolverStatus::Feasible);
/// assert_eq!(solution.assignment.unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableSolver {
    config: SolverConfig,
}

impl TimetableSolver {
    /// Creates a solver without limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the catalog, then solves it.
    pub fn solve_checked(&self, catalog: &Catalog) -> Result<Solution> {
        validate_catalog(catalog).map_err(TimetableError::InvalidInput)?;
        Ok(self.solve(catalog))
    }

    /// Searches for a complete assignment of the catalog's candidate space.
    ///
    /// The catalog is assumed valid; see [`Self::solve_checked`].
    pub fn solve(&self, catalog: &Catalog) -> Solution {
        let start = Instant::now();
        let space = CandidateSpace::build(catalog);
        let num_variables = space.len();

        info!(event = "solve_start", variables = num_variables);

        let mut store = DomainStore::seeded(&space);
        let mut assignment = Assignment::with_variables(num_variables);
        let mut stats = SearchStats::default();
        let mut stack: Vec<Frame> = Vec::new();

        let status = loop {
            if assignment.len() == num_variables {
                break SolverStatus::Feasible;
            }
            if let Some(status) = self.interrupted(start) {
                break status;
            }

            let mark = store.mark();
            stats.pruned += forward_check(catalog, &mut store, &assignment) as u64;

            let choices: Vec<(VarId, Candidate)> = match min_remaining(&store, &assignment) {
                Some(min) => variables_with_size(&store, &assignment, min)
                    .into_iter()
                    .flat_map(|var| store.domain(var).iter().map(move |&c| (var, c)))
                    .collect(),
                None => Vec::new(),
            };
            if choices.is_empty() {
                debug!(event = "dead_end", depth = assignment.len());
            }

            stack.push(Frame {
                mark,
                choices,
                next: 0,
                committed: None,
            });
            stats.max_depth = stats.max_depth.max(stack.len());

            if !advance(&mut stack, &mut store, &mut assignment, &mut stats) {
                break SolverStatus::Infeasible;
            }
        };

        let solve_time_ms = start.elapsed().as_millis() as i64;
        info!(
            event = "solve_end",
            status = ?status,
            nodes = stats.nodes,
            backtracks = stats.backtracks,
            pruned = stats.pruned,
            max_depth = stats.max_depth,
            duration_ms = solve_time_ms,
        );

        Solution {
            status,
            assignment: (status == SolverStatus::Feasible).then_some(assignment),
            stats,
            solve_time_ms,
        }
    }

    fn interrupted(&self, start: Instant) -> Option<SolverStatus> {
        if self
            .config
            .cancel
            .as_ref()
            .is_some_and(CancelFlag::is_cancelled)
        {
            return Some(SolverStatus::Cancelled);
        }
        match self.config.time_limit_ms {
            Some(limit) if start.elapsed().as_millis() as i64 >= limit => {
                Some(SolverStatus::Timeout)
            }
            _ => None,
        }
    }
}

/// Moves to the next untried choice, unwinding exhausted levels.
///
/// Returns `false` once the root level is exhausted.
fn advance(
    stack: &mut Vec<Frame>,
    store: &mut DomainStore,
    assignment: &mut Assignment,
    stats: &mut SearchStats,
) -> bool {
    while let Some(frame) = stack.last_mut() {
        if let Some(var) = frame.committed.take() {
            assignment.undo(var);
            trace!(event = "undo", var = var);
        }

        if let Some(&(var, candidate)) = frame.choices.get(frame.next) {
            frame.next += 1;
            frame.committed = Some(var);
            assignment.commit(var, candidate);
            stats.nodes += 1;
            trace!(event = "commit", var = var, depth = assignment.len());
            return true;
        }

        store.restore(frame.mark);
        stack.pop();
        stats.backtracks += 1;
    }
    false
}

/// Solves `catalog` with default settings.
///
/// Returns the complete assignment, or `None` when none exists.
pub fn backtracking_search(catalog: &Catalog) -> Option<Assignment> {
    TimetableSolver::new().solve(catalog).into_assignment()
}
