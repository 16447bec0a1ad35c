//! Solver configuration and cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag another thread can set to stop a running search.
///
/// The search checks it once per level; a run that finishes before the flag
/// is set is unaffected.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Creates an unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Solver configuration.
///
/// The default has no limits: the search runs until it finds a solution or
/// exhausts the search space.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Maximum solve time in milliseconds. `None` = unlimited.
    pub time_limit_ms: Option<i64>,
    /// External stop signal.
    pub cancel: Option<CancelFlag>,
}

impl SolverConfig {
    /// Creates an unlimited configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time limit.
    pub fn with_time_limit_ms(mut self, time_limit_ms: i64) -> Self {
        self.time_limit_ms = Some(time_limit_ms);
        self
    }

    /// Attaches a cancel flag.
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }
}
