use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::{
    error::{Error, Result},
    solver::{
        consistency::{ConsistencyCheck, ConsistencyPolicy},
        heuristics::{ValueOrdering, ValuePolicy, VariablePolicy, VariableSelection},
        network::ConstraintNetwork,
        trail::Trail,
    },
};

/// Cooperative cancellation handle for a running search.
///
/// Cancellation is checked at the top of each recursive call — a well-defined
/// suspension point — never preemptively; an in-progress consistency check or
/// domain mutation always finishes first. Clone the token, hand the clone to
/// the thread enforcing the deadline, and call [`CancellationToken::cancel`].
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// How a solve run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStatus {
    /// A complete, constraint-satisfying assignment was found.
    Success,
    /// The whole space was searched without a solution: provably
    /// unsatisfiable under the configured strategies.
    Exhausted,
    /// The configured deadline passed before the search finished.
    TimedOut,
    /// The cancellation token fired before the search finished.
    Cancelled,
    /// A heuristic broke its contract; the result is meaningless.
    InternalError,
}

impl SearchStatus {
    /// The three-way label the textual report uses.
    pub fn label(self) -> &'static str {
        match self {
            SearchStatus::Success => "success",
            SearchStatus::TimedOut | SearchStatus::Cancelled => "timeout",
            SearchStatus::Exhausted | SearchStatus::InternalError => "error",
        }
    }

    pub fn is_success(self) -> bool {
        self == SearchStatus::Success
    }
}

/// Counters and phase timestamps for one solve run. Accurate whatever the
/// outcome — a timed-out run still reports every assignment it tried.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Tentative assignments made (one per value tried).
    pub assignments: u64,
    /// Rollbacks taken after a failed candidate.
    pub backtracks: u64,
    /// Search start, milliseconds since the run origin.
    pub search_start_ms: u64,
    /// Search end, milliseconds since the run origin.
    pub search_done_ms: u64,
    /// Wall-clock time spent searching, in milliseconds.
    pub solution_time_ms: u64,
}

/// Everything a caller gets back from one solve run: the status, the board
/// (solved cells on success, otherwise the givens with zeros), and the run
/// statistics.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    pub grid: Vec<i32>,
    pub stats: SearchStats,
}

/// The knobs fixed before a run starts. Strategies never change mid-search.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SolverConfig {
    pub variable_policy: VariablePolicy,
    pub value_policy: ValuePolicy,
    pub consistency_policy: ConsistencyPolicy,
    /// Wall-clock deadline for the whole search.
    pub timeout: Duration,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            variable_policy: VariablePolicy::default(),
            value_policy: ValuePolicy::default(),
            consistency_policy: ConsistencyPolicy::default(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Outcome of one recursive step, threaded back up the call stack.
enum Walk {
    /// A solution was found at this depth or below.
    Solved,
    /// Every candidate failed; the caller should try its next value.
    DeadEnd,
    /// Timeout or cancellation; unwind without trying further values.
    Halted,
}

/// The recursive backtracking driver.
///
/// Each step selects a variable via the configured heuristic, tries its
/// values in the configured order, and for each value: places a breadcrumb,
/// assigns through the trail, runs the consistency strategy, and recurses.
/// Failed candidates are rolled back breadcrumb-by-breadcrumb, so
/// backtracking costs only the changes made since the choicepoint.
pub struct SearchEngine {
    network: ConstraintNetwork,
    trail: Trail,
    variable_selection: Box<dyn VariableSelection + Send>,
    value_ordering: Box<dyn ValueOrdering + Send>,
    consistency: Box<dyn ConsistencyCheck + Send>,
    timeout: Duration,
    token: CancellationToken,
    origin: Option<Instant>,
    started: Instant,
    halt: Option<SearchStatus>,
    solution: Option<Vec<i32>>,
    stats: SearchStats,
}

impl SearchEngine {
    pub fn new(network: ConstraintNetwork, config: SolverConfig) -> Self {
        Self {
            network,
            trail: Trail::new(),
            variable_selection: config.variable_policy.build(),
            value_ordering: config.value_policy.build(),
            consistency: config.consistency_policy.build(),
            timeout: config.timeout,
            token: CancellationToken::new(),
            origin: None,
            started: Instant::now(),
            halt: None,
            solution: None,
            stats: SearchStats::default(),
        }
    }

    /// A clonable handle for cancelling this engine's run from another
    /// thread.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Anchors the reported phase timestamps to an external start time (for
    /// callers that did setup work before constructing the engine). Defaults
    /// to the moment `solve` is called.
    pub fn set_origin(&mut self, origin: Instant) {
        self.origin = Some(origin);
    }

    pub fn network(&self) -> &ConstraintNetwork {
        &self.network
    }

    /// Runs the search to completion, timeout, or cancellation.
    ///
    /// The trail is cleared before and after the run, so an engine can be
    /// reused for sequential runs without state leaking between them.
    pub fn solve(&mut self) -> SearchOutcome {
        self.trail.clear();
        self.halt = None;
        self.solution = None;
        self.stats = SearchStats::default();
        self.started = Instant::now();
        let origin = self.origin.unwrap_or(self.started);
        self.stats.search_start_ms = self.started.duration_since(origin).as_millis() as u64;
        debug!(
            strategy = self.consistency.name(),
            unassigned = self.network.unassigned_count(),
            "search starting"
        );

        let walked = self.step(0);

        let elapsed = self.started.elapsed();
        self.stats.solution_time_ms = elapsed.as_millis() as u64;
        self.stats.search_done_ms = self.stats.search_start_ms + self.stats.solution_time_ms;

        let status = match walked {
            Ok(Walk::Solved) => SearchStatus::Success,
            Ok(Walk::DeadEnd) => SearchStatus::Exhausted,
            Ok(Walk::Halted) => self.halt.take().unwrap_or(SearchStatus::TimedOut),
            Err(err) => {
                warn!(%err, "search aborted");
                SearchStatus::InternalError
            }
        };

        // Anything still on the trail (abnormal termination paths) is rolled
        // back so the network is back to its pre-run domains.
        while self.trail.depth() > 0 {
            self.network.rollback(&mut self.trail);
        }
        self.trail.clear();

        let grid = match &self.solution {
            Some(solved) => solved.clone(),
            None => self.network.snapshot(),
        };
        debug!(
            status = status.label(),
            assignments = self.stats.assignments,
            backtracks = self.stats.backtracks,
            elapsed_ms = self.stats.solution_time_ms,
            "search finished"
        );
        SearchOutcome {
            status,
            grid,
            stats: self.stats.clone(),
        }
    }

    fn step(&mut self, depth: usize) -> Result<Walk> {
        if self.started.elapsed() > self.timeout {
            self.halt = Some(SearchStatus::TimedOut);
            return Ok(Walk::Halted);
        }
        if self.token.is_cancelled() {
            self.halt = Some(SearchStatus::Cancelled);
            return Ok(Walk::Halted);
        }
        if self.solution.is_some() {
            return Ok(Walk::Solved);
        }

        let Some(variable) = self.variable_selection.select(&self.network) else {
            let unassigned = self.network.unassigned_count();
            if unassigned > 0 {
                return Err(Error::HeuristicContract { unassigned });
            }
            trace!(depth, "complete assignment found");
            self.solution = Some(self.network.snapshot());
            return Ok(Walk::Solved);
        };

        for value in self.value_ordering.order(&self.network, variable) {
            self.trail.place_breadcrumb();
            self.network.assign(&mut self.trail, variable, value);
            self.stats.assignments += 1;
            trace!(depth, variable = %self.network.variable(variable), value, "trying");

            let mut walk = Walk::DeadEnd;
            if self
                .consistency
                .check(&mut self.network, &mut self.trail)
                .is_consistent()
            {
                walk = self.step(depth + 1)?;
            }

            match walk {
                // Keep the winning assignment in place.
                Walk::Solved => return Ok(Walk::Solved),
                Walk::Halted => {
                    // Roll back without counting a backtrack: the run is
                    // being abandoned, not redirected, and the caller gets
                    // the board back unchanged.
                    self.network.rollback(&mut self.trail);
                    return Ok(Walk::Halted);
                }
                Walk::DeadEnd => {
                    self.network.rollback(&mut self.trail);
                    self.stats.backtracks += 1;
                }
            }
        }
        Ok(Walk::DeadEnd)
    }
}
