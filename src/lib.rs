//! Filum is a backtracking search engine for finite-domain all-different
//! puzzles — Sudoku being the canonical example.
//!
//! The core idea is trial-and-undo search over a constraint network with
//! mutable candidate domains. Instead of copying the whole board at every
//! choicepoint, the engine keeps a [`Trail`]: an undo log that records each
//! domain's prior value before it is mutated, so backtracking costs only the
//! changes made since the last checkpoint.
//!
//! # Core Concepts
//!
//! - **[`GridSpec`]**: the puzzle description a collaborator hands the core —
//!   board side, block dimensions, and the initial cell values.
//! - **[`ConstraintNetwork`]**: the variables (cells) with their candidate
//!   domains, the all-different row/column/block constraints over them, and
//!   the adjacency queries strategies rely on.
//! - **[`Trail`]**: the checkpoint/rollback log behind cheap backtracking.
//! - **[`ConsistencyCheck`]**: pluggable propagation run after each tentative
//!   assignment — plain legality checking, forward checking, or naked-pair
//!   elimination.
//! - **[`SearchEngine`]**: the recursive driver, configured once via
//!   [`SolverConfig`] with heuristics, a consistency strategy and a deadline;
//!   cancellable through its [`CancellationToken`].
//!
//! # Example: Filling the Last Cell
//!
//! ```
//! use filum::solver::{
//!     engine::{SearchEngine, SolverConfig},
//!     grid::GridSpec,
//!     network::ConstraintNetwork,
//! };
//!
//! let cells = vec![
//!     1, 2, 3, 4, //
//!     3, 4, 1, 2, //
//!     2, 1, 4, 3, //
//!     4, 3, 2, 0,
//! ];
//! let grid = GridSpec::new(4, 2, 2, cells)?;
//! let network = ConstraintNetwork::from_grid(&grid);
//!
//! let mut engine = SearchEngine::new(network, SolverConfig::default());
//! let outcome = engine.solve();
//!
//! assert_eq!(outcome.status.label(), "success");
//! assert_eq!(outcome.grid[15], 1);
//! # Ok::<(), filum::error::Error>(())
//! ```
//!
//! [`GridSpec`]: solver::grid::GridSpec
//! [`ConstraintNetwork`]: solver::network::ConstraintNetwork
//! [`Trail`]: solver::trail::Trail
//! [`ConsistencyCheck`]: solver::consistency::ConsistencyCheck
//! [`SearchEngine`]: solver::engine::SearchEngine
//! [`SolverConfig`]: solver::engine::SolverConfig
//! [`CancellationToken`]: solver::engine::CancellationToken

pub mod error;
pub mod solver;
