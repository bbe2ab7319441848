//! Consistency-propagation strategies.
//!
//! Every strategy looks at the network after a tentative assignment and
//! reports whether the state is still consistent, pruning domains along the
//! way where it can. All of them share one policy: they only examine and
//! prune the neighbours of variables that are currently assigned — they
//! propagate outward from fixed cells and never re-derive the domains of
//! already-consistent open cells.
//!
//! Pruning always goes through the network's trail-recording mutators, so a
//! later backtrack restores every touched domain.

pub mod arc_consistency;
pub mod assignments;
pub mod forward_checking;
pub mod naked_pair;

use serde::{Deserialize, Serialize};

use crate::solver::{network::ConstraintNetwork, trail::Trail};

pub use arc_consistency::ArcConsistency;
pub use assignments::AssignmentsOnly;
pub use forward_checking::ForwardChecking;
pub use naked_pair::NakedPair;

/// The verdict of one consistency check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consistency {
    Consistent,
    Contradiction,
}

impl Consistency {
    pub fn is_consistent(self) -> bool {
        matches!(self, Consistency::Consistent)
    }
}

/// A propagation/pruning rule applied after each tentative assignment.
pub trait ConsistencyCheck {
    fn name(&self) -> &'static str;

    /// Examines the network, pruning through `trail` where the strategy
    /// prunes at all, and reports whether any legal completion can remain.
    fn check(&self, network: &mut ConstraintNetwork, trail: &mut Trail) -> Consistency;
}

/// Which strategy a run uses. Fixed before the run starts; never switched
/// mid-search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsistencyPolicy {
    /// Plain legality check over assigned variables, no pruning.
    #[default]
    AssignmentsOnly,
    ForwardChecking,
    NakedPair,
    /// Unimplemented placeholder; every check reports a contradiction.
    ArcConsistency,
}

impl ConsistencyPolicy {
    pub fn build(self) -> Box<dyn ConsistencyCheck + Send> {
        match self {
            ConsistencyPolicy::AssignmentsOnly => Box::new(AssignmentsOnly),
            ConsistencyPolicy::ForwardChecking => Box::new(ForwardChecking),
            ConsistencyPolicy::NakedPair => Box::new(NakedPair),
            ConsistencyPolicy::ArcConsistency => Box::new(ArcConsistency),
        }
    }
}
