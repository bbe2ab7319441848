use tracing::debug;

use crate::solver::{
    consistency::{Consistency, ConsistencyCheck},
    network::ConstraintNetwork,
    trail::Trail,
};

/// Placeholder for maintaining arc consistency.
///
/// The propagation itself was never written; the strategy reports a
/// contradiction for every network state, so any search configured with it
/// fails at the root. This is a documented gap carried over deliberately —
/// completing it is a spec change, not a bug fix.
pub struct ArcConsistency;

impl ConsistencyCheck for ArcConsistency {
    fn name(&self) -> &'static str {
        "arc-consistency (unimplemented)"
    }

    fn check(&self, _network: &mut ConstraintNetwork, _trail: &mut Trail) -> Consistency {
        debug!("arc consistency is unimplemented; reporting contradiction");
        Consistency::Contradiction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::grid::GridSpec;

    // The placeholder fails every state, including fully consistent ones.
    // Selecting this strategy makes every search dead-end immediately.
    #[test]
    fn always_reports_contradiction() {
        let mut trail = Trail::new();

        let mut empty = ConstraintNetwork::from_grid(&GridSpec::empty(4, 2, 2).unwrap());
        assert_eq!(
            ArcConsistency.check(&mut empty, &mut trail),
            Consistency::Contradiction
        );

        let solved = GridSpec::new(
            4,
            2,
            2,
            vec![
                1, 2, 3, 4, //
                3, 4, 1, 2, //
                2, 1, 4, 3, //
                4, 3, 2, 1,
            ],
        )
        .unwrap();
        let mut solved = ConstraintNetwork::from_grid(&solved);
        assert_eq!(
            ArcConsistency.check(&mut solved, &mut trail),
            Consistency::Contradiction
        );
        assert!(trail.is_empty(), "the placeholder never prunes");
    }
}
