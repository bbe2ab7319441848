use tracing::trace;

use crate::solver::{
    consistency::{Consistency, ConsistencyCheck},
    network::ConstraintNetwork,
    trail::Trail,
};

/// Forward checking: every assigned variable's value is pruned from the
/// domains of its neighbours. A neighbour left with an empty domain is a
/// contradiction. All pruning is trail-recorded, so a backtrack undoes it.
pub struct ForwardChecking;

impl ConsistencyCheck for ForwardChecking {
    fn name(&self) -> &'static str {
        "forward-checking"
    }

    fn check(&self, network: &mut ConstraintNetwork, trail: &mut Trail) -> Consistency {
        propagate_assignments(network, trail)
    }
}

/// One pass of assigned-value pruning over the whole network. Shared with
/// the naked-pair strategy, which runs it before looking for pairs.
pub(crate) fn propagate_assignments(
    network: &mut ConstraintNetwork,
    trail: &mut Trail,
) -> Consistency {
    for id in 0..network.variables().len() {
        let Some(value) = network.variable(id).assignment() else {
            continue;
        };
        let neighbours = network.neighbours_of(id).to_vec();
        for neighbour in neighbours {
            network.prune(trail, neighbour, value);
            if network.variable(neighbour).domain().is_empty() {
                trace!(
                    variable = %network.variable(neighbour),
                    value,
                    "domain wiped out by forward checking"
                );
                return Consistency::Contradiction;
            }
        }
    }
    Consistency::Consistent
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::grid::GridSpec;

    fn network_from(cells: Vec<i32>) -> ConstraintNetwork {
        ConstraintNetwork::from_grid(&GridSpec::new(4, 2, 2, cells).unwrap())
    }

    #[test]
    fn prunes_assigned_values_from_neighbours() {
        let mut network = network_from(vec![
            1, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ]);
        let mut trail = Trail::new();
        trail.place_breadcrumb();
        assert_eq!(
            ForwardChecking.check(&mut network, &mut trail),
            Consistency::Consistent
        );
        // Row, column and block neighbours of r0c0 all lose the 1.
        for &neighbour in [1usize, 2, 3, 4, 8, 12, 5].iter() {
            assert!(!network.variable(neighbour).domain().contains(1));
            assert_eq!(network.variable(neighbour).domain().len(), 3);
        }
        // A cell sharing nothing with r0c0 keeps its full domain.
        assert_eq!(network.variable(6).domain().len(), 4);
    }

    #[test]
    fn conflicting_assignments_wipe_a_domain() {
        let mut network = network_from(vec![
            3, 0, 0, 3, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ]);
        let mut trail = Trail::new();
        trail.place_breadcrumb();
        assert_eq!(
            ForwardChecking.check(&mut network, &mut trail),
            Consistency::Contradiction
        );
    }

    #[test]
    fn pruning_is_undone_by_rollback() {
        let mut network = network_from(vec![
            2, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ]);
        let mut trail = Trail::new();
        trail.place_breadcrumb();
        assert_eq!(
            ForwardChecking.check(&mut network, &mut trail),
            Consistency::Consistent
        );
        assert_eq!(network.variable(1).domain().len(), 3);

        network.rollback(&mut trail);
        for v in 1..16 {
            assert_eq!(network.variable(v).domain().len(), 4);
        }
    }
}
