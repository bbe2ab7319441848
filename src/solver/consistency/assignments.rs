use crate::solver::{
    consistency::{Consistency, ConsistencyCheck},
    network::ConstraintNetwork,
    trail::Trail,
};

/// The minimal legality check: no two neighbouring variables may be assigned
/// the same value. Never prunes a domain.
pub struct AssignmentsOnly;

impl ConsistencyCheck for AssignmentsOnly {
    fn name(&self) -> &'static str {
        "assignments-only"
    }

    fn check(&self, network: &mut ConstraintNetwork, _trail: &mut Trail) -> Consistency {
        for id in 0..network.variables().len() {
            let Some(value) = network.variable(id).assignment() else {
                continue;
            };
            for &neighbour in network.neighbours_of(id) {
                if network.variable(neighbour).assignment() == Some(value) {
                    return Consistency::Contradiction;
                }
            }
        }
        Consistency::Consistent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::grid::GridSpec;

    fn network_from(cells: Vec<i32>) -> ConstraintNetwork {
        ConstraintNetwork::from_grid(&GridSpec::new(4, 2, 2, cells).unwrap())
    }

    #[test]
    fn distinct_assignments_are_consistent() {
        let mut network = network_from(vec![
            1, 2, 3, 4, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ]);
        let mut trail = Trail::new();
        assert_eq!(
            AssignmentsOnly.check(&mut network, &mut trail),
            Consistency::Consistent
        );
        assert!(trail.is_empty(), "assignments check must not prune");
    }

    #[test]
    fn duplicate_in_a_row_is_a_contradiction() {
        let mut network = network_from(vec![
            1, 0, 0, 1, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ]);
        let mut trail = Trail::new();
        assert_eq!(
            AssignmentsOnly.check(&mut network, &mut trail),
            Consistency::Contradiction
        );
    }

    #[test]
    fn duplicate_in_a_block_is_a_contradiction() {
        let mut network = network_from(vec![
            2, 0, 0, 0, //
            0, 2, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ]);
        let mut trail = Trail::new();
        assert_eq!(
            AssignmentsOnly.check(&mut network, &mut trail),
            Consistency::Contradiction
        );
    }

    #[test]
    fn open_cells_are_ignored() {
        let mut network = network_from(vec![0; 16]);
        let mut trail = Trail::new();
        assert_eq!(
            AssignmentsOnly.check(&mut network, &mut trail),
            Consistency::Consistent
        );
    }
}
