//! Heuristics for ordering the candidate values of a chosen variable.

use serde::{Deserialize, Serialize};

use crate::solver::network::{ConstraintNetwork, VariableId};

/// Produces the order in which a variable's remaining candidates are tried.
pub trait ValueOrdering {
    fn order(&self, network: &ConstraintNetwork, variable: VariableId) -> Vec<i32>;
}

/// Natural ascending order — the domain's own iteration order.
pub struct InOrder;

impl ValueOrdering for InOrder {
    fn order(&self, network: &ConstraintNetwork, variable: VariableId) -> Vec<i32> {
        network.variable(variable).domain().iter().collect()
    }
}

/// Least-constraining value: candidates are ranked by how many unassigned
/// neighbours still hold the value in their domain — a proxy for how much an
/// assignment would squeeze the rest of the board — and tried least
/// constraining first. The sort is stable, so ties keep ascending value
/// order.
pub struct LeastConstraining;

impl ValueOrdering for LeastConstraining {
    fn order(&self, network: &ConstraintNetwork, variable: VariableId) -> Vec<i32> {
        let mut ranked: Vec<(i32, usize)> = network
            .variable(variable)
            .domain()
            .iter()
            .map(|value| {
                let pressure = network
                    .neighbours_of(variable)
                    .iter()
                    .filter(|&&n| {
                        let neighbour = network.variable(n);
                        !neighbour.is_assigned() && neighbour.domain().contains(value)
                    })
                    .count();
                (value, pressure)
            })
            .collect();
        ranked.sort_by_key(|&(_, pressure)| pressure);
        ranked.into_iter().map(|(value, _)| value).collect()
    }
}

/// Which value-ordering heuristic a run uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValuePolicy {
    /// Ascending numeric order; no heuristic.
    #[default]
    InOrder,
    LeastConstraining,
}

impl ValuePolicy {
    pub fn build(self) -> Box<dyn ValueOrdering + Send> {
        match self {
            ValuePolicy::InOrder => Box::new(InOrder),
            ValuePolicy::LeastConstraining => Box::new(LeastConstraining),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{domain::Domain, grid::GridSpec, trail::Trail};

    fn empty_network() -> ConstraintNetwork {
        ConstraintNetwork::from_grid(&GridSpec::empty(4, 2, 2).unwrap())
    }

    #[test]
    fn in_order_is_ascending() {
        let network = empty_network();
        assert_eq!(InOrder.order(&network, 0), vec![1, 2, 3, 4]);
    }

    #[test]
    fn least_constraining_ranks_by_neighbour_pressure() {
        let mut network = empty_network();
        let mut trail = Trail::new();
        trail.place_breadcrumb();
        // Strip 3 from every open neighbour of r0c0, and 2 from most of them:
        // 3 becomes free, 2 cheap, 1 and 4 expensive.
        let neighbours: Vec<_> = network.neighbours_of(0).to_vec();
        for &n in &neighbours {
            network.prune(&mut trail, n, 3);
        }
        for &n in &neighbours[..5] {
            network.prune(&mut trail, n, 2);
        }

        assert_eq!(
            LeastConstraining.order(&network, 0),
            vec![3, 2, 1, 4],
            "free value first, ties in ascending order"
        );
    }

    #[test]
    fn assigned_neighbours_exert_no_pressure() {
        let mut network = empty_network();
        let mut trail = Trail::new();
        trail.place_breadcrumb();
        // An assigned neighbour still "contains" its own value, but must not
        // count against it: with r0c1 fixed to 4 and the open neighbours
        // stripped of 4, the 4 is entirely free. One open neighbour keeps a
        // 1, so counting the assigned cell would wrongly tie 4 with 1 and
        // put the 1 first.
        network.set_domain(&mut trail, 1, Domain::singleton(4));
        let open: Vec<_> = network
            .neighbours_of(0)
            .iter()
            .copied()
            .filter(|&n| n != 1)
            .collect();
        for &n in &open {
            network.prune(&mut trail, n, 4);
        }
        for &n in &open[1..] {
            network.prune(&mut trail, n, 1);
        }

        assert_eq!(LeastConstraining.order(&network, 0), vec![4, 1, 2, 3]);
    }

    #[test]
    fn ordering_is_deterministic() {
        let network = empty_network();
        for policy in [ValuePolicy::InOrder, ValuePolicy::LeastConstraining] {
            let heuristic = policy.build();
            let first = heuristic.order(&network, 7);
            for _ in 0..5 {
                assert_eq!(heuristic.order(&network, 7), first, "{:?}", policy);
            }
        }
    }
}
