use std::collections::HashSet;

use tracing::trace;

use crate::solver::{
    consistency::{forward_checking::propagate_assignments, Consistency, ConsistencyCheck},
    network::{ConstraintNetwork, VariableId},
    trail::Trail,
};

/// Naked-pair elimination layered on top of forward checking.
///
/// After the forward-checking pass, any two unassigned variables that share a
/// constraint and hold the same 2-value domain must take exactly those two
/// values between them, so both values can be pruned from every other member
/// of every constraint containing both. A consumed-set ensures each variable
/// joins at most one pair per call and each pair is processed once.
pub struct NakedPair;

impl ConsistencyCheck for NakedPair {
    fn name(&self) -> &'static str {
        "naked-pair"
    }

    fn check(&self, network: &mut ConstraintNetwork, trail: &mut Trail) -> Consistency {
        if propagate_assignments(network, trail) == Consistency::Contradiction {
            return Consistency::Contradiction;
        }

        let mut consumed: HashSet<VariableId> = HashSet::new();
        for id in 0..network.variables().len() {
            if consumed.contains(&id) || network.variable(id).domain().len() != 2 {
                continue;
            }
            let pair_domain = network.variable(id).domain().clone();
            let partner = network.neighbours_of(id).iter().copied().find(|&other| {
                !consumed.contains(&other) && *network.variable(other).domain() == pair_domain
            });
            let Some(partner) = partner else {
                continue;
            };
            consumed.insert(id);
            consumed.insert(partner);
            let values: Vec<i32> = pair_domain.iter().collect();
            trace!(
                a = %network.variable(id),
                b = %network.variable(partner),
                ?values,
                "naked pair found"
            );

            let shared: Vec<_> = network
                .constraints_containing(id)
                .iter()
                .copied()
                .filter(|&c| network.constraint(c).contains(partner))
                .collect();
            for constraint_id in shared {
                let members = network.constraint(constraint_id).variables().to_vec();
                for member in members {
                    if member == id || member == partner {
                        continue;
                    }
                    for &value in &values {
                        network.prune(trail, member, value);
                    }
                    if network.variable(member).domain().is_empty() {
                        return Consistency::Contradiction;
                    }
                }
            }
        }
        Consistency::Consistent
    }
}
