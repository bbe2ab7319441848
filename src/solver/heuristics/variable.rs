//! Heuristics for choosing which variable the search branches on next.

use serde::{Deserialize, Serialize};

use crate::solver::network::{ConstraintNetwork, VariableId};

/// A variable-selection heuristic.
///
/// Implementations consider only unassigned variables. `None` means every
/// variable is assigned — a candidate solution. A heuristic that returns
/// `None` while unassigned variables remain has broken its contract; the
/// engine surfaces that as an internal error rather than a success.
pub trait VariableSelection {
    fn select(&self, network: &ConstraintNetwork) -> Option<VariableId>;
}

/// Picks the first unassigned variable in the network's fixed iteration
/// order. The deterministic baseline.
pub struct FirstUnassigned;

impl VariableSelection for FirstUnassigned {
    fn select(&self, network: &ConstraintNetwork) -> Option<VariableId> {
        network
            .variables()
            .iter()
            .find(|v| !v.is_assigned())
            .map(|v| v.id())
    }
}

/// Minimum remaining values: the unassigned variable with the smallest
/// domain. A fail-first strategy — the tightest cell is the one most likely
/// to expose a dead end early. Ties go to the first variable encountered in
/// iteration order (only a strictly smaller domain displaces the running
/// minimum).
pub struct MinimumRemainingValues;

impl VariableSelection for MinimumRemainingValues {
    fn select(&self, network: &ConstraintNetwork) -> Option<VariableId> {
        let mut best: Option<(VariableId, usize)> = None;
        for v in network.variables().iter().filter(|v| !v.is_assigned()) {
            let size = v.domain().len();
            match best {
                Some((_, smallest)) if size >= smallest => {}
                _ => best = Some((v.id(), size)),
            }
        }
        best.map(|(id, _)| id)
    }
}

/// How many unassigned neighbours a variable has — the constraint pressure
/// it would exert by being assigned next.
pub(crate) fn unassigned_degree(network: &ConstraintNetwork, id: VariableId) -> usize {
    network
        .neighbours_of(id)
        .iter()
        .filter(|&&n| !network.variable(n).is_assigned())
        .count()
}

/// Degree heuristic: the unassigned variable with the most unassigned
/// neighbours. The first candidate seeds the running best; after that only a
/// strictly greater degree displaces it.
pub struct HighestDegree;

impl VariableSelection for HighestDegree {
    fn select(&self, network: &ConstraintNetwork) -> Option<VariableId> {
        select_by_degree(
            network,
            network
                .variables()
                .iter()
                .filter(|v| !v.is_assigned())
                .map(|v| v.id()),
        )
    }
}

fn select_by_degree(
    network: &ConstraintNetwork,
    candidates: impl Iterator<Item = VariableId>,
) -> Option<VariableId> {
    let mut best: Option<(VariableId, usize)> = None;
    for id in candidates {
        let degree = unassigned_degree(network, id);
        match best {
            Some((_, highest)) if degree <= highest => {}
            _ => best = Some((id, degree)),
        }
    }
    best.map(|(id, _)| id)
}

/// Combined heuristic: narrow to the variables tied for the smallest domain,
/// then pick the one with the highest unassigned-neighbour count, with the
/// same first-wins tie rule scoped to the narrowed set.
pub struct MrvWithDegree;

impl VariableSelection for MrvWithDegree {
    fn select(&self, network: &ConstraintNetwork) -> Option<VariableId> {
        let mut smallest = usize::MAX;
        let mut tied: Vec<VariableId> = Vec::new();
        for v in network.variables().iter().filter(|v| !v.is_assigned()) {
            let size = v.domain().len();
            if size < smallest {
                smallest = size;
                tied.clear();
                tied.push(v.id());
            } else if size == smallest {
                tied.push(v.id());
            }
        }
        select_by_degree(network, tied.into_iter())
    }
}

/// Which variable-selection heuristic a run uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariablePolicy {
    /// Network iteration order; no heuristic.
    #[default]
    InOrder,
    MinimumRemainingValues,
    HighestDegree,
    /// Minimum remaining values, degree as the tie-breaker.
    MrvWithDegree,
}

impl VariablePolicy {
    pub fn build(self) -> Box<dyn VariableSelection + Send> {
        match self {
            VariablePolicy::InOrder => Box::new(FirstUnassigned),
            VariablePolicy::MinimumRemainingValues => Box::new(MinimumRemainingValues),
            VariablePolicy::HighestDegree => Box::new(HighestDegree),
            VariablePolicy::MrvWithDegree => Box::new(MrvWithDegree),
        }
    }
}
