use std::iter::Rev;
use std::vec::Drain;

use crate::solver::{domain::Domain, network::VariableId};

/// One undo-log entry: the domain `variable` held immediately before a
/// recorded mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainRecord {
    pub variable: VariableId,
    pub domain: Domain,
}

/// The checkpoint/undo log that makes backtracking cheap.
///
/// Every domain mutation performed through the network pushes the prior
/// domain here *before* the new one is applied. Breadcrumbs delimit
/// choicepoints: [`Trail::undo`] drains every record made since the most
/// recent breadcrumb, in reverse push order, and removes the breadcrumb.
/// Reverse order matters — when a variable was touched more than once inside
/// a choicepoint, the earliest snapshot is the one reapplied last.
///
/// A trail is owned by one engine and scoped to one solve run; it is cleared
/// when a run starts and again when it ends, so no state leaks between
/// sequential runs. The live breadcrumb count always equals the depth of
/// uncommitted choices.
#[derive(Debug, Default)]
pub struct Trail {
    records: Vec<DomainRecord>,
    breadcrumbs: Vec<usize>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a choicepoint boundary. Everything recorded after this call is
    /// rolled back together by the matching [`Trail::undo`].
    pub fn place_breadcrumb(&mut self) {
        self.breadcrumbs.push(self.records.len());
    }

    /// Records the domain `variable` held before a mutation. Must be called
    /// before the new domain is applied.
    pub fn record(&mut self, variable: VariableId, prior: Domain) {
        self.records.push(DomainRecord {
            variable,
            domain: prior,
        });
    }

    /// Pops the most recent breadcrumb and drains, newest first, every record
    /// made since it. The caller reapplies each drained record; the network's
    /// `rollback` does exactly that.
    pub fn undo(&mut self) -> Rev<Drain<'_, DomainRecord>> {
        debug_assert!(
            !self.breadcrumbs.is_empty(),
            "undo called with no live breadcrumb"
        );
        let mark = self.breadcrumbs.pop().unwrap_or(0);
        self.records.drain(mark..).rev()
    }

    /// Empties the whole log. Called when a solve run starts and when it
    /// ends, whatever the outcome.
    pub fn clear(&mut self) {
        self.records.clear();
        self.breadcrumbs.clear();
    }

    /// Number of live breadcrumbs, i.e. the depth of uncommitted choices.
    pub fn depth(&self) -> usize {
        self.breadcrumbs.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.breadcrumbs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(variable: VariableId, values: impl IntoIterator<Item = i32>) -> DomainRecord {
        DomainRecord {
            variable,
            domain: Domain::from_values(values),
        }
    }

    #[test]
    fn undo_drains_back_to_the_latest_breadcrumb() {
        let mut trail = Trail::new();
        trail.place_breadcrumb();
        trail.record(0, Domain::full(4));
        trail.place_breadcrumb();
        trail.record(1, Domain::singleton(2));
        trail.record(2, Domain::from_values([1, 3]));

        let undone: Vec<_> = trail.undo().collect();
        assert_eq!(undone, vec![record(2, [1, 3]), record(1, [2])]);
        assert_eq!(trail.depth(), 1);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn records_come_back_newest_first() {
        let mut trail = Trail::new();
        trail.place_breadcrumb();
        for variable in 0..3 {
            trail.record(variable, Domain::singleton(variable as i32 + 1));
        }

        let order: Vec<_> = trail.undo().map(|r| r.variable).collect();
        assert_eq!(order, vec![2, 1, 0]);
        assert!(trail.is_empty());
    }

    #[test]
    fn breadcrumb_count_tracks_choicepoint_depth() {
        let mut trail = Trail::new();
        assert_eq!(trail.depth(), 0);
        trail.place_breadcrumb();
        trail.place_breadcrumb();
        assert_eq!(trail.depth(), 2);
        let _ = trail.undo();
        assert_eq!(trail.depth(), 1);
    }

    #[test]
    fn clear_empties_records_and_breadcrumbs() {
        let mut trail = Trail::new();
        trail.place_breadcrumb();
        trail.record(0, Domain::full(9));
        trail.clear();
        assert!(trail.is_empty());
        assert_eq!(trail.depth(), 0);
    }
}
