use im::OrdSet;

/// The ordered set of values still considered legal for one variable.
///
/// Domains are backed by a persistent ordered set, so the pre-mutation
/// snapshots kept by the [`Trail`](crate::solver::trail::Trail) are cheap:
/// a cloned domain shares structure with the live one. Equality is value
/// equality, which is what makes undo exactness directly testable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain(OrdSet<i32>);

impl Domain {
    /// The full candidate range `1..=side` for an untouched cell.
    pub fn full(side: i32) -> Self {
        Self((1..=side).collect())
    }

    /// A domain fixed to a single value, used for givens and for tentative
    /// assignments during search.
    pub fn singleton(value: i32) -> Self {
        Self(OrdSet::unit(value))
    }

    pub fn from_values(values: impl IntoIterator<Item = i32>) -> Self {
        Self(values.into_iter().collect())
    }

    pub fn contains(&self, value: i32) -> bool {
        self.0.contains(&value)
    }

    /// Removes `value` from the domain. A no-op when the value is absent;
    /// returns whether it was present.
    pub fn remove(&mut self, value: i32) -> bool {
        self.0.remove(&value).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// An empty domain signals a dead end for the variable that owns it.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.0.len() == 1
    }

    /// The single fixed value, if the domain is a singleton.
    pub fn value(&self) -> Option<i32> {
        if self.is_singleton() {
            self.0.get_min().copied()
        } else {
            None
        }
    }

    /// Iterates candidates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn full_domain_covers_the_value_range() {
        let domain = Domain::full(4);
        assert_eq!(domain.len(), 4);
        assert_eq!(domain.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!(!domain.is_singleton());
        assert_eq!(domain.value(), None);
    }

    #[test]
    fn remove_is_a_noop_for_absent_values() {
        let mut domain = Domain::from_values([1, 3]);
        assert!(!domain.remove(2));
        assert_eq!(domain.len(), 2);
        assert!(domain.remove(3));
        assert_eq!(domain.iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn singleton_reports_its_value() {
        let domain = Domain::singleton(7);
        assert!(domain.is_singleton());
        assert_eq!(domain.value(), Some(7));
    }

    #[test]
    fn emptied_domain_signals_dead_end() {
        let mut domain = Domain::singleton(2);
        assert!(domain.remove(2));
        assert!(domain.is_empty());
        assert_eq!(domain.value(), None);
    }

    #[test]
    fn snapshots_are_unaffected_by_later_mutation() {
        let mut domain = Domain::full(4);
        let snapshot = domain.clone();
        domain.remove(2);
        domain.remove(4);
        assert_eq!(snapshot, Domain::full(4));
        assert_eq!(domain.iter().collect::<Vec<_>>(), vec![1, 3]);
    }
}
