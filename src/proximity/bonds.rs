use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The set of particle pairs currently closer than the bond threshold.
///
/// Pairs are stored as `(i, j)` with `i < j`, and iterate in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondSet {
    pairs: BTreeSet<(usize, usize)>,
}

/// The difference between two successive bond sets. A renderer adds a segment for every
/// `formed` pair and removes one for every `broken` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BondChanges {
    pub formed: Vec<(usize, usize)>,
    pub broken: Vec<(usize, usize)>,
}

impl BondSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the unordered pair `{a, b}`. Returns false if it was already present.
    ///
    /// A particle can't bond with itself.
    pub fn insert(&mut self, a: usize, b: usize) -> bool {
        debug_assert_ne!(a, b, "particle {} bonded with itself", a);
        self.pairs.insert(ordered(a, b))
    }

    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.pairs.contains(&ordered(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<(usize, usize)> {
        self.iter().collect()
    }

    /// What changed going from `previous` to `self`.
    pub fn changes_since(&self, previous: &BondSet) -> BondChanges {
        BondChanges {
            formed: self.pairs.difference(&previous.pairs).copied().collect(),
            broken: previous.pairs.difference(&self.pairs).copied().collect(),
        }
    }
}

impl std::iter::FromIterator<(usize, usize)> for BondSet {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut bonds = BondSet::new();
        for (a, b) in iter {
            bonds.insert(a, b);
        }
        bonds
    }
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_are_unordered() {
        let mut bonds = BondSet::new();
        assert!(bonds.insert(5, 2));
        assert!(!bonds.insert(2, 5));
        assert!(bonds.contains(2, 5) && bonds.contains(5, 2));
        assert_eq!(bonds.to_vec(), vec![(2, 5)]);
    }

    #[test]
    fn test_iterates_in_ascending_order() {
        let bonds: BondSet = vec![(3, 4), (0, 9), (1, 2), (0, 1)].into_iter().collect();
        assert_eq!(bonds.to_vec(), vec![(0, 1), (0, 9), (1, 2), (3, 4)]);
    }

    #[test]
    fn test_changes_since() {
        let before: BondSet = vec![(0, 1), (1, 2)].into_iter().collect();
        let after: BondSet = vec![(1, 2), (2, 3)].into_iter().collect();

        let changes = after.changes_since(&before);
        assert_eq!(changes.formed, vec![(2, 3)]);
        assert_eq!(changes.broken, vec![(0, 1)]);

        assert_eq!(after.changes_since(&after), BondChanges::default());
    }
}
