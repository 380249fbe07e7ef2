//! Sets of node identifiers.
//!
//! The same type carries both the hare population and the player's shot
//! selection. Iteration order is ascending by id.

use crate::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PopulationSet {
    nodes: BTreeSet<NodeId>,
}

impl PopulationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// Add a node. Returns `true` if it was not already present.
    pub fn insert(&mut self, id: NodeId) -> bool {
        self.nodes.insert(id)
    }

    /// Remove a node. Returns `true` if it was present.
    pub fn remove(&mut self, id: NodeId) -> bool {
        self.nodes.remove(&id)
    }

    /// Flip membership of a node. Returns `true` if the node is now a member.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        if self.nodes.remove(&id) {
            false
        } else {
            self.nodes.insert(id);
            true
        }
    }

    /// Add every member of `other` to this set
    pub fn union_with(&mut self, other: &PopulationSet) {
        self.nodes.extend(other.nodes.iter().copied());
    }

    /// Nodes present in both sets
    pub fn intersection(&self, other: &PopulationSet) -> PopulationSet {
        self.nodes.intersection(&other.nodes).copied().collect()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }
}

impl FromIterator<NodeId> for PopulationSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl Extend<NodeId> for PopulationSet {
    fn extend<I: IntoIterator<Item = NodeId>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PopulationSet {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(ids: &[usize]) -> PopulationSet {
        ids.iter().map(|&id| NodeId(id)).collect()
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut hares = PopulationSet::new();
        assert!(hares.insert(NodeId(3)));
        assert!(!hares.insert(NodeId(3)));
        assert_eq!(hares.len(), 1);
    }

    #[test]
    fn test_toggle() {
        let mut selection = PopulationSet::new();
        assert!(selection.toggle(NodeId(4)));
        assert!(selection.contains(NodeId(4)));
        assert!(!selection.toggle(NodeId(4)));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_union_and_intersection() {
        let mut a = set(&[0, 1, 2]);
        let b = set(&[2, 3]);
        assert_eq!(a.intersection(&b), set(&[2]));

        a.union_with(&b);
        assert_eq!(a, set(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut live = set(&[1, 2]);
        let snapshot = live.clone();
        live.insert(NodeId(9));
        live.remove(NodeId(1));
        assert_eq!(snapshot, set(&[1, 2]));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let hares = set(&[8, 0, 4]);
        let ids: Vec<usize> = hares.iter().map(NodeId::index).collect();
        assert_eq!(ids, vec![0, 4, 8]);
    }

    proptest! {
        #[test]
        fn toggle_twice_restores_set(ids in proptest::collection::vec(0usize..64, 0..20), id in 0usize..64) {
            let before: PopulationSet = ids.into_iter().map(NodeId).collect();
            let mut toggled = before.clone();
            toggled.toggle(NodeId(id));
            toggled.toggle(NodeId(id));
            prop_assert_eq!(toggled, before);
        }
    }
}
