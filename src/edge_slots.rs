//! Per-neighbor edge containers.
//!
//! Every adjacency entry `adj[u][v]` holds one [`EdgeSlots`] value, which maps
//! edge keys to arena indices.  Simple graphs use [`SingleSlot`], which holds
//! at most one edge under key `0`; multigraphs use [`KeyedSlots`].

use std::fmt::Debug;

use indexmap::IndexMap;

use crate::arena::EdgeIndex;

/// Key distinguishing parallel edges between the same pair of nodes.
pub type EdgeKey = usize;

pub trait EdgeSlots: Clone + Debug + Default + Send + Sync {
    /// Returns the number of edges in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no edge.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The key an edge added without an explicit key should receive.  For
    /// simple graphs this is always the key of the (possibly existing) single
    /// edge, so re-adding updates it.
    fn next_key(&self) -> EdgeKey;

    /// Gets the arena index stored under `key`, if any.
    fn get(&self, key: EdgeKey) -> Option<EdgeIndex>;

    /// Stores `edge` under `key`, returning the index previously stored there.
    fn insert(&mut self, key: EdgeKey, edge: EdgeIndex) -> Option<EdgeIndex>;

    /// Removes and returns the index stored under `key`.
    fn remove(&mut self, key: EdgeKey) -> Option<EdgeIndex>;

    /// The earliest surviving edge.
    fn first(&self) -> Option<(EdgeKey, EdgeIndex)>;

    /// The most recently added surviving edge.
    fn last(&self) -> Option<(EdgeKey, EdgeIndex)>;

    /// Iterates over `(key, index)` pairs in insertion order.
    fn iter(&self) -> impl Iterator<Item = (EdgeKey, EdgeIndex)> + '_;
}

/// Holds at most one edge, always under key `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SingleSlot(Option<EdgeIndex>);

const SINGLE_KEY: EdgeKey = 0;

impl EdgeSlots for SingleSlot {
    fn len(&self) -> usize {
        usize::from(self.0.is_some())
    }

    fn next_key(&self) -> EdgeKey {
        SINGLE_KEY
    }

    fn get(&self, key: EdgeKey) -> Option<EdgeIndex> {
        if key == SINGLE_KEY { self.0 } else { None }
    }

    fn insert(&mut self, key: EdgeKey, edge: EdgeIndex) -> Option<EdgeIndex> {
        debug_assert_eq!(key, SINGLE_KEY, "simple graphs only use key 0");
        self.0.replace(edge)
    }

    fn remove(&mut self, key: EdgeKey) -> Option<EdgeIndex> {
        if key == SINGLE_KEY { self.0.take() } else { None }
    }

    fn first(&self) -> Option<(EdgeKey, EdgeIndex)> {
        self.0.map(|edge| (SINGLE_KEY, edge))
    }

    fn last(&self) -> Option<(EdgeKey, EdgeIndex)> {
        self.first()
    }

    fn iter(&self) -> impl Iterator<Item = (EdgeKey, EdgeIndex)> + '_ {
        self.first().into_iter()
    }
}

/// Keyed collection of parallel edges, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyedSlots(IndexMap<EdgeKey, EdgeIndex>);

impl EdgeSlots for KeyedSlots {
    fn len(&self) -> usize {
        self.0.len()
    }

    /// The lowest key not below the current edge count that is not already
    /// taken.  Starting at the count keeps keys stable when edges are only
    /// ever added.
    fn next_key(&self) -> EdgeKey {
        let mut key = self.0.len();
        while self.0.contains_key(&key) {
            key += 1;
        }
        key
    }

    fn get(&self, key: EdgeKey) -> Option<EdgeIndex> {
        self.0.get(&key).copied()
    }

    fn insert(&mut self, key: EdgeKey, edge: EdgeIndex) -> Option<EdgeIndex> {
        self.0.insert(key, edge)
    }

    fn remove(&mut self, key: EdgeKey) -> Option<EdgeIndex> {
        self.0.shift_remove(&key)
    }

    fn first(&self) -> Option<(EdgeKey, EdgeIndex)> {
        self.0.first().map(|(key, edge)| (*key, *edge))
    }

    fn last(&self) -> Option<(EdgeKey, EdgeIndex)> {
        self.0.last().map(|(key, edge)| (*key, *edge))
    }

    fn iter(&self) -> impl Iterator<Item = (EdgeKey, EdgeIndex)> + '_ {
        self.0.iter().map(|(key, edge)| (*key, *edge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::EdgeArena;

    fn indices(n: usize) -> Vec<EdgeIndex> {
        let mut arena = EdgeArena::default();
        (0..n).map(|i| arena.insert(i)).collect()
    }

    // ==================== SingleSlot Tests ====================

    #[test]
    fn test_single_slot_replaces() {
        let idx = indices(2);
        let mut slot = SingleSlot::default();
        assert!(slot.is_empty());
        assert_eq!(slot.insert(slot.next_key(), idx[0]), None);
        assert_eq!(slot.insert(slot.next_key(), idx[1]), Some(idx[0]));
        assert_eq!(slot.len(), 1);
        assert_eq!(slot.get(0), Some(idx[1]));
    }

    #[test]
    fn test_single_slot_ignores_other_keys() {
        let idx = indices(1);
        let mut slot = SingleSlot::default();
        slot.insert(0, idx[0]);
        assert_eq!(slot.get(1), None);
        assert_eq!(slot.remove(1), None);
        assert_eq!(slot.remove(0), Some(idx[0]));
        assert!(slot.is_empty());
    }

    #[test]
    fn test_single_slot_iter() {
        let idx = indices(1);
        let mut slot = SingleSlot::default();
        assert_eq!(slot.iter().count(), 0);
        slot.insert(0, idx[0]);
        assert_eq!(slot.iter().collect::<Vec<_>>(), vec![(0, idx[0])]);
        assert_eq!(slot.first(), slot.last());
    }

    // ==================== KeyedSlots Tests ====================

    #[test]
    fn test_keyed_slots_auto_keys() {
        let idx = indices(3);
        let mut slots = KeyedSlots::default();
        for edge in &idx {
            let key = slots.next_key();
            slots.insert(key, *edge);
        }
        assert_eq!(
            slots.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_keyed_slots_skip_taken_keys() {
        let idx = indices(3);
        let mut slots = KeyedSlots::default();
        slots.insert(1, idx[0]);
        // One edge present, so the candidate is 1, which is taken.
        assert_eq!(slots.next_key(), 2);
        slots.insert(2, idx[1]);
        slots.remove(1);
        // One edge left (key 2); candidate 1 is free again.
        assert_eq!(slots.next_key(), 1);
    }

    #[test]
    fn test_keyed_slots_first_and_last() {
        let idx = indices(3);
        let mut slots = KeyedSlots::default();
        slots.insert(5, idx[0]);
        slots.insert(0, idx[1]);
        slots.insert(9, idx[2]);
        assert_eq!(slots.first(), Some((5, idx[0])));
        assert_eq!(slots.last(), Some((9, idx[2])));
        assert_eq!(slots.remove(9), Some(idx[2]));
        assert_eq!(slots.last(), Some((0, idx[1])));
    }
}
