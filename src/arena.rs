//! Owning storage for edge attribute maps.

use derivative::Derivative;

/// Stable handle to an entry of an [`EdgeArena`].  A slot freed by a removal
/// is handed out again under a new generation, so a stale handle reads as
/// absent rather than aliasing a newer edge.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct EdgeIndex {
    slot: usize,
    generation: u32,
}

#[derive(Clone, Copy, Debug, Default)]
struct Slot {
    generation: u32,
    /// Position in `data`, `None` while the slot is free.
    position: Option<usize>,
}

/// Vector-backed storage with stable keys and O(1) removal.
///
/// Values live densely in `data` in arbitrary order, each next to the slot it
/// was created in; `slots` maps slot numbers to positions in `data`.  Removal
/// swaps the last value into the hole, patches its slot, and puts the freed
/// slot on the free list with its generation bumped.  The slot table is
/// therefore never longer than the largest number of values ever live at
/// once.
#[derive(Derivative)]
#[derivative(Clone(bound = "T: Clone"), Default(bound = ""), Debug(bound = "T: std::fmt::Debug"))]
pub(crate) struct EdgeArena<T> {
    data: Vec<(T, usize)>,
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl<T> EdgeArena<T> {
    pub fn insert(&mut self, value: T) -> EdgeIndex {
        let position = self.data.len();
        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.slots.push(Slot::default());
                self.slots.len() - 1
            }
        };
        self.slots[slot].position = Some(position);
        self.data.push((value, slot));
        EdgeIndex {
            slot,
            generation: self.slots[slot].generation,
        }
    }

    fn position(&self, key: EdgeIndex) -> Option<usize> {
        self.slots
            .get(key.slot)
            .filter(|slot| slot.generation == key.generation)
            .and_then(|slot| slot.position)
    }

    pub fn get(&self, key: EdgeIndex) -> Option<&T> {
        self.position(key).map(|position| &self.data[position].0)
    }

    pub fn get_mut(&mut self, key: EdgeIndex) -> Option<&mut T> {
        let position = self.position(key)?;
        Some(&mut self.data[position].0)
    }

    pub fn remove(&mut self, key: EdgeIndex) -> Option<T> {
        let position = self.position(key)?;
        let slot = &mut self.slots[key.slot];
        slot.position = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(key.slot);

        let (removed, _) = self.data.swap_remove(position);
        // Patch the slot of the value moved into the hole, if any.
        if let Some((_, moved)) = self.data.get(position) {
            self.slots[*moved].position = Some(position);
        }
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.slots.clear();
        self.free.clear();
    }

    /// Number of slots ever handed out and not yet cleared.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    fn iter_keys(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.data.iter().map(|(_, slot)| EdgeIndex {
            slot: *slot,
            generation: self.slots[*slot].generation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use std::collections::HashMap;

    /// Applies inserts (`true`) and removals of earlier keys (`false`) and
    /// compares the arena against a map.
    #[quickcheck]
    fn prop_matches_map_model(ops: Vec<(bool, u8)>) -> bool {
        let mut arena = EdgeArena::default();
        let mut model = HashMap::new();
        let mut keys = Vec::new();
        for (insert, value) in ops {
            if insert || keys.is_empty() {
                let key = arena.insert(value);
                model.insert(key, value);
                keys.push(key);
            } else {
                let key = keys[value as usize % keys.len()];
                if arena.remove(key) != model.remove(&key) {
                    return false;
                }
            }
        }
        arena.len() == model.len()
            && keys.iter().all(|key| arena.get(*key) == model.get(key))
            && arena.iter_keys().all(|key| model.contains_key(&key))
    }

    #[quickcheck]
    fn prop_keys_are_unique(count: u8) -> bool {
        let mut arena = EdgeArena::default();
        let keys: Vec<_> = (0..count).map(|i| arena.insert(i)).collect();
        let mut sorted = keys.clone();
        sorted.dedup();
        sorted.len() == keys.len()
    }

    #[test]
    fn test_insert_and_get() {
        let mut arena = EdgeArena::default();
        let k1 = arena.insert("a");
        let k2 = arena.insert("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(k1), Some(&"a"));
        assert_eq!(arena.get(k2), Some(&"b"));
    }

    #[test]
    fn test_remove_first() {
        let mut arena = EdgeArena::default();
        let k1 = arena.insert(1);
        let k2 = arena.insert(2);
        let k3 = arena.insert(3);

        assert_eq!(arena.remove(k1), Some(1));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(k1), None);
        assert_eq!(arena.get(k2), Some(&2));
        assert_eq!(arena.get(k3), Some(&3));
    }

    #[test]
    fn test_remove_last_and_twice() {
        let mut arena = EdgeArena::default();
        let k1 = arena.insert(1);
        let k2 = arena.insert(2);
        assert_eq!(arena.remove(k2), Some(2));
        assert_eq!(arena.remove(k2), None);
        assert_eq!(arena.get(k1), Some(&1));
    }

    #[test]
    fn test_keys_are_not_reused() {
        let mut arena = EdgeArena::default();
        let k1 = arena.insert(1);
        arena.remove(k1);
        let k2 = arena.insert(2);
        assert_ne!(k1, k2);
        assert_eq!(arena.get(k1), None);
    }

    #[test]
    fn test_churn_reuses_slots() {
        let mut arena = EdgeArena::default();
        let kept = arena.insert(-1);
        for i in 0..10_000 {
            let key = arena.insert(i);
            assert_eq!(arena.remove(key), Some(i));
        }
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.slots.len(), 2);
        assert_eq!(arena.get(kept), Some(&-1));

        let a = arena.insert(1);
        let b = arena.insert(2);
        arena.remove(a);
        arena.remove(b);
        assert_eq!(arena.slots.len(), 3);
        assert_eq!(arena.free.len(), 2);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = EdgeArena::default();
        let k = arena.insert(1);
        if let Some(value) = arena.get_mut(k) {
            *value = 10;
        }
        assert_eq!(arena.get(k), Some(&10));
        assert_eq!(arena.iter_keys().collect::<Vec<_>>(), vec![k]);
    }
}
